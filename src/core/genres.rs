//! # Genre Catalog
//!
//! Static lookup table shipped with the binary (`assets/genres.json`),
//! optionally replaced by a file named in the config. Each entry maps a genre
//! id to its title and to the set of shows that belong to it.
//!
//! The catalog is also where genre titles get resolved for the detail view:
//! records that embed genre ids are mapped through the table, records that
//! don't are looked up by membership.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::core::config::ConfigError;
use crate::core::podcast::{GenreId, PodcastPreview, ShowId};

const BUNDLED_CATALOG: &str = include_str!("../../assets/genres.json");

#[derive(Debug, Clone, PartialEq)]
pub struct GenreEntry {
    pub id: GenreId,
    pub title: String,
    pub shows: HashSet<ShowId>,
}

/// On-disk shape. Ids may be numbers or strings; both are canonicalized.
#[derive(Deserialize)]
struct RawGenreEntry {
    id: Value,
    title: String,
    #[serde(default)]
    shows: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreCatalog {
    entries: Vec<GenreEntry>,
}

impl GenreCatalog {
    pub fn new(entries: Vec<GenreEntry>) -> Self {
        Self { entries }
    }

    /// The catalog compiled into the binary.
    pub fn bundled() -> Self {
        match Self::from_json_str(BUNDLED_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Bundled genre catalog is unreadable, continuing without genres: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let raw: Vec<RawGenreEntry> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .filter_map(|entry| {
                let Some(id) = GenreId::from_json(&entry.id) else {
                    warn!("Skipping genre entry '{}' with unusable id", entry.title);
                    return None;
                };
                Some(GenreEntry {
                    id,
                    title: entry.title,
                    shows: entry.shows.iter().filter_map(ShowId::from_json).collect(),
                })
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let catalog = Self::from_json_str(&contents).map_err(ConfigError::Catalog)?;
        debug!(
            "Loaded {} genres from {}",
            catalog.entries.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn entries(&self) -> &[GenreEntry] {
        &self.entries
    }

    pub fn get(&self, id: &GenreId) -> Option<&GenreEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn title(&self, id: &GenreId) -> Option<&str> {
        self.get(id).map(|entry| entry.title.as_str())
    }

    /// True if the catalog entry for `genre` lists `show` as a member.
    pub fn lists_show(&self, genre: &GenreId, show: &ShowId) -> bool {
        self.get(genre).is_some_and(|entry| entry.shows.contains(show))
    }

    /// Human-readable genre titles for a podcast.
    ///
    /// Embedded ids win, in the record's own order, skipping ids the catalog
    /// doesn't know. Only when that produces nothing is the catalog scanned
    /// for membership, in catalog order. Never fails; may be empty.
    pub fn resolve_titles(&self, podcast: &PodcastPreview) -> Vec<String> {
        let embedded: Vec<String> = podcast
            .genre_ids
            .iter()
            .filter_map(|id| self.title(id))
            .map(str::to_string)
            .collect();

        if !embedded.is_empty() {
            return embedded;
        }

        self.entries
            .iter()
            .filter(|entry| entry.shows.contains(&podcast.id))
            .map(|entry| entry.title.clone())
            .collect()
    }
}
