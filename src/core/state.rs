//! # Application State
//!
//! Core business state for Podshelf. Domain logic only, no TUI types.
//!
//! ```text
//! App
//! ├── podcasts: Vec<PodcastPreview>   // fetched once, never mutated after
//! ├── catalog: Arc<GenreCatalog>      // static genre table
//! ├── load: LoadStatus                // Loading → Ready | Failed
//! ├── page_size: usize                // fixed for the process lifetime
//! ├── status_message: String          // title bar text
//! └── view: ViewState                 // everything the user controls
//!     ├── search_text
//!     ├── selected_genre
//!     ├── sort_mode
//!     ├── current_page
//!     └── selected: Option<PodcastDetail>
//! ```
//!
//! `ViewState` only changes through its transition methods, each of which
//! consumes the old value and returns the new one. Search, genre and sort
//! transitions all land back on page 1; nothing else can forget to.

use std::sync::Arc;

use crate::core::genres::GenreCatalog;
use crate::core::pagination::{self, Page};
use crate::core::podcast::{GenreId, PodcastPreview};
use crate::core::query::{self, Query, SortMode};

/// A podcast opened in the detail view, with its genre titles resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PodcastDetail {
    pub podcast: PodcastPreview,
    pub genre_titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub search_text: String,
    pub selected_genre: Option<GenreId>,
    pub sort_mode: SortMode,
    /// 1-based.
    pub current_page: usize,
    pub selected: Option<PodcastDetail>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_genre: None,
            sort_mode: SortMode::default(),
            current_page: 1,
            selected: None,
        }
    }
}

impl ViewState {
    pub fn query(&self) -> Query<'_> {
        Query {
            search: &self.search_text,
            genre: self.selected_genre.as_ref(),
            sort: self.sort_mode,
        }
    }

    pub fn with_search(self, search_text: String) -> Self {
        Self {
            search_text,
            current_page: 1,
            ..self
        }
    }

    pub fn with_genre(self, selected_genre: Option<GenreId>) -> Self {
        Self {
            selected_genre,
            current_page: 1,
            ..self
        }
    }

    pub fn with_sort(self, sort_mode: SortMode) -> Self {
        Self {
            sort_mode,
            current_page: 1,
            ..self
        }
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    pub fn with_page(self, page: usize, total_pages: usize) -> Self {
        Self {
            current_page: pagination::clamp_page(page, total_pages),
            ..self
        }
    }

    pub fn with_detail(self, detail: PodcastDetail) -> Self {
        Self {
            selected: Some(detail),
            ..self
        }
    }

    pub fn without_detail(self) -> Self {
        Self {
            selected: None,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    /// User-facing message. Replaces the list view.
    Failed(String),
}

pub struct App {
    pub podcasts: Vec<PodcastPreview>,
    pub catalog: Arc<GenreCatalog>,
    pub load: LoadStatus,
    pub page_size: usize,
    pub status_message: String,
    pub view: ViewState,
}

impl App {
    pub fn new(catalog: Arc<GenreCatalog>, page_size: usize) -> Self {
        Self {
            podcasts: Vec::new(),
            catalog,
            load: LoadStatus::Loading,
            page_size: page_size.max(1),
            status_message: String::from("Loading podcasts..."),
            view: ViewState::default(),
        }
    }

    /// Full query results for the current view, re-run from scratch.
    pub fn results(&self) -> Vec<&PodcastPreview> {
        query::run_query(&self.podcasts, &self.view.query(), &self.catalog)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.results().len(), self.page_size)
    }

    pub fn page(&self) -> Page<&PodcastPreview> {
        pagination::paginate(self.results(), self.page_size, self.view.current_page)
    }

    pub fn genre_label(&self) -> &str {
        self.view
            .selected_genre
            .as_ref()
            .and_then(|id| self.catalog.title(id))
            .unwrap_or("All Genres")
    }
}
