//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::core::genres::GenreCatalog;
use crate::core::podcast::PodcastPreview;
use crate::core::state::App;
use crate::source::{FetchError, PodcastSource};

/// Builds a normalized preview the same way the loader would.
pub fn preview(id: &str, title: &str, updated: Option<&str>, genres: &[u32]) -> PodcastPreview {
    let mut raw = json!({ "id": id, "title": title, "genres": genres });
    if let Some(date) = updated {
        raw["updated"] = Value::String(date.to_string());
    }
    PodcastPreview::from_json(&raw).expect("fixture is an object")
}

/// Three genres. Show "500" is a member of 1 and 3 without embedding ids;
/// show "600" is a member of 2.
pub fn test_catalog() -> GenreCatalog {
    GenreCatalog::from_json_str(
        r#"[
            { "id": 1, "title": "Personal Growth", "shows": ["500"] },
            { "id": 2, "title": "Investigative Journalism", "shows": [600] },
            { "id": 3, "title": "History", "shows": ["500"] }
        ]"#,
    )
    .expect("fixture catalog parses")
}

pub fn ids(podcasts: &[&PodcastPreview]) -> Vec<String> {
    podcasts.iter().map(|p| p.id.to_string()).collect()
}

/// A source that hands back a canned payload without touching the network.
pub struct StaticSource(pub Result<Value, FetchError>);

#[async_trait]
impl PodcastSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_raw(&self) -> Result<Value, FetchError> {
        self.0.clone()
    }
}

/// Creates a test App with the fixture catalog and a small page size.
pub fn test_app(page_size: usize) -> App {
    App::new(Arc::new(test_catalog()), page_size)
}
