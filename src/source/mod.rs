//! # Podcast Source
//!
//! The boundary to the remote directory. A `PodcastSource` hands back the raw
//! JSON body; `load()` checks its shape and normalizes every record before
//! anything reaches the core.
//!
//! ```text
//! PodcastSource::fetch_raw() ──► load() ──► Vec<PodcastPreview>
//!      (HTTP GET, status)        (array?  normalize records)
//! ```
//!
//! One fetch at startup. No retry, no caching, no refetch.

pub mod http;
pub mod loader;

use std::fmt;

use async_trait::async_trait;
use log::{info, warn};
use serde_json::Value;

use crate::core::podcast::PodcastPreview;

pub use http::HttpSource;
pub use loader::{LoadHandle, spawn_load};

/// Errors that can occur while loading the podcast list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The endpoint answered with a non-success status.
    Status { status: u16, message: String },
    /// The body was not a JSON array. Recoverable: treated as an empty list.
    MalformedPayload(String),
}

impl FetchError {
    /// True if the UI should carry on with an empty list instead of an error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FetchError::MalformedPayload(_))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { status, message } => {
                write!(f, "HTTP {status}: {message}")
            }
            FetchError::MalformedPayload(msg) => write!(f, "malformed payload: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait PodcastSource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Fetches the raw listing body.
    async fn fetch_raw(&self) -> Result<Value, FetchError>;
}

/// Fetches once and normalizes every record.
///
/// A body that isn't an array is `MalformedPayload`; the caller never sees a
/// partial list. Array elements that aren't objects are skipped.
pub async fn load(source: &dyn PodcastSource) -> Result<Vec<PodcastPreview>, FetchError> {
    let records = match source.fetch_raw().await? {
        Value::Array(records) => records,
        other => {
            warn!("{} returned a non-array payload", source.name());
            return Err(FetchError::MalformedPayload(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            )));
        }
    };

    let total = records.len();
    let podcasts: Vec<PodcastPreview> = records
        .iter()
        .filter_map(PodcastPreview::from_json)
        .collect();

    if podcasts.len() < total {
        warn!(
            "Skipped {} non-object records from {}",
            total - podcasts.len(),
            source.name()
        );
    }
    info!("{}: normalized {} podcast previews", source.name(), podcasts.len());
    Ok(podcasts)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StaticSource;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_normalizes_records() {
        let source = StaticSource(Ok(json!([
            { "id": 1, "title": "One" },
            { "showId": "2" }
        ])));
        let podcasts = load(&source).await.unwrap();
        assert_eq!(podcasts.len(), 2);
        assert_eq!(podcasts[0].title, "One");
        assert_eq!(podcasts[1].id.as_str(), "2");
        assert_eq!(podcasts[1].title, "Untitled");
    }

    #[tokio::test]
    async fn test_load_rejects_non_array() {
        let source = StaticSource(Ok(json!({ "podcasts": [] })));
        let err = load(&source).await.unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(ref m) if m.contains("an object")));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_load_skips_non_object_elements() {
        let source = StaticSource(Ok(json!([{ "id": 1 }, 7, "x", null])));
        let podcasts = tokio_test::block_on(load(&source)).unwrap();
        assert_eq!(podcasts.len(), 1);
    }

    #[tokio::test]
    async fn test_load_passes_fetch_errors_through() {
        let source = StaticSource(Err(FetchError::Network("refused".into())));
        let err = load(&source).await.unwrap_err();
        assert_eq!(err, FetchError::Network("refused".into()));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Status {
            status: 404,
            message: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }
}
