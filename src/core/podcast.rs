//! # Podcast Previews
//!
//! The listing endpoint is loosely shaped: the same logical attribute shows up
//! under different field names depending on who produced the record, ids come
//! back as numbers or strings, and dates are whatever the server felt like.
//!
//! Every raw record is normalized exactly once, here, into a `PodcastPreview`.
//! Nothing downstream ever looks at the raw JSON again.
//!
//! ```text
//! serde_json::Value ──► PodcastPreview::from_json() ──► PodcastPreview
//!                        (ordered field candidates,
//!                         canonical id strings,
//!                         parsed dates)
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{Map, Value};

// ============================================================================
// Field Candidates (first present, non-empty field wins)
// ============================================================================

pub const ID_FIELDS: &[&str] = &["id", "showId", "_id"];
pub const TITLE_FIELDS: &[&str] = &["title"];
pub const IMAGE_FIELDS: &[&str] = &["image", "thumbnail", "artwork"];
pub const GENRE_FIELDS: &[&str] = &["genreIds", "genres", "genre"];
pub const DATE_FIELDS: &[&str] = &[
    "updated",
    "lastUpdated",
    "latestRelease",
    "publishedAt",
    "published",
];
pub const DESCRIPTION_FIELDS: &[&str] = &["description"];
pub const SEASONS_FIELDS: &[&str] = &["seasons"];

pub const UNTITLED: &str = "Untitled";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=No+Image";

// ============================================================================
// Canonical Ids
// ============================================================================

/// Canonical string form of an id coming from outside the process.
///
/// Integers (and integer-looking strings) are rendered without leading zeros
/// or whitespace, so `3`, `"3"` and `" 03 "` all compare equal.
fn canonical_id(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(|i| i.to_string())
            .or_else(|| n.as_u64().map(|u| u.to_string()))
            .or_else(|| Some(n.to_string())),
        Value::String(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<i64>() {
                Ok(i) => Some(i.to_string()),
                Err(_) => Some(trimmed.to_string()),
            }
        }
        _ => None,
    }
}

/// Identity key of a podcast show. Empty when the record carried no id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ShowId(String);

impl ShowId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(canonical_id(&Value::String(raw.as_ref().to_string())).unwrap_or_default())
    }

    pub fn from_json(value: &Value) -> Option<Self> {
        canonical_id(value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Genre identifier in canonical string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenreId(String);

impl GenreId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(canonical_id(&Value::String(raw.as_ref().to_string())).unwrap_or_default())
    }

    pub fn from_json(value: &Value) -> Option<Self> {
        canonical_id(value).filter(|s| !s.is_empty()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for GenreId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// PodcastPreview
// ============================================================================

/// A podcast show as listed by the directory endpoint, already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct PodcastPreview {
    pub id: ShowId,
    pub title: String,
    pub image: String,
    /// Genre ids in the order the record listed them. Empty if absent.
    pub genre_ids: Vec<GenreId>,
    /// `None` when the date was absent or unparseable.
    pub updated: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub seasons: Option<u32>,
}

impl PodcastPreview {
    /// Normalizes one raw record. Returns `None` only if the value is not
    /// a JSON object at all; missing fields never fail.
    pub fn from_json(value: &Value) -> Option<Self> {
        let record = value.as_object()?;

        let id = first_present(record, ID_FIELDS)
            .and_then(ShowId::from_json)
            .unwrap_or_default();

        let title = first_text(record, TITLE_FIELDS).unwrap_or_else(|| UNTITLED.to_string());
        let image =
            first_text(record, IMAGE_FIELDS).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        let genre_ids = match first_present(record, GENRE_FIELDS) {
            Some(Value::Array(items)) => items.iter().filter_map(GenreId::from_json).collect(),
            Some(single) => GenreId::from_json(single).into_iter().collect(),
            None => Vec::new(),
        };

        let updated = first_present_where(record, DATE_FIELDS, is_truthy).and_then(parse_date);

        let seasons = first_present(record, SEASONS_FIELDS).and_then(|v| match v {
            Value::Number(n) => n.as_u64().and_then(|s| u32::try_from(s).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        });

        Some(Self {
            id,
            title,
            image,
            genre_ids,
            updated,
            description: first_text(record, DESCRIPTION_FIELDS),
            seasons,
        })
    }

    /// Short human date, or "N/A" when unknown.
    pub fn updated_label(&self) -> String {
        self.updated
            .map(|d| d.format("%-d %b %Y").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn has_genre(&self, genre: &GenreId) -> bool {
        self.genre_ids.iter().any(|g| g == genre)
    }
}

fn first_present<'a>(record: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    first_present_where(record, fields, |v| !v.is_null())
}

fn first_present_where<'a>(
    record: &'a Map<String, Value>,
    fields: &[&str],
    accept: impl Fn(&Value) -> bool,
) -> Option<&'a Value> {
    fields
        .iter()
        .filter_map(|field| record.get(*field))
        .find(|v| accept(v))
}

/// Empty strings, zero, false and null all fall through to the next candidate.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    }
}

/// First candidate that is a non-blank string.
fn first_text(record: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    first_present_where(record, fields, |v| {
        v.as_str().is_some_and(|s| !s.trim().is_empty())
    })
    .and_then(Value::as_str)
    .map(str::to_string)
}

/// Parses the date shapes seen in the wild. Integers are epoch milliseconds.
pub fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        Value::String(s) => parse_date_str(s.trim()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
