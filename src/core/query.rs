//! # Query Engine
//!
//! Turns the full podcast list plus the current search/genre/sort selection
//! into the ordered list the UI pages through.
//!
//! ```text
//! all podcasts ──► search (title) ──► genre filter ──► stable sort ──► results
//! ```
//!
//! Sorting always happens after filtering and is stable, so ties keep the
//! order the endpoint returned them in.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::core::genres::GenreCatalog;
use crate::core::podcast::{GenreId, PodcastPreview};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    NewestFirst,
    TitleAsc,
    TitleDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [
        SortMode::NewestFirst,
        SortMode::TitleAsc,
        SortMode::TitleDesc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::NewestFirst => "Newest First",
            SortMode::TitleAsc => "Title A-Z",
            SortMode::TitleDesc => "Title Z-A",
        }
    }

    /// Stable identifier, for logs.
    pub fn key(self) -> &'static str {
        match self {
            SortMode::NewestFirst => "updated_desc",
            SortMode::TitleAsc => "title_asc",
            SortMode::TitleDesc => "title_desc",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortMode::NewestFirst => SortMode::TitleAsc,
            SortMode::TitleAsc => SortMode::TitleDesc,
            SortMode::TitleDesc => SortMode::NewestFirst,
        }
    }
}

/// Borrowed view of the parameters that drive a query.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    pub search: &'a str,
    pub genre: Option<&'a GenreId>,
    pub sort: SortMode,
}

impl Default for Query<'_> {
    fn default() -> Self {
        Self {
            search: "",
            genre: None,
            sort: SortMode::default(),
        }
    }
}

/// Case-insensitive substring match on the title. Empty search matches all.
pub fn matches_search(podcast: &PodcastPreview, search: &str) -> bool {
    search.is_empty() || podcast.title.to_lowercase().contains(&search.to_lowercase())
}

/// A podcast passes if it embeds the genre id, or if the catalog lists it
/// as a member of that genre. Records aren't consistent about embedding ids.
pub fn matches_genre(
    podcast: &PodcastPreview,
    genre: Option<&GenreId>,
    catalog: &GenreCatalog,
) -> bool {
    match genre {
        None => true,
        Some(id) => podcast.has_genre(id) || catalog.lists_show(id, &podcast.id),
    }
}

/// Sort key for a title: diacritics stripped and case-folded, so "Éclair"
/// files under "e" and "apple" sits next to "Apple".
fn title_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Title ordering: folded key first, then the lowercased and raw titles to
/// keep the order total.
fn compare_titles(a: &str, b: &str) -> Ordering {
    title_key(a)
        .cmp(&title_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

pub fn compare(a: &PodcastPreview, b: &PodcastPreview, sort: SortMode) -> Ordering {
    match sort {
        SortMode::TitleAsc => compare_titles(&a.title, &b.title),
        SortMode::TitleDesc => compare_titles(&b.title, &a.title),
        // `None < Some(_)`, so reversing puts unknown dates last
        SortMode::NewestFirst => b.updated.cmp(&a.updated),
    }
}

pub fn run_query<'a>(
    podcasts: &'a [PodcastPreview],
    query: &Query<'_>,
    catalog: &GenreCatalog,
) -> Vec<&'a PodcastPreview> {
    let mut results: Vec<&PodcastPreview> = podcasts
        .iter()
        .filter(|p| matches_search(p, query.search))
        .filter(|p| matches_genre(p, query.genre, catalog))
        .collect();

    // `sort_by` is stable
    results.sort_by(|a, b| compare(a, b, query.sort));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ids, preview, test_catalog};

    fn library() -> Vec<PodcastPreview> {
        vec![
            preview("1", "Alpha", Some("2024-01-01"), &[1]),
            preview("2", "Beta", Some("2023-01-01"), &[2]),
            preview("3", "alphabet soup", None, &[]),
            preview("500", "Gamma", Some("2022-06-01"), &[]),
            preview("4", "Delta", Some("2024-05-01"), &[3, 1]),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_newest_first() {
        let podcasts = library();
        let results = run_query(&podcasts, &Query::default(), &test_catalog());
        assert_eq!(ids(&results), vec!["4", "1", "2", "500", "3"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let podcasts = library();
        let query = Query {
            search: "ALPHA",
            ..Default::default()
        };
        let results = run_query(&podcasts, &query, &test_catalog());
        assert_eq!(ids(&results), vec!["1", "3"]);
    }

    #[test]
    fn test_search_with_no_hits_is_empty() {
        let podcasts = library();
        let query = Query {
            search: "zz",
            ..Default::default()
        };
        assert!(run_query(&podcasts, &query, &test_catalog()).is_empty());
    }

    #[test]
    fn test_genre_filter_uses_embedded_ids_and_catalog_membership() {
        let podcasts = library();
        let catalog = test_catalog();
        let genre = GenreId::from(1);
        let query = Query {
            genre: Some(&genre),
            ..Default::default()
        };
        let results = run_query(&podcasts, &query, &catalog);
        assert_eq!(ids(&results), vec!["4", "1", "500"]);
        for p in results {
            assert!(p.has_genre(&genre) || catalog.lists_show(&genre, &p.id));
        }
    }

    #[test]
    fn test_genre_filter_compares_canonical_ids() {
        let podcasts = vec![preview("x", "Numeric", None, &[2])];
        let genre = GenreId::new("02");
        let query = Query {
            genre: Some(&genre),
            ..Default::default()
        };
        assert_eq!(run_query(&podcasts, &query, &test_catalog()).len(), 1);
    }

    #[test]
    fn test_newest_first_then_title_desc_scenario() {
        let podcasts = vec![
            preview("1", "Alpha", Some("2024-01-01"), &[]),
            preview("2", "Beta", Some("2023-01-01"), &[]),
        ];
        let catalog = test_catalog();
        let newest = run_query(&podcasts, &Query::default(), &catalog);
        assert_eq!(ids(&newest), vec!["1", "2"]);

        let desc = Query {
            sort: SortMode::TitleDesc,
            ..Default::default()
        };
        assert_eq!(ids(&run_query(&podcasts, &desc, &catalog)), vec!["2", "1"]);
    }

    #[test]
    fn test_undated_sorts_last() {
        let podcasts = vec![
            preview("a", "No Date", None, &[]),
            preview("b", "Old", Some("1999-01-01"), &[]),
        ];
        let results = run_query(&podcasts, &Query::default(), &test_catalog());
        assert_eq!(ids(&results), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let podcasts = vec![
            preview("a", "Same", Some("2020-01-01"), &[]),
            preview("b", "Same", Some("2020-01-01"), &[]),
            preview("c", "Same", Some("2020-01-01"), &[]),
        ];
        for sort in SortMode::ALL {
            let query = Query {
                sort,
                ..Default::default()
            };
            let results = run_query(&podcasts, &query, &test_catalog());
            assert_eq!(ids(&results), vec!["a", "b", "c"], "{:?}", sort);
        }
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let podcasts = vec![
            preview("1", "banana", None, &[]),
            preview("2", "Apple", None, &[]),
            preview("3", "cherry", None, &[]),
        ];
        let query = Query {
            sort: SortMode::TitleAsc,
            ..Default::default()
        };
        let results = run_query(&podcasts, &query, &test_catalog());
        assert_eq!(ids(&results), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_mode_cycles_through_all() {
        let mut mode = SortMode::default();
        for expected in SortMode::ALL {
            assert_eq!(mode, expected);
            mode = mode.next();
        }
        assert_eq!(mode, SortMode::NewestFirst);
        assert_eq!(SortMode::TitleDesc.key(), "title_desc");
    }

    #[test]
    fn test_title_sort_folds_accents() {
        let podcasts = vec![
            preview("z", "Zebra Talk", None, &[]),
            preview("e", "Éclair Stories", None, &[]),
            preview("a", "Apple Hour", None, &[]),
        ];
        let catalog = test_catalog();

        let asc = Query {
            sort: SortMode::TitleAsc,
            ..Default::default()
        };
        assert_eq!(ids(&run_query(&podcasts, &asc, &catalog)), vec!["a", "e", "z"]);

        let desc = Query {
            sort: SortMode::TitleDesc,
            ..Default::default()
        };
        assert_eq!(ids(&run_query(&podcasts, &desc, &catalog)), vec!["z", "e", "a"]);
    }

    #[test]
    fn test_accent_only_difference_is_still_ordered() {
        assert_eq!(compare_titles("Eclair", "Éclair"), Ordering::Less);
        assert_eq!(compare_titles("Éclair", "Eclair"), Ordering::Greater);
        assert_eq!(compare_titles("Éclair", "Éclair"), Ordering::Equal);
    }
}
