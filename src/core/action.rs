//! # Actions
//!
//! Everything that can happen in Podshelf becomes an `Action`.
//! User types in the search box? That's `Action::SetSearch(text)`.
//! The fetch comes back? That's `Action::LoadFinished(result)`.
//!
//! The `update()` function takes the current state and an action,
//! applies it, and tells the caller what side effect (if any) to run.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Mutators never fail. Out-of-range input is clamped, unknown targets are
//! ignored.

use log::{debug, info, warn};

use crate::core::podcast::{GenreId, PodcastPreview};
use crate::core::query::SortMode;
use crate::core::state::{App, LoadStatus, PodcastDetail};
use crate::source::FetchError;

#[derive(Debug)]
pub enum Action {
    /// Result of the one-shot startup fetch.
    LoadFinished(Result<Vec<PodcastPreview>, FetchError>),
    SetSearch(String),
    SelectGenre(Option<GenreId>),
    SetSort(SortMode),
    GoToPage(usize),
    NextPage,
    PrevPage,
    /// Open the detail view for the item at this position on the current page.
    OpenDetail(usize),
    CloseDetail,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action_name(&action));
    // Transitions read page totals from `app`, whose view still holds the
    // same search/genre/sort as `view`.
    let view = app.view.clone();

    app.view = match action {
        Action::LoadFinished(result) => {
            apply_load(app, result);
            let total = app.total_pages();
            view.with_page(1, total)
        }
        Action::SetSearch(text) => view.with_search(text),
        Action::SelectGenre(genre) => view.with_genre(genre),
        Action::SetSort(sort) => {
            debug!("Sort mode -> {}", sort.key());
            view.with_sort(sort)
        }
        Action::GoToPage(page) => {
            let total = app.total_pages();
            view.with_page(page, total)
        }
        Action::NextPage => {
            let total = app.total_pages();
            let next = view.current_page.saturating_add(1);
            view.with_page(next, total)
        }
        Action::PrevPage => {
            let total = app.total_pages();
            let prev = view.current_page.saturating_sub(1);
            view.with_page(prev, total)
        }
        Action::OpenDetail(index) => {
            let detail = app.page().items.get(index).map(|podcast| PodcastDetail {
                genre_titles: app.catalog.resolve_titles(podcast),
                podcast: (*podcast).clone(),
            });
            match detail {
                Some(detail) => view.with_detail(detail),
                None => {
                    debug!("OpenDetail({}) is past the end of the page, ignoring", index);
                    view
                }
            }
        }
        Action::CloseDetail => view.without_detail(),
        Action::Quit => return Effect::Quit,
    };

    refresh_status(app);
    Effect::None
}

fn apply_load(app: &mut App, result: Result<Vec<PodcastPreview>, FetchError>) {
    match result {
        Ok(podcasts) => {
            info!("Loaded {} podcasts", podcasts.len());
            app.podcasts = podcasts;
            app.load = LoadStatus::Ready;
        }
        Err(e) if e.is_recoverable() => {
            warn!("Treating unusable payload as an empty list: {}", e);
            app.podcasts = Vec::new();
            app.load = LoadStatus::Ready;
        }
        Err(e) => {
            warn!("Podcast load failed: {}", e);
            app.podcasts = Vec::new();
            app.load = LoadStatus::Failed(format!("Failed to fetch podcasts. ({e})"));
        }
    }
}

fn refresh_status(app: &mut App) {
    app.status_message = match &app.load {
        LoadStatus::Loading => "Loading podcasts...".to_string(),
        LoadStatus::Failed(_) => "Offline".to_string(),
        LoadStatus::Ready => {
            let page = app.page();
            format!(
                "{} podcasts | page {}/{}",
                page.total_items, page.current_page, page.total_pages
            )
        }
    };
}

/// Actions can carry the whole podcast list, so only log their name.
fn action_name(action: &Action) -> &'static str {
    match action {
        Action::LoadFinished(Ok(_)) => "LoadFinished(Ok)",
        Action::LoadFinished(Err(_)) => "LoadFinished(Err)",
        Action::SetSearch(_) => "SetSearch",
        Action::SelectGenre(_) => "SelectGenre",
        Action::SetSort(_) => "SetSort",
        Action::GoToPage(_) => "GoToPage",
        Action::NextPage => "NextPage",
        Action::PrevPage => "PrevPage",
        Action::OpenDetail(_) => "OpenDetail",
        Action::CloseDetail => "CloseDetail",
        Action::Quit => "Quit",
    }
}
