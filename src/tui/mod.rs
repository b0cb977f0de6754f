//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Input Modes
//!
//! - **Browse**: single keys drive the list (`/` search, `g`/`G` genre,
//!   `s` sort, arrows, digits, Enter, `q`).
//! - **Search**: keys edit the search box; every edit re-queries. Enter or
//!   Esc goes back to Browse.
//!
//! While the detail modal is open it swallows all input except the keys
//! that close it.
//!
//! ## Redraw Strategy
//!
//! While loading, the loop redraws every ~80ms to animate the spinner.
//! Otherwise it sleeps up to 500ms and only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::genres::GenreCatalog;
use crate::core::state::{App, LoadStatus};
use crate::source::{HttpSource, PodcastSource, spawn_load};
use crate::tui::component::EventHandler;
use crate::tui::components::controls::cycle_genre;
use crate::tui::components::{PodcastListState, SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_mode: InputMode,
    pub search_bar: SearchBar,
    pub podcast_list: PodcastListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_mode: InputMode::Browse,
            search_bar: SearchBar::new(),
            podcast_list: PodcastListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Show);
    }
}

/// Translate a terminal event into a core action, updating TUI-local state
/// (input mode, search buffer, list highlight) along the way.
pub fn dispatch(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // Modal open: only closing keys do anything
    if app.view.selected.is_some() {
        return match event {
            TuiEvent::Escape | TuiEvent::Submit | TuiEvent::InputChar('q') => {
                Some(Action::CloseDetail)
            }
            _ => None,
        };
    }

    match tui.input_mode {
        InputMode::Search => match tui.search_bar.handle_event(&event)? {
            SearchEvent::Changed(text) => Some(Action::SetSearch(text)),
            SearchEvent::Done => {
                tui.input_mode = InputMode::Browse;
                None
            }
        },
        InputMode::Browse => dispatch_browse(app, tui, event),
    }
}

fn dispatch_browse(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    // Nothing to browse until the list is in
    let ready = app.load == LoadStatus::Ready;

    match event {
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::InputChar('/') => {
            tui.input_mode = InputMode::Search;
            None
        }
        TuiEvent::InputChar('g') => Some(Action::SelectGenre(cycle_genre(
            &app.catalog,
            app.view.selected_genre.as_ref(),
            true,
        ))),
        TuiEvent::InputChar('G') => Some(Action::SelectGenre(cycle_genre(
            &app.catalog,
            app.view.selected_genre.as_ref(),
            false,
        ))),
        TuiEvent::InputChar('s') => Some(Action::SetSort(app.view.sort_mode.next())),
        TuiEvent::InputChar(c @ '1'..='9') => c
            .to_digit(10)
            .map(|page| Action::GoToPage(page as usize)),
        TuiEvent::CursorLeft | TuiEvent::PageUp | TuiEvent::InputChar('h') => {
            Some(Action::PrevPage)
        }
        TuiEvent::CursorRight | TuiEvent::PageDown | TuiEvent::InputChar('l') => {
            Some(Action::NextPage)
        }
        TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
            tui.podcast_list.select_prev();
            None
        }
        TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
            tui.podcast_list.select_next(app.page().items.len());
            None
        }
        TuiEvent::Submit if ready => Some(Action::OpenDetail(tui.podcast_list.selected)),
        // Esc in Browse clears an active search
        TuiEvent::Escape if !tui.search_bar.buffer.is_empty() => {
            tui.search_bar.buffer.clear();
            Some(Action::SetSearch(String::new()))
        }
        _ => None,
    }
}

/// Whether an action moves the list to a different set of cards.
fn changes_page_contents(action: &Action) -> bool {
    matches!(
        action,
        Action::LoadFinished(_)
            | Action::SetSearch(_)
            | Action::SelectGenre(_)
            | Action::SetSort(_)
            | Action::GoToPage(_)
            | Action::NextPage
            | Action::PrevPage
    )
}

/// Apply an action and keep TUI-local state consistent with the result.
fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let reset_highlight = changes_page_contents(&action);
    let effect = update(app, action);
    if reset_highlight {
        tui.podcast_list.reset();
    }
    effect
}

pub fn run(config: ResolvedConfig, catalog: Arc<GenreCatalog>) -> std::io::Result<()> {
    let http = HttpSource::new(Some(config.endpoint));
    info!("Podcast source: {}", http.endpoint());
    let source: Arc<dyn PodcastSource> = Arc::new(http);
    let mut app = App::new(catalog, config.page_size);
    let mut tui = TuiState::new();

    // Channel for actions from the background load
    let (tx, rx) = mpsc::channel();
    let load_handle = spawn_load(source, tx);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = app.load == LoadStatus::Loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = dispatch(&app, &mut tui, event)
                && apply(&mut app, &mut tui, action) == Effect::Quit
            {
                break 'main;
            }
        }

        // Handle background load result
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received load result");
            if apply(&mut app, &mut tui, action) == Effect::Quit {
                break 'main;
            }
        }
    }

    // Tear down: a load still in flight must not land after this point
    if !load_handle.is_finished() {
        info!("Quitting with the podcast load still in flight");
    }
    load_handle.cancel();
    let _ = execute!(stdout(), Hide);
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::podcast::GenreId;
    use crate::core::query::SortMode;
    use crate::test_support::{preview, test_app};

    fn ready_app() -> App {
        let mut app = test_app(2);
        update(
            &mut app,
            Action::LoadFinished(Ok(vec![
                preview("1", "Alpha", Some("2024-03-01"), &[1]),
                preview("2", "Beta", Some("2024-02-01"), &[2]),
                preview("3", "Gamma", Some("2024-01-01"), &[3]),
            ])),
        );
        app
    }

    fn press(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Option<Effect> {
        dispatch(app, tui, event).map(|action| apply(app, tui, action))
    }

    #[test]
    fn test_typing_in_search_mode_filters() {
        let mut app = ready_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::InputChar('/'));
        assert_eq!(tui.input_mode, InputMode::Search);

        // 'g' and 'q' are text here, not commands
        press(&mut app, &mut tui, TuiEvent::InputChar('g'));
        press(&mut app, &mut tui, TuiEvent::InputChar('a'));
        assert_eq!(app.view.search_text, "ga");
        assert_eq!(app.view.selected_genre, None);
        assert_eq!(app.results().len(), 1);

        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(tui.input_mode, InputMode::Browse);
    }

    #[test]
    fn test_browse_keys_map_to_actions() {
        let mut app = ready_app();
        let mut tui = TuiState::new();

        press(&mut app, &mut tui, TuiEvent::InputChar('s'));
        assert_eq!(app.view.sort_mode, SortMode::TitleAsc);

        press(&mut app, &mut tui, TuiEvent::InputChar('g'));
        assert_eq!(app.view.selected_genre, Some(GenreId::from(1)));
        press(&mut app, &mut tui, TuiEvent::InputChar('G'));
        assert_eq!(app.view.selected_genre, None);

        press(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(app.view.current_page, 2);
        press(&mut app, &mut tui, TuiEvent::InputChar('1'));
        assert_eq!(app.view.current_page, 1);
        press(&mut app, &mut tui, TuiEvent::InputChar('9'));
        assert_eq!(app.view.current_page, 2);
    }

    #[test]
    fn test_enter_opens_highlighted_card_and_esc_closes() {
        let mut app = ready_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        assert_eq!(tui.podcast_list.selected, 1);

        press(&mut app, &mut tui, TuiEvent::Submit);
        let detail = app.view.selected.as_ref().unwrap();
        assert_eq!(detail.podcast.title, "Beta");
        assert_eq!(detail.genre_titles, vec!["Investigative Journalism"]);

        // Browse keys are inert while the modal is open
        press(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(app.view.current_page, 1);

        press(&mut app, &mut tui, TuiEvent::Escape);
        assert!(app.view.selected.is_none());
    }

    #[test]
    fn test_page_change_resets_highlight() {
        let mut app = ready_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        press(&mut app, &mut tui, TuiEvent::PageDown);
        assert_eq!(tui.podcast_list.selected, 0);
    }

    #[test]
    fn test_escape_in_browse_clears_search() {
        let mut app = ready_app();
        let mut tui = TuiState::new();
        press(&mut app, &mut tui, TuiEvent::InputChar('/'));
        press(&mut app, &mut tui, TuiEvent::InputChar('z'));
        press(&mut app, &mut tui, TuiEvent::Escape);
        assert_eq!(tui.input_mode, InputMode::Browse);
        assert_eq!(app.view.search_text, "z");

        press(&mut app, &mut tui, TuiEvent::Escape);
        assert_eq!(app.view.search_text, "");
        assert!(tui.search_bar.buffer.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = ready_app();
        let mut tui = TuiState::new();
        assert_eq!(
            press(&mut app, &mut tui, TuiEvent::InputChar('q')),
            Some(Effect::Quit)
        );
        tui.input_mode = InputMode::Search;
        assert_eq!(
            press(&mut app, &mut tui, TuiEvent::ForceQuit),
            Some(Effect::Quit)
        );
    }

    #[test]
    fn test_enter_does_nothing_while_loading() {
        let mut app = test_app(12);
        let mut tui = TuiState::new();
        assert!(dispatch(&app, &mut tui, TuiEvent::Submit).is_none());
        assert!(press(&mut app, &mut tui, TuiEvent::Submit).is_none());
    }
}
