//! # Controls Component
//!
//! One-line strip showing the active genre filter and sort mode, with the
//! keys that cycle them. Stateless: everything comes in as props.
//!
//! Also home to the genre cycling order: "All Genres" first, then the
//! catalog entries in catalog order, wrapping around.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::genres::GenreCatalog;
use crate::core::podcast::GenreId;
use crate::core::query::SortMode;
use crate::tui::component::Component;

pub struct Controls<'a> {
    pub genre_label: &'a str,
    pub sort_mode: SortMode,
}

impl<'a> Controls<'a> {
    pub fn new(genre_label: &'a str, sort_mode: SortMode) -> Self {
        Self {
            genre_label,
            sort_mode,
        }
    }
}

impl Component for Controls<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::DarkGray);
        let value = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::raw(" Genre: "),
            Span::styled(self.genre_label.to_string(), value),
            Span::styled(" [g/G]", key),
            Span::raw("   Sort: "),
            Span::styled(self.sort_mode.label(), value),
            Span::styled(" [s]", key),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Next (or previous) genre selection in the cycle `None → first → … → last → None`.
pub fn cycle_genre(
    catalog: &GenreCatalog,
    current: Option<&GenreId>,
    forward: bool,
) -> Option<GenreId> {
    let entries = catalog.entries();
    if entries.is_empty() {
        return None;
    }
    let position = current.and_then(|id| entries.iter().position(|e| &e.id == id));

    let next = match (position, forward) {
        (None, true) => Some(0),
        (None, false) => Some(entries.len() - 1),
        (Some(i), true) if i + 1 < entries.len() => Some(i + 1),
        (Some(_), true) => None,
        (Some(0), false) => None,
        (Some(i), false) => Some(i - 1),
    };
    next.map(|i| entries[i].id.clone())
}
