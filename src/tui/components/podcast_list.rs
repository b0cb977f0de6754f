//! # Podcast List Component
//!
//! Renders the podcasts on the current page as two-line cards and tracks
//! which card is highlighted.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PodcastListState` lives in `TuiState`
//! - `PodcastList` is created each frame with borrowed state and page items

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::podcast::PodcastPreview;
use crate::tui::component::Component;

pub const EMPTY_MESSAGE: &str = "No podcasts found.";

/// Persistent highlight state for the list.
pub struct PodcastListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl PodcastListState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.list_state.select(Some(self.selected));
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Back to the first card, for when the page contents change.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.list_state = ListState::default();
        self.list_state.select(Some(0));
    }

    /// Keep the highlight on a card that exists.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        self.list_state.select(Some(self.selected));
    }
}

impl Default for PodcastListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the list.
pub struct PodcastList<'a> {
    state: &'a mut PodcastListState,
    items: &'a [&'a PodcastPreview],
}

impl<'a> PodcastList<'a> {
    pub fn new(state: &'a mut PodcastListState, items: &'a [&'a PodcastPreview]) -> Self {
        Self { state, items }
    }
}

impl Component for PodcastList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        if self.items.is_empty() {
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(self.items.len());
        let inner_width = area.width.saturating_sub(4) as usize;

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, podcast)| card(podcast, i == self.state.selected, inner_width))
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn card(podcast: &PodcastPreview, selected: bool, width: usize) -> ListItem<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let title_style = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let mut meta = format!("Updated: {}", podcast.updated_label());
    if let Some(seasons) = podcast.seasons {
        let noun = if seasons == 1 { "season" } else { "seasons" };
        meta.push_str(&format!("  ·  {seasons} {noun}"));
    }

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(
                truncate_to_width(&podcast.title, width.saturating_sub(marker.width())),
                title_style,
            ),
        ]),
        Line::from(Span::styled(
            format!("  {meta}"),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

/// Truncate to `max_width` display columns, adding "..." if needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::preview;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = PodcastListState::new();
        state.select_prev();
        assert_eq!(state.selected, 0);
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, 2);
        state.clamp(1);
        assert_eq!(state.selected, 0);
        state.select_next(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Short", 10), "Short");
        assert_eq!(truncate_to_width("A much longer title", 10), "A much ...");
        assert_eq!(truncate_to_width("Anything", 2), "..");
    }

    #[test]
    fn test_renders_empty_message() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        let mut state = PodcastListState::new();
        terminal
            .draw(|f| PodcastList::new(&mut state, &[]).render(f, f.area()))
            .unwrap();
        assert!(screen_text(&terminal).contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_renders_cards() {
        let alpha = preview("1", "Alpha Hour", Some("2024-01-01"), &[]);
        let beta = preview("2", "Beta Talk", None, &[]);
        let items = vec![&alpha, &beta];
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        let mut state = PodcastListState::new();
        terminal
            .draw(|f| PodcastList::new(&mut state, &items).render(f, f.area()))
            .unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Alpha Hour"));
        assert!(text.contains("Beta Talk"));
        assert!(text.contains("Updated: 1 Jan 2024"));
        assert!(text.contains("Updated: N/A"));
    }
}
