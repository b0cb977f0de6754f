//! # SearchBar Component
//!
//! Single-line text input for the title search.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace)
//! - Report every change so the list can re-query as the user types
//! - Show a placeholder when empty and the cursor when focused
//!
//! The buffer is internal state; `focused` is a prop set by the parent from
//! the current input mode. The cursor always sits at the end of the buffer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search podcasts...";

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Buffer changed; carries the new text.
    Changed(String),
    /// User left the search box (Enter or Esc).
    Done,
}

pub struct SearchBar {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether the box has keyboard focus (Prop)
    pub focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
        }
    }

    /// Text of the buffer that fits in `width` columns, keeping the tail
    /// visible so the cursor end never scrolls out of view.
    fn visible_tail(&self, width: usize) -> &str {
        if self.buffer.width() <= width {
            return &self.buffer;
        }
        let mut start = self.buffer.len();
        let mut used = 0;
        for (idx, ch) in self.buffer.char_indices().rev() {
            let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start = idx;
        }
        &self.buffer[start..]
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" / Search ");

        // Leave one column for the cursor
        let inner_width = area.width.saturating_sub(3) as usize;
        let visible = self.visible_tail(inner_width);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(visible.to_string()).style(Style::default().fg(Color::White))
        };

        let cursor_x = area.x + 1 + visible.width() as u16;
        frame.render_widget(paragraph.block(block), area);

        if self.focused && area.height > 2 {
            frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                // Titles are single-line; a pasted newline would never match
                self.buffer.extend(text.chars().filter(|c| !c.is_control()));
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| SearchEvent::Changed(self.buffer.clone())),
            TuiEvent::Submit | TuiEvent::Escape => Some(SearchEvent::Done),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_typing_emits_changes() {
        let mut bar = SearchBar::new();
        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('h')),
            Some(SearchEvent::Changed("h".into()))
        );
        assert_eq!(
            bar.handle_event(&TuiEvent::InputChar('i')),
            Some(SearchEvent::Changed("hi".into()))
        );
        assert_eq!(
            bar.handle_event(&TuiEvent::Backspace),
            Some(SearchEvent::Changed("h".into()))
        );
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut bar = SearchBar::new();
        bar.handle_event(&TuiEvent::Paste("true\ncrime".into()));
        assert_eq!(bar.buffer, "truecrime");
    }

    #[test]
    fn test_enter_and_escape_finish() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.handle_event(&TuiEvent::Submit), Some(SearchEvent::Done));
        assert_eq!(bar.handle_event(&TuiEvent::Escape), Some(SearchEvent::Done));
    }

    #[test]
    fn test_visible_tail_keeps_end() {
        let mut bar = SearchBar::new();
        bar.buffer = "abcdefghij".into();
        assert_eq!(bar.visible_tail(4), "ghij");
        assert_eq!(bar.visible_tail(40), "abcdefghij");
    }

    #[test]
    fn test_renders_placeholder_when_empty() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let mut bar = SearchBar::new();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        assert!(screen_text(&terminal).contains("Search podcasts..."));
    }

    #[test]
    fn test_renders_buffer() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let mut bar = SearchBar::new();
        bar.focused = true;
        bar.buffer = "history".into();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("history"));
        assert!(!text.contains("Search podcasts..."));
    }
}
