//! # TitleBar Component
//!
//! Top status bar: app name plus a status message (loading, result count
//! and page position, offline).
//!
//! Stateless. The status text comes from core `App` state, the spinner frame
//! from the TUI's animation clock.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub status_message: String,
    /// `Some(frame)` while something is loading.
    pub spinner_frame: Option<usize>,
}

impl TitleBar {
    pub fn new(status_message: String, spinner_frame: Option<usize>) -> Self {
        Self {
            status_message,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            " Podshelf ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];

        if let Some(tick) = self.spinner_frame {
            spans.push(Span::raw(format!(" {}", SPINNER[tick % SPINNER.len()])));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let text = render(&mut TitleBar::new("42 podcasts | page 1/4".into(), None));
        assert!(text.contains("Podshelf"));
        assert!(text.contains("42 podcasts | page 1/4"));
    }

    #[test]
    fn test_title_bar_spinner_while_loading() {
        let text = render(&mut TitleBar::new("Loading podcasts...".into(), Some(11)));
        assert!(text.contains(SPINNER[1]));
        assert!(text.contains("Loading podcasts..."));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = render(&mut TitleBar::new(String::new(), None));
        assert!(text.contains("Podshelf"));
        assert!(!text.contains('|'));
    }
}
