//! # PaginationBar Component
//!
//! `‹ Prev  1 2 [3] 4 5  Next ›` with the current page highlighted. Prev is
//! dimmed on the first page, Next on the last. Hidden entirely when there is
//! only one page.
//!
//! Long page runs are windowed around the current page so the bar fits on a
//! terminal line.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const MAX_PAGE_BUTTONS: usize = 9;

pub struct PaginationBar {
    pub current_page: usize,
    pub total_pages: usize,
}

impl PaginationBar {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }
}

/// Page numbers to show: at most `max`, centred on `current` where possible.
pub fn visible_pages(current: usize, total: usize, max: usize) -> Vec<usize> {
    if total == 0 || max == 0 {
        return Vec::new();
    }
    if total <= max {
        return (1..=total).collect();
    }
    let half = max / 2;
    let start = current.saturating_sub(half).max(1).min(total - max + 1);
    (start..start + max).collect()
}

impl Component for PaginationBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.total_pages <= 1 {
            return;
        }

        let enabled = Style::default().fg(Color::Cyan);
        let disabled = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(
            "‹ Prev ",
            if self.current_page > 1 { enabled } else { disabled },
        )];

        let pages = visible_pages(self.current_page, self.total_pages, MAX_PAGE_BUTTONS);
        if pages.first().is_some_and(|&p| p > 1) {
            spans.push(Span::styled(" … ", disabled));
        }
        for page in &pages {
            if *page == self.current_page {
                spans.push(Span::styled(
                    format!(" {page} "),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::raw(format!(" {page} ")));
            }
        }
        if pages.last().is_some_and(|&p| p < self.total_pages) {
            spans.push(Span::styled(" … ", disabled));
        }

        spans.push(Span::styled(
            " Next ›",
            if self.current_page < self.total_pages {
                enabled
            } else {
                disabled
            },
        ));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(current: usize, total: usize) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let mut bar = PaginationBar::new(current, total);
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_hidden_for_single_page() {
        assert_eq!(render(1, 1).trim(), "");
    }

    #[test]
    fn test_shows_all_pages_when_few() {
        let text = render(2, 3);
        assert!(text.contains("Prev"));
        assert!(text.contains(" 1 "));
        assert!(text.contains(" 3 "));
        assert!(text.contains("Next"));
    }

    #[test]
    fn test_window_is_centred_and_bounded() {
        assert_eq!(visible_pages(1, 3, 9), vec![1, 2, 3]);
        assert_eq!(visible_pages(1, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(10, 20, 5), vec![8, 9, 10, 11, 12]);
        assert_eq!(visible_pages(20, 20, 5), vec![16, 17, 18, 19, 20]);
        assert!(visible_pages(1, 0, 5).is_empty());
    }
}
