//! # Detail Modal Component
//!
//! Overlay with everything known about the selected podcast. Opened with
//! Enter on a card, dismissed with Esc (or Enter / q).
//!
//! Genre tags come pre-resolved on the `PodcastDetail`; when nothing
//! resolved, the tag row is simply left out.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::state::PodcastDetail;
use crate::tui::component::Component;

const NO_DESCRIPTION: &str = "No description available.";

pub struct DetailModal<'a> {
    detail: &'a PodcastDetail,
}

impl<'a> DetailModal<'a> {
    pub fn new(detail: &'a PodcastDetail) -> Self {
        Self { detail }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let podcast = &self.detail.podcast;
        let muted = Style::default().fg(Color::DarkGray);

        let mut lines = vec![
            Line::from(Span::styled(podcast.image.clone(), muted)),
            Line::default(),
        ];

        let description = podcast.description.as_deref().unwrap_or(NO_DESCRIPTION);
        for paragraph in description.lines() {
            if paragraph.trim().is_empty() {
                lines.push(Line::default());
                continue;
            }
            lines.extend(
                textwrap::wrap(paragraph, width.max(1))
                    .into_iter()
                    .map(|l| Line::from(l.into_owned())),
            );
        }

        if !self.detail.genre_titles.is_empty() {
            lines.push(Line::default());
            let mut tags = Vec::new();
            for title in &self.detail.genre_titles {
                tags.push(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(Color::Black).bg(Color::Yellow),
                ));
                tags.push(Span::raw(" "));
            }
            lines.push(Line::from(tags));
        }

        lines.push(Line::default());
        if let Some(seasons) = podcast.seasons {
            lines.push(Line::from(vec![
                Span::styled("Seasons: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(seasons.to_string()),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("Last updated: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(podcast.updated_label()),
        ]));
        lines
    }
}

impl Component for DetailModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.detail.podcast.title))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let inner_width = overlay.width.saturating_sub(4) as usize; // borders + padding
        let paragraph = Paragraph::new(self.lines(inner_width)).block(block);
        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
