use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::{App, LoadStatus};
use crate::tui::component::Component;
use crate::tui::components::{Controls, DetailModal, PaginationBar, PodcastList, TitleBar};
use crate::tui::{InputMode, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Length(1), Min(0), Length(1), Length(1)]);
    let [title_area, search_area, controls_area, main_area, pages_area, help_area] =
        layout.areas(frame.area());

    let loading = matches!(app.load, LoadStatus::Loading);
    TitleBar::new(app.status_message.clone(), loading.then_some(spinner_frame))
        .render(frame, title_area);

    tui.search_bar.focused = tui.input_mode == InputMode::Search && app.view.selected.is_none();
    tui.search_bar.render(frame, search_area);

    Controls::new(app.genre_label(), app.view.sort_mode).render(frame, controls_area);

    match &app.load {
        LoadStatus::Loading => draw_message(frame, main_area, "Loading podcasts..."),
        LoadStatus::Failed(message) => draw_error_view(frame, main_area, message),
        LoadStatus::Ready => {
            let page = app.page();
            PodcastList::new(&mut tui.podcast_list, &page.items).render(frame, main_area);
            PaginationBar::new(page.current_page, page.total_pages).render(frame, pages_area);
        }
    }

    draw_help(frame, help_area, tui.input_mode);

    if let Some(detail) = &app.view.selected {
        DetailModal::new(detail).render(frame, frame.area());
    }
}

fn draw_message(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .style(Style::default().fg(Color::Red))
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center);

    frame.render_widget(error_paragraph, area);
}

fn draw_help(frame: &mut Frame, area: Rect, mode: InputMode) {
    let text = match mode {
        InputMode::Search => " Enter/Esc done typing",
        InputMode::Browse => {
            " / search  ↑↓ select  Enter details  ←→ page  1-9 go to page  g/G genre  s sort  q quit"
        }
    };
    frame.render_widget(
        Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))),
        area,
    );
}
