use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, TableState};

use crate::app::DogList;
use crate::domain::input::InputState;
use crate::ui::components::counts_bar::CountsBar;
use crate::ui::components::footer_bar::FooterBar;
use crate::ui::components::search_bar::SearchBar;
use crate::ui::components::status_bar::StatusBar;
use crate::ui::pages::dog_list::DogListPage;
use crate::ui::state::app_mode::AppMode;

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    /// Renders a page in the provided frame and area.
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    /// Renders a component in the provided frame and area.
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Data required to draw a single UI frame.
pub struct RenderContext<'a> {
    pub dogs: &'a DogList,
    pub input: &'a InputState,
    pub mode: AppMode,
    pub table_state: &'a mut TableState,
}

/// Renders a complete frame: status bar, search field, counts, list, and footer.
pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    StatusBar::new(context.mode).render(f, status_bar_area);
    FooterBar::new(context.mode).render(f, footer_bar_area);

    let error = context.dogs.error();
    let error_height = u16::from(error.is_some());
    let content_chunks = Layout::default()
        .constraints([
            Constraint::Length(3),
            Constraint::Length(error_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(content_area);

    let focus = match context.mode {
        AppMode::Input { submit } => Some(submit),
        AppMode::List => None,
    };
    SearchBar::new(context.input, focus, error.is_some()).render(f, content_chunks[0]);

    if let Some(error) = error {
        let error_line =
            Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red));
        f.render_widget(error_line, content_chunks[1]);
    }

    let visible = context.dogs.visible();
    CountsBar::new(
        context.dogs.counts(),
        context.dogs.search_query(),
        visible.len(),
    )
    .render(f, content_chunks[2]);

    DogListPage::new(&visible, context.dogs.search_query(), context.table_state)
        .render(f, content_chunks[3]);
}
