use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;
use crate::ui::state::app_mode::{AppMode, InputSubmit};

pub struct StatusBar {
    mode: AppMode,
}

impl StatusBar {
    pub fn new(mode: AppMode) -> Self {
        Self { mode }
    }

    fn mode_label(&self) -> &'static str {
        match self.mode {
            AppMode::List => "LIST",
            AppMode::Input {
                submit: InputSubmit::Add,
            } => "ADD",
            AppMode::Input {
                submit: InputSubmit::Search,
            } => "SEARCH",
        }
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let left_text = Span::styled(
            format!(" Pieskoapka v{version}"),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
        let right_text = format!("{} ", self.mode_label());
        let left_width = u16::try_from(left_text.width()).unwrap_or(u16::MAX);
        let right_width = u16::try_from(right_text.len()).unwrap_or(u16::MAX);
        let padding = area
            .width
            .saturating_sub(left_width.saturating_add(right_width));
        let status_bar = Paragraph::new(Line::from(vec![
            left_text,
            Span::raw(" ".repeat(padding as usize)),
            Span::styled(right_text, Style::default().fg(Color::Gray)),
        ]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}
