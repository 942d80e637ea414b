use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::ui::Component;
use crate::ui::state::app_mode::AppMode;
use crate::ui::util::keybinding_hint;

/// Key hints for the focused area.
pub struct FooterBar {
    mode: AppMode,
}

impl FooterBar {
    pub fn new(mode: AppMode) -> Self {
        Self { mode }
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let hint = keybinding_hint(self.mode.keybindings());
        let footer = Paragraph::new(format!(" {hint}"))
            .style(Style::default().bg(Color::DarkGray).fg(Color::Gray));

        f.render_widget(footer, area);
    }
}
