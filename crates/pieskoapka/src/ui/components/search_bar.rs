use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::domain::input::InputState;
use crate::ui::Component;
use crate::ui::state::app_mode::InputSubmit;

const PLACEHOLDER: &str = "Search or add a dog 🐕";
const IDLE_TITLE: &str = " Search or add ";
const ERROR_BACKGROUND: Color = Color::Rgb(64, 16, 16);

/// The shared text field at the top of the screen.
///
/// While an add was rejected the field is tinted red until the error clears.
pub struct SearchBar<'a> {
    focus: Option<InputSubmit>,
    has_error: bool,
    input: &'a InputState,
}

impl<'a> SearchBar<'a> {
    pub fn new(input: &'a InputState, focus: Option<InputSubmit>, has_error: bool) -> Self {
        Self {
            focus,
            has_error,
            input,
        }
    }

    fn border_style(&self) -> Style {
        if self.has_error {
            Style::default().fg(Color::Red)
        } else if self.focus.is_some() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn content(&self) -> Line<'a> {
        if self.input.is_empty() && self.focus.is_none() {
            return Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        Line::from(self.input.text())
    }
}

impl Component for SearchBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let title = self.focus.map_or(IDLE_TITLE, InputSubmit::title);
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(title, self.border_style()));
        if self.has_error {
            block = block.style(Style::default().bg(ERROR_BACKGROUND));
        }

        let inner_width = block.inner(area).width;
        let cursor_width = u16::try_from(self.input.cursor_display_width()).unwrap_or(u16::MAX);
        let scroll = cursor_width.saturating_sub(inner_width.saturating_sub(1));
        let field = Paragraph::new(self.content())
            .block(block)
            .scroll((0, scroll));
        f.render_widget(field, area);

        if self.focus.is_some() {
            f.set_cursor_position((
                area.x
                    .saturating_add(1)
                    .saturating_add(cursor_width.saturating_sub(scroll)),
                area.y.saturating_add(1),
            ));
        }
    }
}
