use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::DogCounts;
use crate::ui::Component;

/// Totals line above the list, plus the active query when searching.
pub struct CountsBar<'a> {
    counts: DogCounts,
    search_query: Option<&'a str>,
    shown: usize,
}

impl<'a> CountsBar<'a> {
    pub fn new(counts: DogCounts, search_query: Option<&'a str>, shown: usize) -> Self {
        Self {
            counts,
            search_query,
            shown,
        }
    }
}

impl Component for CountsBar<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            format!(
                " 🐕: {}    💜: {}",
                self.counts.total, self.counts.favorites
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(query) = self.search_query {
            spans.push(Span::styled(
                format!("    search \"{query}\": {} shown", self.shown),
                Style::default().fg(Color::Cyan),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
