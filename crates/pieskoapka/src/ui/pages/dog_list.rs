use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::domain::dog::Dog;
use crate::ui::Page;
use crate::ui::util::truncate_with_ellipsis;

const AVATAR: &str = "🐕";
const ROW_HIGHLIGHT_SYMBOL: &str = ">> ";
const TABLE_COLUMN_SPACING: u16 = 1;
const ICON_COLUMN_WIDTH: u16 = 2;

/// Dog rows with avatar, name, and favorite marker.
pub struct DogListPage<'a> {
    dogs: &'a [&'a Dog],
    search_query: Option<&'a str>,
    table_state: &'a mut TableState,
}

impl<'a> DogListPage<'a> {
    pub fn new(
        dogs: &'a [&'a Dog],
        search_query: Option<&'a str>,
        table_state: &'a mut TableState,
    ) -> Self {
        Self {
            dogs,
            search_query,
            table_state,
        }
    }

    fn empty_hint(&self) -> String {
        match self.search_query {
            Some(query) => format!("No dogs match \"{query}\". Press Esc to show all."),
            None => "No dogs yet. Press 'a' to add one.".to_string(),
        }
    }
}

impl Page for DogListPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Dogs ");

        if self.dogs.is_empty() {
            let hint = Paragraph::new(self.empty_hint())
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(hint, area);

            return;
        }

        let name_width = name_column_width(block.inner(area).width);
        let rows = self.dogs.iter().map(|dog| {
            Row::new(vec![
                Cell::from(AVATAR),
                Cell::from(truncate_with_ellipsis(&dog.name, name_width))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(dog.favorite_icon()),
            ])
            .height(1)
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(ICON_COLUMN_WIDTH),
                Constraint::Min(0),
                Constraint::Length(ICON_COLUMN_WIDTH),
            ],
        )
        .column_spacing(TABLE_COLUMN_SPACING)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(ROW_HIGHLIGHT_SYMBOL);

        f.render_stateful_widget(table, area, self.table_state);
    }
}

/// Width left for the name column once the icons, spacing, and highlight
/// symbol are placed.
fn name_column_width(inner_width: u16) -> usize {
    let highlight_width = u16::try_from(ROW_HIGHLIGHT_SYMBOL.chars().count()).unwrap_or(u16::MAX);
    let reserved = ICON_COLUMN_WIDTH * 2 + TABLE_COLUMN_SPACING * 2 + highlight_width;

    usize::from(inner_width.saturating_sub(reserved))
}
