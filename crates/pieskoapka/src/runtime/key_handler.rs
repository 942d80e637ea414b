use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::{EventResult, mode};
use crate::ui::state::app_mode::AppMode;

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    if is_interrupt(key) {
        return EventResult::Quit;
    }

    match app.mode {
        AppMode::List => mode::list::handle(app, key),
        AppMode::Input { submit } => mode::input::handle(app, submit, key),
    }
}

/// Pasted text always lands in the shared field, opening it for search when
/// the list has focus.
pub(crate) fn handle_paste(app: &mut App, text: &str) -> EventResult {
    mode::input::handle_paste(app, text)
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}
