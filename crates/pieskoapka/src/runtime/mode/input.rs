use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, InputSubmit};

/// Handles key input while the shared text field has focus.
///
/// A rejected add keeps the field focused so the name can be corrected.
pub(crate) fn handle(app: &mut App, submit: InputSubmit, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Enter => {
            let text = app.input.text().to_string();
            match submit {
                InputSubmit::Search => {
                    app.on_search_submit(&text);
                    app.mode = AppMode::List;
                }
                InputSubmit::Add => {
                    if app.on_add_submit(&text) {
                        app.mode = AppMode::List;
                    }
                }
            }
        }
        KeyCode::Esc => app.mode = AppMode::List,
        KeyCode::Backspace => app.input.delete_backward(),
        KeyCode::Delete => app.input.delete_forward(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_home(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char(character) if is_text_key(key) => app.input.insert_char(character),
        _ => {}
    }

    EventResult::Continue
}

/// Inserts pasted text into the field, focusing it for search first when the
/// list had focus.
pub(crate) fn handle_paste(app: &mut App, text: &str) -> EventResult {
    if app.mode == AppMode::List {
        app.input.move_end();
        app.mode = AppMode::Input {
            submit: InputSubmit::Search,
        };
    }
    app.input.insert_text(text);

    EventResult::Continue
}

fn is_text_key(key: KeyEvent) -> bool {
    key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT
}
