use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, InputSubmit};

/// Handles key input while the list has focus.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => return EventResult::Quit,
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Char('/') => focus_input(app, InputSubmit::Search),
        KeyCode::Char('a') => focus_input(app, InputSubmit::Add),
        KeyCode::Char('s') => {
            let text = app.input.text().to_string();
            app.on_search_submit(&text);
        }
        KeyCode::Char('f' | ' ') => {
            if let Some(dog_id) = app.selected_dog_id() {
                app.on_favorite_toggle(dog_id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(dog_id) = app.selected_dog_id() {
                app.on_delete(dog_id);
            }
        }
        KeyCode::Char('c') | KeyCode::Esc => app.clear_search(),
        _ => {}
    }

    EventResult::Continue
}

fn focus_input(app: &mut App, submit: InputSubmit) {
    app.input.move_end();
    app.mode = AppMode::Input { submit };
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::app::DogList;
    use crate::domain::input::InputState;

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        handle(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn selected_name(app: &App) -> Option<String> {
        app.selected_dog().map(|dog| dog.name.clone())
    }

    #[test]
    fn test_handle_q_quits() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());

        // Act
        let result = press(&mut app, KeyCode::Char('q'));

        // Assert
        assert_eq!(result, EventResult::Quit);
    }

    #[test]
    fn test_handle_slash_focuses_input_for_search() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());
        app.input = InputState::with_text("pan".to_string());
        app.input.move_home();

        // Act
        let result = press(&mut app, KeyCode::Char('/'));

        // Assert
        assert_eq!(result, EventResult::Continue);
        assert_eq!(
            app.mode,
            AppMode::Input {
                submit: InputSubmit::Search,
            }
        );
        assert_eq!(app.input.cursor, 3);
    }

    #[test]
    fn test_handle_a_focuses_input_for_add() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());

        // Act
        press(&mut app, KeyCode::Char('a'));

        // Assert
        assert_eq!(
            app.mode,
            AppMode::Input {
                submit: InputSubmit::Add,
            }
        );
    }

    #[test]
    fn test_handle_s_searches_with_current_input() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());
        app.input = InputState::with_text("don".to_string());

        // Act
        press(&mut app, KeyCode::Char('s'));

        // Assert
        assert_eq!(app.visible_dogs().len(), 1);
        assert_eq!(selected_name(&app).as_deref(), Some("Donald"));
        assert_eq!(app.input.text(), "don");
    }

    #[test]
    fn test_handle_f_promotes_selected_dog() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());
        app.table_state.select(Some(5));
        let dog_id = app.selected_dog_id().expect("missing selection");

        // Act
        press(&mut app, KeyCode::Char('f'));

        // Assert
        assert_eq!(app.dogs.position(dog_id), Some(0));
        assert_eq!(app.selected_dog_id(), Some(dog_id));
        assert_eq!(app.dogs.counts().favorites, 1);
    }

    #[test]
    fn test_handle_space_twice_unfavorites_in_place() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());
        app.table_state.select(Some(5));
        let dog_id = app.selected_dog_id().expect("missing selection");

        // Act
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));

        // Assert
        assert_eq!(app.dogs.position(dog_id), Some(0));
        assert_eq!(app.dogs.counts().favorites, 0);
    }

    #[test]
    fn test_handle_d_deletes_selected_dog() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());

        // Act
        press(&mut app, KeyCode::Char('d'));

        // Assert
        assert_eq!(app.dogs.counts().total, 14);
        assert!(app.dogs.dogs().iter().all(|dog| dog.name != "Donald"));
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_handle_d_on_empty_list_is_noop() {
        // Arrange
        let mut app = App::with_dogs(DogList::new());

        // Act
        let result = press(&mut app, KeyCode::Char('d'));

        // Assert
        assert_eq!(result, EventResult::Continue);
        assert_eq!(app.dogs.counts().total, 0);
    }

    #[test]
    fn test_handle_esc_clears_search() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());
        app.on_search_submit("donald");

        // Act
        press(&mut app, KeyCode::Esc);

        // Assert
        assert_eq!(app.dogs.search_query(), None);
        assert_eq!(app.visible_dogs().len(), 15);
    }

    #[test]
    fn test_handle_navigation_keys_move_selection() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());

        // Act
        press(&mut app, KeyCode::Char('G'));
        let after_last = app.table_state.selected();
        press(&mut app, KeyCode::Char('j'));
        let after_wrap = app.table_state.selected();
        press(&mut app, KeyCode::Up);

        // Assert
        assert_eq!(after_last, Some(14));
        assert_eq!(after_wrap, Some(0));
        assert_eq!(app.table_state.selected(), Some(14));
    }
}
