use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;
use crate::runtime::{EventResult, key_handler};

/// How long one loop iteration waits for input before redrawing anyway.
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Source of terminal events for the main loop.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait EventSource {
    /// Waits up to `timeout` for the next event.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal through crossterm.
pub(crate) struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if crossterm::event::poll(timeout)? {
            return crossterm::event::read().map(Some);
        }

        Ok(None)
    }
}

/// Waits for one event, then drains whatever is already queued so rapid
/// typing is applied before the next redraw.
pub(crate) fn process_events(
    app: &mut App,
    events: &mut dyn EventSource,
) -> io::Result<EventResult> {
    let Some(event) = events.next_event(POLL_TIMEOUT)? else {
        return Ok(EventResult::Continue);
    };
    if process_event(app, event) == EventResult::Quit {
        return Ok(EventResult::Quit);
    }

    while let Some(event) = events.next_event(Duration::ZERO)? {
        if process_event(app, event) == EventResult::Quit {
            return Ok(EventResult::Quit);
        }
    }

    Ok(EventResult::Continue)
}

fn process_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_handler::handle_key_event(app, key)
        }
        Event::Paste(text) => key_handler::handle_paste(app, &text),
        _ => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};
    use mockall::predicate::eq;

    use super::*;
    use crate::app::DogList;
    use crate::ui::state::app_mode::AppMode;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn typed(text: &str) -> Vec<Event> {
        text.chars().map(|ch| key(KeyCode::Char(ch))).collect()
    }

    fn scripted_source(events: Vec<Event>) -> MockEventSource {
        let mut queue = VecDeque::from(events);
        let mut source = MockEventSource::new();
        source
            .expect_next_event()
            .returning(move |_| Ok(queue.pop_front()));

        source
    }

    #[test]
    fn test_process_events_applies_queued_add_flow() {
        // Arrange
        let mut app = App::with_dogs(DogList::new());
        let mut events = vec![key(KeyCode::Char('a'))];
        events.extend(typed("Rex"));
        events.push(key(KeyCode::Enter));
        let mut source = scripted_source(events);

        // Act
        let result = process_events(&mut app, &mut source).expect("failed to process events");

        // Assert
        assert_eq!(result, EventResult::Continue);
        assert_eq!(app.mode, AppMode::List);
        assert_eq!(app.dogs.counts().total, 1);
        assert_eq!(app.dogs.dogs()[0].name, "Rex");
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_process_events_stops_draining_on_quit() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());
        let mut source = scripted_source(vec![
            key(KeyCode::Char('q')),
            key(KeyCode::Char('d')),
        ]);

        // Act
        let result = process_events(&mut app, &mut source).expect("failed to process events");

        // Assert
        assert_eq!(result, EventResult::Quit);
        assert_eq!(app.dogs.counts().total, 15);
    }

    #[test]
    fn test_process_events_waits_with_poll_timeout_first() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());
        let mut source = MockEventSource::new();
        source
            .expect_next_event()
            .with(eq(POLL_TIMEOUT))
            .times(1)
            .returning(|_| Ok(None));

        // Act
        let result = process_events(&mut app, &mut source).expect("failed to process events");

        // Assert
        assert_eq!(result, EventResult::Continue);
    }

    #[test]
    fn test_process_events_ignores_key_release() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());
        let release = Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));
        let mut source = scripted_source(vec![release]);

        // Act
        let result = process_events(&mut app, &mut source).expect("failed to process events");

        // Assert
        assert_eq!(result, EventResult::Continue);
    }

    #[test]
    fn test_process_events_propagates_read_errors() {
        // Arrange
        let mut app = App::with_dogs(DogList::seeded());
        let mut source = MockEventSource::new();
        source
            .expect_next_event()
            .returning(|_| Err(io::Error::other("terminal closed")));

        // Act
        let result = process_events(&mut app, &mut source);

        // Assert
        assert!(result.is_err());
    }
}
