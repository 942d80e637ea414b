use std::io;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::app::App;
use crate::ui;

mod event;
mod key_handler;
pub mod mode;
mod terminal;

pub(crate) type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum EventResult {
    Continue,
    Quit,
}

/// Runs the TUI event/render loop until the user exits.
///
/// # Errors
/// Returns an error if terminal setup, rendering, or event reading fails.
pub fn run(app: &mut App) -> io::Result<()> {
    let _terminal_guard = terminal::TerminalGuard;
    let mut terminal = terminal::setup_terminal()?;
    let mut events = event::CrosstermEventSource;

    info!("entering event loop");
    run_main_loop(app, &mut terminal, &mut events)?;
    info!("leaving event loop");

    terminal.show_cursor()?;

    Ok(())
}

fn run_main_loop(
    app: &mut App,
    terminal: &mut TuiTerminal,
    events: &mut dyn event::EventSource,
) -> io::Result<()> {
    loop {
        render_frame(app, terminal)?;

        if event::process_events(app, events)? == EventResult::Quit {
            break;
        }
    }

    Ok(())
}

fn render_frame(app: &mut App, terminal: &mut TuiTerminal) -> io::Result<()> {
    let App {
        dogs,
        input,
        mode,
        table_state,
    } = app;

    terminal.draw(|frame| {
        ui::render(
            frame,
            ui::RenderContext {
                dogs,
                input,
                mode: *mode,
                table_state,
            },
        );
    })?;

    Ok(())
}
