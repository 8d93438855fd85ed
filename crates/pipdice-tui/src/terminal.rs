//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use pipdice_core::KeyValueStore;

use crate::app::TuiApp;
use crate::render;

/// How long to wait for input when no animation is running.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Launch the TUI application.
pub fn run<S: KeyValueStore>(mut app: TuiApp<S>) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    tracing::debug!(ok = result.is_ok(), "terminal restored");

    result
}

/// Main event loop: draw, wait for input or the next animation tick, repeat.
fn run_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp<S>,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| render::draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = app
            .dice
            .timer()
            .until_next(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout).map_err(|e| format!("event error: {e}"))? {
            match event::read().map_err(|e| format!("event error: {e}"))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }

        app.advance(Instant::now());
    }
}
