//! Application state for the terminal host.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pipdice_core::{
    DiceBox, DiceBoxConfig, IntervalTimer, KeyValueStore, StdRandom, SystemClock, TickOutcome,
};

/// The widget as mounted by the terminal host.
pub type HostBox<S> = DiceBox<S, SystemClock, StdRandom, IntervalTimer>;

/// Main application state.
pub struct TuiApp<S> {
    /// The mounted dice widget.
    pub dice: HostBox<S>,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: KeyValueStore> TuiApp<S> {
    /// Mount the widget on `store` with the given seed (entropy when `None`).
    pub fn new(store: S, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::from_entropy(),
        };
        let dice = DiceBox::mount(
            DiceBoxConfig::default(),
            store,
            SystemClock,
            rng,
            IntervalTimer::new(),
        );
        Self {
            dice,
            show_help: false,
            should_quit: false,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.show_help {
            self.show_help = false;
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => {
                self.dice.request_roll();
            }
            KeyCode::Char('t') => {
                self.dice.toggle_theme();
            }
            KeyCode::Char('c') if !self.dice.is_rolling() => self.dice.clear_history(),
            _ => {}
        }
    }

    /// Deliver every animation tick that has come due by `now`.
    pub fn advance(&mut self, now: Instant) {
        let due = self.dice.timer_mut().due(now);
        for _ in 0..due {
            let outcome = self.dice.tick();
            if matches!(outcome, TickOutcome::Settled { .. } | TickOutcome::Idle) {
                break;
            }
        }
    }

    /// Status bar hint.
    pub fn status_hint(&self) -> &str {
        "Enter/Space/r:roll  t:theme  c:clear history  ?:help  q:quit"
    }
}
