//! The mounted dice widget: engine, history and theme wired to their
//! collaborators.

use crate::clock::Clock;
use crate::config::DiceBoxConfig;
use crate::engine::{RollEngine, RollState, TickOutcome};
use crate::face::Face;
use crate::history::HistoryStore;
use crate::outcome::Outcome;
use crate::random::RandomSource;
use crate::stats::DistributionStats;
use crate::store::KeyValueStore;
use crate::theme::Theme;
use crate::timer::Timer;

/// A dice roller bound to a store, clock, random source and timer.
///
/// The host owns the event loop: it calls [`request_roll`](Self::request_roll)
/// on user input and [`tick`](Self::tick) once per elapsed timer period while
/// [`timer`](Self::timer) is active.
#[derive(Debug)]
pub struct DiceBox<S, C, R, T> {
    config: DiceBoxConfig,
    engine: RollEngine,
    history: HistoryStore,
    theme: Theme,
    store: S,
    clock: C,
    rng: R,
    timer: T,
}

impl<S, C, R, T> DiceBox<S, C, R, T>
where
    S: KeyValueStore,
    C: Clock,
    R: RandomSource,
    T: Timer,
{
    /// Build the widget and restore persisted history and theme.
    ///
    /// Starts idle on face 1. Never fails: unreadable state loads as empty.
    pub fn mount(config: DiceBoxConfig, store: S, clock: C, rng: R, timer: T) -> Self {
        let mut engine = RollEngine::from_config(&config);
        let mut history = HistoryStore::from_config(&config);
        history.load(&store);
        engine.resume_after(history.last_position());
        let theme = Theme::load(&store, &config.theme_key);
        tracing::debug!(history = history.len(), %theme, "dice box mounted");
        Self {
            config,
            engine,
            history,
            theme,
            store,
            clock,
            rng,
            timer,
        }
    }

    /// Start a roll. Returns `false` when a roll is already in flight.
    pub fn request_roll(&mut self) -> bool {
        self.engine.request_roll(&mut self.timer)
    }

    /// Advance the animation by one timer period, recording the outcome when
    /// the roll settles.
    pub fn tick(&mut self) -> TickOutcome {
        let result = self.engine.tick(&mut self.rng, &mut self.timer);
        if let TickOutcome::Settled { face, position } = result {
            let outcome = Outcome::new(face, self.clock.now(), position);
            self.history.record(outcome, &mut self.store);
        }
        result
    }

    /// Abandon the roll in flight without recording anything.
    pub fn cancel_roll(&mut self) -> bool {
        self.engine.cancel(&mut self.timer)
    }

    /// The face currently displayed.
    pub fn face(&self) -> Face {
        self.engine.face()
    }

    /// Current roll state.
    pub fn state(&self) -> RollState {
        self.engine.state()
    }

    /// Whether a roll is in flight.
    pub fn is_rolling(&self) -> bool {
        self.engine.is_rolling()
    }

    /// Recorded outcomes, newest first.
    pub fn history(&self) -> &[Outcome] {
        self.history.entries()
    }

    /// Per-face distribution over the current history.
    pub fn stats(&self) -> DistributionStats {
        self.history.stats()
    }

    /// Remove all recorded outcomes.
    pub fn clear_history(&mut self) {
        self.history.clear(&mut self.store);
    }

    /// Current theme preference.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch theme and persist the choice. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme.save(&mut self.store, &self.config.theme_key);
        self.theme
    }

    /// Configuration the widget was mounted with.
    pub fn config(&self) -> &DiceBoxConfig {
        &self.config
    }

    /// The animation timer.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Mutable access to the animation timer, for hosts that poll it.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::random::SequenceRandom;
    use crate::store::MemoryStore;
    use crate::timer::ManualTimer;
    use chrono::{TimeZone, Utc};

    type TestBox = DiceBox<MemoryStore, FixedClock, SequenceRandom, ManualTimer>;

    fn mount(store: MemoryStore, faces: &[u8]) -> TestBox {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
        DiceBox::mount(
            DiceBoxConfig::default(),
            store,
            clock,
            SequenceRandom::faces(faces),
            ManualTimer::new(),
        )
    }

    fn settle(dice: &mut TestBox) -> Option<Face> {
        while dice.timer().is_active() {
            if let TickOutcome::Settled { face, .. } = dice.tick() {
                return Some(face);
            }
        }
        None
    }

    #[test]
    fn mounts_idle_on_face_one() {
        let dice = mount(MemoryStore::new(), &[3]);
        assert_eq!(dice.state(), RollState::Idle);
        assert_eq!(dice.face().value(), 1);
        assert!(dice.history().is_empty());
        assert_eq!(dice.theme(), Theme::Light);
    }

    #[test]
    fn settled_outcome_is_recorded_with_clock_time() {
        let mut dice = mount(MemoryStore::new(), &[4]);
        assert!(dice.request_roll());
        let face = settle(&mut dice).unwrap();

        assert_eq!(dice.history().len(), 1);
        let entry = &dice.history()[0];
        assert_eq!(entry.value(), face);
        assert_eq!(entry.at(), Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
        assert_eq!(dice.face(), face);
        assert!(dice.store().get("pipdice.history").is_some());
    }

    #[test]
    fn rapid_rolls_get_unique_ids() {
        let mut dice = mount(MemoryStore::new(), &[2]);
        for _ in 0..5 {
            dice.request_roll();
            settle(&mut dice);
        }
        let mut ids: Vec<&str> = dice.history().iter().map(Outcome::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn cancelled_roll_records_nothing() {
        let mut dice = mount(MemoryStore::new(), &[2]);
        dice.request_roll();
        dice.tick();
        assert!(dice.cancel_roll());
        assert!(dice.history().is_empty());
        assert!(!dice.is_rolling());
    }

    #[test]
    fn theme_toggle_persists() {
        let mut dice = mount(MemoryStore::new(), &[1]);
        assert_eq!(dice.toggle_theme(), Theme::Dark);
        assert_eq!(dice.store().get("pipdice.theme").as_deref(), Some("dark"));
        let store = dice.store().clone();
        let remounted = mount(store, &[1]);
        assert_eq!(remounted.theme(), Theme::Dark);
    }

    #[test]
    fn clear_history_persists_empty_list() {
        let mut dice = mount(MemoryStore::new(), &[5]);
        dice.request_roll();
        settle(&mut dice);
        dice.clear_history();
        assert!(dice.history().is_empty());
        assert_eq!(dice.stats().total(), 0);
        assert_eq!(dice.store().get("pipdice.history").as_deref(), Some("[]"));
    }
}
