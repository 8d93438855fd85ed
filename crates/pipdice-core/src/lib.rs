//! Dice roller widget core for pipdice.
//!
//! A [`DiceBox`] combines a [`RollEngine`] (the Idle/Rolling animation state
//! machine) with a [`HistoryStore`] (a capped, persisted outcome list and
//! its per-face distribution). Everything outside the logic is injected: a
//! [`KeyValueStore`] for persistence, a [`Clock`], a [`RandomSource`], and a
//! [`Timer`] the host advances to animate rolls.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod face;
pub mod history;
pub mod outcome;
pub mod random;
pub mod stats;
pub mod store;
pub mod theme;
pub mod timer;
pub mod widget;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::DiceBoxConfig;
pub use engine::{RollEngine, RollState, TickOutcome};
pub use error::{StoreError, StoreResult};
pub use face::Face;
pub use history::HistoryStore;
pub use outcome::Outcome;
pub use random::{RandomSource, SequenceRandom, StdRandom};
pub use stats::{DistributionStats, FaceStat, compute_stats};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use theme::Theme;
pub use timer::{IntervalTimer, ManualTimer, Timer};
pub use widget::DiceBox;
