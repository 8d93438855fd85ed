//! Roll animation state machine.
//!
//! ```text
//! Idle    --request_roll-->           Rolling (timer started)
//! Rolling --tick 1..frames-1-->       Rolling (cosmetic frame)
//! Rolling --tick frames-->            Idle    (frame, final draw, timer stopped)
//! Rolling --request_roll-->           Rolling (rejected)
//! ```
//!
//! Frames are cosmetic. The settled face is an independent draw made on the
//! last tick after that tick's frame, never the last frame reused.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::DiceBoxConfig;
use crate::face::Face;
use crate::random::RandomSource;
use crate::timer::Timer;

/// Whether an animation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RollState {
    /// Waiting for a roll request.
    #[default]
    Idle,
    /// Animating; further requests are rejected.
    Rolling,
}

/// What a single timer tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No roll in flight; the tick was ignored.
    Idle,
    /// An intermediate face was shown.
    Frame(Face),
    /// The roll settled on `face`. `position` counts accepted rolls from 1.
    Settled {
        /// The committed face.
        face: Face,
        /// Sequence number of the accepted roll that settled.
        position: u64,
    },
}

/// Owns the displayed face and the Idle/Rolling state.
#[derive(Debug, Clone)]
pub struct RollEngine {
    face: Face,
    state: RollState,
    frames: u32,
    frame_interval: Duration,
    frames_shown: u32,
    accepted: u64,
}

impl RollEngine {
    /// Create an idle engine showing face 1.
    pub fn new(frames: u32, frame_interval: Duration) -> Self {
        Self {
            face: Face::default(),
            state: RollState::Idle,
            frames: frames.max(1),
            frame_interval,
            frames_shown: 0,
            accepted: 0,
        }
    }

    /// Create an engine from widget configuration.
    pub fn from_config(config: &DiceBoxConfig) -> Self {
        Self::new(config.frames, config.frame_interval)
    }

    /// The face currently displayed.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Current state.
    pub fn state(&self) -> RollState {
        self.state
    }

    /// Whether an animation is in flight.
    pub fn is_rolling(&self) -> bool {
        self.state == RollState::Rolling
    }

    /// Continue numbering accepted rolls after `position`, so a session
    /// resumed over a restored history never reuses a position.
    pub fn resume_after(&mut self, position: u64) {
        self.accepted = self.accepted.max(position);
    }

    /// Frames shown so far in the current roll.
    pub fn frames_shown(&self) -> u32 {
        self.frames_shown
    }

    /// Start a roll. Returns `false` and changes nothing when one is already
    /// in flight.
    pub fn request_roll(&mut self, timer: &mut dyn Timer) -> bool {
        if self.is_rolling() {
            tracing::debug!(frames_shown = self.frames_shown, "roll rejected, already rolling");
            return false;
        }
        self.state = RollState::Rolling;
        self.frames_shown = 0;
        self.accepted += 1;
        timer.start(self.frame_interval);
        tracing::debug!(position = self.accepted, "roll accepted");
        true
    }

    /// Advance the animation by one timer period.
    pub fn tick(&mut self, rng: &mut dyn RandomSource, timer: &mut dyn Timer) -> TickOutcome {
        if !self.is_rolling() {
            return TickOutcome::Idle;
        }

        self.frames_shown += 1;
        self.face = draw_face(rng);

        if self.frames_shown < self.frames {
            return TickOutcome::Frame(self.face);
        }

        timer.stop();
        self.face = draw_face(rng);
        self.state = RollState::Idle;
        tracing::debug!(face = %self.face, position = self.accepted, "roll settled");
        TickOutcome::Settled {
            face: self.face,
            position: self.accepted,
        }
    }

    /// Abandon the roll in flight without settling. Returns `false` when idle.
    ///
    /// The displayed face keeps the last frame shown.
    pub fn cancel(&mut self, timer: &mut dyn Timer) -> bool {
        if !self.is_rolling() {
            return false;
        }
        timer.stop();
        self.state = RollState::Idle;
        tracing::debug!(frames_shown = self.frames_shown, "roll cancelled");
        true
    }
}

impl Default for RollEngine {
    fn default() -> Self {
        Self::from_config(&DiceBoxConfig::default())
    }
}

/// Draw a uniform face in `1..=6`.
fn draw_face(rng: &mut dyn RandomSource) -> Face {
    let value = rng.int_inclusive(u32::from(Face::MIN), u32::from(Face::MAX));
    let index = (value as usize).saturating_sub(1).min(Face::ALL.len() - 1);
    Face::ALL[index]
}
