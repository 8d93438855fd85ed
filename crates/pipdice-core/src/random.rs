//! Uniform random sources.
//!
//! Faces are drawn with `floor(r * (max - min + 1)) + min` from a unit
//! float, so a scripted source can pin exact faces in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform randomness.
pub trait RandomSource {
    /// A float uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// An integer uniformly distributed in `min..=max`.
    fn int_inclusive(&mut self, min: u32, max: u32) -> u32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = f64::from(hi - lo + 1);
        let offset = (self.next_unit() * span).floor() as u32;
        (lo + offset).min(hi)
    }
}

/// Randomness from a seedable [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Deterministic source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of unit floats, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`. An empty list always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRandom {
    /// Replay `values` in order.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    /// A sequence that lands on exactly these faces, in order.
    pub fn faces(faces: &[u8]) -> Self {
        // Midpoint of each face's sixth of the unit interval.
        let values = faces
            .iter()
            .map(|&f| (f64::from(f.clamp(1, 6)) - 0.5) / 6.0)
            .collect();
        Self::new(values)
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
