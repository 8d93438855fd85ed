//! Per-face frequency distribution, computed on read.

use serde::Serialize;

use crate::face::Face;
use crate::outcome::Outcome;

/// Occurrences of one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaceStat {
    /// The face counted.
    pub face: Face,
    /// How many outcomes landed on it.
    pub count: usize,
    /// `round(count / max(1, total) * 100)`.
    pub percentage: u32,
}

/// Distribution of a history over all six faces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionStats {
    faces: [FaceStat; 6],
    total: usize,
}

impl DistributionStats {
    /// Stats for every face, in ascending face order.
    pub fn faces(&self) -> &[FaceStat; 6] {
        &self.faces
    }

    /// Stats for one face.
    pub fn get(&self, face: Face) -> FaceStat {
        self.faces[face.index()]
    }

    /// Number of outcomes counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Sum of the rounded percentages. Drifts from 100 by rounding.
    pub fn percentage_sum(&self) -> u32 {
        self.faces.iter().map(|s| s.percentage).sum()
    }

    /// The face seen most often, lowest face on ties. `None` when empty.
    pub fn most_common(&self) -> Option<Face> {
        if self.total == 0 {
            return None;
        }
        self.faces
            .iter()
            .rev()
            .max_by_key(|s| s.count)
            .map(|s| s.face)
    }

    /// Mean face value, or `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let sum: usize = self
            .faces
            .iter()
            .map(|s| usize::from(s.face.value()) * s.count)
            .sum();
        Some(sum as f64 / self.total as f64)
    }
}

/// Count each face in `history` and derive its share of the total.
///
/// The divisor is `max(1, len)`, so an empty history gives 0% everywhere.
pub fn compute_stats(history: &[Outcome]) -> DistributionStats {
    let mut counts = [0usize; 6];
    for outcome in history {
        counts[outcome.value().index()] += 1;
    }

    let divisor = history.len().max(1) as f64;
    let faces = Face::ALL.map(|face| {
        let count = counts[face.index()];
        FaceStat {
            face,
            count,
            percentage: (count as f64 / divisor * 100.0).round() as u32,
        }
    });

    DistributionStats {
        faces,
        total: history.len(),
    }
}
