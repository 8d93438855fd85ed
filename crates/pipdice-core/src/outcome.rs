//! Committed roll results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::face::Face;

/// One recorded roll: the settled face, when it settled, and a unique id.
///
/// Fields are private so an outcome cannot change after it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    value: Face,
    at: DateTime<Utc>,
    id: String,
}

impl Outcome {
    /// Create an outcome for the `position`-th accepted roll.
    ///
    /// The id combines the timestamp in milliseconds, the face and the
    /// position, so two rolls settling within the same millisecond differ.
    pub fn new(value: Face, at: DateTime<Utc>, position: u64) -> Self {
        let id = format!("{}-{}-{}", at.timestamp_millis(), value, position);
        Self { value, at, id }
    }

    /// The settled face.
    pub fn value(&self) -> Face {
        self.value
    }

    /// When the roll settled.
    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Identifier, unique within a history list.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The roll position encoded in the id, if the id has the usual shape.
    pub fn position(&self) -> Option<u64> {
        self.id.rsplit('-').next()?.parse().ok()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.value, self.at.format("%H:%M:%S"))
    }
}
