//! Capped, persisted roll history.
//!
//! Newest outcomes sit at the front. Persistence is best-effort: read
//! problems load an empty history and write problems are logged and
//! dropped, while the in-memory list stays authoritative for the session.

use serde_json::Value;

use crate::config::{DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_KEY, DiceBoxConfig};
use crate::outcome::Outcome;
use crate::stats::{DistributionStats, compute_stats};
use crate::store::KeyValueStore;

/// Owns the ordered outcome list and its persistence.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: Vec<Outcome>,
    capacity: usize,
    key: String,
    loaded: bool,
}

impl HistoryStore {
    /// Create an empty, not-yet-loaded history.
    pub fn new(capacity: usize, key: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
            key: key.into(),
            loaded: false,
        }
    }

    /// Create a history from widget configuration.
    pub fn from_config(config: &DiceBoxConfig) -> Self {
        Self::new(config.history_capacity, config.history_key.clone())
    }

    /// Restore a previously persisted list. Only the first call reads the
    /// store; later calls are no-ops.
    pub fn load(&mut self, store: &dyn KeyValueStore) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.entries = match store.get(&self.key) {
            Some(raw) => parse_entries(&raw, &self.key),
            None => Vec::new(),
        };
        self.entries.truncate(self.capacity);
        tracing::debug!(key = %self.key, entries = self.entries.len(), "history loaded");
    }

    /// Highest roll position among the entries, 0 when none carries one.
    pub fn last_position(&self) -> u64 {
        self.entries
            .iter()
            .filter_map(Outcome::position)
            .max()
            .unwrap_or(0)
    }

    /// Prepend `outcome`, drop entries beyond the cap, and persist.
    pub fn record(&mut self, outcome: Outcome, store: &mut dyn KeyValueStore) {
        self.entries.insert(0, outcome);
        self.entries.truncate(self.capacity);
        self.persist(store);
    }

    /// Remove every entry and persist the empty list.
    pub fn clear(&mut self, store: &mut dyn KeyValueStore) {
        self.entries.clear();
        self.persist(store);
    }

    /// Outcomes, newest first.
    pub fn entries(&self) -> &[Outcome] {
        &self.entries
    }

    /// The most recent outcome.
    pub fn latest(&self) -> Option<&Outcome> {
        self.entries.first()
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no outcomes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The cap on stored outcomes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Per-face distribution over the current entries.
    pub fn stats(&self) -> DistributionStats {
        compute_stats(&self.entries)
    }

    fn persist(&self, store: &mut dyn KeyValueStore) {
        let encoded = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "could not encode history");
                return;
            }
        };
        if let Err(e) = store.set(&self.key, &encoded) {
            tracing::warn!(key = %self.key, error = %e, "could not persist history");
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_KEY)
    }
}

/// Decode a stored history. Anything that is not a JSON array yields an
/// empty list; array elements that are not valid outcomes are skipped.
fn parse_entries(raw: &str, key: &str) -> Vec<Outcome> {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::warn!(key, "stored history is not a list, discarding");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "stored history is not valid JSON, discarding");
            return Vec::new();
        }
    };

    let total = items.len();
    let entries: Vec<Outcome> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if entries.len() < total {
        tracing::warn!(key, skipped = total - entries.len(), "skipped malformed history entries");
    }
    entries
}
