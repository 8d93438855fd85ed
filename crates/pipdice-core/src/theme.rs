//! Persisted light/dark preference.

use serde::{Deserialize, Serialize};

use crate::store::KeyValueStore;

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse the stored representation.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Read the preference under `key`. Absent or unknown values give the
    /// default theme.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Self {
        match store.get(key) {
            Some(raw) => Self::from_name(&raw).unwrap_or_else(|| {
                tracing::warn!(key, value = %raw, "unknown theme preference, using default");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Write the preference under `key`, best-effort.
    pub fn save(self, store: &mut dyn KeyValueStore, key: &str) {
        if let Err(e) = store.set(key, self.as_str()) {
            tracing::warn!(key, error = %e, "could not persist theme preference");
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
