//! Configuration for a mounted dice widget.

use std::time::Duration;

/// Number of animation frames shown before a roll settles.
pub const DEFAULT_FRAMES: u32 = 10;
/// Delay between animation frames.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(60);
/// Maximum number of outcomes kept in history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;
/// Store key holding the serialized history.
pub const DEFAULT_HISTORY_KEY: &str = "pipdice.history";
/// Store key holding the theme preference.
pub const DEFAULT_THEME_KEY: &str = "pipdice.theme";

/// Configuration for a [`crate::DiceBox`].
#[derive(Debug, Clone)]
pub struct DiceBoxConfig {
    /// Animation frames per roll (at least 1).
    pub frames: u32,
    /// Delay between animation frames.
    pub frame_interval: Duration,
    /// History cap (at least 1).
    pub history_capacity: usize,
    /// Store key for the serialized history.
    pub history_key: String,
    /// Store key for the theme preference.
    pub theme_key: String,
}

impl Default for DiceBoxConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
        }
    }
}

impl DiceBoxConfig {
    /// Set the number of animation frames (clamped to at least 1).
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames.max(1);
        self
    }

    /// Set the delay between animation frames.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Set the history cap (clamped to at least 1).
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }

    /// Set the store key for the serialized history.
    pub fn with_history_key(mut self, key: impl Into<String>) -> Self {
        self.history_key = key.into();
        self
    }

    /// Set the store key for the theme preference.
    pub fn with_theme_key(mut self, key: impl Into<String>) -> Self {
        self.theme_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = DiceBoxConfig::default();
        assert_eq!(cfg.frames, 10);
        assert_eq!(cfg.frame_interval, Duration::from_millis(60));
        assert_eq!(cfg.history_capacity, 50);
        assert_eq!(cfg.history_key, "pipdice.history");
        assert_eq!(cfg.theme_key, "pipdice.theme");
    }

    #[test]
    fn builder_chain() {
        let cfg = DiceBoxConfig::default()
            .with_frames(4)
            .with_frame_interval(Duration::from_millis(10))
            .with_history_capacity(5)
            .with_history_key("h")
            .with_theme_key("t");
        assert_eq!(cfg.frames, 4);
        assert_eq!(cfg.frame_interval, Duration::from_millis(10));
        assert_eq!(cfg.history_capacity, 5);
        assert_eq!(cfg.history_key, "h");
        assert_eq!(cfg.theme_key, "t");
    }

    #[test]
    fn zero_values_clamped() {
        let cfg = DiceBoxConfig::default()
            .with_frames(0)
            .with_history_capacity(0);
        assert_eq!(cfg.frames, 1);
        assert_eq!(cfg.history_capacity, 1);
    }
}
