//! Key-value persistence ports.
//!
//! The widget keeps two string values: the serialized history and the theme
//! preference. Reads tolerate absent keys; writes may fail and callers treat
//! failure as best-effort.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// A string-keyed, string-valued store.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory store.
///
/// Writes can be switched off to exercise the best-effort persistence paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value under `key`.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent `set` fail with [`StoreError::Unavailable`].
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Toggle write failures on an existing store.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store backed by a single JSON object file.
///
/// The file is read once when opened and rewritten in full on every `set`.
/// A missing or malformed file opens as an empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed store file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read store file");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        let text = serde_json::to_string_pretty(&self.values)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_get_absent() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn memory_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn memory_failing_writes() {
        let mut store = MemoryStore::new().with_value("k", "old").with_failing_writes();
        assert!(matches!(
            store.set("k", "new"),
            Err(StoreError::Unavailable(_))
        ));
        assert_eq!(store.get("k").as_deref(), Some("old"));

        store.set_fail_writes(false);
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("new"));
    }

    #[test]
    fn file_store_persists_across_opens() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set("theme", "dark").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.path(), path.as_path());
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("nope.json"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn file_store_malformed_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not-json").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn file_store_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let mut store = FileStore::open(&path);
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }
}
