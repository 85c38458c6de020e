use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::session::controller::CompletionSink;
use crate::store::PreferenceStore;

pub const PLAYER_NAME_KEY: &str = "playerName";
pub const COMPLETED_SETS_KEY: &str = "completedSets";

/// Outcome of [`Preferences::mark_completed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recorded {
    AlreadyDone,
    Saved,
    /// Newly recorded, but only for this run.
    MemoryOnly,
}

/// Typed view over a [`PreferenceStore`]. Reads are memoized, misses
/// included, so the backing store is consulted at most once per key. Every
/// write lands in the cache first, so a failing backing store degrades to
/// per-run memory instead of losing the value.
pub struct Preferences {
    store: Box<dyn PreferenceStore>,
    cache: RefCell<BTreeMap<String, Option<String>>>,
}

impl Preferences {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self {
            store,
            cache: RefCell::new(BTreeMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        if let Some(v) = self.cache.borrow().get(key) {
            return v.clone();
        }
        let value = self.store.get(key);
        self.cache
            .borrow_mut()
            .insert(key.to_string(), value.clone());
        value
    }

    /// Returns false if the value only made it into memory.
    fn set(&self, key: &str, value: &str) -> bool {
        self.cache
            .borrow_mut()
            .insert(key.to_string(), Some(value.to_string()));
        match self.store.set(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, "preference not persisted: {e}");
                false
            }
        }
    }

    pub fn player_name(&self) -> Option<String> {
        self.get(PLAYER_NAME_KEY)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
    }

    pub fn set_player_name(&self, name: &str) -> bool {
        self.set(PLAYER_NAME_KEY, name.trim())
    }

    /// Content-set keys finished at least once, in completion order.
    pub fn completed_sets(&self) -> Vec<String> {
        let Some(raw) = self.get(COMPLETED_SETS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!("discarding malformed completed sets: {e}");
                Vec::new()
            }
        }
    }

    pub fn is_completed(&self, set_key: &str) -> bool {
        self.completed_sets().iter().any(|k| k == set_key)
    }

    /// Idempotent: a key already present is left alone.
    pub fn mark_completed(&self, set_key: &str) -> Recorded {
        let mut keys = self.completed_sets();
        if keys.iter().any(|k| k == set_key) {
            return Recorded::AlreadyDone;
        }
        keys.push(set_key.to_string());
        let persisted = match serde_json::to_string(&keys) {
            Ok(json) => self.set(COMPLETED_SETS_KEY, &json),
            Err(e) => {
                tracing::warn!("could not encode completed sets: {e}");
                false
            }
        };
        if persisted {
            Recorded::Saved
        } else {
            Recorded::MemoryOnly
        }
    }
}

impl CompletionSink for Preferences {
    fn record_completed(&self, set_key: &str) {
        match self.mark_completed(set_key) {
            Recorded::Saved => {
                tracing::info!(set = set_key, "content set completed for the first time")
            }
            Recorded::MemoryOnly => {
                tracing::warn!(set = set_key, "completion kept for this run only")
            }
            Recorded::AlreadyDone => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::store::{MemoryPrefStore, StoreError};

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("read-only")))
        }
    }

    /// Counts reads that reach the backing store.
    struct CountingStore {
        inner: MemoryPrefStore,
        reads: Rc<Cell<usize>>,
    }

    impl PreferenceStore for CountingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.reads.set(self.reads.get() + 1);
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.inner.set(key, value)
        }
    }

    fn memory_prefs() -> Preferences {
        Preferences::new(Box::new(MemoryPrefStore::default()))
    }

    #[test]
    fn test_player_name_round_trip() {
        let prefs = memory_prefs();
        assert_eq!(prefs.player_name(), None);
        assert!(prefs.set_player_name("  Hana "));
        assert_eq!(prefs.player_name().as_deref(), Some("Hana"));
    }

    #[test]
    fn test_blank_player_name_reads_as_none() {
        let prefs = memory_prefs();
        prefs.set_player_name("   ");
        assert_eq!(prefs.player_name(), None);
    }

    #[test]
    fn test_mark_completed_is_idempotent() {
        let prefs = memory_prefs();
        assert_eq!(prefs.mark_completed("hiragana:ka"), Recorded::Saved);
        assert_eq!(prefs.mark_completed("hiragana:ka"), Recorded::AlreadyDone);
        assert_eq!(prefs.mark_completed("multiply:3"), Recorded::Saved);
        assert_eq!(prefs.completed_sets(), vec!["hiragana:ka", "multiply:3"]);
        assert!(prefs.is_completed("multiply:3"));
        assert!(!prefs.is_completed("multiply:4"));
    }

    #[test]
    fn test_completed_sets_stored_as_json_array() {
        let store = MemoryPrefStore::default();
        store.set(COMPLETED_SETS_KEY, r#"["katakana:a"]"#).unwrap();
        let prefs = Preferences::new(Box::new(store));
        assert!(prefs.is_completed("katakana:a"));
    }

    #[test]
    fn test_malformed_completed_sets_start_empty() {
        let store = MemoryPrefStore::default();
        store.set(COMPLETED_SETS_KEY, "a,b,c").unwrap();
        let prefs = Preferences::new(Box::new(store));
        assert!(prefs.completed_sets().is_empty());
        assert_eq!(prefs.mark_completed("a"), Recorded::Saved);
        assert_eq!(prefs.completed_sets(), vec!["a"]);
    }

    #[test]
    fn test_failing_store_degrades_to_memory() {
        let prefs = Preferences::new(Box::new(BrokenStore));
        assert!(!prefs.set_player_name("Sora"));
        assert_eq!(prefs.player_name().as_deref(), Some("Sora"));

        prefs.record_completed("hiragana:a");
        assert!(prefs.is_completed("hiragana:a"));
    }

    #[test]
    fn test_unsaved_completion_is_reported() {
        let prefs = Preferences::new(Box::new(BrokenStore));
        assert_eq!(prefs.mark_completed("katakana:ka"), Recorded::MemoryOnly);
        assert_eq!(prefs.mark_completed("katakana:ka"), Recorded::AlreadyDone);
    }

    #[test]
    fn test_store_is_read_once_per_key() {
        let reads = Rc::new(Cell::new(0));
        let prefs = Preferences::new(Box::new(CountingStore {
            inner: MemoryPrefStore::default(),
            reads: reads.clone(),
        }));
        for _ in 0..5 {
            assert!(prefs.completed_sets().is_empty());
            assert_eq!(prefs.player_name(), None);
        }
        assert_eq!(reads.get(), 2);

        prefs.mark_completed("multiply:2");
        assert_eq!(prefs.completed_sets(), vec!["multiply:2"]);
        assert_eq!(reads.get(), 2);
    }
}
