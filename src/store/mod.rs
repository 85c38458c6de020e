pub mod json_store;
pub mod prefs;
pub mod schema;

use std::cell::RefCell;
use std::collections::BTreeMap;

use thiserror::Error;

pub use json_store::JsonPrefStore;
pub use prefs::{Preferences, Recorded};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// String-to-string store that survives across sessions. Last writer wins.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Non-persistent store, used in tests and when no data dir is available.
#[derive(Debug, Default)]
pub struct MemoryPrefStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryPrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
