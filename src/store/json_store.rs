use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::store::schema::PrefsData;
use crate::store::{PreferenceStore, StoreError};

const PREFS_FILE: &str = "preferences.json";

/// Preferences kept in a single JSON file under the data dir.
pub struct JsonPrefStore {
    base_dir: PathBuf,
}

impl JsonPrefStore {
    pub fn new() -> Result<Self, StoreError> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("drillbox");
        Self::with_base_dir(base_dir)
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_path(&self) -> PathBuf {
        self.base_dir.join(PREFS_FILE)
    }

    /// Missing, unreadable, corrupt or stale files all load as defaults.
    pub fn load(&self) -> PrefsData {
        let path = self.file_path();
        if !path.exists() {
            return PrefsData::default();
        }
        let data = fs::read_to_string(&path)
            .map_err(StoreError::from)
            .and_then(|content| Ok(serde_json::from_str::<PrefsData>(&content)?));
        match data {
            Ok(data) if !data.needs_reset() => data,
            Ok(data) => {
                tracing::warn!(
                    found = data.schema_version,
                    "preference schema mismatch, starting fresh"
                );
                PrefsData::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring unreadable preferences: {e}");
                PrefsData::default()
            }
        }
    }

    pub fn save(&self, data: &PrefsData) -> Result<(), StoreError> {
        let path = self.file_path();
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(data)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

impl PreferenceStore for JsonPrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut data = self.load();
        data.values.insert(key.to_string(), value.to_string());
        self.save(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_test_store() -> (TempDir, JsonPrefStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonPrefStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let (_dir, store) = make_test_store();
        assert_eq!(store.load(), PrefsData::default());
        assert_eq!(store.get("playerName"), None);
    }

    #[test]
    fn test_set_then_get_survives_new_instance() {
        let (dir, store) = make_test_store();
        store.set("playerName", "Yuki").unwrap();

        let reopened = JsonPrefStore::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.get("playerName").as_deref(), Some("Yuki"));
    }

    #[test]
    fn test_last_writer_wins() {
        let (_dir, store) = make_test_store();
        store.set("playerName", "A").unwrap();
        store.set("playerName", "B").unwrap();
        assert_eq!(store.get("playerName").as_deref(), Some("B"));
    }

    #[test]
    fn test_corrupt_file_degrades_to_defaults() {
        let (_dir, store) = make_test_store();
        fs::write(store.file_path(), "{not json").unwrap();
        assert_eq!(store.get("playerName"), None);

        // Writing repairs the file.
        store.set("playerName", "Kai").unwrap();
        assert_eq!(store.get("playerName").as_deref(), Some("Kai"));
    }

    #[test]
    fn test_stale_schema_is_reset() {
        let (_dir, store) = make_test_store();
        fs::write(
            store.file_path(),
            r#"{"schema_version": 99, "values": {"playerName": "Old"}}"#,
        )
        .unwrap();
        assert_eq!(store.get("playerName"), None);
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let (dir, store) = make_test_store();
        store.set("k", "v").unwrap();
        let tmp_files: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("tmp"))
            .collect();
        assert!(tmp_files.is_empty(), "no residual .tmp files");
    }

    #[test]
    fn test_set_fails_when_dir_is_gone() {
        let dir = TempDir::new().unwrap();
        let store = JsonPrefStore {
            base_dir: dir.path().join("nonexistent_subdir"),
        };
        assert!(matches!(store.set("k", "v"), Err(StoreError::Io(_))));
    }
}
