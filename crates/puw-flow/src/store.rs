//! JSON-file preference storage.
//!
//! A single JSON document maps package keys to their preference records.
//! Saves go through a temp file plus rename so a crash mid-write cannot
//! corrupt previously saved preferences.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use puw_model::Preferences;

use crate::collaborators::PreferenceStore;
use crate::error::{FlowError, Result};

/// A [`PreferenceStore`] backed by one JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    packages: BTreeMap<String, Preferences>,
}

impl JsonFileStore {
    /// Open a store, reading the file if it exists.
    ///
    /// A missing file is an empty store; it is created on first save.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let packages = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|e| FlowError::Store {
                operation: "read",
                path: path.clone(),
                source: e,
            })?;
            serde_json::from_str(&text)?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, packages })
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.packages)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| FlowError::Store {
                operation: "create directory for",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        // Temp file + rename keeps the save atomic for a single key.
        let temp_path = self.path.with_extension("json.tmp");
        let mut file = File::create(&temp_path).map_err(|e| FlowError::Store {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(text.as_bytes())
            .map_err(|e| FlowError::Store {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;
        file.sync_all().map_err(|e| FlowError::Store {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| FlowError::Store {
            operation: "replace",
            path: self.path.clone(),
            source: e,
        })?;

        tracing::info!(path = %self.path.display(), "saved preferences");
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self, package_key: &str) -> Result<Preferences> {
        Ok(self
            .packages
            .get(package_key)
            .cloned()
            .unwrap_or_default())
    }

    fn save(&mut self, package_key: &str, prefs: &Preferences) -> Result<()> {
        self.packages
            .insert(package_key.to_string(), prefs.clone());
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puw_model::{ReleaseState, Threshold};

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(store.load("any-pkg").unwrap(), Preferences::default());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let prefs = Preferences {
            suppress_all: true,
            min_state: Threshold::AtLeast(ReleaseState::Beta),
            ..Default::default()
        };

        let mut store = JsonFileStore::open(&path).unwrap();
        store.save("sample-pkg", &prefs).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.load("sample-pkg").unwrap(), prefs);
        // Other packages keep their own defaults.
        assert_eq!(reopened.load("other-pkg").unwrap(), Preferences::default());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.save("sample-pkg", &Preferences::default()).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.save("sample-pkg", &Preferences::default()).unwrap();
        assert!(path.exists());
    }
}
