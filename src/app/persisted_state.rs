// SPDX-License-Identifier: MPL-2.0
//! Local key-value storage persisted across sessions in CBOR format.
//!
//! This is the desktop counterpart of a browser's local storage: string keys
//! mapped to plain string values, kept apart from the user-editable
//! `settings.toml`. The selection handler stores the last chosen printer here.
//!
//! # Path Resolution
//!
//! 1. Explicit base directory passed to `load_from()` / `save_to()` / `LocalStorage::open()`
//! 2. `LABEL_DESK_DATA_DIR` environment variable
//! 3. Platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use crate::sync::SelectionStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Key-value entries that persist across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl AppState {
    /// Loads state from `base_dir`, or the resolved data directory.
    ///
    /// Returns a tuple of (state, optional_error). A missing file is not an
    /// error; an unreadable or corrupted one yields default state plus the error.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<Error>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => (Self::default(), Some(Error::Config(err.to_string()))),
            },
            Err(err) => (Self::default(), Some(err.into())),
        }
    }

    /// Saves state to a custom directory, creating it if needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let path = Self::state_file_path_with_override(base_dir)
            .ok_or_else(|| Error::Io("no data directory available".to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(fs::File::create(&path)?);
        ciborium::into_writer(self, writer).map_err(|err| Error::Io(err.to_string()))
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

/// [`SelectionStore`] backed by the state file; every write is flushed to disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    state: AppState,
    base_dir: Option<PathBuf>,
}

impl LocalStorage {
    /// Opens the store, starting empty when the file is missing or unreadable.
    pub fn open(base_dir: Option<PathBuf>) -> Self {
        let (state, error) = AppState::load_from(base_dir.clone());
        if let Some(error) = error {
            tracing::warn!(%error, "could not read saved state, starting empty");
        }
        Self { state, base_dir }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl SelectionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.state.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.state.entries.insert(key.to_string(), value.to_string());
        if let Err(error) = self.state.save_to(self.base_dir.clone()) {
            tracing::warn!(%error, key, "could not save state");
        }
    }
}
