// ABOUTME: JSON file key-value store persisting a whole-file snapshot after each write
// ABOUTME: Missing files open empty; corrupt files are rejected at open
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use mealwise_core::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use tempfile::NamedTempFile;
use tracing::{debug, error};

/// File-backed store holding every key in one JSON object
///
/// Each write produces a uniquely named temp file in the target directory
/// which is then renamed over the target, so a crash mid-write leaves the
/// previous snapshot intact. The write lock is held from the in-memory update
/// until the rename, so the file on disk always reflects the latest write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<Map<String, Value>>,
}

impl JsonFileStore {
    /// Open a store file, starting empty if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read or is not a JSON object
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => Map::new(),
            Ok(contents) => Self::parse_snapshot(&path, &contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Store file not found, starting empty");
                Map::new()
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read store file {}",
                    path.display()
                ))
                .with_source(e))
            }
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn parse_snapshot(path: &Path, contents: &str) -> AppResult<Map<String, Value>> {
        match serde_json::from_str::<Value>(contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(AppError::storage(format!(
                "Store file {} does not contain a JSON object",
                path.display()
            ))),
            Err(e) => Err(AppError::storage(format!(
                "Store file {} is corrupt",
                path.display()
            ))
            .with_source(e)),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current snapshot to disk
    ///
    /// # Errors
    ///
    /// Returns a storage error if the snapshot cannot be written
    pub fn flush(&self) -> AppResult<()> {
        let entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        self.write_snapshot(&entries)
    }

    /// Callers must hold the write lock on `entries`
    fn write_snapshot(&self, entries: &Map<String, Value>) -> AppResult<()> {
        let snapshot = serde_json::to_vec_pretty(entries)?;

        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&snapshot)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| {
            AppError::storage(format!("Failed to replace store file {}", self.path.display()))
                .with_source(e.error)
        })?;
        Ok(())
    }

    fn persist(&self, entries: &Map<String, Value>) {
        if let Err(e) = self.write_snapshot(entries) {
            error!(path = %self.path.display(), "Failed to persist store: {e}");
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: Value) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value);
        self.persist(&entries);
    }

    fn remove(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let previous = entries.remove(key);
        if previous.is_some() {
            self.persist(&entries);
        }
        previous
    }
}
