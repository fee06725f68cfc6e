// SPDX-License-Identifier: MIT

//! Key-value persistence for the active language selection.
//!
//! The session reads the store once at initialization and writes once per
//! language change. The store is an opaque collaborator: anything that can
//! get and set a string under a fixed key qualifies. Two implementations
//! ship with the crate — an in-process map and a small file on disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed key under which the chosen language is persisted.
pub const LANGUAGE_KEY: &str = "active-language";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to persist {key:?} to {path}: {source}")]
    Write {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// External key-value store the session persists its language through.
pub trait LanguageStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Volatile in-process store. Useful for tests and for hosts that manage
/// persistence themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LanguageStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one `key=value` line per entry, rewritten atomically
/// via write-then-rename.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Vec<(String, String)> {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        text.lines()
            .filter_map(|line| {
                let (key, value) = line.split_once('=')?;
                Some((key.to_string(), value.to_string()))
            })
            .collect()
    }
}

impl LanguageStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            key: key.to_string(),
            path: self.path.clone(),
            source,
        };

        let mut entries = self.read_entries();
        match entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => entries.push((key.to_string(), value.to_string())),
        }

        let mut text = String::new();
        for (k, v) in &entries {
            text.push_str(k);
            text.push('=');
            text.push_str(v);
            text.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }
}
