//! Key-value persistence backends for the section layout
//!
//! The store only ever talks to the `Storage` trait, so the same
//! reconciliation and mutation logic runs against disk or memory.

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::config::{APP_DIR, STORAGE_EXTENSION};

/// Minimal key-value backend
pub trait Storage {
    /// Stored value for `key`, or `None` when nothing was ever written
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory (e.g. `~/.local/share/forge-layout`)
    pub fn default_dir() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let stem = sanitize_key(key)?;
        Ok(self.dir.join(format!("{stem}.{STORAGE_EXTENSION}")))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), bytes = contents.len(), "Loaded stored value");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create storage directory {}", parent.display()))?;
        }

        // Write-then-rename so a crash never leaves half a document behind
        let tmp = path.with_extension(format!("{STORAGE_EXTENSION}.tmp"));
        fs::write(&tmp, value).with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to move {} into place", tmp.display()))?;

        info!(path = %path.display(), "Saved section layout");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

/// Keys become file stems, so only a conservative character set is allowed
fn sanitize_key(key: &str) -> Result<String> {
    let key = key.trim();
    if key.is_empty() {
        bail!("Storage key must not be empty");
    }
    Ok(key
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect())
}

/// In-memory backend with switchable failures
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: std::collections::HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, as if a previous session had written it
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }

    /// Make every subsequent `load` fail (permission denied, storage disabled)
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every subsequent `save` fail (quota exceeded, storage disabled)
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            bail!("Storage unavailable while reading '{key}'");
        }
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            bail!("Storage quota exceeded while writing '{key}'");
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
