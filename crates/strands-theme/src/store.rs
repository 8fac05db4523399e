//! Key-value preference storage.
//!
//! The resolver only ever uses one key, [`THEME_KEY`], holding `"light"` or
//! `"dark"`. Stores are plain string maps so the on-disk shape matches what a
//! browser keeps in `localStorage`.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::Theme;

/// Key under which the explicit theme preference is stored.
pub const THEME_KEY: &str = "theme";

/// Errors from reading or writing a preference store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("preference store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("preference store at {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No per-user configuration directory could be determined.
    #[error("no configuration directory available for the preference store")]
    NoConfigDir,
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A string key-value store that survives across sessions.
pub trait PreferenceStore {
    /// Returns the value for `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Sets `key` to `value`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Reads the stored theme.
///
/// A value that is not a theme literal counts as absent. It is logged and
/// left in place; the next explicit toggle overwrites it.
pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S) -> Result<Option<Theme>, StoreError> {
    let Some(raw) = store.get(THEME_KEY)? else {
        return Ok(None);
    };
    match raw.parse::<Theme>() {
        Ok(theme) => Ok(Some(theme)),
        Err(err) => {
            tracing::warn!(value = %raw, error = %err, "ignoring stored theme");
            Ok(None)
        }
    }
}

/// Writes the explicit theme preference.
pub fn save_theme<S: PreferenceStore + ?Sized>(store: &mut S, theme: Theme) -> Result<(), StoreError> {
    store.set(THEME_KEY, theme.as_str())
}

/// In-memory store, for tests and hosts that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the store for chaining.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object in a file.
///
/// The file is read on every access so that separate processes sharing the
/// same path see each other's writes. A missing or empty file is an empty
/// store; parent directories are created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store at the default per-user location.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(Self::default_path()?))
    }

    /// `<config dir>/strands/preferences.json`.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        dirs::config_dir()
            .map(|dir| dir.join("strands").join("preferences.json"))
            .ok_or(StoreError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Replaces the file in one step: the entries go to a temporary sibling
    /// which is then renamed over the store, so readers see either the old
    /// contents or the new ones, never a partial write.
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        let json = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp = tempfile::Builder::new()
            .prefix(".strands-")
            .suffix(".tmp")
            .tempfile_in(parent)
            .map_err(|e| StoreError::io(parent, e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;
        tracing::debug!(path = %self.path.display(), key, value, "preference written");
        Ok(())
    }
}
