use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::{KeyValueStore, StoreError};

/// Store backed by a single JSON file holding the key→value map.
///
/// A missing or unreadable file starts the store empty — the next write
/// replaces whatever was there, which is the same recovery the browser-local
/// storage of the original editor offered. Writes go through a sibling temp
/// file and a rename so a crash mid-write never leaves a half-written map.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: IndexMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(%err, path = %path.display(), "discarding corrupt store file");
                    IndexMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => IndexMap::new(),
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "could not read store file");
                IndexMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(&self.entries)?;
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, payload).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survives_a_reopen_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("formData"), None);
        store.set("formData", r#"{"fields":[]}"#).unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("formData").as_deref(), Some(r#"{"fields":[]}"#));
    }

    #[test]
    fn corrupt_backing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{{{ not json").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("formData"), None);
        store.set("formData", "fresh").unwrap();
        assert_eq!(
            FileStore::open(&path).get("formData").as_deref(),
            Some("fresh")
        );
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/store.json");

        let mut store = FileStore::open(&path);
        store.set("k", "v").unwrap();
        assert_eq!(FileStore::open(&path).get("k").as_deref(), Some("v"));
    }
}
