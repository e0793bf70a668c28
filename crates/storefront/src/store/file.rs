//! File-backed store backend.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a hidden temp file in
//! the same directory, are fsynced, then renamed over the target, so a crash
//! never leaves a half-written value behind.
//!
//! A multi-key write keeps a copy of every value it replaces until all
//! renames are done. If one rename fails, the keys already renamed get their
//! old values back.

use std::fs::{self, File};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

/// A store that keeps one JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        tracing::debug!(dir = %dir.display(), "file store opened");
        Ok(Self { dir })
    }

    /// Directory holding the value files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    ///
    /// Keys are restricted to ASCII letters, digits, `-` and `_` so they can
    /// never escape the store directory.
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!(".{key}.json.tmp.{}", std::process::id()))
    }

    fn backup_path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!(".{key}.json.bak.{}", std::process::id()))
    }

    /// Write `value` to the temp file for `key` and flush it to disk.
    fn stage(&self, key: &str, value: &str) -> Result<PathBuf, StoreError> {
        let tmp = self.temp_path_for(key);
        let io_err = |source: io::Error| StoreError::Io {
            key: key.to_owned(),
            source,
        };
        let mut file = File::create(&tmp).map_err(io_err)?;
        file.write_all(value.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        Ok(tmp)
    }

    /// Copy the current value of each pending key aside. Keys with no value
    /// yet need no copy.
    fn back_up(&self, pending: &mut [Pending]) -> Result<(), StoreError> {
        for entry in pending {
            let backup = self.backup_path_for(&entry.key);
            match fs::copy(&entry.target, &backup) {
                Ok(_) => entry.backup = Some(backup),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(StoreError::Io {
                        key: entry.key.clone(),
                        source,
                    });
                }
            }
        }
        Ok(())
    }

    fn sync_dir(&self) {
        let synced = File::open(&self.dir).and_then(|dir| dir.sync_all());
        if let Err(error) = synced {
            tracing::warn!(dir = %self.dir.display(), %error, "failed to sync store directory");
        }
    }
}

/// One value on its way into the store.
struct Pending {
    key: String,
    tmp: PathBuf,
    target: PathBuf,
    backup: Option<PathBuf>,
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.set_many(vec![(key.to_owned(), value)])
    }

    fn clear(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                self.sync_dir();
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    /// Stage every value before renaming any of them into place.
    fn set_many(&mut self, entries: Vec<(String, String)>) -> Result<(), StoreError> {
        let mut pending: Vec<Pending> = Vec::with_capacity(entries.len());

        for (key, value) in &entries {
            let staged = self.path_for(key).and_then(|target| {
                let tmp = self.stage(key, value)?;
                Ok(Pending {
                    key: key.clone(),
                    tmp,
                    target,
                    backup: None,
                })
            });
            match staged {
                Ok(entry) => pending.push(entry),
                Err(e) => {
                    discard(&pending);
                    return Err(e);
                }
            }
        }

        if let Err(e) = self.back_up(&mut pending) {
            discard(&pending);
            return Err(e);
        }

        for (i, entry) in pending.iter().enumerate() {
            if let Err(source) = fs::rename(&entry.tmp, &entry.target) {
                roll_back(pending.get(..i).unwrap_or_default());
                discard(pending.get(i..).unwrap_or_default());
                self.sync_dir();
                return Err(StoreError::Io {
                    key: entry.key.clone(),
                    source,
                });
            }
        }

        for backup in pending.iter().filter_map(|entry| entry.backup.as_ref()) {
            if let Err(error) = fs::remove_file(backup) {
                tracing::warn!(path = %backup.display(), %error, "failed to remove store backup");
            }
        }
        self.sync_dir();
        tracing::debug!(keys = pending.len(), "file store write committed");
        Ok(())
    }
}

/// Put back the values replaced by renames that already went through.
fn roll_back(committed: &[Pending]) {
    for entry in committed.iter().rev() {
        let restored = match &entry.backup {
            Some(backup) => fs::rename(backup, &entry.target),
            None => fs::remove_file(&entry.target),
        };
        if let Err(error) = restored {
            tracing::error!(key = %entry.key, %error, "failed to roll back store write");
        }
    }
}

/// Remove temp files and backups that will not be used.
fn discard(pending: &[Pending]) {
    for entry in pending {
        let _ = fs::remove_file(&entry.tmp);
        if let Some(backup) = &entry.backup {
            let _ = fs::remove_file(backup);
        }
    }
}
