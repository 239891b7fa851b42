use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// One piece of board state serialized as JSON under a fixed path.
///
/// Writes go to a sibling `.tmp` file and are renamed into place, so a
/// crash mid-write never leaves a truncated snapshot. Reads degrade to
/// empty: a missing or unparseable file yields `None` with a warning, not
/// an error.
pub struct SnapshotFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize and replace the snapshot on disk.
    pub fn save<T: Serialize>(&self, value: &T) -> Result<()> {
        let data = serde_json::to_vec_pretty(value).context("Failed to serialize snapshot")?;

        let _guard = self.write_lock.lock().unwrap();
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &data)
            .with_context(|| format!("Failed to write snapshot temp file {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace snapshot {}", self.path.display()))?;

        Ok(())
    }

    /// Load the snapshot, or None when the file is absent, unreadable or
    /// does not parse.
    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read snapshot, starting empty"
                );
                return None;
            }
        };

        match serde_json::from_str(&data) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Snapshot did not parse, starting empty"
                );
                None
            }
        }
    }

    /// Remove the snapshot file. A file that is already gone is fine.
    pub fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context(format!("Failed to remove snapshot {}", self.path.display())),
        }
    }
}
