//! Durable snapshot of the gallery domain.
//!
//! Only the gallery state is whitelisted for persistence; every other
//! domain is rebuilt from scratch on startup. The snapshot is a single
//! JSON document replaced atomically (temp file + rename) under an
//! advisory lock, so two running instances cannot interleave writes.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use crate::store::gallery::GalleryState;

const SNAPSHOT_FILE: &str = "root.json";

/// Errors that can occur when reading or writing the snapshot.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to access snapshot '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode snapshot '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Writes and restores the whitelisted state snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Snapshot location under the platform data directory
    /// (`<data dir>/pixgrid/root.json`).
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("pixgrid").join(SNAPSHOT_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, or `None` when no snapshot exists yet.
    pub fn load(&self) -> Result<Option<GalleryState>, PersistError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| PersistError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        let state = serde_json::from_str(&content).map_err(|e| PersistError::Decode {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(Some(state))
    }

    /// Replace the snapshot atomically.
    ///
    /// Writes are best-effort: no fsync, so a snapshot written just
    /// before process termination may be lost. The on-disk file is
    /// always either the old or the new snapshot, never a torn write.
    pub fn save(&self, state: &GalleryState) -> Result<(), PersistError> {
        let io_err = |source| PersistError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let encoded = serde_json::to_vec(state).map_err(PersistError::Encode)?;

        // Advisory lock held for the duration of the replace; released
        // when the handle drops.
        let lock_path = self.path.with_extension("json.lock");
        let lock = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(io_err)?;
        lock.lock_exclusive().map_err(io_err)?;

        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp = File::create(&tmp_path).map_err(io_err)?;
        tmp.write_all(&encoded).map_err(io_err)?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path).map_err(io_err)?;
        Ok(())
    }
}
