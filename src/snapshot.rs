//! Snapshot bridge: persists the root state across process boundaries.
//!
//! `restore` runs once at process start (absence of a snapshot means
//! "use the default initial state"); `persist` runs at process
//! suspension. The persisted form round-trips the full `RootState`,
//! including nested screen states, the backstack and counters.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::root::RootState;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode snapshot '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode snapshot: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write snapshot '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait SnapshotBridge {
    /// Load the persisted state, if any exists.
    fn restore(&self) -> Result<Option<RootState>, SnapshotError>;

    /// Persist the given state, replacing any previous snapshot.
    fn persist(&self, state: &RootState) -> Result<(), SnapshotError>;
}

/// Bridge storing the snapshot as a JSON file.
pub struct FileSnapshotBridge {
    path: PathBuf,
}

impl FileSnapshotBridge {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotBridge for FileSnapshotBridge {
    fn restore(&self) -> Result<Option<RootState>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| SnapshotError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        let state = serde_json::from_str(&content).map_err(|e| SnapshotError::Decode {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Some(state))
    }

    fn persist(&self, state: &RootState) -> Result<(), SnapshotError> {
        let content =
            serde_json::to_string(state).map_err(|e| SnapshotError::Encode { source: e })?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        fs::write(&self.path, content).map_err(|e| SnapshotError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
