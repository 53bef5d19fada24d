//! JSON state-snapshot persistence.
//!
//! The whole planner state is one pretty-printed JSON document, written
//! via a temp file and rename so a crashed save never truncates the
//! previous snapshot. Single-writer by contract; there is no locking.

use std::path::{Path, PathBuf};

use crate::error::{Result, StorageError};
use crate::state::PlannerState;

use super::data_dir;

/// Load/save access to the persisted planner state.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Open the store at the default location
    /// (`~/.config/dayplan/state.json`).
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join("state.json"),
        })
    }

    /// Open the store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state; `None` when no snapshot exists yet.
    pub fn load(&self) -> Result<Option<PlannerState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path).map_err(|e| StorageError::LoadFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        let state = serde_json::from_str(&text).map_err(|e| StorageError::LoadFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(Some(state))
    }

    /// Persist the state snapshot.
    pub fn save(&self, state: &PlannerState) -> Result<()> {
        let save_err = |message: String| StorageError::SaveFailed {
            path: self.path.clone(),
            message,
        };

        let text = serde_json::to_string_pretty(state).map_err(|e| save_err(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, text).map_err(|e| save_err(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| save_err(e.to_string()))?;
        Ok(())
    }
}
