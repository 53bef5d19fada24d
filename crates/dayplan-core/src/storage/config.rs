//! TOML-based planner defaults.
//!
//! These are not the live planner settings (those travel with the state
//! snapshot); they only seed a fresh state the first time the planner runs.
//!
//! Stored at `~/.config/dayplan/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::clock::TimeOfDay;
use crate::error::{Result, StorageError};
use crate::state::{PlannerState, PlanningWindow};

/// Planner defaults, applied when no state file exists yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Start of the default planning window (HH:MM).
    #[serde(default = "default_window_start")]
    pub window_start: TimeOfDay,
    /// End of the default planning window (HH:MM).
    #[serde(default = "default_window_end")]
    pub window_end: TimeOfDay,
    /// Default transition buffer between items, in minutes.
    #[serde(default = "default_transition_minutes")]
    pub transition_minutes: u32,
}

fn default_window_start() -> TimeOfDay {
    TimeOfDay::from_minutes(8 * 60)
}
fn default_window_end() -> TimeOfDay {
    TimeOfDay::from_minutes(18 * 60)
}
fn default_transition_minutes() -> u32 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_start: default_window_start(),
            window_end: default_window_end(),
            transition_minutes: default_transition_minutes(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk; a missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path).map_err(|e| StorageError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&text).map_err(|e| StorageError::LoadFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let text = toml::to_string_pretty(self).map_err(|e| StorageError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, text).map_err(|e| StorageError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Seed a fresh planner state from these defaults.
    pub fn initial_state(&self) -> PlannerState {
        PlannerState::default()
            .set_transition_time(self.transition_minutes)
            .set_planning_window(PlanningWindow {
                start: self.window_start,
                end: self.window_end,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.window_start.to_string(), "08:00");
        assert_eq!(parsed.window_end.to_string(), "18:00");
        assert_eq!(parsed.transition_minutes, 15);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("transition_minutes = 5\n").unwrap();
        assert_eq!(parsed.transition_minutes, 5);
        assert_eq!(parsed.window_start.to_string(), "08:00");
    }

    #[test]
    fn initial_state_applies_defaults() {
        let cfg: Config = toml::from_str(
            "window_start = \"07:30\"\nwindow_end = \"22:00\"\ntransition_minutes = 10\n",
        )
        .unwrap();
        let state = cfg.initial_state();
        assert_eq!(state.transition_time, 10);
        assert_eq!(state.planning_window.start.to_string(), "07:30");
        assert_eq!(state.planning_window.end.to_string(), "22:00");
        assert!(state.habits.is_empty());
    }
}
