pub mod blocked;
pub mod config;
pub mod data;
pub mod habit;
pub mod plan;
pub mod project;
pub mod todo;

use chrono::{Local, NaiveDate};
use dayplan_core::{Config, PlannerState, StateStore};

/// Load the current state, seeding from the TOML defaults when no
/// snapshot exists yet.
pub fn load_state() -> Result<PlannerState, Box<dyn std::error::Error>> {
    let store = StateStore::open()?;
    match store.load()? {
        Some(state) => Ok(state),
        None => Ok(Config::load_or_default().initial_state()),
    }
}

/// Persist the state snapshot.
pub fn save_state(state: &PlannerState) -> Result<(), Box<dyn std::error::Error>> {
    StateStore::open()?.save(state)?;
    Ok(())
}

/// The date to plan for: an explicit override, or today.
pub fn plan_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
