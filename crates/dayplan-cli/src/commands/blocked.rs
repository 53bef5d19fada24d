//! Blocked time management commands for CLI.

use clap::Subcommand;
use dayplan_core::{NewBlockedTime, TimeOfDay};

use super::{load_state, save_state};

#[derive(Subcommand)]
pub enum BlockedAction {
    /// Add a blocked interval; end before start crosses midnight
    Add {
        /// Start time (HH:MM)
        start: TimeOfDay,
        /// End time (HH:MM)
        end: TimeOfDay,
        /// Label, e.g. Lunch
        #[arg(long, default_value = "Blocked")]
        label: String,
    },
    /// List blocked intervals
    List,
    /// Delete a blocked interval
    Delete {
        /// Blocked interval id
        id: u64,
    },
}

pub fn run(action: BlockedAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BlockedAction::Add { start, end, label } => {
            let state = load_state()?.add_blocked_time(NewBlockedTime { start, end, label });
            save_state(&state)?;
            let blocked = state.blocked_times.last().ok_or("interval was not added")?;
            println!("Blocked time created: {}", blocked.id);
            println!("{}", serde_json::to_string_pretty(blocked)?);
        }
        BlockedAction::List => {
            let state = load_state()?;
            println!("{}", serde_json::to_string_pretty(&state.blocked_times)?);
        }
        BlockedAction::Delete { id } => {
            let state = load_state()?.delete_blocked_time(id);
            save_state(&state)?;
            println!("Blocked time deleted: {id}");
        }
    }
    Ok(())
}
