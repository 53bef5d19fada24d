//! Planner configuration commands for CLI.
//!
//! The live window and transition buffer travel with the state snapshot;
//! the TOML defaults only seed a fresh state.

use clap::Subcommand;
use dayplan_core::{Config, PlanningWindow, TimeOfDay};

use super::{load_state, save_state};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the live planner settings
    Show,
    /// Set the daily planning window
    SetWindow {
        /// Window start (HH:MM)
        start: TimeOfDay,
        /// Window end (HH:MM); at or before start crosses midnight
        end: TimeOfDay,
    },
    /// Set the transition buffer between items
    SetTransition {
        /// Buffer in minutes
        minutes: u32,
    },
    /// Show the TOML defaults used to seed a fresh state
    Defaults,
    /// Save the live settings as the TOML defaults
    SaveDefaults,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let state = load_state()?;
            println!(
                "Planning window: {}-{}",
                state.planning_window.start, state.planning_window.end
            );
            println!("Transition buffer: {} min", state.transition_time);
        }
        ConfigAction::SetWindow { start, end } => {
            let state = load_state()?.set_planning_window(PlanningWindow { start, end });
            save_state(&state)?;
            println!("Planning window set to {start}-{end}");
        }
        ConfigAction::SetTransition { minutes } => {
            let state = load_state()?.set_transition_time(minutes);
            save_state(&state)?;
            println!("Transition buffer set to {minutes} min");
        }
        ConfigAction::Defaults => {
            let config = Config::load_or_default();
            println!(
                "Default window: {}-{}",
                config.window_start, config.window_end
            );
            println!("Default transition buffer: {} min", config.transition_minutes);
        }
        ConfigAction::SaveDefaults => {
            let state = load_state()?;
            let config = Config {
                window_start: state.planning_window.start,
                window_end: state.planning_window.end,
                transition_minutes: state.transition_time,
            };
            config.save()?;
            println!("Defaults saved");
        }
    }
    Ok(())
}
