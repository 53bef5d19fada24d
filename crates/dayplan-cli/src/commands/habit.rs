//! Habit management commands for CLI.

use clap::Subcommand;
use dayplan_core::{HabitUpdate, NewHabit};

use super::{load_state, save_state};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,
        /// Session duration in minutes
        #[arg(long, default_value = "60")]
        duration: u32,
        /// Sessions per week
        #[arg(long, default_value = "7")]
        frequency: u32,
        /// Priority 1 (most urgent) to 4
        #[arg(long, default_value = "1")]
        priority: u8,
    },
    /// List habits
    List,
    /// Update a habit
    Update {
        /// Habit id
        id: u64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New session duration in minutes
        #[arg(long)]
        duration: Option<u32>,
        /// New sessions per week
        #[arg(long)]
        frequency: Option<u32>,
        /// New priority
        #[arg(long)]
        priority: Option<u8>,
    },
    /// Delete a habit
    Delete {
        /// Habit id
        id: u64,
    },
    /// Zero every habit's weekly counter (manual week rollover)
    ResetWeek,
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HabitAction::Add {
            name,
            duration,
            frequency,
            priority,
        } => {
            let state = load_state()?.add_habit(NewHabit {
                name,
                duration_minutes: duration,
                frequency_per_week: frequency,
                priority,
            })?;
            save_state(&state)?;
            let habit = state.habits.last().ok_or("habit was not added")?;
            println!("Habit created: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(habit)?);
        }
        HabitAction::List => {
            let state = load_state()?;
            println!("{}", serde_json::to_string_pretty(&state.habits)?);
        }
        HabitAction::Update {
            id,
            name,
            duration,
            frequency,
            priority,
        } => {
            let mut state = load_state()?;
            if state.habit(id).is_none() {
                println!("Habit not found: {id}");
                return Ok(());
            }

            let mut updates = Vec::new();
            if let Some(n) = name {
                updates.push(HabitUpdate::Name(n));
            }
            if let Some(d) = duration {
                updates.push(HabitUpdate::DurationMinutes(d));
            }
            if let Some(f) = frequency {
                updates.push(HabitUpdate::FrequencyPerWeek(f));
            }
            if let Some(p) = priority {
                updates.push(HabitUpdate::Priority(p));
            }
            for update in updates {
                state = state.update_habit(id, update)?;
            }

            save_state(&state)?;
            println!("Habit updated:");
            let habit = state.habit(id).ok_or("habit disappeared during update")?;
            println!("{}", serde_json::to_string_pretty(habit)?);
        }
        HabitAction::Delete { id } => {
            let state = load_state()?.delete_habit(id);
            save_state(&state)?;
            println!("Habit deleted: {id}");
        }
        HabitAction::ResetWeek => {
            let state = load_state()?.reset_week();
            save_state(&state)?;
            println!("Weekly counters reset for {} habits", state.habits.len());
        }
    }
    Ok(())
}
