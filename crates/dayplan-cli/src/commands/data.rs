//! Snapshot export/import and bulk merge commands for CLI.

use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use dayplan_core::{ImportPayload, Snapshot};

use super::{load_state, save_state};

#[derive(Subcommand)]
pub enum DataAction {
    /// Write a full backup snapshot
    Export {
        /// Output file, defaulting to dayplan-backup-<date>.json
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Restore from a backup snapshot, replacing each present key
    Import {
        /// Snapshot file
        file: PathBuf,
    },
    /// Merge a bulk payload of new todos/projects/habits (atomic)
    Merge {
        /// Payload file; JSON, Markdown fences tolerated
        file: PathBuf,
    },
    /// Clear all data and return to defaults
    Clear {
        /// Confirm; without this flag nothing happens
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DataAction::Export { output } => {
            let state = load_state()?;
            let now = Utc::now();
            let snapshot = state.export(now);
            let path = output.unwrap_or_else(|| {
                PathBuf::from(format!("dayplan-backup-{}.json", now.date_naive()))
            });
            std::fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
            println!("Exported to {}", path.display());
        }
        DataAction::Import { file } => {
            let text = std::fs::read_to_string(&file)?;
            let snapshot: Snapshot = serde_json::from_str(&text)?;
            let state = load_state()?.restore(snapshot);
            save_state(&state)?;
            println!(
                "Imported: {} habits, {} projects, {} todos",
                state.habits.len(),
                state.projects.len(),
                state.todos.len()
            );
        }
        DataAction::Merge { file } => {
            let text = std::fs::read_to_string(&file)?;
            let payload = ImportPayload::parse(&text)?;
            if payload.is_empty() {
                println!("Nothing to merge");
                return Ok(());
            }
            let state = load_state()?.merge_import(payload)?;
            save_state(&state)?;
            println!(
                "Merged: now {} habits, {} projects, {} todos",
                state.habits.len(),
                state.projects.len(),
                state.todos.len()
            );
        }
        DataAction::Clear { yes } => {
            if !yes {
                println!("Refusing to clear without --yes");
                return Ok(());
            }
            let state = load_state()?.clear();
            save_state(&state)?;
            println!("All data cleared");
        }
    }
    Ok(())
}
