//! Project management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use dayplan_core::{NewProject, ProjectUpdate};

use super::{load_state, plan_date, save_state};

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a new project
    Add {
        /// Project name
        name: String,
        /// Total hours the project needs
        #[arg(long)]
        total_hours: f64,
        /// Hours already completed (imported progress)
        #[arg(long, default_value = "0")]
        hours_completed: f64,
        /// Priority 1 (most urgent) to 4
        #[arg(long, default_value = "1")]
        priority: u8,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<NaiveDate>,
    },
    /// List active projects
    List {
        /// Include the completed archive
        #[arg(long)]
        archived: bool,
    },
    /// Update a project
    Update {
        /// Project id
        id: u64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New total hours needed
        #[arg(long)]
        total_hours: Option<f64>,
        /// Set hours completed
        #[arg(long)]
        hours_completed: Option<f64>,
        /// New priority
        #[arg(long)]
        priority: Option<u8>,
        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<NaiveDate>,
    },
    /// Delete a project
    Delete {
        /// Project id
        id: u64,
    },
    /// Archive a project as completed
    Complete {
        /// Project id
        id: u64,
        /// Completion date, defaulting to today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: ProjectAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProjectAction::Add {
            name,
            total_hours,
            hours_completed,
            priority,
            start_date,
            due_date,
        } => {
            let state = load_state()?.add_project(NewProject {
                name,
                total_hours_needed: total_hours,
                hours_completed,
                priority,
                start_date,
                due_date,
            })?;
            save_state(&state)?;
            let project = state.projects.last().ok_or("project was not added")?;
            println!("Project created: {}", project.id);
            println!("{}", serde_json::to_string_pretty(project)?);
        }
        ProjectAction::List { archived } => {
            let state = load_state()?;
            if archived {
                println!("{}", serde_json::to_string_pretty(&state.completed_projects)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&state.projects)?);
            }
        }
        ProjectAction::Update {
            id,
            name,
            total_hours,
            hours_completed,
            priority,
            due_date,
        } => {
            let mut state = load_state()?;
            if state.project(id).is_none() {
                println!("Project not found: {id}");
                return Ok(());
            }

            let mut updates = Vec::new();
            if let Some(n) = name {
                updates.push(ProjectUpdate::Name(n));
            }
            if let Some(h) = total_hours {
                updates.push(ProjectUpdate::TotalHoursNeeded(h));
            }
            if let Some(h) = hours_completed {
                updates.push(ProjectUpdate::HoursCompleted(h));
            }
            if let Some(p) = priority {
                updates.push(ProjectUpdate::Priority(p));
            }
            if let Some(d) = due_date {
                updates.push(ProjectUpdate::DueDate(Some(d)));
            }
            for update in updates {
                state = state.update_project(id, update)?;
            }

            save_state(&state)?;
            println!("Project updated:");
            let project = state.project(id).ok_or("project disappeared during update")?;
            println!("{}", serde_json::to_string_pretty(project)?);
        }
        ProjectAction::Delete { id } => {
            let state = load_state()?.delete_project(id);
            save_state(&state)?;
            println!("Project deleted: {id}");
        }
        ProjectAction::Complete { id, date } => {
            let state = load_state()?;
            if state.project(id).is_none() {
                println!("Project not found: {id}");
                return Ok(());
            }
            let state = state.complete_project(id, plan_date(date));
            save_state(&state)?;
            println!("Project archived: {id}");
        }
    }
    Ok(())
}
