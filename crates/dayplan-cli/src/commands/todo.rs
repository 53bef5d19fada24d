//! Todo management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use dayplan_core::{NewTodo, TodoStatus, TodoUpdate};

use super::{load_state, save_state};

#[derive(Subcommand)]
pub enum TodoAction {
    /// Create a new todo
    Add {
        /// Todo name
        name: String,
        /// Time estimate in minutes
        #[arg(long, default_value = "30")]
        estimate: u32,
        /// Priority 1 (most urgent) to 4
        #[arg(long, default_value = "1")]
        priority: u8,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<NaiveDate>,
    },
    /// List todos
    List {
        /// Only pending todos
        #[arg(long)]
        pending: bool,
    },
    /// Update a todo
    Update {
        /// Todo id
        id: u64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New time estimate in minutes
        #[arg(long)]
        estimate: Option<u32>,
        /// New priority
        #[arg(long)]
        priority: Option<u8>,
        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<NaiveDate>,
    },
    /// Delete a todo
    Delete {
        /// Todo id
        id: u64,
    },
}

pub fn run(action: TodoAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TodoAction::Add {
            name,
            estimate,
            priority,
            due_date,
        } => {
            let state = load_state()?.add_todo(NewTodo {
                name,
                time_estimate_minutes: estimate,
                priority,
                due_date,
            })?;
            save_state(&state)?;
            let todo = state.todos.last().ok_or("todo was not added")?;
            println!("Todo created: {}", todo.id);
            println!("{}", serde_json::to_string_pretty(todo)?);
        }
        TodoAction::List { pending } => {
            let state = load_state()?;
            let todos: Vec<_> = state
                .todos
                .iter()
                .filter(|t| !pending || t.status == TodoStatus::Pending)
                .collect();
            println!("{}", serde_json::to_string_pretty(&todos)?);
        }
        TodoAction::Update {
            id,
            name,
            estimate,
            priority,
            due_date,
        } => {
            let mut state = load_state()?;
            if state.todo(id).is_none() {
                println!("Todo not found: {id}");
                return Ok(());
            }

            let mut updates = Vec::new();
            if let Some(n) = name {
                updates.push(TodoUpdate::Name(n));
            }
            if let Some(e) = estimate {
                updates.push(TodoUpdate::TimeEstimateMinutes(e));
            }
            if let Some(p) = priority {
                updates.push(TodoUpdate::Priority(p));
            }
            if let Some(d) = due_date {
                updates.push(TodoUpdate::DueDate(Some(d)));
            }
            for update in updates {
                state = state.update_todo(id, update)?;
            }

            save_state(&state)?;
            println!("Todo updated:");
            let todo = state.todo(id).ok_or("todo disappeared during update")?;
            println!("{}", serde_json::to_string_pretty(todo)?);
        }
        TodoAction::Delete { id } => {
            let state = load_state()?.delete_todo(id);
            save_state(&state)?;
            println!("Todo deleted: {id}");
        }
    }
    Ok(())
}
