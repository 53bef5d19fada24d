//! Daily plan commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use dayplan_core::days_left_in_week;

use super::{load_state, plan_date, save_state};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Generate and print today's plan
    Show {
        /// Plan for this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a scheduled item as done
    Done {
        /// Scheduled item id, e.g. habit-3-0
        id: String,
        /// Resolve the plan for this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Show { date, json } => {
            let state = load_state()?;
            let days_left = days_left_in_week(plan_date(date));
            let plan = state.daily_plan(days_left);

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
                return Ok(());
            }

            if plan.is_empty() {
                println!("Nothing to schedule today.");
                return Ok(());
            }
            for scheduled in &plan {
                let done = if state.today_completed.contains(&scheduled.item.id) {
                    " (done)"
                } else {
                    ""
                };
                println!(
                    "{}-{}  {}  [{} p{}]  {}{}",
                    scheduled.start_time,
                    scheduled.end_time,
                    scheduled.item.name,
                    scheduled.item.urgency.as_str(),
                    scheduled.item.priority,
                    scheduled.item.id,
                    done,
                );
            }
        }
        PlanAction::Done { id, date } => {
            let state = load_state()?;
            let days_left = days_left_in_week(plan_date(date));
            match state.find_scheduled(days_left, &id) {
                Some(item) => {
                    let state = state.record_completion(&item);
                    save_state(&state)?;
                    println!("Completed: {} ({})", item.item.name, id);
                }
                None => {
                    println!("Item not in today's plan: {id}");
                }
            }
        }
    }
    Ok(())
}
