//! Bulk import and full-snapshot export/restore.
//!
//! Two boundary flows feed the planner from outside:
//! - A bulk payload of id-less records (the AI-interview / paste path).
//!   Merging is atomic all-or-nothing: the whole payload is validated
//!   before anything is added, ids are assigned by the state, and habit
//!   counters start at zero regardless of what the payload claims.
//! - A full snapshot (backup file). Restoring replaces each top-level key
//!   that is present and keeps ids, bumping the id counter past them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::blocked::BlockedInterval;
use crate::error::ImportError;
use crate::model::{CompletedProject, Habit, Project, Todo, TodoStatus};
use crate::state::{NewHabit, NewProject, NewTodo, PlannerState, PlanningWindow};

/// A bulk-import payload: any subset of the three entity kinds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportPayload {
    #[serde(default)]
    pub todos: Vec<NewTodo>,
    #[serde(default)]
    pub projects: Vec<NewProject>,
    #[serde(default)]
    pub habits: Vec<NewHabit>,
}

impl ImportPayload {
    /// Parse a payload from text, tolerating Markdown code fences around
    /// the JSON (the paste path hands over raw LLM output).
    pub fn parse(text: &str) -> Result<Self, ImportError> {
        let stripped = text
            .trim()
            .trim_start_matches("```json")
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim();
        serde_json::from_str(stripped).map_err(|e| ImportError::Parse(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty() && self.projects.is_empty() && self.habits.is_empty()
    }
}

/// The full backup shape: the persisted state minus today's bookkeeping,
/// stamped with an export date and format version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub habits: Option<Vec<Habit>>,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    #[serde(default)]
    pub todos: Option<Vec<Todo>>,
    #[serde(default)]
    pub completed_projects: Option<Vec<CompletedProject>>,
    #[serde(default)]
    pub transition_time: Option<u32>,
    #[serde(default)]
    pub planning_window: Option<PlanningWindow>,
    #[serde(default)]
    pub blocked_times: Option<Vec<BlockedInterval>>,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: Option<String>,
}

pub const SNAPSHOT_VERSION: &str = "1.0";

impl PlannerState {
    /// Merge a bulk payload, assigning fresh ids and zeroed counters.
    ///
    /// Atomic: one invalid record anywhere rejects the whole batch and
    /// nothing is merged.
    pub fn merge_import(self, payload: ImportPayload) -> Result<Self, ImportError> {
        fn record_error(
            kind: &'static str,
            index: usize,
        ) -> impl FnOnce(crate::error::ValidationError) -> ImportError {
            move |source| ImportError::InvalidRecord { kind, index, source }
        }

        // Validate the whole batch before touching state.
        for (index, todo) in payload.todos.iter().enumerate() {
            staged_todo(todo).validate().map_err(record_error("todo", index))?;
        }
        for (index, project) in payload.projects.iter().enumerate() {
            staged_project(project)
                .validate()
                .map_err(record_error("project", index))?;
        }
        for (index, habit) in payload.habits.iter().enumerate() {
            staged_habit(habit)
                .validate()
                .map_err(record_error("habit", index))?;
        }

        let mut state = self;
        for (index, todo) in payload.todos.into_iter().enumerate() {
            state = state.add_todo(todo).map_err(record_error("todo", index))?;
        }
        for (index, project) in payload.projects.into_iter().enumerate() {
            state = state
                .add_project(project)
                .map_err(record_error("project", index))?;
        }
        for (index, habit) in payload.habits.into_iter().enumerate() {
            state = state.add_habit(habit).map_err(record_error("habit", index))?;
        }
        Ok(state)
    }

    /// Produce a full backup snapshot.
    pub fn export(&self, now: DateTime<Utc>) -> Snapshot {
        Snapshot {
            habits: Some(self.habits.clone()),
            projects: Some(self.projects.clone()),
            todos: Some(self.todos.clone()),
            completed_projects: Some(self.completed_projects.clone()),
            transition_time: Some(self.transition_time),
            planning_window: Some(self.planning_window),
            blocked_times: Some(self.blocked_times.clone()),
            export_date: Some(now),
            version: Some(SNAPSHOT_VERSION.to_string()),
        }
    }

    /// Restore from a snapshot, replacing each key that is present and
    /// leaving absent keys untouched. Snapshot ids are kept; the id
    /// counter is bumped past the largest one seen.
    pub fn restore(mut self, snapshot: Snapshot) -> Self {
        if let Some(habits) = snapshot.habits {
            self.habits = habits;
        }
        if let Some(projects) = snapshot.projects {
            self.projects = projects;
        }
        if let Some(todos) = snapshot.todos {
            self.todos = todos;
        }
        if let Some(completed) = snapshot.completed_projects {
            self.completed_projects = completed;
        }
        if let Some(transition) = snapshot.transition_time {
            self.transition_time = transition;
        }
        if let Some(window) = snapshot.planning_window {
            self.planning_window = window;
        }
        if let Some(blocked) = snapshot.blocked_times {
            self.blocked_times = blocked;
        }

        let max_id = self
            .habits
            .iter()
            .map(|h| h.id)
            .chain(self.projects.iter().map(|p| p.id))
            .chain(self.todos.iter().map(|t| t.id))
            .chain(self.completed_projects.iter().map(|c| c.project.id))
            .chain(self.blocked_times.iter().map(|b| b.id))
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);

        self
    }
}

// Staged entities carry a placeholder id purely for validation.

fn staged_todo(new: &NewTodo) -> Todo {
    Todo {
        id: 0,
        name: new.name.clone(),
        time_estimate_minutes: new.time_estimate_minutes,
        priority: new.priority,
        due_date: new.due_date,
        status: TodoStatus::Pending,
    }
}

fn staged_project(new: &NewProject) -> Project {
    Project {
        id: 0,
        name: new.name.clone(),
        total_hours_needed: new.total_hours_needed,
        hours_completed: new.hours_completed,
        priority: new.priority,
        start_date: new.start_date,
        due_date: new.due_date,
    }
}

fn staged_habit(new: &NewHabit) -> Habit {
    Habit {
        id: 0,
        name: new.name.clone(),
        duration_minutes: new.duration_minutes,
        frequency_per_week: new.frequency_per_week,
        priority: new.priority,
        weekly_completed: 0,
        total_hours_logged: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn merge_single_habit_into_empty_state() {
        let payload = ImportPayload::parse(
            r#"{"habits":[{"name":"Read","durationMinutes":30,"frequencyPerWeek":5,"priority":2}]}"#,
        )
        .unwrap();

        let state = PlannerState::default().merge_import(payload).unwrap();
        assert_eq!(state.habits.len(), 1);

        let habit = &state.habits[0];
        assert_eq!(habit.name, "Read");
        assert_eq!(habit.weekly_completed, 0);
        assert_eq!(habit.total_hours_logged, 0.0);
        assert_eq!(habit.id, 1);
        assert_eq!(state.next_id, 2);
    }

    #[test]
    fn parse_strips_markdown_fences() {
        let text = indoc! {r#"
            ```json
            {"todos":[{"name":"Call bank","timeEstimateMinutes":15,"priority":2}]}
            ```
        "#};
        let payload = ImportPayload::parse(text).unwrap();
        assert_eq!(payload.todos.len(), 1);
        assert_eq!(payload.todos[0].name, "Call bank");
    }

    #[test]
    fn parse_rejects_non_json() {
        assert!(ImportPayload::parse("sure, here's your plan!").is_err());
    }

    #[test]
    fn merge_import_rejects_whole_batch_on_one_bad_record() {
        // Valid todos alongside one invalid habit: nothing merges.
        let payload = ImportPayload::parse(indoc! {r#"
            {
              "todos": [{"name": "Call bank", "timeEstimateMinutes": 15, "priority": 2}],
              "habits": [{"name": "Read", "durationMinutes": 30, "frequencyPerWeek": 0, "priority": 2}]
            }
        "#})
        .unwrap();

        let before = PlannerState::default();
        let result = before.clone().merge_import(payload);
        assert!(matches!(
            result,
            Err(ImportError::InvalidRecord { kind: "habit", index: 0, .. })
        ));
        // The transition produced no new state; the caller keeps `before`.
        assert!(before.todos.is_empty());
    }

    #[test]
    fn export_restore_round_trip() {
        let state = PlannerState::default()
            .add_habit(NewHabit {
                name: "Read".to_string(),
                duration_minutes: 30,
                frequency_per_week: 5,
                priority: 2,
            })
            .unwrap()
            .set_transition_time(20);

        let now = Utc::now();
        let snapshot = state.export(now);
        assert_eq!(snapshot.version.as_deref(), Some(SNAPSHOT_VERSION));
        assert_eq!(snapshot.export_date, Some(now));

        let restored = PlannerState::default().restore(snapshot);
        assert_eq!(restored.habits, state.habits);
        assert_eq!(restored.transition_time, 20);
        // Counter lands past the restored ids
        assert_eq!(restored.next_id, 2);
    }

    #[test]
    fn restore_leaves_absent_keys_untouched() {
        let state = PlannerState::default()
            .add_todo(NewTodo {
                name: "Taxes".to_string(),
                time_estimate_minutes: 45,
                priority: 1,
                due_date: None,
            })
            .unwrap();

        let snapshot: Snapshot =
            serde_json::from_str(r#"{"transitionTime": 5}"#).unwrap();
        let restored = state.clone().restore(snapshot);

        assert_eq!(restored.transition_time, 5);
        assert_eq!(restored.todos, state.todos);
    }
}
