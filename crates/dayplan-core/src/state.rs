//! The single process-wide planning state and its transitions.
//!
//! All entity collections plus planner configuration live in one owned
//! [`PlannerState`] value. Every mutation is an explicit transition that
//! consumes the current state and returns the next one; the host owns the
//! single current value and applies transitions sequentially. A fallible
//! transition that returns `Err` produced no new state, and the caller
//! falls back to its persisted snapshot.
//!
//! Ids are assigned from a monotonic counter owned by the state, never
//! from the wall clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::blocked::{BlockedInterval, BlockedTimeIndex};
use crate::clock::TimeOfDay;
use crate::error::ValidationError;
use crate::model::{CompletedProject, Habit, Project, Todo, TodoStatus};
use crate::plan::{build_candidates, generate_plan, PlanConfig, ScheduledItem, SourceKind};

/// Daily start/end bounds within which items may be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Default for PlanningWindow {
    fn default() -> Self {
        Self {
            start: TimeOfDay::from_minutes(8 * 60),
            end: TimeOfDay::from_minutes(18 * 60),
        }
    }
}

/// The whole planning state: entities, config, and the id counter.
///
/// Serializes to the persisted snapshot shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerState {
    pub habits: Vec<Habit>,
    pub projects: Vec<Project>,
    pub todos: Vec<Todo>,
    pub completed_projects: Vec<CompletedProject>,
    /// Scheduled-item ids marked done today; only used to suppress
    /// re-offering a Done action.
    pub today_completed: Vec<String>,
    /// Transition buffer between scheduled items, in minutes.
    pub transition_time: u32,
    pub planning_window: PlanningWindow,
    pub blocked_times: Vec<BlockedInterval>,
    /// Next entity id to hand out.
    pub next_id: u64,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            habits: Vec::new(),
            projects: Vec::new(),
            todos: Vec::new(),
            completed_projects: Vec::new(),
            today_completed: Vec::new(),
            transition_time: 15,
            planning_window: PlanningWindow::default(),
            blocked_times: Vec::new(),
            next_id: 1,
        }
    }
}

/// Fields for a habit being created; counters start at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub name: String,
    pub duration_minutes: u32,
    pub frequency_per_week: u32,
    pub priority: u8,
}

/// Fields for a project being created; may carry imported progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub total_hours_needed: f64,
    #[serde(default)]
    pub hours_completed: f64,
    pub priority: u8,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Fields for a todo being created; status starts pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub name: String,
    pub time_estimate_minutes: u32,
    pub priority: u8,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Fields for a blocked interval being created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlockedTime {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub label: String,
}

/// One validated field change on a habit.
#[derive(Debug, Clone)]
pub enum HabitUpdate {
    Name(String),
    DurationMinutes(u32),
    FrequencyPerWeek(u32),
    Priority(u8),
}

/// One validated field change on a project.
#[derive(Debug, Clone)]
pub enum ProjectUpdate {
    Name(String),
    TotalHoursNeeded(f64),
    HoursCompleted(f64),
    Priority(u8),
    StartDate(Option<NaiveDate>),
    DueDate(Option<NaiveDate>),
}

/// One validated field change on a todo.
#[derive(Debug, Clone)]
pub enum TodoUpdate {
    Name(String),
    TimeEstimateMinutes(u32),
    Priority(u8),
    DueDate(Option<NaiveDate>),
}

impl PlannerState {
    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // --- lookups -----------------------------------------------------

    pub fn habit(&self, id: u64) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn project(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn todo(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    // --- creation ----------------------------------------------------

    pub fn add_habit(mut self, new: NewHabit) -> Result<Self, ValidationError> {
        let habit = Habit {
            id: 0,
            name: new.name,
            duration_minutes: new.duration_minutes,
            frequency_per_week: new.frequency_per_week,
            priority: new.priority,
            weekly_completed: 0,
            total_hours_logged: 0.0,
        };
        habit.validate()?;
        let habit = Habit {
            id: self.allocate_id(),
            ..habit
        };
        self.habits.push(habit);
        Ok(self)
    }

    pub fn add_project(mut self, new: NewProject) -> Result<Self, ValidationError> {
        let project = Project {
            id: 0,
            name: new.name,
            total_hours_needed: new.total_hours_needed,
            hours_completed: new.hours_completed,
            priority: new.priority,
            start_date: new.start_date,
            due_date: new.due_date,
        };
        project.validate()?;
        let project = Project {
            id: self.allocate_id(),
            ..project
        };
        self.projects.push(project);
        Ok(self)
    }

    pub fn add_todo(mut self, new: NewTodo) -> Result<Self, ValidationError> {
        let todo = Todo {
            id: 0,
            name: new.name,
            time_estimate_minutes: new.time_estimate_minutes,
            priority: new.priority,
            due_date: new.due_date,
            status: TodoStatus::Pending,
        };
        todo.validate()?;
        let todo = Todo {
            id: self.allocate_id(),
            ..todo
        };
        self.todos.push(todo);
        Ok(self)
    }

    pub fn add_blocked_time(mut self, new: NewBlockedTime) -> Self {
        let id = self.allocate_id();
        self.blocked_times.push(BlockedInterval {
            id,
            start: new.start,
            end: new.end,
            label: new.label,
        });
        self
    }

    // --- updates -----------------------------------------------------

    /// Apply one field change to a habit. An unknown id is a no-op; an
    /// invariant violation rejects the transition.
    pub fn update_habit(mut self, id: u64, update: HabitUpdate) -> Result<Self, ValidationError> {
        if let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) {
            match update {
                HabitUpdate::Name(name) => habit.name = name,
                HabitUpdate::DurationMinutes(minutes) => habit.duration_minutes = minutes,
                HabitUpdate::FrequencyPerWeek(frequency) => habit.frequency_per_week = frequency,
                HabitUpdate::Priority(priority) => habit.priority = priority,
            }
            habit.validate()?;
        }
        Ok(self)
    }

    pub fn update_project(
        mut self,
        id: u64,
        update: ProjectUpdate,
    ) -> Result<Self, ValidationError> {
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == id) {
            match update {
                ProjectUpdate::Name(name) => project.name = name,
                ProjectUpdate::TotalHoursNeeded(hours) => project.total_hours_needed = hours,
                ProjectUpdate::HoursCompleted(hours) => project.hours_completed = hours,
                ProjectUpdate::Priority(priority) => project.priority = priority,
                ProjectUpdate::StartDate(date) => project.start_date = date,
                ProjectUpdate::DueDate(date) => project.due_date = date,
            }
            project.validate()?;
        }
        Ok(self)
    }

    pub fn update_todo(mut self, id: u64, update: TodoUpdate) -> Result<Self, ValidationError> {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            match update {
                TodoUpdate::Name(name) => todo.name = name,
                TodoUpdate::TimeEstimateMinutes(minutes) => todo.time_estimate_minutes = minutes,
                TodoUpdate::Priority(priority) => todo.priority = priority,
                TodoUpdate::DueDate(date) => todo.due_date = date,
            }
            todo.validate()?;
        }
        Ok(self)
    }

    // --- deletion ----------------------------------------------------

    pub fn delete_habit(mut self, id: u64) -> Self {
        self.habits.retain(|h| h.id != id);
        self
    }

    pub fn delete_project(mut self, id: u64) -> Self {
        self.projects.retain(|p| p.id != id);
        self
    }

    pub fn delete_todo(mut self, id: u64) -> Self {
        self.todos.retain(|t| t.id != id);
        self
    }

    pub fn delete_blocked_time(mut self, id: u64) -> Self {
        self.blocked_times.retain(|b| b.id != id);
        self
    }

    // --- config ------------------------------------------------------

    pub fn set_transition_time(mut self, minutes: u32) -> Self {
        self.transition_time = minutes;
        self
    }

    pub fn set_planning_window(mut self, window: PlanningWindow) -> Self {
        self.planning_window = window;
        self
    }

    // --- completion --------------------------------------------------

    /// Archive a project as completed on `date` and remove it from the
    /// active set. An unknown id is a no-op.
    pub fn complete_project(mut self, id: u64, date: NaiveDate) -> Self {
        if let Some(index) = self.projects.iter().position(|p| p.id == id) {
            let project = self.projects.remove(index);
            self.completed_projects.push(CompletedProject {
                project,
                completion_date: date,
            });
        }
        self
    }

    /// Record a scheduled item as done, applying its effect back onto the
    /// owning entity.
    ///
    /// Habit sessions bump `weekly_completed` and log hours; project
    /// sessions log hours; todo sessions flip the status. A source id that
    /// no longer exists is silently ignored, but the item id still joins
    /// the completed-today set.
    pub fn record_completion(mut self, item: &ScheduledItem) -> Self {
        if !self.today_completed.contains(&item.item.id) {
            self.today_completed.push(item.item.id.clone());
        }

        let hours = f64::from(item.item.duration_minutes) / 60.0;
        match item.item.source {
            SourceKind::Habit => {
                if let Some(habit) = self.habits.iter_mut().find(|h| h.id == item.item.source_id) {
                    habit.weekly_completed += 1;
                    habit.total_hours_logged += hours;
                }
            }
            SourceKind::Project => {
                if let Some(project) =
                    self.projects.iter_mut().find(|p| p.id == item.item.source_id)
                {
                    project.hours_completed += hours;
                }
            }
            SourceKind::Todo => {
                if let Some(todo) = self.todos.iter_mut().find(|t| t.id == item.item.source_id) {
                    todo.status = TodoStatus::Completed;
                }
            }
        }

        self
    }

    /// Zero every habit's weekly counter. Never invoked automatically;
    /// week rollover is the caller's decision.
    pub fn reset_week(mut self) -> Self {
        for habit in &mut self.habits {
            habit.weekly_completed = 0;
        }
        self
    }

    /// Drop everything and return to the defaults.
    pub fn clear(self) -> Self {
        Self::default()
    }

    // --- the plan ----------------------------------------------------

    /// Generate today's plan. Pure: identical state and `days_left` yield
    /// an identical plan, so callers recompute on every observation.
    pub fn daily_plan(&self, days_left: u32) -> Vec<ScheduledItem> {
        let candidates = build_candidates(&self.habits, days_left);
        let config = PlanConfig {
            window_start: self.planning_window.start,
            window_end: self.planning_window.end,
            transition_minutes: self.transition_time,
        };
        generate_plan(&candidates, &config, &BlockedTimeIndex::new(&self.blocked_times))
    }

    /// Find a scheduled item in today's plan by its synthetic id.
    pub fn find_scheduled(&self, days_left: u32, scheduled_id: &str) -> Option<ScheduledItem> {
        self.daily_plan(days_left)
            .into_iter()
            .find(|s| s.item.id == scheduled_id)
    }
}
