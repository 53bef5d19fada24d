//! # Dayplan Core Library
//!
//! This library provides the core business logic for the Dayplan daily
//! planner. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI front end being a
//! thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Plan Engine**: A pure, deterministic function from entity state plus
//!   configuration to an ordered daily plan. It is recomputed on every
//!   observation and never cached.
//! - **State**: A single owned value holding every entity collection; all
//!   mutations are explicit transitions `(state, args) -> state'`
//! - **Storage**: JSON state snapshot and TOML-based defaults
//!
//! ## Key Components
//!
//! - [`PlannerState`]: The process-wide planning state and its transitions
//! - [`generate_plan`]: Greedy first-fit placement into the daily window
//! - [`BlockedTimeIndex`]: Blocked-interval queries on the circular clock
//! - [`StateStore`]: State snapshot persistence

pub mod blocked;
pub mod clock;
pub mod error;
pub mod import;
pub mod model;
pub mod plan;
pub mod quota;
pub mod state;
pub mod storage;

pub use blocked::{BlockedInterval, BlockedTimeIndex};
pub use clock::{TimeOfDay, MINUTES_PER_DAY};
pub use error::{CoreError, ImportError, StorageError, ValidationError};
pub use import::{ImportPayload, Snapshot};
pub use model::{CompletedProject, Habit, Project, Todo, TodoStatus};
pub use plan::{generate_plan, build_candidates, PlanConfig, PlanItem, ScheduledItem, SourceKind};
pub use quota::{days_left_in_week, derive_quota, HabitQuota, Urgency};
pub use state::{
    HabitUpdate, NewBlockedTime, NewHabit, NewProject, NewTodo, PlannerState, PlanningWindow,
    ProjectUpdate, TodoUpdate,
};
pub use storage::{Config, StateStore};
