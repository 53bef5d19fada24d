//! The daily plan engine.
//!
//! This module turns pending habits into placeable candidates and greedily
//! places them into the day's planning window:
//! - Candidate expansion from weekly quotas
//! - Stable urgency/priority ordering
//! - First-fit placement with blocked-time avoidance and transition buffers
//!
//! The whole pipeline is a pure function of its inputs; callers recompute
//! the plan on every observation rather than caching it.

mod candidate;
mod scheduler;

pub use candidate::{build_candidates, PlanItem, SourceKind};
pub use scheduler::{generate_plan, PlanConfig, ScheduledItem, PROBE_STEP_MINUTES};
