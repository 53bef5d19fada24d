//! Planner entities: todos, projects, habits.
//!
//! Field names serialize in camelCase to match the persisted snapshot
//! shape (`durationMinutes`, `frequencyPerWeek`, ...). Dates are plain
//! `YYYY-MM-DD` calendar dates; the planner does no timezone reasoning.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn invalid(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

fn check_priority(priority: u8) -> Result<(), ValidationError> {
    if (1..=4).contains(&priority) {
        Ok(())
    } else {
        Err(invalid("priority", format!("{priority} is not in 1..=4")))
    }
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(invalid("name", "must not be empty"))
    } else {
        Ok(())
    }
}

/// Status of a one-off task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Completed,
}

/// A one-off task with a time estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub name: String,
    pub time_estimate_minutes: u32,
    pub priority: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub status: TodoStatus,
}

impl Todo {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)?;
        check_priority(self.priority)?;
        if self.time_estimate_minutes == 0 {
            return Err(invalid("timeEstimateMinutes", "must be greater than 0"));
        }
        Ok(())
    }
}

/// A multi-session effort tracked in hours.
///
/// `hours_completed` is not clamped to `total_hours_needed`; imported
/// progress and over-logging may exceed the estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub total_hours_needed: f64,
    pub hours_completed: f64,
    pub priority: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Project {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)?;
        check_priority(self.priority)?;
        if self.total_hours_needed <= 0.0 {
            return Err(invalid("totalHoursNeeded", "must be greater than 0"));
        }
        if self.hours_completed < 0.0 {
            return Err(invalid("hoursCompleted", "must not be negative"));
        }
        Ok(())
    }
}

/// A project moved to the completed archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedProject {
    #[serde(flatten)]
    pub project: Project,
    pub completion_date: NaiveDate,
}

/// A recurring habit with a weekly session quota.
///
/// `weekly_completed` may exceed `frequency_per_week` when over-logged and
/// is never reset automatically; `total_hours_logged` only ever grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: u64,
    pub name: String,
    pub duration_minutes: u32,
    pub frequency_per_week: u32,
    pub priority: u8,
    pub weekly_completed: u32,
    pub total_hours_logged: f64,
}

impl Habit {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)?;
        check_priority(self.priority)?;
        if self.duration_minutes == 0 {
            return Err(invalid("durationMinutes", "must be greater than 0"));
        }
        if self.frequency_per_week == 0 {
            return Err(invalid("frequencyPerWeek", "must be greater than 0"));
        }
        Ok(())
    }
}
