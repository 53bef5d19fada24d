//! Weekly-quota derivation for habits.
//!
//! Given how many sessions a habit still owes this week and how many days
//! remain, derives the number of sessions to attempt today and an urgency
//! tier. Catch-up is front-loaded: the per-day rate is rounded up.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::Habit;

/// Urgency tier of a habit relative to its weekly quota.
///
/// A habit needing two or more sessions per day to clear its quota is in
/// crisis; above 1.2 per day signals mild catch-up pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    High,
    Normal,
}

impl Urgency {
    /// Sort rank: critical before high before normal.
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Normal => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Normal => "normal",
        }
    }

    fn from_sessions_per_day(sessions_per_day: f64) -> Self {
        if sessions_per_day >= 2.0 {
            Self::Critical
        } else if sessions_per_day > 1.2 {
            Self::High
        } else {
            Self::Normal
        }
    }
}

/// What a habit still owes this week, spread over the days left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HabitQuota {
    /// Sessions still owed this week.
    pub remaining: u32,
    /// Real-valued sessions per remaining day.
    pub sessions_per_day: f64,
    /// Session candidates to emit today (`ceil(sessions_per_day)`).
    pub sessions_today: u32,
    pub urgency: Urgency,
}

/// Days remaining in the current week, never less than 1.
///
/// Week runs Sunday (0) through Saturday (6), so Sunday has a full 7 days
/// and Saturday exactly 1.
pub fn days_left_in_week(date: NaiveDate) -> u32 {
    (7 - date.weekday().num_days_from_sunday()).max(1)
}

/// Derive today's quota for a habit, or `None` when the weekly quota is
/// already met.
pub fn derive_quota(habit: &Habit, days_left: u32) -> Option<HabitQuota> {
    let days_left = days_left.max(1);
    let remaining =
        i64::from(habit.frequency_per_week).saturating_sub(i64::from(habit.weekly_completed));
    if remaining <= 0 {
        return None;
    }
    let remaining = remaining as u32;

    let sessions_per_day = f64::from(remaining) / f64::from(days_left);
    let sessions_today = sessions_per_day.ceil() as u32;

    Some(HabitQuota {
        remaining,
        sessions_per_day,
        sessions_today,
        urgency: Urgency::from_sessions_per_day(sessions_per_day),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(frequency: u32, completed: u32) -> Habit {
        Habit {
            id: 1,
            name: "Run".to_string(),
            duration_minutes: 30,
            frequency_per_week: frequency,
            priority: 2,
            weekly_completed: completed,
            total_hours_logged: 0.0,
        }
    }

    #[test]
    fn met_quota_yields_no_sessions() {
        assert!(derive_quota(&habit(3, 3), 4).is_none());
        // Over-logged is also met
        assert!(derive_quota(&habit(3, 5), 4).is_none());
    }

    #[test]
    fn catch_up_is_front_loaded() {
        // 5 sessions over 3 days: 1.67/day, so 2 today
        let quota = derive_quota(&habit(5, 0), 3).unwrap();
        assert_eq!(quota.remaining, 5);
        assert_eq!(quota.sessions_today, 2);
        assert_eq!(quota.urgency, Urgency::High);
    }

    #[test]
    fn urgency_tiers() {
        // 7 sessions, 1 day left: 7/day, critical
        let quota = derive_quota(&habit(7, 0), 1).unwrap();
        assert_eq!(quota.sessions_per_day, 7.0);
        assert_eq!(quota.sessions_today, 7);
        assert_eq!(quota.urgency, Urgency::Critical);

        // Exactly 2/day is already critical
        let quota = derive_quota(&habit(4, 0), 2).unwrap();
        assert_eq!(quota.urgency, Urgency::Critical);

        // 1.25/day is high
        let quota = derive_quota(&habit(5, 0), 4).unwrap();
        assert_eq!(quota.urgency, Urgency::High);

        // 1.2/day is not above the threshold: normal
        let quota = derive_quota(&habit(6, 0), 5).unwrap();
        assert_eq!(quota.urgency, Urgency::Normal);

        // 1/day or less is normal
        let quota = derive_quota(&habit(3, 0), 7).unwrap();
        assert_eq!(quota.urgency, Urgency::Normal);
        assert_eq!(quota.sessions_today, 1);
    }

    #[test]
    fn days_left_runs_sunday_through_saturday() {
        // 2025-06-01 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(days_left_in_week(sunday), 7);

        let wednesday = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
        assert_eq!(days_left_in_week(wednesday), 4);

        let saturday = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap();
        assert_eq!(days_left_in_week(saturday), 1);
    }
}
