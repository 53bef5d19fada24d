//! Candidate expansion: habits owed this week become placeable items.

use serde::{Deserialize, Serialize};

use crate::model::Habit;
use crate::quota::{derive_quota, Urgency};

/// Which entity kind a plan item was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Habit,
    Project,
    Todo,
}

/// An atomic placeable unit of work for today.
///
/// Produced fresh on every plan computation and never persisted. The id is
/// synthetic (`habit-{habitId}-{n}`) and only stable within a single day's
/// identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    pub id: String,
    pub source: SourceKind,
    pub source_id: u64,
    pub name: String,
    pub duration_minutes: u32,
    pub priority: u8,
    pub urgency: Urgency,
}

/// Expand habits into one item per session owed today.
///
/// Only habits generate candidates; todos and projects are tracked and
/// completed through the manual path. Input order is preserved, which the
/// scheduler's stable sort relies on for tie-breaking.
pub fn build_candidates(habits: &[Habit], days_left: u32) -> Vec<PlanItem> {
    let mut items = Vec::new();

    for habit in habits {
        let Some(quota) = derive_quota(habit, days_left) else {
            continue;
        };

        for session in 0..quota.sessions_today {
            items.push(PlanItem {
                id: format!("habit-{}-{}", habit.id, session),
                source: SourceKind::Habit,
                source_id: habit.id,
                name: habit.name.clone(),
                duration_minutes: habit.duration_minutes,
                priority: habit.priority,
                urgency: quota.urgency,
            });
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: u64, frequency: u32, completed: u32) -> Habit {
        Habit {
            id,
            name: format!("Habit {id}"),
            duration_minutes: 60,
            frequency_per_week: frequency,
            priority: 2,
            weekly_completed: completed,
            total_hours_logged: 0.0,
        }
    }

    #[test]
    fn one_item_per_owed_session() {
        // 7 owed, 1 day left: all 7 emitted today
        let habits = vec![habit(1, 7, 0)];
        let items = build_candidates(&habits, 1);
        assert_eq!(items.len(), 7);
        assert_eq!(items[0].id, "habit-1-0");
        assert_eq!(items[6].id, "habit-1-6");
        assert!(items.iter().all(|i| i.urgency == Urgency::Critical));
        assert!(items.iter().all(|i| i.source == SourceKind::Habit));
    }

    #[test]
    fn completed_habits_emit_nothing() {
        let habits = vec![habit(1, 3, 3), habit(2, 2, 5)];
        assert!(build_candidates(&habits, 4).is_empty());
    }

    #[test]
    fn preserves_habit_order() {
        let habits = vec![habit(5, 2, 0), habit(3, 2, 0)];
        let items = build_candidates(&habits, 7);
        assert_eq!(items[0].source_id, 5);
        assert_eq!(items[1].source_id, 3);
    }
}
