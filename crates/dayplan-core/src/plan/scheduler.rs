//! Greedy first-fit placement of candidates into the planning window.

use serde::{Deserialize, Serialize};

use crate::blocked::BlockedTimeIndex;
use crate::clock::{TimeOfDay, MINUTES_PER_DAY};

use super::candidate::PlanItem;

/// Granularity at which an item's span is probed for blocked minutes.
pub const PROBE_STEP_MINUTES: u32 = 15;

/// Daily planning window and transition buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanConfig {
    /// Start of the planning window.
    pub window_start: TimeOfDay,
    /// End of the planning window; at or before the start means the window
    /// crosses midnight.
    pub window_end: TimeOfDay,
    /// Minutes inserted after each placed item before the next may start.
    pub transition_minutes: u32,
}

/// A plan item with its concrete placement for today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledItem {
    #[serde(flatten)]
    pub item: PlanItem,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// Place candidates into the window, in urgency-then-priority order.
///
/// A single forward pass: each item is tried at the next available minute.
/// An item whose 15-minute probes hit a blocked interval is forfeited for
/// today (the pass does not hunt for a later slot for it); an item that
/// would overrun the window end stops placement entirely. Infeasibility
/// therefore degrades to a shorter plan, never an error.
pub fn generate_plan(
    items: &[PlanItem],
    config: &PlanConfig,
    blocked: &BlockedTimeIndex<'_>,
) -> Vec<ScheduledItem> {
    let window_start = config.window_start.minutes();
    let mut window_end = config.window_end.minutes();
    if window_end <= window_start {
        window_end += MINUTES_PER_DAY;
    }

    // Stable sort: ties keep candidate order.
    let mut ordered = items.to_vec();
    ordered.sort_by_key(|item| (item.urgency.rank(), item.priority));

    let mut plan = Vec::new();
    let mut current = window_start;

    for item in ordered {
        current = blocked.next_available(current);

        if current + item.duration_minutes > window_end {
            break;
        }

        let item_end = current + item.duration_minutes;
        let fits = (current..item_end)
            .step_by(PROBE_STEP_MINUTES as usize)
            .all(|t| !blocked.is_blocked(t));

        if fits {
            plan.push(ScheduledItem {
                start_time: TimeOfDay::from_minutes(current),
                end_time: TimeOfDay::from_minutes(item_end),
                item,
            });
            current = item_end + config.transition_minutes;
        } else {
            // Conflict forfeits the item for today.
            current = blocked.next_available(item_end);
        }
    }

    plan
}
