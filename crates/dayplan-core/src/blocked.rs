//! Blocked-time intervals and queries over them.
//!
//! Blocked intervals are recurring daily ranges (meetings, lunch, commute)
//! that the scheduler must route around. An interval whose end precedes its
//! start is legal and means it crosses midnight.

use serde::{Deserialize, Serialize};

use crate::clock::{TimeOfDay, MINUTES_PER_DAY};

/// A recurring daily time range unavailable for scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedInterval {
    pub id: u64,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub label: String,
}

impl BlockedInterval {
    /// True when the interval crosses midnight (`end < start`).
    pub fn wraps_midnight(&self) -> bool {
        self.end.minutes() < self.start.minutes()
    }

    /// Whether the given minute of day falls inside this interval.
    ///
    /// `minute` may be an absolute value past one day; containment is
    /// tested on the circular clock.
    pub fn contains(&self, minute: u32) -> bool {
        let m = minute % MINUTES_PER_DAY;
        let start = self.start.minutes();
        let end = self.end.minutes();

        if self.wraps_midnight() {
            m >= start || m < end
        } else {
            m >= start && m < end
        }
    }
}

/// Read-only queries over a set of blocked intervals.
pub struct BlockedTimeIndex<'a> {
    intervals: &'a [BlockedInterval],
}

impl<'a> BlockedTimeIndex<'a> {
    pub fn new(intervals: &'a [BlockedInterval]) -> Self {
        Self { intervals }
    }

    /// Is this minute of day blocked by any interval?
    pub fn is_blocked(&self, minute: u32) -> bool {
        self.intervals.iter().any(|b| b.contains(minute))
    }

    /// The next unblocked absolute minute at or after `minute`.
    ///
    /// While the current position is blocked, jumps to the offending
    /// interval's end. Escaping the pre-midnight portion of a wrapping
    /// interval adds a full day so the returned value stays monotonically
    /// increasing in absolute terms.
    pub fn next_available(&self, minute: u32) -> u32 {
        let mut next = minute;

        let mut was_blocked = true;
        while was_blocked {
            was_blocked = false;
            let normalized = next % MINUTES_PER_DAY;

            for blocked in self.intervals {
                let start = blocked.start.minutes();
                let end = blocked.end.minutes();

                if blocked.wraps_midnight() {
                    if normalized >= start || normalized < end {
                        next = if normalized >= start {
                            next - normalized + end + MINUTES_PER_DAY
                        } else {
                            next - normalized + end
                        };
                        was_blocked = true;
                        break;
                    }
                } else if normalized >= start && normalized < end {
                    next = next - normalized + end;
                    was_blocked = true;
                    break;
                }
            }
        }

        next
    }
}
