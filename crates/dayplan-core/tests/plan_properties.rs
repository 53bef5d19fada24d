//! Property tests for the scheduler invariants.
//!
//! Windows here never cross midnight so clock times compare directly as
//! minutes; the wrapping cases are pinned by example tests instead.
//! Blocked intervals stay short enough that they can never cover the full
//! day, which is the well-formedness the next-available scan assumes.

use proptest::prelude::*;

use dayplan_core::{
    generate_plan, BlockedInterval, BlockedTimeIndex, PlanConfig, PlanItem, SourceKind, TimeOfDay,
    Urgency,
};

fn urgency_strategy() -> impl Strategy<Value = Urgency> {
    prop_oneof![
        Just(Urgency::Critical),
        Just(Urgency::High),
        Just(Urgency::Normal),
    ]
}

fn item_strategy() -> impl Strategy<Value = PlanItem> {
    (1u64..50, 15u32..=120, 1u8..=4, urgency_strategy()).prop_map(
        |(source_id, duration, priority, urgency)| PlanItem {
            id: format!("habit-{source_id}-0"),
            source: SourceKind::Habit,
            source_id,
            name: format!("Habit {source_id}"),
            duration_minutes: duration,
            priority,
            urgency,
        },
    )
}

fn blocked_strategy() -> impl Strategy<Value = Vec<BlockedInterval>> {
    // Up to 3 intervals of at most 4 hours each: total coverage stays
    // well under a full day.
    proptest::collection::vec((0u32..1440, 1u32..=240), 0..=3).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (start, len))| BlockedInterval {
                id: i as u64 + 1,
                start: TimeOfDay::from_minutes(start),
                end: TimeOfDay::from_minutes(start + len),
                label: format!("Blocked {i}"),
            })
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = PlanConfig> {
    // Non-wrapping windows: start strictly before end.
    (0u32..700, 720u32..1440, 0u32..=30).prop_map(|(start, end, transition)| PlanConfig {
        window_start: TimeOfDay::from_minutes(start),
        window_end: TimeOfDay::from_minutes(end),
        transition_minutes: transition,
    })
}

proptest! {
    #[test]
    fn scheduled_items_stay_inside_the_window(
        items in proptest::collection::vec(item_strategy(), 0..12),
        config in config_strategy(),
        blocked in blocked_strategy(),
    ) {
        let plan = generate_plan(&items, &config, &BlockedTimeIndex::new(&blocked));
        for scheduled in &plan {
            prop_assert!(scheduled.start_time.minutes() >= config.window_start.minutes());
            prop_assert!(scheduled.end_time.minutes() <= config.window_end.minutes());
        }
    }

    #[test]
    fn no_probe_point_falls_in_a_blocked_interval(
        items in proptest::collection::vec(item_strategy(), 0..12),
        config in config_strategy(),
        blocked in blocked_strategy(),
    ) {
        let index = BlockedTimeIndex::new(&blocked);
        let plan = generate_plan(&items, &config, &index);
        for scheduled in &plan {
            let start = scheduled.start_time.minutes();
            let end = start + scheduled.item.duration_minutes;
            let mut probe = start;
            while probe < end {
                prop_assert!(
                    !index.is_blocked(probe),
                    "probe {probe} of {}-{} is blocked",
                    scheduled.start_time,
                    scheduled.end_time,
                );
                probe += 15;
            }
        }
    }

    #[test]
    fn consecutive_items_honor_the_transition_buffer(
        items in proptest::collection::vec(item_strategy(), 0..12),
        config in config_strategy(),
        blocked in blocked_strategy(),
    ) {
        let plan = generate_plan(&items, &config, &BlockedTimeIndex::new(&blocked));
        for pair in plan.windows(2) {
            prop_assert!(
                pair[1].start_time.minutes()
                    >= pair[0].end_time.minutes() + config.transition_minutes
            );
        }
    }

    #[test]
    fn placement_order_is_urgency_then_priority(
        items in proptest::collection::vec(item_strategy(), 0..12),
        config in config_strategy(),
        blocked in blocked_strategy(),
    ) {
        let plan = generate_plan(&items, &config, &BlockedTimeIndex::new(&blocked));
        for pair in plan.windows(2) {
            let a = (pair[0].item.urgency.rank(), pair[0].item.priority);
            let b = (pair[1].item.urgency.rank(), pair[1].item.priority);
            prop_assert!(a <= b);
        }
    }

    #[test]
    fn plan_generation_is_deterministic(
        items in proptest::collection::vec(item_strategy(), 0..12),
        config in config_strategy(),
        blocked in blocked_strategy(),
    ) {
        let first = generate_plan(&items, &config, &BlockedTimeIndex::new(&blocked));
        let second = generate_plan(&items, &config, &BlockedTimeIndex::new(&blocked));
        prop_assert_eq!(first, second);
    }
}
