//! Slot-plan resolution: named timing-plan tables and custom-time
//! validation.

use tracing::debug;

use super::ScheduleError;
use crate::models::{DayPart, SlotPlan, SlotTime, TimingPlan};

/// Pre-vetted slot tables for the named plans, keyed by
/// `(plan, doses_per_day)`.
///
/// `plan1` is meal-anchored (breakfast / lunch / dinner / bedtime
/// spacing); `plan2` shifts every `plan1` slot one hour later for
/// late-rising households. All entries sit outside the overnight
/// window.
fn named_plan_slots(plan: TimingPlan, doses_per_day: u32) -> Option<&'static [(u32, u32)]> {
    match (plan, doses_per_day) {
        (TimingPlan::Plan1, 1) => Some(&[(21, 0)]),
        (TimingPlan::Plan1, 2) => Some(&[(8, 0), (21, 0)]),
        (TimingPlan::Plan1, 3) => Some(&[(8, 0), (12, 0), (18, 0)]),
        (TimingPlan::Plan1, 4) => Some(&[(8, 0), (12, 0), (17, 0), (21, 0)]),
        (TimingPlan::Plan2, 1) => Some(&[(22, 0)]),
        (TimingPlan::Plan2, 2) => Some(&[(9, 0), (22, 0)]),
        (TimingPlan::Plan2, 3) => Some(&[(9, 0), (13, 0), (19, 0)]),
        (TimingPlan::Plan2, 4) => Some(&[(9, 0), (13, 0), (18, 0), (22, 0)]),
        _ => None,
    }
}

/// Build the canonical daily slot list for a request.
///
/// Named plans come from the fixed tables above; `custom` parses the
/// caregiver-supplied `HH:MM` strings. Either way the result is
/// ascending, distinct, and clear of the overnight window — the
/// invariants every downstream component relies on.
pub fn resolve_slot_plan(
    doses_per_day: u32,
    timing_plan: TimingPlan,
    custom_times: Option<&[String]>,
) -> Result<SlotPlan, ScheduleError> {
    if doses_per_day == 0 {
        return Err(ScheduleError::InvalidRequest {
            reason: "doses_per_day must be at least 1".into(),
        });
    }

    let mut slots: Vec<SlotTime> = match timing_plan {
        TimingPlan::Custom => {
            let times = custom_times.ok_or_else(|| ScheduleError::InvalidSlot {
                reason: "custom plan requires custom_times".into(),
            })?;
            if times.len() as u32 != doses_per_day {
                return Err(ScheduleError::InvalidSlot {
                    reason: format!(
                        "expected {doses_per_day} custom times, got {}",
                        times.len()
                    ),
                });
            }
            times
                .iter()
                .map(|t| t.parse::<SlotTime>())
                .collect::<Result<_, _>>()?
        }
        _ => named_plan_slots(timing_plan, doses_per_day)
            .ok_or(ScheduleError::UnsupportedDoseCount {
                plan: timing_plan,
                doses_per_day,
            })?
            .iter()
            .map(|&(hour, minute)| SlotTime { hour, minute })
            .collect(),
    };

    for slot in &slots {
        if slot.in_night_window() {
            return Err(ScheduleError::InvalidSlot {
                reason: format!("{slot} falls in the overnight window"),
            });
        }
    }

    slots.sort_unstable();
    slots.dedup();
    if (slots.len() as u32) < doses_per_day {
        return Err(ScheduleError::InvalidSlot {
            reason: format!(
                "duplicate slot times reduce the plan below {doses_per_day} doses/day"
            ),
        });
    }

    debug!(plan = %timing_plan, doses_per_day, ?slots, "Resolved slot plan");

    Ok(SlotPlan { plan: timing_plan, slots })
}

/// Caregiver-facing label for a slot: day-part bucket for named plans,
/// ordinal 第N劑 for custom plans.
pub fn slot_label(plan: TimingPlan, slot: SlotTime, position: usize) -> String {
    let ordinal = || format!("第{}劑", position + 1);
    match plan {
        TimingPlan::Custom => ordinal(),
        _ => DayPart::from_hour(slot.hour)
            .map(|part| part.label_zh().to_string())
            .unwrap_or_else(ordinal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(hour: u32, minute: u32) -> SlotTime {
        SlotTime { hour, minute }
    }

    #[test]
    fn plan1_three_doses() {
        let plan = resolve_slot_plan(3, TimingPlan::Plan1, None).unwrap();
        assert_eq!(plan.slots, vec![slot(8, 0), slot(12, 0), slot(18, 0)]);
        assert_eq!(plan.plan, TimingPlan::Plan1);
    }

    #[test]
    fn plan1_four_doses() {
        let plan = resolve_slot_plan(4, TimingPlan::Plan1, None).unwrap();
        assert_eq!(
            plan.slots,
            vec![slot(8, 0), slot(12, 0), slot(17, 0), slot(21, 0)]
        );
    }

    #[test]
    fn plan2_shifts_one_hour_later() {
        for doses in 1..=4 {
            let base = resolve_slot_plan(doses, TimingPlan::Plan1, None).unwrap();
            let shifted = resolve_slot_plan(doses, TimingPlan::Plan2, None).unwrap();
            let expected: Vec<SlotTime> = base
                .slots
                .iter()
                .map(|s| slot(s.hour + 1, s.minute))
                .collect();
            assert_eq!(shifted.slots, expected, "doses_per_day = {doses}");
        }
    }

    #[test]
    fn unsupported_dose_count() {
        let err = resolve_slot_plan(5, TimingPlan::Plan1, None).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::UnsupportedDoseCount { plan: TimingPlan::Plan1, doses_per_day: 5 }
        ));
    }

    #[test]
    fn zero_doses_rejected() {
        assert!(matches!(
            resolve_slot_plan(0, TimingPlan::Plan1, None),
            Err(ScheduleError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn custom_plan_parses_and_sorts() {
        let times = vec!["21:00".to_string(), "8:30".to_string()];
        let plan = resolve_slot_plan(2, TimingPlan::Custom, Some(&times)).unwrap();
        assert_eq!(plan.slots, vec![slot(8, 30), slot(21, 0)]);
        assert_eq!(plan.plan, TimingPlan::Custom);
    }

    #[test]
    fn custom_plan_requires_times() {
        assert!(matches!(
            resolve_slot_plan(2, TimingPlan::Custom, None),
            Err(ScheduleError::InvalidSlot { .. })
        ));
    }

    #[test]
    fn custom_plan_count_mismatch() {
        let times = vec!["08:00".to_string()];
        assert!(matches!(
            resolve_slot_plan(2, TimingPlan::Custom, Some(&times)),
            Err(ScheduleError::InvalidSlot { .. })
        ));
    }

    #[test]
    fn custom_plan_rejects_overnight_slot() {
        let times = vec!["05:30".to_string(), "12:00".to_string()];
        let err = resolve_slot_plan(2, TimingPlan::Custom, Some(&times)).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidSlot { ref reason } if reason.contains("05:30")
        ));
    }

    #[test]
    fn custom_plan_rejects_malformed_time() {
        let times = vec!["eight".to_string(), "12:00".to_string()];
        assert!(matches!(
            resolve_slot_plan(2, TimingPlan::Custom, Some(&times)),
            Err(ScheduleError::InvalidSlot { .. })
        ));
    }

    #[test]
    fn custom_plan_duplicates_collapse_to_error() {
        let times = vec!["08:00".to_string(), "8:00".to_string()];
        let err = resolve_slot_plan(2, TimingPlan::Custom, Some(&times)).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidSlot { ref reason } if reason.contains("duplicate")
        ));
    }

    #[test]
    fn named_slots_never_overnight() {
        for plan in [TimingPlan::Plan1, TimingPlan::Plan2] {
            for doses in 1..=4 {
                let resolved = resolve_slot_plan(doses, plan, None).unwrap();
                assert!(resolved.slots.iter().all(|s| !s.in_night_window()));
            }
        }
    }

    #[test]
    fn named_plan_labels_use_day_parts() {
        assert_eq!(slot_label(TimingPlan::Plan1, slot(8, 0), 0), "早上");
        assert_eq!(slot_label(TimingPlan::Plan1, slot(12, 0), 1), "中午");
        assert_eq!(slot_label(TimingPlan::Plan1, slot(18, 0), 2), "晚上");
        assert_eq!(slot_label(TimingPlan::Plan2, slot(22, 0), 0), "睡前");
    }

    #[test]
    fn custom_plan_labels_are_ordinal() {
        assert_eq!(slot_label(TimingPlan::Custom, slot(8, 0), 0), "第1劑");
        assert_eq!(slot_label(TimingPlan::Custom, slot(21, 0), 2), "第3劑");
    }
}
