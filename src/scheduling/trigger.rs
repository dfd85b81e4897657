//! Compiles a slot plan into its steady-state daily recurrence.

use std::collections::BTreeMap;

use tracing::debug;

use super::ScheduleError;
use crate::models::{SlotPlan, TriggerExpression, TriggerFire};

/// Group the plan's slots by minute value: one recurring daily fire per
/// distinct minute, carrying the ascending hour set for that minute.
///
/// The expression is anchor-agnostic — it describes every day's
/// recurrence, and the consuming scheduler applies the request timezone
/// when evaluating it.
pub fn synthesize_trigger(slot_plan: &SlotPlan) -> Result<TriggerExpression, ScheduleError> {
    if slot_plan.slots.is_empty() {
        return Err(ScheduleError::InvalidSlot {
            reason: "slot plan is empty".into(),
        });
    }

    let mut by_minute: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for slot in &slot_plan.slots {
        if slot.in_night_window() {
            return Err(ScheduleError::InvalidSlot {
                reason: format!("{slot} falls in the overnight window"),
            });
        }
        let hours = by_minute.entry(slot.minute).or_default();
        if !hours.contains(&slot.hour) {
            hours.push(slot.hour);
        }
    }

    let fires: Vec<TriggerFire> = by_minute
        .into_iter()
        .map(|(minute, mut hours)| {
            hours.sort_unstable();
            TriggerFire { minute, hours }
        })
        .collect();

    debug!(fires = fires.len(), "Synthesized trigger expression");

    Ok(TriggerExpression { fires })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SlotTime, TimingPlan};
    use crate::scheduling::resolve_slot_plan;

    fn custom_plan(slots: &[(u32, u32)]) -> SlotPlan {
        SlotPlan {
            plan: TimingPlan::Custom,
            slots: slots
                .iter()
                .map(|&(hour, minute)| SlotTime { hour, minute })
                .collect(),
        }
    }

    #[test]
    fn shared_minute_collapses_to_one_fire() {
        let expression =
            synthesize_trigger(&custom_plan(&[(8, 0), (12, 0), (20, 0)])).unwrap();
        assert_eq!(
            expression.fires,
            vec![TriggerFire { minute: 0, hours: vec![8, 12, 20] }]
        );
        assert_eq!(expression.to_cron_lines(), vec!["0 8,12,20 * * *"]);
    }

    #[test]
    fn distinct_minutes_yield_one_fire_each() {
        let expression =
            synthesize_trigger(&custom_plan(&[(8, 30), (12, 0), (20, 30)])).unwrap();
        assert_eq!(
            expression.fires,
            vec![
                TriggerFire { minute: 0, hours: vec![12] },
                TriggerFire { minute: 30, hours: vec![8, 20] },
            ]
        );
    }

    #[test]
    fn named_plan_synthesizes() {
        let plan = resolve_slot_plan(3, TimingPlan::Plan1, None).unwrap();
        let expression = synthesize_trigger(&plan).unwrap();
        assert_eq!(
            expression.fires,
            vec![TriggerFire { minute: 0, hours: vec![8, 12, 18] }]
        );
    }

    #[test]
    fn rejects_empty_plan() {
        let empty = SlotPlan { plan: TimingPlan::Custom, slots: vec![] };
        assert!(matches!(
            synthesize_trigger(&empty),
            Err(ScheduleError::InvalidSlot { .. })
        ));
    }

    #[test]
    fn rejects_overnight_slot() {
        assert!(matches!(
            synthesize_trigger(&custom_plan(&[(3, 0), (12, 0)])),
            Err(ScheduleError::InvalidSlot { .. })
        ));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let plan = custom_plan(&[(9, 15), (13, 0), (21, 15)]);
        assert_eq!(
            synthesize_trigger(&plan).unwrap(),
            synthesize_trigger(&plan).unwrap()
        );
    }
}
