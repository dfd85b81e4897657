//! Medication dose scheduling: slot-plan resolution, schedule
//! generation, recurring-trigger synthesis, and preview rendering.
//!
//! Every function here is a pure computation over its inputs — no
//! clock reads, no persistence, no I/O. The surrounding service owns
//! storage and notification delivery.

pub mod generator;
pub mod plans;
pub mod preview;
pub mod trigger;

pub use generator::generate;
pub use plans::resolve_slot_plan;
pub use preview::{preview_merged, preview_schedule};
pub use trigger::synthesize_trigger;

use thiserror::Error;

use crate::models::{ScheduleEvent, ScheduleRequest, TimingPlan};

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("No slot table entry for {doses_per_day} doses/day under {plan}")]
    UnsupportedDoseCount { plan: TimingPlan, doses_per_day: u32 },

    #[error("Invalid slot: {reason}")]
    InvalidSlot { reason: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Resolve the request's slot plan, then generate its full event
/// sequence.
pub fn generate_schedule(request: &ScheduleRequest) -> Result<Vec<ScheduleEvent>, ScheduleError> {
    let plan = plans::resolve_slot_plan(
        request.doses_per_day,
        request.timing_plan,
        request.custom_times.as_deref(),
    )?;
    generator::generate(request, &plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn generate_schedule_wires_resolver_and_generator() {
        let anchor = chrono_tz::Asia::Taipei
            .with_ymd_and_hms(2026, 3, 10, 9, 30, 0)
            .unwrap();
        let request = ScheduleRequest {
            anchor: anchor.with_timezone(&chrono::Utc),
            doses_per_day: 2,
            treatment_days: 2,
            timing_plan: TimingPlan::Custom,
            custom_times: Some(vec!["09:00".into(), "21:00".into()]),
            timezone: chrono_tz::Asia::Taipei,
        };
        let events = generate_schedule(&request).unwrap();
        // Day 1: anchor (09:30) + 21:00; day 2: both slots.
        assert_eq!(events.len(), 4);
        assert!(events[0].is_first_dose);
    }

    #[test]
    fn generate_schedule_surfaces_resolver_errors() {
        let request = ScheduleRequest {
            anchor: chrono::Utc::now(),
            doses_per_day: 5,
            treatment_days: 3,
            timing_plan: TimingPlan::Plan1,
            custom_times: None,
            timezone: chrono_tz::Asia::Taipei,
        };
        assert!(matches!(
            generate_schedule(&request),
            Err(ScheduleError::UnsupportedDoseCount { doses_per_day: 5, .. })
        ));
    }
}
