//! Smart schedule generation.
//!
//! Day 1 pins the real first dose exactly where it happened and only
//! keeps the slots still ahead of it; every later day carries the full
//! slot set. All calendar arithmetic runs in the request's timezone so
//! an event never drifts across a day boundary.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, TimeZone, Timelike};
use chrono_tz::Tz;
use tracing::{debug, warn};

use super::plans::slot_label;
use super::ScheduleError;
use crate::models::{ScheduleEvent, ScheduleRequest, SlotPlan, SlotTime};

/// Label for the anchor event — the dose that was actually taken.
const FIRST_DOSE_LABEL: &str = "首次服藥";

/// Generate the full ordered event sequence for a request.
///
/// The anchor is emitted verbatim even inside the overnight window — a
/// dose that already happened is never suppressed or shifted. Every
/// computed slot event is still checked against the window, guarding
/// against a slot plan that bypassed the resolver.
pub fn generate(
    request: &ScheduleRequest,
    slot_plan: &SlotPlan,
) -> Result<Vec<ScheduleEvent>, ScheduleError> {
    if request.doses_per_day == 0 {
        return Err(ScheduleError::InvalidRequest {
            reason: "doses_per_day must be at least 1".into(),
        });
    }
    if request.treatment_days == 0 {
        return Err(ScheduleError::InvalidRequest {
            reason: "treatment_days must be at least 1".into(),
        });
    }
    if slot_plan.slots.is_empty() {
        return Err(ScheduleError::InvalidSlot {
            reason: "slot plan is empty".into(),
        });
    }

    let tz = request.timezone;
    let anchor_local = request.anchor.with_timezone(&tz);
    let anchor_date = anchor_local.date_naive();
    let anchor_hms = (
        anchor_local.hour(),
        anchor_local.minute(),
        anchor_local.second(),
    );

    let mut events = Vec::new();

    events.push(ScheduleEvent {
        date_time: anchor_local.fixed_offset(),
        day_index: 1,
        is_first_dose: true,
        label: FIRST_DOSE_LABEL.to_string(),
    });

    // Day 1 keeps only the slots strictly after the anchor's wall-clock
    // time; earlier ones would schedule doses into the past.
    for (position, &slot) in slot_plan.slots.iter().enumerate() {
        if (slot.hour, slot.minute, 0) > anchor_hms {
            events.push(slot_event(tz, anchor_date, slot, position, 1, slot_plan)?);
        }
    }

    for day in 2..=request.treatment_days {
        let date = anchor_date + Duration::days(i64::from(day) - 1);
        for (position, &slot) in slot_plan.slots.iter().enumerate() {
            events.push(slot_event(tz, date, slot, position, day, slot_plan)?);
        }
    }

    debug!(
        events = events.len(),
        treatment_days = request.treatment_days,
        doses_per_day = request.doses_per_day,
        timezone = %tz,
        "Generated dose schedule"
    );

    Ok(events)
}

fn slot_event(
    tz: Tz,
    date: NaiveDate,
    slot: SlotTime,
    position: usize,
    day_index: u32,
    plan: &SlotPlan,
) -> Result<ScheduleEvent, ScheduleError> {
    if slot.in_night_window() {
        warn!(%slot, day_index, "Slot plan carries an overnight slot");
        return Err(ScheduleError::InvalidSlot {
            reason: format!("{slot} falls in the overnight window"),
        });
    }
    let date_time = resolve_local(tz, date, slot)?;
    Ok(ScheduleEvent {
        date_time: date_time.fixed_offset(),
        day_index,
        is_first_dose: false,
        label: slot_label(plan.plan, slot, position),
    })
}

/// Resolve a wall-clock time on a calendar day in `tz`.
///
/// Ambiguous local times (DST fall-back) take the earliest occurrence;
/// nonexistent local times (spring-forward gap) shift forward one hour.
/// Both rules keep resolution deterministic and forward-only.
fn resolve_local(tz: Tz, date: NaiveDate, slot: SlotTime) -> Result<DateTime<Tz>, ScheduleError> {
    let time = chrono::NaiveTime::from_hms_opt(slot.hour, slot.minute, 0).ok_or_else(|| {
        ScheduleError::InvalidSlot {
            reason: format!("time out of range: {slot}"),
        }
    })?;
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .ok_or_else(|| ScheduleError::InvalidSlot {
                reason: format!("{slot} cannot be resolved on {date} in {tz}"),
            }),
    }
}
