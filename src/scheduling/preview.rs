//! Caregiver-facing schedule preview.
//!
//! Buckets generated events by their calendar day, labels each day with
//! its zh-TW weekday name, and marks every dose passed or upcoming
//! against the caller's reference instant. Status is recomputed on
//! every call and never stored, so repeated renders track real time.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

use crate::models::{
    EventStatus, MedicationSchedule, PreviewDay, PreviewEntry, ScheduleEvent,
};

/// zh-TW day-of-week label.
fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}

/// Render one medication's events as day buckets, truncated to the
/// first `horizon_days` days that contain at least one event.
pub fn preview_schedule(
    events: &[ScheduleEvent],
    reference: DateTime<Utc>,
    horizon_days: u32,
) -> Vec<PreviewDay> {
    let tagged: Vec<(&ScheduleEvent, Option<&str>)> =
        events.iter().map(|event| (event, None)).collect();
    build_preview(tagged, reference, horizon_days)
}

/// Render the union of several medications' events for one patient.
///
/// Events are merged chronologically across sources; every entry keeps
/// its own medication's name.
pub fn preview_merged(
    sources: &[MedicationSchedule],
    reference: DateTime<Utc>,
    horizon_days: u32,
) -> Vec<PreviewDay> {
    let tagged: Vec<(&ScheduleEvent, Option<&str>)> = sources
        .iter()
        .flat_map(|medication| {
            medication
                .events
                .iter()
                .map(move |event| (event, Some(medication.name.as_str())))
        })
        .collect();
    build_preview(tagged, reference, horizon_days)
}

fn build_preview(
    mut tagged: Vec<(&ScheduleEvent, Option<&str>)>,
    reference: DateTime<Utc>,
    horizon_days: u32,
) -> Vec<PreviewDay> {
    tagged.sort_by_key(|(event, _)| event.date_time);

    let mut days: Vec<PreviewDay> = Vec::new();
    for (event, medication) in tagged {
        // The event's fixed offset carries the generation timezone's
        // wall clock, so date_naive() is the right calendar day.
        let date = event.date_time.date_naive();
        let status = if event.date_time.with_timezone(&Utc) <= reference {
            EventStatus::Passed
        } else {
            EventStatus::Upcoming
        };
        let entry = PreviewEntry {
            time: format!(
                "{:02}:{:02}",
                event.date_time.hour(),
                event.date_time.minute()
            ),
            label: event.label.clone(),
            status,
            medication: medication.map(str::to_string),
        };
        match days.last_mut() {
            Some(day) if day.date == date => day.entries.push(entry),
            _ => {
                if days.len() as u32 == horizon_days {
                    break;
                }
                days.push(PreviewDay {
                    date,
                    day_of_week: weekday_label(date.weekday()).to_string(),
                    entries: vec![entry],
                });
            }
        }
    }
    days
}
