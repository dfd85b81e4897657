use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::enums::TimingPlan;
use crate::config;

/// Input aggregate for one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The real first-dose instant. Pinned exactly as the first event,
    /// never snapped to a slot.
    pub anchor: DateTime<Utc>,
    pub doses_per_day: u32,
    /// Inclusive count of calendar days, starting at the anchor's day.
    pub treatment_days: u32,
    pub timing_plan: TimingPlan,
    /// `HH:MM` strings; required iff `timing_plan` is `custom`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_times: Option<Vec<String>>,
    /// IANA timezone all calendar arithmetic happens in.
    #[serde(default = "config::default_timezone")]
    pub timezone: Tz,
}

/// One output occurrence.
///
/// `date_time` carries the zone offset in effect at that instant, so
/// `date_naive()` recovers the generation-timezone calendar day and the
/// type round-trips through serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub date_time: DateTime<FixedOffset>,
    /// 1-based offset from the anchor's calendar day.
    pub day_index: u32,
    /// True for exactly one event per schedule — the anchor itself.
    pub is_first_dose: bool,
    /// Caregiver-facing slot label.
    pub label: String,
}
