use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::EventStatus;
use super::schedule::ScheduleEvent;

/// One rendered dose row in the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewEntry {
    /// Wall-clock `HH:MM` in the generation timezone.
    pub time: String,
    pub label: String,
    /// Recomputed against the caller's reference instant on every
    /// render — never stored.
    pub status: EventStatus,
    /// Source medication name; set only by the merged preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication: Option<String>,
}

/// One calendar day of the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDay {
    pub date: NaiveDate,
    /// zh-TW day-of-week label (星期一 … 星期日).
    pub day_of_week: String,
    pub entries: Vec<PreviewEntry>,
}

/// Generated events for one medication — the input unit for the merged
/// multi-medication preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationSchedule {
    pub id: Uuid,
    pub name: String,
    pub events: Vec<ScheduleEvent>,
}
