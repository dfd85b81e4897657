//! Carebell medication scheduling engine.
//!
//! Pure, timezone-aware calendar computation for the Carebell
//! caregiving service: resolves daily dose slots, pins the real first
//! dose, emits multi-day dose schedules, compiles recurring reminder
//! triggers, and renders caregiver-facing previews. Free-text zh-TW
//! time phrases are handled by [`extraction`].
//!
//! The engine persists nothing and never reads the system clock — the
//! caller supplies every instant, so identical inputs always produce
//! identical output. Storage, HTTP, and push delivery live in the
//! surrounding service.

pub mod config;
pub mod extraction;
pub mod models;
pub mod scheduling;

pub use extraction::{extract_doses_per_day, extract_times, extract_times_from_text};
pub use models::{
    DayPart, EventStatus, MedicationSchedule, PreviewDay, PreviewEntry, ScheduleEvent,
    ScheduleRequest, SlotPlan, SlotTime, TimingPlan, TriggerExpression, TriggerFire,
};
pub use scheduling::{
    generate_schedule, preview_merged, preview_schedule, resolve_slot_plan, synthesize_trigger,
    ScheduleError,
};
