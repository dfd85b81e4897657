//! Canonical time-of-day values and the resolved daily slot plan.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::enums::TimingPlan;
use crate::scheduling::ScheduleError;

/// End of the overnight window `[00:00, 06:00)` in which no computed
/// dose may be scheduled. The anchor dose is exempt — it already
/// happened and is never shifted.
pub const NIGHT_WINDOW_END_HOUR: u32 = 6;

/// A canonical wall-clock time of day, minute precision.
///
/// Ordered by `(hour, minute)`; renders and parses as `HH:MM`, the form
/// the wire, the extractor, and custom-time input all speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    pub hour: u32,
    pub minute: u32,
}

impl SlotTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ScheduleError> {
        if hour >= 24 || minute >= 60 {
            return Err(ScheduleError::InvalidSlot {
                reason: format!("time out of range: {hour:02}:{minute:02}"),
            });
        }
        Ok(Self { hour, minute })
    }

    /// True when this time falls inside the overnight window `[00:00, 06:00)`.
    pub fn in_night_window(&self) -> bool {
        self.hour < NIGHT_WINDOW_END_HOUR
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for SlotTime {
    type Err = ScheduleError;

    /// Accepts `HH:MM` and `H:MM` (leading zeros optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let malformed = || ScheduleError::InvalidSlot {
            reason: format!("malformed time: {trimmed:?}"),
        };

        let (h, m) = trimmed.split_once(':').ok_or_else(malformed)?;
        if m.contains(':') {
            return Err(malformed());
        }
        let hour = h.trim().parse::<u32>().map_err(|_| malformed())?;
        let minute = m.trim().parse::<u32>().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Resolved daily slot plan: ascending, distinct, clear of the
/// overnight window. Built once per request by the resolver and
/// immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPlan {
    pub plan: TimingPlan,
    pub slots: Vec<SlotTime>,
}

impl SlotPlan {
    pub fn doses_per_day(&self) -> u32 {
        self.slots.len() as u32
    }
}
