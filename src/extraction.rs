//! Free-text time-phrase extraction (zh-TW).
//!
//! Turns caregiver statements like 「早上9點和晚上9點」 into the canonical
//! time-of-day values the scheduling engine consumes. Two passes:
//! period-tagged phrases first, bare numeric times only when no period
//! phrase matched anywhere in the text. Extraction never fails — an
//! empty result means "no time found" and callers fall back to
//! structured input.
//!
//! Known limitations, kept on purpose:
//! - 中午 always yields 12:00, whatever digit follows it (中午12點 and
//!   中午1點 both read as midday in caregiver messages).
//! - The period pass carries no sub-hour precision, so 下午3點半 loses
//!   its half hour and reads as 15:00.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::SlotTime;

/// Period-tagged phrase: `{period}{digits}點?`.
static PERIOD_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(早上|上午|中午|下午|晚上|深夜|凌晨)(\d{1,2})點?")
        .expect("Invalid period-time pattern")
});

/// Bare numeric time: `{hour}[點:：]{minute?}`.
static NUMERIC_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})[點:：](\d{1,2})?").expect("Invalid numeric-time pattern"));

/// Dose-count phrase: `一天/每天/每日/一日 {N} 次`.
static DOSE_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:一天|每天|每日|一日)([0-9一兩二三四])次").expect("Invalid dose-count pattern")
});

/// Period word preceding an hour digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    /// 早上
    Morning,
    /// 上午
    Forenoon,
    /// 中午
    Noon,
    /// 下午
    Afternoon,
    /// 晚上
    Evening,
    /// 深夜
    LateNight,
    /// 凌晨
    SmallHours,
}

impl Period {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "早上" => Some(Self::Morning),
            "上午" => Some(Self::Forenoon),
            "中午" => Some(Self::Noon),
            "下午" => Some(Self::Afternoon),
            "晚上" => Some(Self::Evening),
            "深夜" => Some(Self::LateNight),
            "凌晨" => Some(Self::SmallHours),
            _ => None,
        }
    }

    /// Convert a captured colloquial hour digit to a 24-hour value.
    ///
    /// 中午 ignores the digit entirely and always means 12:00;
    /// 晚上12點/深夜12點/凌晨12點 all mean midnight.
    fn to_hour24(self, captured: u32) -> u32 {
        match self {
            Self::Morning | Self::Forenoon => captured,
            Self::Noon => 12,
            Self::Afternoon => {
                if (1..=11).contains(&captured) {
                    captured + 12
                } else {
                    captured
                }
            }
            Self::Evening | Self::LateNight => match captured {
                1..=11 => captured + 12,
                12 => 0,
                other => other,
            },
            Self::SmallHours => {
                if captured == 12 {
                    0
                } else {
                    captured
                }
            }
        }
    }
}

/// Extract canonical times from free text, ascending and deduplicated.
///
/// An empty result is the defined "no time found" signal, never an
/// error.
pub fn extract_times(text: &str) -> Vec<SlotTime> {
    let mut found = period_pass(text);
    if found.is_empty() {
        found = numeric_pass(text);
    }
    found.sort_unstable();
    found.dedup();
    debug!(count = found.len(), "Extracted times from text");
    found
}

/// String-facing variant: `HH:MM` values, ascending and deduplicated.
pub fn extract_times_from_text(text: &str) -> Vec<String> {
    extract_times(text)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Extract a doses-per-day count from phrases like 一天三次 or 每日2次.
pub fn extract_doses_per_day(text: &str) -> Option<u32> {
    let caps = DOSE_COUNT.captures(text)?;
    match &caps[1] {
        "一" => Some(1),
        "兩" | "二" => Some(2),
        "三" => Some(3),
        "四" => Some(4),
        digit => digit.parse().ok().filter(|n| *n >= 1),
    }
}

fn period_pass(text: &str) -> Vec<SlotTime> {
    PERIOD_TIME
        .captures_iter(text)
        .filter_map(|caps| {
            let period = Period::from_word(&caps[1])?;
            let digit: u32 = caps[2].parse().ok()?;
            let hour = period.to_hour24(digit);
            // Period phrases carry no sub-hour precision.
            (hour < 24).then_some(SlotTime { hour, minute: 0 })
        })
        .collect()
}

fn numeric_pass(text: &str) -> Vec<SlotTime> {
    NUMERIC_TIME
        .captures_iter(text)
        .filter_map(|caps| {
            let hour: u32 = caps[1].parse().ok()?;
            let minute: u32 = match caps.get(2) {
                Some(m) => m.as_str().parse().ok()?,
                None => 0,
            };
            (hour < 24 && minute < 60).then_some(SlotTime { hour, minute })
        })
        .collect()
}
