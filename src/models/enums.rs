use crate::scheduling::ScheduleError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + Display + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ScheduleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ScheduleError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(TimingPlan {
    Plan1 => "plan1",
    Plan2 => "plan2",
    Custom => "custom",
});

str_enum!(DayPart {
    Morning => "morning",
    Noon => "noon",
    Afternoon => "afternoon",
    Evening => "evening",
    Night => "night",
});

str_enum!(EventStatus {
    Passed => "passed",
    Upcoming => "upcoming",
});

impl DayPart {
    /// Bucket a wall-clock hour into a day part.
    ///
    /// Hours inside the overnight window `[00:00, 06:00)` have no
    /// bucket — no computed slot may land there.
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            6..=10 => Some(Self::Morning),
            11..=13 => Some(Self::Noon),
            14..=17 => Some(Self::Afternoon),
            18..=20 => Some(Self::Evening),
            21..=23 => Some(Self::Night),
            _ => None,
        }
    }

    /// Caregiver-facing zh-TW label.
    pub fn label_zh(&self) -> &'static str {
        match self {
            Self::Morning => "早上",
            Self::Noon => "中午",
            Self::Afternoon => "下午",
            Self::Evening => "晚上",
            Self::Night => "睡前",
        }
    }
}
