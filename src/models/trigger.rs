use serde::{Deserialize, Serialize};

/// One recurring daily fire: every day, at `minute` past each hour in
/// `hours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerFire {
    pub minute: u32,
    /// Ascending, distinct.
    pub hours: Vec<u32>,
}

/// Steady-state daily recurrence compiled from a slot plan.
///
/// Knows nothing of the anchor dose or treatment length — it describes
/// the recurrence, not the ramp-up day. The consuming notification
/// scheduler applies the request timezone at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerExpression {
    /// One entry per distinct minute value, sorted by minute.
    pub fires: Vec<TriggerFire>,
}

impl TriggerFire {
    /// Crontab-style rendering: `"{minute} {hour,hour} * * *"`.
    pub fn to_cron(&self) -> String {
        let hours = self
            .hours
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("{} {} * * *", self.minute, hours)
    }
}

impl TriggerExpression {
    pub fn to_cron_lines(&self) -> Vec<String> {
        self.fires.iter().map(TriggerFire::to_cron).collect()
    }
}
