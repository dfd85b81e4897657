use chrono_tz::Tz;

/// Application-level constants
pub const APP_NAME: &str = "Carebell";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Timezone applied when a request does not name one.
///
/// The service runs for Taiwan-based caregivers; day boundaries and the
/// overnight no-dose window are computed in this zone unless the request
/// overrides it. Engine code never reads the ambient process timezone.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Taipei;

/// serde default for `ScheduleRequest::timezone`.
pub fn default_timezone() -> Tz {
    DEFAULT_TIMEZONE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timezone_is_taipei() {
        assert_eq!(default_timezone(), chrono_tz::Asia::Taipei);
        assert_eq!(default_timezone().name(), "Asia/Taipei");
    }

    #[test]
    fn app_name_is_carebell() {
        assert_eq!(APP_NAME, "Carebell");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }
}
