/// Configuration module for countdown settings
use std::time::Duration;

use serde::Serialize;

pub const DEFAULT_DURATION: Duration = Duration::from_secs(25 * 60);
pub const STEP: Duration = Duration::from_secs(1);
pub const ALERT_COUNT: usize = 5;
pub const ALERT_SPACING: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Interval between display updates. Must be non-zero.
    pub step: Duration,
    pub alert_count: usize,
    pub alert_spacing: Duration,
    pub default_duration: Duration,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            step: STEP,
            alert_count: ALERT_COUNT,
            alert_spacing: ALERT_SPACING,
            default_duration: DEFAULT_DURATION,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.step, Duration::from_secs(1));
        assert_eq!(settings.alert_count, 5);
        assert_eq!(settings.alert_spacing, Duration::from_millis(300));
        assert_eq!(settings.default_duration, Duration::from_secs(1500));
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(Settings::new()).unwrap();
        assert_eq!(json["alert_count"], 5);
        assert_eq!(json["step"]["secs"], 1);
        assert_eq!(json["alert_spacing"]["nanos"], 300_000_000);
    }
}
