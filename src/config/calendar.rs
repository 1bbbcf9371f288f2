//! Calendar configuration

use chrono::FixedOffset;
use serde::Deserialize;

use super::error::ValidationError;

const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// How "today" is determined.
///
/// The schedule epoch and length are fixed; only the local offset used to
/// turn the current instant into a date is configurable.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Offset from UTC in minutes. Defaults to +09:00.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_minutes: i32,
}

impl CalendarConfig {
    pub fn offset(&self) -> Result<FixedOffset, ValidationError> {
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ValidationError::InvalidUtcOffset(self.utc_offset_minutes));
        }
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .ok_or(ValidationError::InvalidUtcOffset(self.utc_offset_minutes))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.offset().map(|_| ())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset(),
        }
    }
}

fn default_utc_offset() -> i32 {
    540
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offset_is_plus_nine_hours() {
        let offset = CalendarConfig::default().offset().unwrap();
        assert_eq!(offset.local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn negative_offsets_are_allowed() {
        let config = CalendarConfig {
            utc_offset_minutes: -300,
        };
        assert_eq!(config.offset().unwrap().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn offset_beyond_fourteen_hours_is_rejected() {
        let config = CalendarConfig {
            utc_offset_minutes: 15 * 60,
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidUtcOffset(900)));
    }
}
