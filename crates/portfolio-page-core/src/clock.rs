//! Live clock rendering.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

use crate::config::ClockConfig;

const DATE_FORMAT: &str = "%A, %B %-d, %Y";
const TIME_FORMAT_12H: &str = "%I:%M:%S %p";
const TIME_FORMAT_24H: &str = "%H:%M:%S";

/// Render a timestamp the way an en-US browser prints a long date with a
/// two-digit time, e.g. `🕐 Saturday, October 18, 2026 at 03:04:05 PM`.
#[must_use]
pub fn format_clock<Tz>(now: &DateTime<Tz>, config: &ClockConfig) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let time_format = if config.hour12 {
        TIME_FORMAT_12H
    } else {
        TIME_FORMAT_24H
    };
    format!(
        "{}{} at {}",
        config.prefix,
        now.format(DATE_FORMAT),
        now.format(time_format)
    )
}

/// Current wall-clock time in the host's zone.
#[must_use]
pub fn now_local() -> DateTime<Local> {
    Local::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn afternoon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 15, 4, 5).unwrap()
    }

    #[test]
    fn twelve_hour_rendering() {
        let text = format_clock(&afternoon(), &ClockConfig::default());
        assert_eq!(text, "🕐 Sunday, October 18, 2026 at 03:04:05 PM");
    }

    #[test]
    fn twenty_four_hour_rendering() {
        let config = ClockConfig {
            hour12: false,
            ..ClockConfig::default()
        };
        let text = format_clock(&afternoon(), &config);
        assert!(text.ends_with("at 15:04:05"), "{text}");
    }

    #[test]
    fn day_is_not_zero_padded() {
        let morning = Utc.with_ymd_and_hms(2026, 3, 7, 9, 0, 0).unwrap();
        let text = format_clock(&morning, &ClockConfig::default());
        assert_eq!(text, "🕐 Saturday, March 7, 2026 at 09:00:00 AM");
    }

    #[test]
    fn renders_in_the_given_zone() {
        let kigali = FixedOffset::east_opt(2 * 3600).unwrap();
        let text = format_clock(&afternoon().with_timezone(&kigali), &ClockConfig::default());
        assert!(text.ends_with("at 05:04:05 PM"), "{text}");
    }

    #[test]
    fn custom_prefix() {
        let config = ClockConfig {
            prefix: String::new(),
            ..ClockConfig::default()
        };
        assert!(format_clock(&afternoon(), &config).starts_with("Sunday"));
    }
}
