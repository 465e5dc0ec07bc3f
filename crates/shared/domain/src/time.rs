//! Relative time formatting ("5 minutes ago").
//!
//! Buckets are checked in ascending order and the first match wins. Months
//! are a flat 30 days; anything a flat 365 days or older is printed as a
//! calendar date in UTC.

use chrono::{DateTime, Utc};

use crate::constants::{
    CALENDAR_DATE_FORMAT, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
    SECONDS_PER_MONTH, SECONDS_PER_YEAR,
};

/// Format a Unix timestamp relative to the current time.
pub fn format_timestamp(timestamp: i64) -> String {
    format_timestamp_at(timestamp, Utc::now().timestamp())
}

/// Format a Unix timestamp relative to `now`.
///
/// Timestamps later than `now` are clamped and read as "0 seconds ago".
pub fn format_timestamp_at(timestamp: i64, now: i64) -> String {
    let delta = now.saturating_sub(timestamp).max(0);

    if delta < SECONDS_PER_MINUTE {
        format!("{} seconds ago", delta)
    } else if delta < SECONDS_PER_HOUR {
        format!("{} minutes ago", delta / SECONDS_PER_MINUTE)
    } else if delta < SECONDS_PER_DAY {
        format!("{} hours ago", delta / SECONDS_PER_HOUR)
    } else if delta < SECONDS_PER_MONTH {
        format!("{} days ago", delta / SECONDS_PER_DAY)
    } else if delta < SECONDS_PER_YEAR {
        format!("{} months ago", delta / SECONDS_PER_MONTH)
    } else {
        calendar_date(timestamp)
            // chrono covers roughly +/-262000 years; past that there is no date to print
            .unwrap_or_else(|| format!("{} years ago", delta / SECONDS_PER_YEAR))
    }
}

fn calendar_date(timestamp: i64) -> Option<String> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.format(CALENDAR_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2023-11-14T22:13:20Z
    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_seconds() {
        assert_eq!(format_timestamp_at(NOW - 45, NOW), "45 seconds ago");
        assert_eq!(format_timestamp_at(NOW, NOW), "0 seconds ago");
        assert_eq!(format_timestamp_at(NOW - 59, NOW), "59 seconds ago");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format_timestamp_at(NOW - 60, NOW), "1 minutes ago");
        assert_eq!(format_timestamp_at(NOW - 3_599, NOW), "59 minutes ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_timestamp_at(NOW - 7_200, NOW), "2 hours ago");
        assert_eq!(format_timestamp_at(NOW - 86_399, NOW), "23 hours ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(format_timestamp_at(NOW - 86_400, NOW), "1 days ago");
        assert_eq!(format_timestamp_at(NOW - 2_591_999, NOW), "29 days ago");
    }

    #[test]
    fn test_months() {
        assert_eq!(format_timestamp_at(NOW - 2_592_000, NOW), "1 months ago");
        assert_eq!(format_timestamp_at(NOW - 31_535_999, NOW), "12 months ago");
    }

    #[test]
    fn test_calendar_date_after_a_year() {
        assert_eq!(format_timestamp_at(NOW - 40_000_000, NOW), "Aug 08, 2022");
        assert_eq!(format_timestamp_at(NOW - 31_536_000, NOW), "Nov 14, 2022");
        assert_eq!(format_timestamp_at(0, NOW), "Jan 01, 1970");
    }

    #[test]
    fn test_future_timestamp_clamped() {
        assert_eq!(format_timestamp_at(NOW + 3_600, NOW), "0 seconds ago");
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert_eq!(
            format_timestamp_at(i64::MIN, NOW),
            format!("{} years ago", i64::MAX / SECONDS_PER_YEAR)
        );
    }

    #[test]
    fn test_relative_to_wall_clock() {
        let now = Utc::now().timestamp();
        // Leave slack for a second ticking over between the two clock reads
        let recent = format_timestamp(now - 45);
        assert!(recent == "45 seconds ago" || recent == "46 seconds ago");
        assert_eq!(format_timestamp(now - 7_200), "2 hours ago");
    }
}
