//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 9;

// =============================================================================
// Votes
// =============================================================================

/// Stored value for an up vote
pub const VOTE_UP: &str = "up";

/// Stored value for a down vote
pub const VOTE_DOWN: &str = "down";

// =============================================================================
// Relative time
// =============================================================================

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// A "month" in relative-time output is a flat 30 days
pub const SECONDS_PER_MONTH: i64 = 2_592_000;

/// A "year" in relative-time output is a flat 365 days
pub const SECONDS_PER_YEAR: i64 = 31_536_000;

/// Calendar format used once a timestamp is a year or more old ("Jan 05, 2024")
pub const CALENDAR_DATE_FORMAT: &str = "%b %d, %Y";
