//! "Last Updated" timestamps.
//!
//! Timestamps are captured in a fixed UTC offset (IST, `+05:30`, unless
//! configured otherwise) and stored as display strings such as
//! `on 1 Jan 2025 at 10:00:00 AM`.

use chrono::{DateTime, FixedOffset, Utc};

use crate::errors::{PwdManagerError, Result};

/// Default offset from UTC in minutes (IST).
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

/// Build a `FixedOffset` from a number of minutes east of UTC.
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            PwdManagerError::ConfigError(format!(
                "UTC offset of {minutes} minutes is out of range"
            ))
        })
}

/// The current instant in the given offset.
pub fn now_in(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}

/// Format an instant for the "Last Updated" column.
///
/// Uses a 12-hour clock without a leading zero on the hour.
pub fn format_timestamp(at: DateTime<FixedOffset>) -> String {
    at.format("on %-d %b %Y at %-I:%M:%S %p").to_string()
}

/// Shortcut: format the current instant in `offset`.
pub fn timestamp_now(offset: FixedOffset) -> String {
    format_timestamp(now_in(offset))
}
