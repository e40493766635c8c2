//! Time utilities: rendering epoch timestamps and durations for humans.

use crate::errors::{AppError, AppResult};
use crate::models::Timestamp;
use chrono::DateTime;

/// Render an epoch-seconds timestamp (UTC) with a chrono format string.
pub fn format_timestamp(ts: Timestamp, fmt: &str) -> AppResult<String> {
    let secs = i64::try_from(ts).map_err(|_| AppError::InvalidTimestamp(ts))?;
    let dt = DateTime::from_timestamp(secs, 0).ok_or(AppError::InvalidTimestamp(ts))?;
    Ok(dt.format(fmt).to_string())
}

/// Like `format_timestamp`, but falls back to the raw number.
pub fn format_timestamp_lossy(ts: Timestamp, fmt: &str) -> String {
    format_timestamp(ts, fmt).unwrap_or_else(|_| ts.to_string())
}

/// `3725` -> `01h 02m 05s`
pub fn secs2readable(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{:02}h {:02}m {:02}s", hours, minutes, seconds)
}
