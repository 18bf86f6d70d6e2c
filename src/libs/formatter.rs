//! Time formatting utilities for user-facing display.
//!
//! All second counters shown by the tracker (elapsed time, inactive time,
//! daily totals) use the same "HH:MM:SS" rendering so the status line and
//! the log tables stay visually consistent.
//!
//! ## Format Specification
//!
//! - Hours, minutes and seconds are zero-padded to 2 digits
//! - Hours grow beyond 2 digits for counters over 100 hours
//! - Negative counts are clamped to "00:00:00"

use serde::{Deserialize, Serialize};

/// A daily log record flattened into display strings for table rendering.
///
/// Pre-formatting to strings keeps the table layer free of time arithmetic
/// and makes rows directly serializable for other output paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedDailyLog {
    /// The calendar date the record aggregates, as "YYYY-MM-DD".
    pub date: String,

    /// Total tracked seconds, rendered as "HH:MM:SS".
    pub total: String,

    /// Inactive seconds inside the total, rendered as "HH:MM:SS".
    pub inactive: String,

    /// Number of sessions folded into the record.
    pub sessions: usize,
}

/// Formats a second count into a "HH:MM:SS" string.
///
/// # Examples
///
/// ```rust
/// use takt::libs::formatter::format_seconds;
///
/// assert_eq!(format_seconds(0), "00:00:00");
/// assert_eq!(format_seconds(65), "00:01:05");
/// assert_eq!(format_seconds(3661), "01:01:01");
/// assert_eq!(format_seconds(-5), "00:00:00");
/// ```
pub fn format_seconds(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}
