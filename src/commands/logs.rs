//! Display persisted daily logs.
//!
//! Lists every daily record found in the log directory, newest first, with
//! its accumulated totals and session count. Unreadable files are skipped,
//! matching the read-only nature of the view.

use crate::libs::config::LOG_DIR_NAME;
use crate::libs::daily_log::DailyLog;
use crate::libs::data_storage::DataStorage;
use crate::libs::formatter::{format_seconds, FormattedDailyLog};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let daily_log = DailyLog::new(DataStorage::new().get_dir(LOG_DIR_NAME)?);

    let records = daily_log.list()?;
    if records.is_empty() {
        msg_info!(Message::NoLogsFound);
        return Ok(());
    }

    let formatted: Vec<FormattedDailyLog> = records
        .iter()
        .map(|(date, record)| FormattedDailyLog {
            date: date.format("%Y-%m-%d").to_string(),
            total: format_seconds(record.total_seconds),
            inactive: format_seconds(record.inactive_seconds),
            sessions: record.entries.len(),
        })
        .collect();

    msg_print!(Message::LogsHeader);
    View::logs(&formatted)?;
    Ok(())
}
