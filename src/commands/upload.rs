//! On-demand upload of a persisted daily record.
//!
//! Re-reads the record for the requested date from disk — never from session
//! memory — shows the totals for confirmation and submits them once. A
//! failed submission is reported and discarded; the record stays on disk.

use crate::api::server::{Server, UploadPayload};
use crate::libs::config::{Config, LOG_DIR_NAME};
use crate::libs::daily_log::{DailyLog, DailyLogError};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Command-line arguments for the upload command.
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Date of the record to upload (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

pub async fn cmd(args: UploadArgs) -> Result<()> {
    let date = match parse_date(&args.date) {
        Some(date) => date,
        None => {
            msg_error!(Message::InvalidDate(args.date));
            return Ok(());
        }
    };

    let config = Config::read()?;
    let Some(server_config) = config.server else {
        msg_info!(Message::ServerNotConfigured);
        return Ok(());
    };

    let daily_log = DailyLog::new(DataStorage::new().get_dir(LOG_DIR_NAME)?);
    let record = match daily_log.load(date) {
        Ok(Some(record)) => record,
        Ok(None) => {
            msg_info!(Message::NoLogsForDate(date.format("%Y-%m-%d").to_string()));
            return Ok(());
        }
        Err(DailyLogError::Corrupt { path, .. }) => {
            msg_error!(Message::DailyLogCorrupt(path.display().to_string()));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(
                Message::ConfirmUpload {
                    total_seconds: record.total_seconds,
                    inactive_seconds: record.inactive_seconds,
                }
                .to_string(),
            )
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let identity = config.identity.unwrap_or_default();
    let payload = UploadPayload::new(
        identity.user_id,
        identity.task_id,
        date,
        record.total_seconds,
        record.inactive_seconds,
    );

    let (ok, body) = Server::new(&server_config)?.upload(&payload).await;
    if ok {
        msg_success!(Message::UploadSucceeded(body));
    } else {
        msg_error!(Message::UploadFailed(body));
    }
    Ok(())
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if input.eq_ignore_ascii_case("today") {
        return Some(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}
