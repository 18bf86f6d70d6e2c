use super::formatter::{format_seconds, FormattedDailyLog};
use anyhow::Result;
use prettytable::{row, Table};
use std::io::{stdout, Write};

pub struct View {}

impl View {
    pub fn logs(logs: &Vec<FormattedDailyLog>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TOTAL", "INACTIVE", "SESSIONS"]);
        for log in logs {
            table.add_row(row![log.date, log.total, log.inactive, log.sessions]);
        }
        table.printstd();

        Ok(())
    }

    // One-line tick status, rewritten in place with a carriage return.
    pub fn status(state: &str, elapsed_seconds: i64, inactive_seconds: i64) -> Result<()> {
        print!(
            "\r[{}] {}  inactive {}   ",
            state,
            format_seconds(elapsed_seconds),
            format_seconds(inactive_seconds)
        );
        stdout().flush()?;
        Ok(())
    }

    // Moves off the status line before printing regular messages.
    pub fn end_status_line() {
        println!();
    }
}
