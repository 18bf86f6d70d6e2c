//! Display implementation for takt application messages.
//!
//! Converts structured `Message` variants into the human-readable text shown
//! on the terminal. All user-facing wording lives here, in one place, so the
//! rest of the codebase never embeds display strings directly.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::SessionStarted => "Session started. Tracking active time.".to_string(),
            Message::SessionAlreadyRunning => "Session is already running.".to_string(),
            Message::SessionPaused => "Session paused.".to_string(),
            Message::SessionNotRunning => "Session is not running.".to_string(),
            Message::SessionResumed => "Session resumed.".to_string(),
            Message::SessionSaved {
                total_seconds,
                inactive_seconds,
            } => format!("Saved {} seconds ({} sec inactive)", total_seconds, inactive_seconds),
            Message::NoTrackedTime => "No tracked time to save.".to_string(),
            Message::TrackerReady => "Tracker ready. Commands: start, pause, stop, upload, status, quit.".to_string(),
            Message::TrackerStopping => "Stopping tracker...".to_string(),
            Message::TrackerCommandUnknown(cmd) => format!("Unknown command: '{}'. Try start, pause, stop, upload, status or quit.", cmd),

            // === INACTIVITY MESSAGES ===
            Message::IdleStarted => "Inactivity detected".to_string(),
            Message::IdleEnded(seconds) => format!("Activity resumed after {} sec idle", seconds),

            // === SCREENSHOT MESSAGES ===
            Message::ScreenshotScheduled(delay) => format!("Next screenshot in {} sec", delay),
            Message::ScreenshotSaved(path) => format!("Screenshot saved: {}", path),
            Message::ScreenshotFailed(error) => format!("Screenshot failed: {}", error),
            Message::ScreenshotDirError(error) => format!("Failed to prepare screenshot directory: {}", error),

            // === DAILY LOG MESSAGES ===
            Message::DailyLogSaved(path) => format!("Daily log updated: {}", path),
            Message::DailyLogCorrupt(path) => format!("Daily log file is corrupt and was left untouched: {}", path),
            Message::NoLogsFound => "No logs found.".to_string(),
            Message::NoLogsForDate(date) => format!("No logs found for {}.", date),
            Message::LogsHeader => "Daily logs:".to_string(),

            // === UPLOAD MESSAGES ===
            Message::UploadSucceeded(body) => format!("Upload succeeded: {}", body),
            Message::UploadFailed(error) => format!("Upload failed: {}", error),
            Message::UploadStaleResult => "Ignoring upload result from a previous session".to_string(),
            Message::ConfirmUpload {
                total_seconds,
                inactive_seconds,
            } => format!("Upload {} seconds? (inactive: {})", total_seconds, inactive_seconds),
            Message::ServerNotConfigured => "No reporting server configured. Run 'takt init' first.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleTracker => "Tracker settings".to_string(),
            Message::ConfigModuleServer => "Reporting server settings".to_string(),
            Message::ConfigModuleIdentity => "Identity settings".to_string(),

            // === ACTIVITY LISTENER MESSAGES ===
            Message::ListenerRestarting(error) => format!("Input listener error: {}. Retrying in 1 second...", error),

            // === PROMPTS ===
            Message::PromptInactivityThreshold => "Enter inactivity threshold (seconds)".to_string(),
            Message::PromptTickInterval => "Enter tick interval (milliseconds)".to_string(),
            Message::PromptScreenshotFirstDelay => "Enter delay before the first screenshot (seconds)".to_string(),
            Message::PromptScreenshotMinDelay => "Enter minimum screenshot interval (seconds)".to_string(),
            Message::PromptScreenshotMaxDelay => "Enter maximum screenshot interval (seconds)".to_string(),
            Message::PromptUserId => "Enter user id".to_string(),
            Message::PromptTaskId => "Enter task id".to_string(),
            Message::PromptServerApiUrl => "Enter the reporting API URL".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidDate(date) => format!("Invalid date '{}'. Expected YYYY-MM-DD or 'today'.", date),
        };
        write!(f, "{}", text)
    }
}
