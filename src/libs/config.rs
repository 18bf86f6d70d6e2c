//! Configuration management for the takt application.
//!
//! Handles the timing parameters of the tracking core, the identity attached
//! to uploaded records and the reporting server endpoint. Supports both
//! programmatic configuration and an interactive setup wizard.
//!
//! ## Configuration Structure
//!
//! Each concern has its own optional section:
//!
//! - **Tracker Config**: inactivity threshold, tick interval and the
//!   screenshot scheduling bounds
//! - **Identity Config**: the user/task pair stamped onto records
//! - **Server Config**: the HTTP endpoint daily records are submitted to
//!
//! Sections a user never configured are absent from the file and fall back
//! to defaults at the point of use.
//!
//! ## Storage
//!
//! The configuration is one JSON document in the platform application data
//! directory (see [`DataStorage`]). A missing file is not an error: reading
//! it yields the default configuration, which can run a complete local
//! tracking session without any setup.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use takt::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load existing configuration or create default
//! let config = Config::read()?;
//!
//! // Run interactive configuration setup
//! let updated_config = Config::init()?;
//! updated_config.save()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Subdirectory of the data directory holding daily log documents.
pub const LOG_DIR_NAME: &str = "logs";

/// Subdirectory of the data directory holding captured screenshots.
pub const SCREENSHOT_DIR_NAME: &str = "screenshots";

/// Timing parameters of the tracking core.
///
/// All values are calibrated against the original deployment defaults: a
/// 60-second inactivity threshold, a 1-second tick, the first screenshot
/// 10 seconds into a session and follow-up captures every 30–120 seconds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Inactivity threshold in seconds before an idle span opens.
    ///
    /// When no input event is observed for this long, the tracker starts
    /// counting inactive time. The span is backdated to the moment this
    /// threshold was crossed, not to the tick that noticed it.
    pub inactivity_threshold: u64,

    /// Tick interval in milliseconds for the main scheduling loop.
    ///
    /// Display, idle detection and screenshot checks all run on this tick.
    /// The accounting itself is based on epoch timestamps, so a delayed
    /// tick never loses seconds.
    pub tick_interval: u64,

    /// Seconds from Start until the first screenshot.
    pub screenshot_first_delay: u64,

    /// Lower bound in seconds of the random interval between screenshots.
    pub screenshot_min_delay: u64,

    /// Upper bound in seconds of the random interval between screenshots.
    pub screenshot_max_delay: u64,
}

/// The user/task pair stamped onto log entries and upload payloads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IdentityConfig {
    pub user_id: i64,
    pub task_id: i64,
}

/// Reporting server endpoint for daily record submission.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Full URL of the time-record ingestion endpoint.
    ///
    /// Example: `https://api.company.com/api/store-time-tracking`
    pub api_url: String,
}

/// Root configuration object.
///
/// The `skip_serializing_if` attributes keep unconfigured sections out of
/// the JSON output, so configuration files stay clean and focused.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Tracking core timing parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,

    /// Identity attached to records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<IdentityConfig>,

    /// Reporting server endpoint.
    ///
    /// Without this section, sessions are tracked and persisted locally
    /// and every upload path reports that no server is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            inactivity_threshold: 60,
            tick_interval: 1000,
            screenshot_first_delay: 10,
            screenshot_min_delay: 30,
            screenshot_max_delay: 120,
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig { user_id: 10, task_id: 1 }
    }
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file yields the default configuration; a present but
    /// unparsable file is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON in the application
    /// data directory, overwriting any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents a multi-select of the configurable modules and prompts for
    /// each selected one, pre-filling current values as defaults. Returns
    /// the updated configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = ["Tracker", "Identity", "Server"];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Tracker" => {
                    let default = config.tracker.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTracker);
                    config.tracker = Some(TrackerConfig {
                        inactivity_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptInactivityThreshold.to_string())
                            .default(default.inactivity_threshold)
                            .interact_text()?,
                        tick_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTickInterval.to_string())
                            .default(default.tick_interval)
                            .interact_text()?,
                        screenshot_first_delay: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptScreenshotFirstDelay.to_string())
                            .default(default.screenshot_first_delay)
                            .interact_text()?,
                        screenshot_min_delay: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptScreenshotMinDelay.to_string())
                            .default(default.screenshot_min_delay)
                            .interact_text()?,
                        screenshot_max_delay: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptScreenshotMaxDelay.to_string())
                            .default(default.screenshot_max_delay)
                            .interact_text()?,
                    });
                }
                "Identity" => {
                    let default = config.identity.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleIdentity);
                    config.identity = Some(IdentityConfig {
                        user_id: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUserId.to_string())
                            .default(default.user_id)
                            .interact_text()?,
                        task_id: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTaskId.to_string())
                            .default(default.task_id)
                            .interact_text()?,
                    });
                }
                "Server" => {
                    let default = config.server.clone().unwrap_or(ServerConfig { api_url: String::new() });
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
