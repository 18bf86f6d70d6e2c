//! Interactive tracking session command.
//!
//! Wires the tracking controller to its collaborators: configuration, the
//! platform data directories, the global input listener and an
//! entropy-seeded generator for the screenshot schedule, then hands control
//! to the tick loop until the user quits.

use crate::libs::activity::{shared_activity, RdevActivitySource};
use crate::libs::config::{Config, LOG_DIR_NAME, SCREENSHOT_DIR_NAME};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let tracker_config = config.tracker.unwrap_or_default();
    let identity = config.identity.unwrap_or_default();

    let storage = DataStorage::new();
    let log_dir = storage.get_dir(LOG_DIR_NAME)?;
    let screenshot_dir = storage
        .get_dir(SCREENSHOT_DIR_NAME)
        .map_err(|e| msg_error_anyhow!(Message::ScreenshotDirError(e.to_string())))?;

    let last_activity = shared_activity(Local::now().timestamp());
    let mut tracker = Tracker::new(
        tracker_config,
        identity,
        config.server.as_ref(),
        log_dir,
        screenshot_dir,
        last_activity,
        StdRng::from_entropy(),
    )?;

    tracker.run(&RdevActivitySource).await
}
