//! Global input activity feed.
//!
//! The tracking core only needs "some input happened at time T". Platform
//! hooks are abstracted behind [`ActivitySource`]; the production backend
//! listens for keyboard, mouse button, mouse move and wheel events through
//! `rdev` on a dedicated thread.
//!
//! The hook thread never touches session state. It performs a single
//! timestamp exchange into a shared epoch cell; the tick loop reads the cell
//! and applies any folding itself. Coalescing a burst of events into one
//! timestamp update is correct, the tick only ever needs the newest value.

use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::Local;
use parking_lot::Mutex;
use rdev::{listen, Event, EventType};
use std::sync::Arc;
use std::time::Duration;

/// Newest activity epoch, shared between the hook thread and the tick loop.
pub type SharedActivity = Arc<Mutex<i64>>;

pub fn shared_activity(now: i64) -> SharedActivity {
    Arc::new(Mutex::new(now))
}

/// A source of global input activity notifications.
///
/// Implementations publish the epoch of every observed input event into the
/// given cell. Swapping the backend (per target OS, or a scripted feed in
/// tests) never touches the core.
pub trait ActivitySource {
    fn subscribe(&self, last_activity: SharedActivity) -> Result<()>;
}

/// Production backend on `rdev`'s global listener.
pub struct RdevActivitySource;

impl ActivitySource for RdevActivitySource {
    /// Spawns the listener thread. `rdev::listen` blocks for the life of
    /// the hook; on error the listener is restarted after a short delay so
    /// monitoring survives transient hook failures.
    fn subscribe(&self, last_activity: SharedActivity) -> Result<()> {
        std::thread::spawn(move || loop {
            let cell = last_activity.clone();
            if let Err(e) = listen(move |event: Event| match event.event_type {
                EventType::KeyPress(_) | EventType::ButtonPress(_) | EventType::MouseMove { .. } | EventType::Wheel { .. } => {
                    *cell.lock() = Local::now().timestamp();
                }
                _ => {}
            }) {
                msg_warning!(Message::ListenerRestarting(format!("{:?}", e)));
                std::thread::sleep(Duration::from_secs(1));
            } else {
                // listen() returning without error means the hook was shut
                // down by the host; do not respawn it.
                break;
            }
        });
        Ok(())
    }
}
