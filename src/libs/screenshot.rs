//! Screenshot scheduling and capture.
//!
//! The scheduler decides *when* a capture fires: a short fixed delay after
//! Start, then a uniformly random delay within a bounded range after every
//! fire. Captures are suppressed while an idle span is open and no schedule
//! survives a Pause or Stop — Start always re-arms from the initial delay.
//!
//! Randomness comes from a generator injected at construction, so tests can
//! seed the exact sequence of delays the scheduler will draw.
//!
//! Capture itself grabs the primary display, encodes PNG and writes a
//! timestamped file. Each capture runs as its own blocking unit of work, so
//! a slow grab never delays the tick; overlapping captures are permitted.

use anyhow::{anyhow, Result};
use chrono::Local;
use rand::rngs::StdRng;
use rand::Rng;
use screenshots::Screen;
use std::path::{Path, PathBuf};

/// Decides when the next screenshot fires.
#[derive(Debug)]
pub struct ScreenshotScheduler {
    /// Seconds from Start to the first capture.
    first_delay: i64,
    /// Bounds of the uniform random delay between subsequent captures.
    min_delay: i64,
    max_delay: i64,
    next_fire_epoch: Option<i64>,
    rng: StdRng,
}

impl ScreenshotScheduler {
    pub fn new(first_delay: i64, min_delay: i64, max_delay: i64, rng: StdRng) -> Self {
        Self {
            first_delay,
            min_delay,
            max_delay: max_delay.max(min_delay),
            next_fire_epoch: None,
            rng,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire_epoch.is_some()
    }

    /// Arms the schedule on Start. Returns the delay until the first fire.
    pub fn arm(&mut self, now: i64) -> i64 {
        self.next_fire_epoch = Some(now + self.first_delay);
        self.first_delay
    }

    /// Clears any pending fire. Called on Pause and Stop; a stale schedule
    /// must never leak into a later session.
    pub fn clear(&mut self) {
        self.next_fire_epoch = None;
    }

    /// Per-tick check. Fires when the schedule is armed, due, the session
    /// is running and no idle span is open. On fire the next slot is drawn
    /// from the random range and the chosen delay is returned.
    pub fn poll(&mut self, now: i64, running: bool, idle: bool) -> Option<i64> {
        if !running || idle {
            return None;
        }
        let due = self.next_fire_epoch?;
        if now < due {
            return None;
        }
        let delay = self.rng.gen_range(self.min_delay..=self.max_delay);
        self.next_fire_epoch = Some(now + delay);
        Some(delay)
    }
}

/// Grabs the primary display and writes it under the screenshot directory.
///
/// Files are named `YYYY-MM-DD_HH-MM-SS.png`.
pub struct Screenshotter {
    dir: PathBuf,
}

impl Screenshotter {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    /// Captures the full primary screen and saves it. Returns the file path.
    ///
    /// Blocking: callers dispatch this through `tokio::task::spawn_blocking`.
    pub fn capture_and_save(&self) -> Result<PathBuf> {
        let screen = Screen::all()
            .map_err(|e| anyhow!("{}", e))?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("no display found"))?;
        let image = screen.capture().map_err(|e| anyhow!("{}", e))?;

        let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let path = self.dir.join(format!("{}.png", timestamp));
        image.save(&path)?;
        Ok(path)
    }
}
