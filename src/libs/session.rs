//! Session clock: run state and accumulated active seconds.
//!
//! The clock is the leaf of the tracking core. It owns the running flag and
//! the accumulated counter, and is mutated only by the Start, Pause and Stop
//! transitions. All timestamps are integer epoch seconds supplied by the
//! caller, which keeps the transitions deterministic and directly testable.
//!
//! Deltas truncate to whole seconds (floor), so repeated pause/resume cycles
//! can lose at most a fraction of a second each but never gain time.

/// Tracks one work session's run state and accumulated seconds.
///
/// Invariant: `start_epoch` is `Some` exactly while `running` is true.
#[derive(Debug, Default)]
pub struct SessionClock {
    running: bool,
    start_epoch: Option<i64>,
    accumulated_seconds: i64,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts the session at `now`. Returns `false` without touching any
    /// state when the session is already running.
    pub fn start(&mut self, now: i64) -> bool {
        if self.running {
            return false;
        }
        self.start_epoch = Some(now);
        self.running = true;
        true
    }

    /// Pauses the session, folding the in-progress delta into the
    /// accumulator. Returns `false` without touching any state when the
    /// session is not running.
    pub fn pause(&mut self, now: i64) -> bool {
        let Some(start) = self.start_epoch else {
            return false;
        };
        self.accumulated_seconds += (now - start).max(0);
        self.start_epoch = None;
        self.running = false;
        true
    }

    /// Stops the session and returns the final total.
    ///
    /// Valid in any state: a running session folds its open delta first, a
    /// paused one just surrenders the accumulator. The clock is reset to
    /// zero afterwards. A returned total of 0 is the distinguished
    /// "nothing to save" outcome.
    pub fn stop(&mut self, now: i64) -> i64 {
        if let Some(start) = self.start_epoch {
            self.accumulated_seconds += (now - start).max(0);
        }
        let total = self.accumulated_seconds;
        self.accumulated_seconds = 0;
        self.start_epoch = None;
        self.running = false;
        total
    }

    /// Read-only view of the elapsed seconds as of `now`. Never mutates
    /// state; used by the display on every tick.
    pub fn elapsed_now(&self, now: i64) -> i64 {
        match self.start_epoch {
            Some(start) => self.accumulated_seconds + (now - start).max(0),
            None => self.accumulated_seconds,
        }
    }
}
