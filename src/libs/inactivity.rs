//! Inactivity tracking: threshold-based idle accumulation.
//!
//! The tracker watches the gap between "now" and the newest activity
//! timestamp. Once the gap exceeds the configured threshold, an idle span is
//! opened — and it is deemed to have begun exactly at the threshold
//! boundary (`last_activity + threshold`), not at the tick that noticed it.
//! Opening at the boundary keeps the seconds that passed between crossing
//! the threshold and observing it inside the span, so idle time is never
//! undercounted by tick latency.
//!
//! A span is closed (folded into the accumulator) by the first of: a new
//! activity event, a Pause, or a Stop. Spans only exist while the session
//! runs; activity arriving while stopped merely advances the timestamp.

/// Accumulates inactive seconds for a running session.
#[derive(Debug)]
pub struct InactivityTracker {
    /// Idle duration in seconds that must elapse before a span opens.
    threshold: i64,
    last_activity_epoch: i64,
    inactive_since_epoch: Option<i64>,
    accumulated_inactive_seconds: i64,
}

impl InactivityTracker {
    pub fn new(threshold: i64, now: i64) -> Self {
        Self {
            threshold,
            last_activity_epoch: now,
            inactive_since_epoch: None,
            accumulated_inactive_seconds: 0,
        }
    }

    /// True while an idle span is open. Screenshot captures are suppressed
    /// during this window.
    pub fn is_idle(&self) -> bool {
        self.inactive_since_epoch.is_some()
    }

    pub fn last_activity_epoch(&self) -> i64 {
        self.last_activity_epoch
    }

    /// Registers an activity event observed at `event_epoch`.
    ///
    /// If an idle span is open, the span up to the event is folded into the
    /// accumulator and returned; the caller may surface it. The activity
    /// timestamp always advances, running or not.
    pub fn on_activity(&mut self, event_epoch: i64) -> Option<i64> {
        let folded = self.inactive_since_epoch.take().map(|since| {
            let span = (event_epoch - since).max(0);
            self.accumulated_inactive_seconds += span;
            span
        });
        if event_epoch > self.last_activity_epoch {
            self.last_activity_epoch = event_epoch;
        }
        folded
    }

    /// Per-tick evaluation while the session is running. Opens an idle span
    /// at the threshold boundary when the gap since the newest activity
    /// exceeds the threshold. Returns `true` on the tick that opens a span.
    pub fn on_tick(&mut self, now: i64) -> bool {
        let idle = now - self.last_activity_epoch;
        if idle > self.threshold && self.inactive_since_epoch.is_none() {
            self.inactive_since_epoch = Some(self.last_activity_epoch + self.threshold);
            return true;
        }
        false
    }

    /// Folds any open idle span as of `now` and clears it. Pause and Stop
    /// must call this before finalizing totals, exactly as an activity
    /// event would, or the last span would be lost.
    pub fn fold_open_span(&mut self, now: i64) -> Option<i64> {
        self.inactive_since_epoch.take().map(|since| {
            let span = (now - since).max(0);
            self.accumulated_inactive_seconds += span;
            span
        })
    }

    /// Inactive seconds shown while running: the accumulator plus the open
    /// span as of `now`. Read-only.
    pub fn total_now(&self, now: i64) -> i64 {
        let current = match self.inactive_since_epoch {
            Some(since) => (now - since).max(0),
            None => 0,
        };
        self.accumulated_inactive_seconds + current
    }

    /// Completed (folded) inactive seconds.
    pub fn accumulated(&self) -> i64 {
        self.accumulated_inactive_seconds
    }

    /// Resets the accumulator for a fresh session. The activity timestamp
    /// is kept; inactivity before a Start never counts against it.
    pub fn reset(&mut self, now: i64) {
        self.inactive_since_epoch = None;
        self.accumulated_inactive_seconds = 0;
        if now > self.last_activity_epoch {
            self.last_activity_epoch = now;
        }
    }
}
