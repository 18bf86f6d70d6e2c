//! The tracking controller: tick loop, transitions and background I/O.
//!
//! One `Tracker` owns the session clock, the inactivity tracker and the
//! screenshot scheduler, and drives them from a single periodic tick on the
//! control task. Nothing else mutates that state:
//!
//! - the input hook thread only publishes the newest activity epoch into a
//!   shared cell, which the tick observes;
//! - screenshot captures and uploads run in spawned tasks and report back
//!   over an mpsc channel consumed by the control loop;
//! - control commands (start/pause/stop/...) arrive as stdin lines.
//!
//! Background results are tagged with a session generation. Stop bumps the
//! generation, so a capture still in flight when the session ends cannot be
//! attributed to a later one.

use crate::api::server::{Server, UploadPayload};
use crate::libs::activity::{ActivitySource, SharedActivity};
use crate::libs::config::{IdentityConfig, ServerConfig, TrackerConfig};
use crate::libs::daily_log::{DailyLog, DailyLogError};
use crate::libs::inactivity::InactivityTracker;
use crate::libs::messages::Message;
use crate::libs::screenshot::{ScreenshotScheduler, Screenshotter};
use crate::libs::session::SessionClock;
use crate::libs::view::View;
use crate::{msg_debug, msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{self, Duration, MissedTickBehavior};

/// Results delivered back to the control loop by background units of work.
#[derive(Debug)]
pub enum BackgroundResult {
    Capture {
        generation: u64,
        outcome: Result<PathBuf, String>,
    },
    Upload {
        generation: u64,
        ok: bool,
        body: String,
    },
}

/// Control commands accepted on stdin during a tracking session.
#[derive(Debug, PartialEq)]
enum Command {
    Start,
    Pause,
    Stop,
    Upload,
    Status,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "start" | "resume" => Command::Start,
            "pause" => Command::Pause,
            "stop" => Command::Stop,
            "upload" => Command::Upload,
            "status" => Command::Status,
            "quit" | "exit" | "q" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Result of finalizing a session at Stop.
#[derive(Debug)]
pub struct StopOutcome {
    pub total_seconds: i64,
    pub inactive_seconds: i64,
    /// Where the daily record was written; `None` for the distinguished
    /// "nothing to save" outcome (total of zero).
    pub saved_to: Option<PathBuf>,
}

pub struct Tracker {
    config: TrackerConfig,
    identity: IdentityConfig,
    server: Option<Server>,
    clock: SessionClock,
    inactivity: InactivityTracker,
    scheduler: ScreenshotScheduler,
    screenshotter: Arc<Screenshotter>,
    daily_log: DailyLog,
    last_activity: SharedActivity,
    last_seen_activity: i64,
    generation: u64,
    results_tx: mpsc::Sender<BackgroundResult>,
    results_rx: mpsc::Receiver<BackgroundResult>,
}

impl Tracker {
    /// Builds a tracker around explicit directories, a shared activity cell
    /// and an injected random generator for the screenshot schedule.
    pub fn new(
        config: TrackerConfig,
        identity: IdentityConfig,
        server: Option<&ServerConfig>,
        log_dir: PathBuf,
        screenshot_dir: PathBuf,
        last_activity: SharedActivity,
        rng: StdRng,
    ) -> Result<Self> {
        // The cell's initial value is the session-agnostic "newest activity"
        // baseline; idle detection counts from it until real events arrive.
        let now = *last_activity.lock();
        let server = server.map(Server::new).transpose()?;
        let scheduler = ScreenshotScheduler::new(
            config.screenshot_first_delay as i64,
            config.screenshot_min_delay as i64,
            config.screenshot_max_delay as i64,
            rng,
        );
        let (results_tx, results_rx) = mpsc::channel(64);
        let last_seen_activity = *last_activity.lock();
        Ok(Self {
            inactivity: InactivityTracker::new(config.inactivity_threshold as i64, now),
            config,
            identity,
            server,
            clock: SessionClock::new(),
            scheduler,
            screenshotter: Arc::new(Screenshotter::new(screenshot_dir)),
            daily_log: DailyLog::new(log_dir),
            last_seen_activity,
            last_activity,
            generation: 0,
            results_tx,
            results_rx,
        })
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn elapsed_at(&self, now: i64) -> i64 {
        self.clock.elapsed_now(now)
    }

    pub fn inactive_at(&self, now: i64) -> i64 {
        if self.clock.is_running() {
            self.inactivity.total_now(now)
        } else {
            self.inactivity.accumulated()
        }
    }

    /// Starts (or resumes) the session. Idempotent while running.
    pub fn start_at(&mut self, now: i64) -> bool {
        if !self.clock.start(now) {
            return false;
        }
        let delay = self.scheduler.arm(now);
        msg_debug!(Message::ScreenshotScheduled(delay));
        true
    }

    /// Pauses the session, folding the open idle span and dropping any
    /// pending screenshot slot. Idempotent while not running.
    pub fn pause_at(&mut self, now: i64) -> bool {
        if !self.clock.pause(now) {
            return false;
        }
        self.inactivity.fold_open_span(now);
        self.scheduler.clear();
        true
    }

    /// Stops the session: folds the open idle span, takes the final totals,
    /// clears the schedule, persists a non-empty session into the daily
    /// record and resets the accounting for the next session.
    ///
    /// The generation is bumped, so capture results still in flight are
    /// recognized as belonging to the finished session.
    pub fn stop_at(&mut self, now: i64, stopped_at: NaiveDateTime) -> Result<StopOutcome, DailyLogError> {
        self.inactivity.fold_open_span(now);
        let total = self.clock.stop(now);
        self.scheduler.clear();
        let inactive = self.inactivity.accumulated();

        let saved_to = if total > 0 {
            let (path, _) = self.daily_log.append(
                stopped_at.date(),
                stopped_at,
                total,
                inactive,
                self.identity.user_id,
                self.identity.task_id,
            )?;
            Some(path)
        } else {
            None
        };

        self.inactivity.reset(now);
        self.generation += 1;
        Ok(StopOutcome {
            total_seconds: total,
            inactive_seconds: inactive,
            saved_to,
        })
    }

    /// One tick: observe the newest activity epoch, advance idle detection
    /// and fire a due screenshot. Returns `true` when a capture was
    /// dispatched (the decision; dispatch itself is non-blocking).
    pub fn tick_at(&mut self, now: i64) -> bool {
        let newest = *self.last_activity.lock();
        if newest > self.last_seen_activity {
            self.last_seen_activity = newest;
            if let Some(folded) = self.inactivity.on_activity(newest) {
                msg_debug!(Message::IdleEnded(folded));
            }
        }

        if self.clock.is_running() && self.inactivity.on_tick(now) {
            msg_debug!(Message::IdleStarted);
        }

        match self.scheduler.poll(now, self.clock.is_running(), self.inactivity.is_idle()) {
            Some(next_delay) => {
                msg_debug!(Message::ScreenshotScheduled(next_delay));
                self.dispatch_capture();
                true
            }
            None => false,
        }
    }

    /// Runs the interactive control loop until `quit` or Ctrl-C.
    pub async fn run(&mut self, source: &dyn ActivitySource) -> Result<()> {
        source.subscribe(self.last_activity.clone())?;
        msg_print!(Message::TrackerReady);

        let mut interval = time::interval(Duration::from_millis(self.config.tick_interval));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    // Background results are consumed here, on the tick,
                    // never from the tasks that produced them.
                    while let Ok(result) = self.results_rx.try_recv() {
                        self.handle_result(result);
                    }
                    let now = Local::now().timestamp();
                    self.tick_at(now);
                    self.render_status(now)?;
                }
                line = lines.next_line() => {
                    match line? {
                        Some(line) if line.trim().is_empty() => {}
                        Some(line) => {
                            View::end_status_line();
                            if self.handle_command(Command::parse(&line)) {
                                break;
                            }
                        }
                        // stdin closed; treat like quit
                        None => {
                            View::end_status_line();
                            self.finalize();
                            break;
                        }
                    }
                }
                _ = &mut ctrl_c => {
                    View::end_status_line();
                    msg_print!(Message::TrackerStopping);
                    self.finalize();
                    break;
                }
            }
        }
        Ok(())
    }

    /// Applies one control command. Returns `true` when the loop should end.
    fn handle_command(&mut self, command: Command) -> bool {
        let now = Local::now().timestamp();
        match command {
            Command::Start => {
                let resumed = self.clock.elapsed_now(now) > 0;
                if self.start_at(now) {
                    msg_print!(if resumed { Message::SessionResumed } else { Message::SessionStarted });
                } else {
                    msg_info!(Message::SessionAlreadyRunning);
                }
            }
            Command::Pause => {
                if self.pause_at(now) {
                    msg_print!(Message::SessionPaused);
                } else {
                    msg_info!(Message::SessionNotRunning);
                }
            }
            Command::Stop => self.finalize(),
            Command::Upload => self.upload_today(),
            Command::Status => {
                let _ = self.render_status(now);
                View::end_status_line();
            }
            Command::Quit => {
                self.finalize();
                return true;
            }
            Command::Unknown(cmd) => {
                msg_info!(Message::TrackerCommandUnknown(cmd));
            }
        }
        false
    }

    /// Stop path shared by the `stop` command, `quit` and Ctrl-C: persist
    /// the session and fire the automatic upload of the saved numbers.
    fn finalize(&mut self) {
        let now = Local::now();
        match self.stop_at(now.timestamp(), now.naive_local()) {
            Ok(outcome) => match outcome.saved_to {
                Some(path) => {
                    msg_success!(Message::SessionSaved {
                        total_seconds: outcome.total_seconds,
                        inactive_seconds: outcome.inactive_seconds,
                    });
                    msg_debug!(Message::DailyLogSaved(path.display().to_string()));
                    let payload = UploadPayload::new(
                        self.identity.user_id,
                        self.identity.task_id,
                        now.date_naive(),
                        outcome.total_seconds,
                        outcome.inactive_seconds,
                    );
                    self.dispatch_upload(payload);
                }
                None => msg_info!(Message::NoTrackedTime),
            },
            Err(DailyLogError::Corrupt { path, .. }) => {
                msg_error!(Message::DailyLogCorrupt(path.display().to_string()));
            }
            Err(e) => msg_error!(e),
        }
    }

    /// On-demand replay of today's persisted record, independent of any
    /// session memory.
    fn upload_today(&mut self) {
        let today = Local::now().date_naive();
        match self.daily_log.load(today) {
            Ok(Some(record)) => {
                msg_info!(Message::ConfirmUpload {
                    total_seconds: record.total_seconds,
                    inactive_seconds: record.inactive_seconds,
                });
                let payload = UploadPayload::new(
                    self.identity.user_id,
                    self.identity.task_id,
                    today,
                    record.total_seconds,
                    record.inactive_seconds,
                );
                self.dispatch_upload(payload);
            }
            Ok(None) => msg_info!(Message::NoLogsForDate(today.format("%Y-%m-%d").to_string())),
            Err(DailyLogError::Corrupt { path, .. }) => {
                msg_error!(Message::DailyLogCorrupt(path.display().to_string()));
            }
            Err(e) => msg_error!(e),
        }
    }

    fn handle_result(&mut self, result: BackgroundResult) {
        match result {
            BackgroundResult::Capture { generation, outcome } => {
                if generation != self.generation {
                    // Late capture from a finished session; nothing to update.
                    return;
                }
                match outcome {
                    Ok(path) => msg_debug!(Message::ScreenshotSaved(path.display().to_string())),
                    Err(e) => {
                        View::end_status_line();
                        msg_error!(Message::ScreenshotFailed(e));
                    }
                }
            }
            BackgroundResult::Upload { generation, ok, body } => {
                if generation != self.generation {
                    msg_debug!(Message::UploadStaleResult);
                }
                View::end_status_line();
                if ok {
                    msg_success!(Message::UploadSucceeded(body));
                } else {
                    msg_error!(Message::UploadFailed(body));
                }
            }
        }
    }

    /// Fires one capture as an independent blocking unit of work.
    fn dispatch_capture(&self) {
        let screenshotter = self.screenshotter.clone();
        let tx = self.results_tx.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            let outcome = match tokio::task::spawn_blocking(move || screenshotter.capture_and_save()).await {
                Ok(Ok(path)) => Ok(path),
                Ok(Err(e)) => Err(e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            let _ = tx.send(BackgroundResult::Capture { generation, outcome }).await;
        });
    }

    /// Fires one upload, fire-and-forget. Failures come back over the
    /// channel as display-only results; nothing is retried or queued.
    fn dispatch_upload(&self, payload: UploadPayload) {
        let Some(server) = self.server.clone() else {
            msg_info!(Message::ServerNotConfigured);
            return;
        };
        let tx = self.results_tx.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            let (ok, body) = server.upload(&payload).await;
            let _ = tx.send(BackgroundResult::Upload { generation, ok, body }).await;
        });
    }

    fn render_status(&self, now: i64) -> Result<()> {
        let state = if self.clock.is_running() {
            "running"
        } else if self.clock.elapsed_now(now) > 0 {
            "paused"
        } else {
            "stopped"
        };
        View::status(state, self.elapsed_at(now), self.inactive_at(now))
    }
}
