#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use takt::libs::activity::shared_activity;
    use takt::libs::config::{IdentityConfig, TrackerConfig};
    use takt::libs::daily_log::DailyLog;
    use takt::libs::tracker::Tracker;
    use tempfile::TempDir;

    const T0: i64 = 1_750_000_000;

    fn stamp(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    /// Builds a tracker over temp directories with a deterministic schedule
    /// and a hand-driven activity cell.
    fn tracker(dirs: &TempDir, config: TrackerConfig) -> (Tracker, takt::libs::activity::SharedActivity) {
        let cell = shared_activity(T0);
        let tracker = Tracker::new(
            config,
            IdentityConfig::default(),
            None,
            dirs.path().join("logs"),
            dirs.path().join("screenshots"),
            cell.clone(),
            StdRng::seed_from_u64(7),
        )
        .unwrap();
        (tracker, cell)
    }

    fn quiet_config() -> TrackerConfig {
        // First screenshot far beyond any test horizon, so pure accounting
        // tests never dispatch a capture task.
        TrackerConfig {
            screenshot_first_delay: 1_000_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_display_and_fold_scenario() {
        let dirs = TempDir::new().unwrap();
        let (mut tracker, cell) = tracker(&dirs, quiet_config());

        assert!(tracker.start_at(T0));

        // No activity for 65 seconds with a 60-second threshold: the tick
        // at T0+65 shows ~5 seconds of inactivity.
        for offset in 1..=65 {
            tracker.tick_at(T0 + offset);
        }
        assert_eq!(tracker.inactive_at(T0 + 65), 5);
        assert_eq!(tracker.elapsed_at(T0 + 65), 65);

        // Activity arrives at T0+65: the accumulator folds to exactly 5
        // and the current idle resets to zero.
        *cell.lock() = T0 + 65;
        tracker.tick_at(T0 + 66);
        assert_eq!(tracker.inactive_at(T0 + 66), 5);
        assert_eq!(tracker.inactive_at(T0 + 100), 5);
    }

    #[test]
    fn test_stop_persists_session_totals() {
        let dirs = TempDir::new().unwrap();
        let (mut tracker, _cell) = tracker(&dirs, quiet_config());
        let log = DailyLog::new(dirs.path().join("logs"));

        tracker.start_at(T0);
        tracker.pause_at(T0 + 10);
        let outcome = tracker.stop_at(T0 + 30, stamp("2025-06-02T10:30:00")).unwrap();

        assert_eq!(outcome.total_seconds, 10);
        assert_eq!(outcome.inactive_seconds, 0);
        let path = outcome.saved_to.expect("non-empty session is persisted");
        assert!(path.exists());

        let record = log.load(stamp("2025-06-02T10:30:00").date()).unwrap().unwrap();
        assert_eq!(record.total_seconds, 10);
        assert_eq!(record.entries.len(), 1);

        // A second session the same day accumulates on top.
        tracker.start_at(T0 + 100);
        let outcome = tracker.stop_at(T0 + 110, stamp("2025-06-02T14:00:00")).unwrap();
        assert_eq!(outcome.total_seconds, 10);

        let record = log.load(stamp("2025-06-02T10:30:00").date()).unwrap().unwrap();
        assert_eq!(record.total_seconds, 20);
        assert_eq!(record.entries.len(), 2);
    }

    #[test]
    fn test_stop_with_zero_time_writes_nothing() {
        let dirs = TempDir::new().unwrap();
        let (mut tracker, _cell) = tracker(&dirs, quiet_config());
        let log = DailyLog::new(dirs.path().join("logs"));

        let outcome = tracker.stop_at(T0, stamp("2025-06-02T10:30:00")).unwrap();
        assert_eq!(outcome.total_seconds, 0);
        assert!(outcome.saved_to.is_none());
        assert!(log.load(stamp("2025-06-02T10:30:00").date()).unwrap().is_none());
    }

    #[test]
    fn test_stop_mid_idle_folds_final_span() {
        let dirs = TempDir::new().unwrap();
        let (mut tracker, _cell) = tracker(&dirs, quiet_config());

        tracker.start_at(T0);
        for offset in 1..=90 {
            tracker.tick_at(T0 + offset);
        }
        // Open span: began at T0+60, stop at T0+100 folds 40 seconds.
        let outcome = tracker.stop_at(T0 + 100, stamp("2025-06-02T10:30:00")).unwrap();
        assert_eq!(outcome.total_seconds, 100);
        assert_eq!(outcome.inactive_seconds, 40);
    }

    #[test]
    fn test_next_session_starts_with_clean_counters() {
        let dirs = TempDir::new().unwrap();
        let (mut tracker, _cell) = tracker(&dirs, quiet_config());

        tracker.start_at(T0);
        for offset in 1..=90 {
            tracker.tick_at(T0 + offset);
        }
        tracker.stop_at(T0 + 100, stamp("2025-06-02T10:30:00")).unwrap();

        tracker.start_at(T0 + 200);
        assert_eq!(tracker.elapsed_at(T0 + 205), 5);
        assert_eq!(tracker.inactive_at(T0 + 205), 0);
    }

    #[test]
    fn test_pause_folds_open_idle_span() {
        let dirs = TempDir::new().unwrap();
        let (mut tracker, cell) = tracker(&dirs, quiet_config());

        tracker.start_at(T0);
        for offset in 1..=70 {
            tracker.tick_at(T0 + offset);
        }
        tracker.pause_at(T0 + 75);
        // Span T0+60..T0+75 folded at pause; idle stops growing.
        assert_eq!(tracker.inactive_at(T0 + 75), 15);
        assert_eq!(tracker.inactive_at(T0 + 300), 15);

        // Resume: threshold counts from fresh activity again.
        *cell.lock() = T0 + 300;
        assert!(tracker.start_at(T0 + 300));
        tracker.tick_at(T0 + 301);
        assert_eq!(tracker.inactive_at(T0 + 301), 15);
        assert!(tracker.is_running());
    }

    #[test]
    fn test_transitions_are_idempotent() {
        let dirs = TempDir::new().unwrap();
        let (mut tracker, _cell) = tracker(&dirs, quiet_config());

        assert!(!tracker.pause_at(T0));
        assert!(tracker.start_at(T0));
        assert!(!tracker.start_at(T0 + 5));
        assert_eq!(tracker.elapsed_at(T0 + 10), 10);
        assert!(tracker.pause_at(T0 + 10));
        assert!(!tracker.pause_at(T0 + 20));
        assert_eq!(tracker.elapsed_at(T0 + 20), 10);
    }

    #[tokio::test]
    async fn test_capture_dispatch_and_idle_suppression() {
        let dirs = TempDir::new().unwrap();
        let config = TrackerConfig {
            inactivity_threshold: 20,
            ..Default::default()
        };
        let (mut tracker, cell) = tracker(&dirs, config);

        tracker.start_at(T0);
        // First capture fires exactly at the initial 10-second delay.
        assert!(!tracker.tick_at(T0 + 9));
        assert!(tracker.tick_at(T0 + 10));

        // No further activity: an idle span opens at T0+20 and every due
        // slot after that is suppressed.
        let mut fired_while_idle = false;
        for offset in 11..=300 {
            if tracker.tick_at(T0 + offset) {
                fired_while_idle = true;
            }
        }
        assert!(!fired_while_idle);

        // Activity resumes: the pending slot (due long ago) fires on the
        // next tick.
        *cell.lock() = T0 + 300;
        assert!(tracker.tick_at(T0 + 301));
    }

    #[test]
    fn test_no_capture_while_stopped_or_paused() {
        let dirs = TempDir::new().unwrap();
        let (mut tracker, _cell) = tracker(&dirs, TrackerConfig::default());

        // Never started: the schedule is unarmed.
        for offset in 0..60 {
            assert!(!tracker.tick_at(T0 + offset));
        }

        tracker.start_at(T0 + 60);
        tracker.pause_at(T0 + 65);
        // Pause cleared the pending first fire.
        for offset in 66..200 {
            assert!(!tracker.tick_at(T0 + offset));
        }
    }
}
