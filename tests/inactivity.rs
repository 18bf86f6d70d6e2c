#[cfg(test)]
mod tests {
    use takt::libs::inactivity::InactivityTracker;

    const T0: i64 = 1_750_000_000;
    const THRESHOLD: i64 = 60;

    fn tracker() -> InactivityTracker {
        InactivityTracker::new(THRESHOLD, T0)
    }

    #[test]
    fn test_no_idle_below_threshold() {
        let mut tracker = tracker();
        for offset in 1..=THRESHOLD {
            assert!(!tracker.on_tick(T0 + offset));
        }
        assert!(!tracker.is_idle());
        assert_eq!(tracker.total_now(T0 + THRESHOLD), 0);
    }

    #[test]
    fn test_idle_span_opens_at_threshold_boundary() {
        let mut tracker = tracker();
        // First tick past the threshold opens the span, backdated to
        // last_activity + threshold rather than the observing tick.
        assert!(tracker.on_tick(T0 + 65));
        assert!(tracker.is_idle());
        // 65 - (T0 + 60) = 5 seconds already count as idle.
        assert_eq!(tracker.total_now(T0 + 65), 5);
    }

    #[test]
    fn test_activity_folds_open_span() {
        let mut tracker = tracker();
        tracker.on_tick(T0 + 65);
        // Activity at T0+65: the open span folds to exactly 5 seconds and
        // the current idle resets to zero.
        assert_eq!(tracker.on_activity(T0 + 65), Some(5));
        assert!(!tracker.is_idle());
        assert_eq!(tracker.accumulated(), 5);
        assert_eq!(tracker.total_now(T0 + 65), 5);
    }

    #[test]
    fn test_idle_gap_counts_gap_minus_threshold() {
        // Activity ceases for D > threshold, then resumes: the accumulator
        // must grow by exactly D - threshold, never by D.
        let d = 300;
        let mut tracker = tracker();
        let mut now = T0;
        while now < T0 + d {
            now += 1;
            tracker.on_tick(now);
        }
        assert_eq!(tracker.on_activity(T0 + d), Some(d - THRESHOLD));
        assert_eq!(tracker.accumulated(), d - THRESHOLD);
    }

    #[test]
    fn test_activity_without_open_span_only_advances_timestamp() {
        let mut tracker = tracker();
        assert_eq!(tracker.on_activity(T0 + 10), None);
        assert_eq!(tracker.last_activity_epoch(), T0 + 10);
        assert_eq!(tracker.accumulated(), 0);

        // Threshold now counts from the newer activity.
        assert!(!tracker.on_tick(T0 + 65));
        assert!(tracker.on_tick(T0 + 71));
        assert_eq!(tracker.total_now(T0 + 71), 1);
    }

    #[test]
    fn test_out_of_order_activity_is_ignored_for_timestamp() {
        let mut tracker = tracker();
        tracker.on_activity(T0 + 20);
        tracker.on_activity(T0 + 10);
        assert_eq!(tracker.last_activity_epoch(), T0 + 20);
    }

    #[test]
    fn test_fold_open_span_on_stop() {
        let mut tracker = tracker();
        tracker.on_tick(T0 + 90);
        // Stop mid-span: the partial span up to "now" folds fully.
        assert_eq!(tracker.fold_open_span(T0 + 100), Some(40));
        assert!(!tracker.is_idle());
        assert_eq!(tracker.accumulated(), 40);

        // Nothing left to fold afterwards.
        assert_eq!(tracker.fold_open_span(T0 + 110), None);
        assert_eq!(tracker.accumulated(), 40);
    }

    #[test]
    fn test_accumulator_sums_completed_spans() {
        let mut tracker = tracker();

        // First idle stretch: 61..=130, folded at 130 -> 70 seconds.
        tracker.on_tick(T0 + 130);
        tracker.on_activity(T0 + 130);
        assert_eq!(tracker.accumulated(), 70);

        // Second stretch from the new activity point, folded by stop.
        tracker.on_tick(T0 + 130 + 65);
        tracker.fold_open_span(T0 + 130 + 65);
        assert_eq!(tracker.accumulated(), 75);
    }

    #[test]
    fn test_second_tick_does_not_reopen_span() {
        let mut tracker = tracker();
        assert!(tracker.on_tick(T0 + 65));
        assert!(!tracker.on_tick(T0 + 66));
        assert_eq!(tracker.total_now(T0 + 66), 6);
    }

    #[test]
    fn test_reset_clears_accounting_for_next_session() {
        let mut tracker = tracker();
        tracker.on_tick(T0 + 65);
        tracker.fold_open_span(T0 + 70);
        assert_eq!(tracker.accumulated(), 10);

        tracker.reset(T0 + 70);
        assert_eq!(tracker.accumulated(), 0);
        assert!(!tracker.is_idle());
        assert_eq!(tracker.total_now(T0 + 70), 0);
    }
}
