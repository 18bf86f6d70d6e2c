#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use takt::libs::screenshot::ScreenshotScheduler;

    const T0: i64 = 1_750_000_000;
    const FIRST: i64 = 10;
    const MIN: i64 = 30;
    const MAX: i64 = 120;

    fn scheduler(seed: u64) -> ScreenshotScheduler {
        ScreenshotScheduler::new(FIRST, MIN, MAX, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_unarmed_scheduler_never_fires() {
        let mut scheduler = scheduler(1);
        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.poll(T0 + 1000, true, false), None);
    }

    #[test]
    fn test_first_fire_after_initial_delay() {
        let mut scheduler = scheduler(1);
        assert_eq!(scheduler.arm(T0), FIRST);
        assert!(scheduler.is_armed());

        assert_eq!(scheduler.poll(T0 + FIRST - 1, true, false), None);
        let delay = scheduler.poll(T0 + FIRST, true, false);
        assert!(delay.is_some());
    }

    #[test]
    fn test_reschedule_delay_stays_in_bounds() {
        let mut scheduler = scheduler(42);
        scheduler.arm(T0);
        let mut now = T0 + FIRST;
        for _ in 0..50 {
            let delay = scheduler.poll(now, true, false).expect("due slot fires");
            assert!((MIN..=MAX).contains(&delay), "delay {} out of range", delay);
            now += delay;
        }
    }

    #[test]
    fn test_seeded_rng_gives_reproducible_schedule() {
        let mut a = scheduler(7);
        let mut b = scheduler(7);
        a.arm(T0);
        b.arm(T0);
        let mut now = T0 + FIRST;
        for _ in 0..10 {
            let da = a.poll(now, true, false);
            let db = b.poll(now, true, false);
            assert_eq!(da, db);
            now += da.unwrap();
        }
    }

    #[test]
    fn test_suppressed_while_idle() {
        let mut scheduler = scheduler(1);
        scheduler.arm(T0);
        // A due slot must not fire during an idle span, however long.
        for offset in 0..600 {
            assert_eq!(scheduler.poll(T0 + FIRST + offset, true, true), None);
        }
        // The slot is still pending and fires once activity resumes.
        assert!(scheduler.poll(T0 + FIRST + 600, true, false).is_some());
    }

    #[test]
    fn test_not_fired_while_not_running() {
        let mut scheduler = scheduler(1);
        scheduler.arm(T0);
        assert_eq!(scheduler.poll(T0 + FIRST, false, false), None);
    }

    #[test]
    fn test_clear_drops_pending_fire() {
        let mut scheduler = scheduler(1);
        scheduler.arm(T0);
        scheduler.clear();
        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.poll(T0 + 1000, true, false), None);
    }

    #[test]
    fn test_rearm_uses_initial_delay_not_stale_schedule() {
        let mut scheduler = scheduler(1);
        scheduler.arm(T0);
        scheduler.poll(T0 + FIRST, true, false);
        scheduler.clear();

        // A later start re-arms from the short initial delay again.
        assert_eq!(scheduler.arm(T0 + 500), FIRST);
        assert!(scheduler.poll(T0 + 500 + FIRST - 1, true, false).is_none());
        assert!(scheduler.poll(T0 + 500 + FIRST, true, false).is_some());
    }

    #[test]
    fn test_degenerate_range_is_clamped() {
        let mut scheduler = ScreenshotScheduler::new(FIRST, 45, 20, StdRng::seed_from_u64(1));
        scheduler.arm(T0);
        let delay = scheduler.poll(T0 + FIRST, true, false).unwrap();
        assert_eq!(delay, 45);
    }
}
