//! Periodic timer capability used to drive roll animation.
//!
//! The engine only starts and stops a timer; whoever owns the event loop
//! watches it and calls the widget's `tick` once per elapsed period.

use std::time::{Duration, Instant};

/// A periodic timer that the host advances.
pub trait Timer {
    /// Begin firing every `interval`. Restarting an active timer resets it.
    fn start(&mut self, interval: Duration);

    /// Stop firing.
    fn stop(&mut self);

    /// Whether the timer is currently running.
    fn is_active(&self) -> bool;

    /// The period of the running timer, if any.
    fn interval(&self) -> Option<Duration>;
}

/// Test double that records how it was driven and never fires on its own.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    interval: Option<Duration>,
    starts: u32,
    stops: u32,
}

impl ManualTimer {
    /// Create a stopped timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `start` was called.
    pub fn starts(&self) -> u32 {
        self.starts
    }

    /// How many times `stop` was called.
    pub fn stops(&self) -> u32 {
        self.stops
    }
}

impl Timer for ManualTimer {
    fn start(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.interval = None;
        self.stops += 1;
    }

    fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    fn interval(&self) -> Option<Duration> {
        self.interval
    }
}

/// A wall-clock timer for poll-driven loops.
///
/// `due` reports how many whole periods have elapsed since the last call,
/// so a loop that wakes late still delivers every tick in order.
#[derive(Debug, Clone, Default)]
pub struct IntervalTimer {
    running: Option<Running>,
}

#[derive(Debug, Clone, Copy)]
struct Running {
    interval: Duration,
    next: Instant,
}

impl IntervalTimer {
    /// Create a stopped timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the timer with periods measured from `now`.
    pub fn start_at(&mut self, interval: Duration, now: Instant) {
        self.running = Some(Running {
            interval,
            next: now + interval,
        });
    }

    /// Number of periods that have elapsed by `now`, advancing the schedule.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(running) = self.running.as_mut() else {
            return 0;
        };
        if running.interval.is_zero() {
            running.next = now;
            return 1;
        }
        let mut count = 0;
        while running.next <= now {
            running.next += running.interval;
            count += 1;
        }
        count
    }

    /// Time left until the next period elapses, or `None` when stopped.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.running.map(|r| r.next.saturating_duration_since(now))
    }
}

impl Timer for IntervalTimer {
    fn start(&mut self, interval: Duration) {
        self.start_at(interval, Instant::now());
    }

    fn stop(&mut self) {
        self.running = None;
    }

    fn is_active(&self) -> bool {
        self.running.is_some()
    }

    fn interval(&self) -> Option<Duration> {
        self.running.map(|r| r.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS60: Duration = Duration::from_millis(60);

    #[test]
    fn manual_timer_records_calls() {
        let mut t = ManualTimer::new();
        assert!(!t.is_active());
        t.start(MS60);
        assert!(t.is_active());
        assert_eq!(t.interval(), Some(MS60));
        t.stop();
        assert!(!t.is_active());
        assert_eq!(t.starts(), 1);
        assert_eq!(t.stops(), 1);
    }

    #[test]
    fn interval_timer_counts_elapsed_periods() {
        let t0 = Instant::now();
        let mut t = IntervalTimer::new();
        t.start_at(MS60, t0);
        assert_eq!(t.due(t0), 0);
        assert_eq!(t.due(t0 + Duration::from_millis(59)), 0);
        assert_eq!(t.due(t0 + Duration::from_millis(60)), 1);
        assert_eq!(t.due(t0 + Duration::from_millis(200)), 2);
        assert_eq!(t.due(t0 + Duration::from_millis(200)), 0);
    }

    #[test]
    fn interval_timer_stopped_is_never_due() {
        let t0 = Instant::now();
        let mut t = IntervalTimer::new();
        t.start_at(MS60, t0);
        t.stop();
        assert_eq!(t.due(t0 + Duration::from_secs(1)), 0);
        assert_eq!(t.until_next(t0), None);
    }

    #[test]
    fn interval_timer_until_next() {
        let t0 = Instant::now();
        let mut t = IntervalTimer::new();
        t.start_at(MS60, t0);
        assert_eq!(
            t.until_next(t0 + Duration::from_millis(20)),
            Some(Duration::from_millis(40))
        );
        assert_eq!(
            t.until_next(t0 + Duration::from_millis(90)),
            Some(Duration::ZERO)
        );
    }
}
