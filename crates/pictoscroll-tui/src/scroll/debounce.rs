//! Schedule-with-cancel-pending timer for collapsing navigation bursts.

use std::time::{Duration, Instant};

/// Debounce timer holding at most one pending value.
///
/// Scheduling replaces any pending value and restarts the window, so a burst
/// of calls yields only the last one. `poll` must be driven from the host
/// tick; nothing fires on its own.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule a value, replacing any pending one and restarting the window.
    pub fn schedule(&mut self, value: T) {
        self.schedule_at(value, Instant::now());
    }

    /// Schedule with an explicit timestamp.
    pub fn schedule_at(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Take the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((fire_at, _)) if fire_at <= now => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    /// Drop any pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_scheduled_value_wins() {
        let mut debouncer = Debouncer::new(Duration::from_millis(75));
        let now = Instant::now();

        for i in 0..10 {
            debouncer.schedule_at(i, now);
        }

        // Window has not elapsed yet
        assert_eq!(debouncer.poll(now), None);
        assert!(debouncer.is_pending());

        // Past the window, only the last value fires
        assert_eq!(debouncer.poll(now + Duration::from_millis(80)), Some(9));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_rescheduling_restarts_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(75));
        let now = Instant::now();

        debouncer.schedule_at('a', now);
        debouncer.schedule_at('b', now + Duration::from_millis(50));

        // 80ms after the first schedule, but only 30ms after the second
        assert_eq!(debouncer.poll(now + Duration::from_millis(80)), None);
        assert_eq!(
            debouncer.poll(now + Duration::from_millis(130)),
            Some('b')
        );
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(75));
        let now = Instant::now();

        debouncer.schedule_at(1, now);
        debouncer.cancel();
        assert_eq!(debouncer.poll(now + Duration::from_millis(100)), None);
    }
}
