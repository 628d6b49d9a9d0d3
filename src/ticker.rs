use std::time::{Duration, Instant};

/// Default decay cadence in seconds
pub const DEFAULT_TICK_SECS: u64 = 5;

/// How long the event loop waits for input before checking the ticker
pub const FRAME_MS: u64 = 250;

/// Get the event-loop frame duration
pub fn frame_duration() -> Duration {
    Duration::from_millis(FRAME_MS)
}

/// Fixed-cadence timer that drives decay ticks from a cooperative loop.
///
/// The ticker only says *when* to fire. What a tick evaluates is always
/// judged against wall-clock time read at fire time, so a suspended process
/// that resumes late gets one tick that sees the full elapsed time.
#[derive(Debug)]
pub struct Ticker {
    cadence: Duration,
    next_due: Instant,
    fired: u64,
    cancelled: bool,
}

impl Ticker {
    /// Start a ticker whose first tick is due immediately
    pub fn start(cadence: Duration, now: Instant) -> Self {
        Self {
            cadence: cadence.max(Duration::from_secs(1)),
            next_due: now,
            fired: 0,
            cancelled: false,
        }
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Number of ticks fired so far
    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Time until the next tick, `None` once cancelled
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        if self.cancelled {
            return None;
        }
        Some(self.next_due.saturating_duration_since(now))
    }

    /// Fire if a tick is due, rescheduling one cadence from `now`.
    ///
    /// Missed periods are not replayed: however late the poll, it fires once.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.cancelled || now < self.next_due {
            return false;
        }
        self.fired += 1;
        self.next_due = now + self.cadence;
        true
    }

    /// Stop firing for good
    pub fn cancel(&mut self) {
        if !self.cancelled {
            self.cancelled = true;
            tracing::debug!(fired = self.fired, "decay ticker cancelled");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_first_tick_is_immediate() {
        let now = Instant::now();
        let mut ticker = Ticker::start(Duration::from_secs(5), now);
        assert_eq!(ticker.time_until_due(now), Some(Duration::ZERO));
        assert!(ticker.poll(now));
        assert_eq!(ticker.fired(), 1);
    }

    #[test]
    fn test_fires_once_per_cadence() {
        let now = Instant::now();
        let mut ticker = Ticker::start(Duration::from_secs(5), now);
        assert!(ticker.poll(now));

        assert!(!ticker.poll(now + Duration::from_secs(4)));
        assert_eq!(
            ticker.time_until_due(now + Duration::from_secs(4)),
            Some(Duration::from_secs(1))
        );
        assert!(ticker.poll(now + Duration::from_secs(5)));
        assert_eq!(ticker.fired(), 2);
    }

    #[test]
    fn test_late_poll_fires_once() {
        let now = Instant::now();
        let mut ticker = Ticker::start(Duration::from_secs(5), now);
        assert!(ticker.poll(now));

        let resumed = now + Duration::from_secs(3600);
        assert!(ticker.poll(resumed));
        assert!(!ticker.poll(resumed));
        assert_eq!(ticker.fired(), 2);
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let now = Instant::now();
        let mut ticker = Ticker::start(Duration::from_secs(5), now);
        ticker.cancel();

        assert!(ticker.is_cancelled());
        assert!(!ticker.poll(now + Duration::from_secs(60)));
        assert_eq!(ticker.time_until_due(now), None);
    }

    #[test]
    fn test_cadence_has_floor() {
        let ticker = Ticker::start(Duration::from_millis(10), Instant::now());
        assert_eq!(ticker.cadence(), Duration::from_secs(1));
    }
}
