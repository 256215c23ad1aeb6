use std::time::{Duration, Instant};

/// Fixed-cadence tick pacing. The cadence is advisory: an overrunning tick
/// simply starts the next one straight away.
#[derive(Clone, Copy, Debug)]
pub struct TickClock {
    period: Duration,
}

impl TickClock {
    pub fn new(ticks_per_second: u32) -> Self {
        let ticks_per_second = ticks_per_second.max(1);
        TickClock {
            period: Duration::from_secs(1) / ticks_per_second,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left to wait after a tick that took `frame_time`. `None` when it overran.
    pub fn sleep_budget(&self, frame_time: Duration) -> Option<Duration> {
        self.period.checked_sub(frame_time).filter(|d| !d.is_zero())
    }

    pub fn next_deadline(&self, tick_started: Instant) -> Instant {
        tick_started + self.period
    }
}
