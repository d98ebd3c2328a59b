//! Sleeping fixed-rate clock

use std::time::{Duration, Instant};

use super::Clock;

/// Paces the loop at a fixed tick rate by sleeping off the remainder of each
/// period
#[derive(Debug)]
pub struct FixedRateClock {
    period: Duration,
    last: Instant,
}

impl FixedRateClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / ticks_per_second.max(1),
            last: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Clock for FixedRateClock {
    fn wait_for_next_tick(&mut self) -> Duration {
        let elapsed = self.last.elapsed();
        if elapsed < self.period {
            std::thread::sleep(self.period - elapsed);
        }
        let now = Instant::now();
        let frame = now - self.last;
        self.last = now;
        frame
    }
}
