//! Fixed-period timers for simulated clocks
//!
//! Mirrors `setInterval`: the first firing happens one full period after the
//! timer starts, and late polls catch up on every missed firing.

/// A repeating timer driven by an external millisecond clock
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTimer {
    period_ms: f64,
    next_due_ms: f64,
}

impl IntervalTimer {
    pub fn new(period_ms: f64, start_ms: f64) -> Self {
        Self {
            period_ms,
            next_due_ms: start_ms + period_ms,
        }
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Number of firings due up to and including `now_ms`
    pub fn poll(&mut self, now_ms: f64) -> u32 {
        if self.period_ms <= 0.0 {
            return 0;
        }
        let mut fired = 0;
        while self.next_due_ms <= now_ms {
            fired += 1;
            self.next_due_ms += self.period_ms;
        }
        fired
    }
}
