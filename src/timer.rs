use std::time::Duration;

/// Fixed-period cooperative timer.
///
/// Nothing runs on its own thread: the main loop feeds it elapsed wall time and
/// it reports how many periods fell due. This keeps the jump ticks on the same
/// thread as the frame callback while still running at their own rate.
#[derive(Debug, Clone)]
pub struct FixedTimer {
    period: Duration,
    accumulated: Duration,
    armed: bool,
}

impl FixedTimer {
    pub fn new(period: Duration) -> Self {
        FixedTimer {
            period,
            accumulated: Duration::ZERO,
            armed: false,
        }
    }

    /// Starts the timer. The first tick falls due one full period from now.
    pub fn arm(&mut self) {
        self.armed = true;
        self.accumulated = Duration::ZERO;
    }

    /// Releases the timer, dropping any partially accumulated period.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feeds elapsed time and returns the number of ticks now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.armed || self.period.is_zero() {
            return 0;
        }

        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            due += 1;
        }
        due
    }
}
