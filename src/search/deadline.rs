use std::time::{Duration, Instant};

/// Time left for the current decision, in milliseconds.
pub trait Deadline {
    fn remaining(&self) -> f64;
}

/// Wall-clock budget started at construction.
#[derive(Clone, Copy, Debug)]
pub struct Timer {
    start: Instant,
    budget: Duration,
}

impl Timer {
    pub fn start(budget: Duration) -> Self { Self { start: Instant::now(), budget } }

    pub fn from_millis(ms: u64) -> Self { Self::start(Duration::from_millis(ms)) }
}

impl Deadline for Timer {
    fn remaining(&self) -> f64 {
        let budget_ms = self.budget.as_secs_f64() * 1000.0;
        budget_ms - self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Never expires; for fixed-depth analysis and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlimited;

impl Deadline for Unlimited {
    fn remaining(&self) -> f64 { f64::INFINITY }
}
