#[cfg(test)]
#[path = "../../tests/unit/generation/time_windows_test.rs"]
mod time_windows_test;

use crate::models::common::{Duration, TimeWindow};
use crate::utils::Random;
use std::sync::Arc;

/// Draws fixed duration time windows uniformly within a bounded planning horizon.
pub struct TimeWindowAssigner {
    horizon: Duration,
    duration: Duration,
    random: Arc<dyn Random + Send + Sync>,
}

impl TimeWindowAssigner {
    /// Creates a new instance of `TimeWindowAssigner`. The window duration must not
    /// exceed the horizon.
    pub fn new(horizon: Duration, duration: Duration, random: Arc<dyn Random + Send + Sync>) -> Self {
        Self { horizon, duration, random }
    }

    /// Draws the next window: a uniformly random start in `[0, horizon - duration]` with
    /// the configured exact duration, so the window always fits the horizon.
    pub fn next_window(&self) -> TimeWindow {
        let start = self.random.uniform_int(0, self.horizon - self.duration);

        TimeWindow::new(start, start + self.duration)
    }
}
