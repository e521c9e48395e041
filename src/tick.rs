//! Tick handler timing.
//!
//! Frame pacing depends on `handle_tick_event` returning quickly. The
//! dispatcher cannot enforce that, but it can notice when a handler runs
//! past its budget.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use uiloop::TickMonitor;
//!
//! let mut monitor = TickMonitor::new(Duration::from_millis(4));
//! let timing = monitor.start();
//! // ... deliver the tick ...
//! let overran = monitor.finish(timing);
//! assert_eq!(monitor.count(), 1);
//! # let _ = overran;
//! ```

use std::time::{Duration, Instant};

/// Start time of one tick delivery, handed back to `TickMonitor::finish`.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct TickTiming {
    started: Instant,
}

/// Latency statistics for tick deliveries.
#[derive(Debug, Clone)]
pub struct TickMonitor {
    /// Longest a tick handler may take before it counts as an overrun
    budget: Duration,
    /// Ticks recorded since creation or last reset
    count: u64,
    /// Ticks that exceeded the budget
    overruns: u64,
    /// Duration of the most recent tick
    last: Option<Duration>,
    /// Slowest tick seen
    max: Duration,
}

impl Default for TickMonitor {
    fn default() -> Self {
        Self::new(Duration::from_millis(4))
    }
}

impl TickMonitor {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            count: 0,
            overruns: 0,
            last: None,
            max: Duration::ZERO,
        }
    }

    /// Mark the start of a tick delivery.
    pub fn start(&self) -> TickTiming {
        TickTiming {
            started: Instant::now(),
        }
    }

    /// Record the end of a tick delivery.
    ///
    /// Returns `true` if the handler overran the budget.
    pub fn finish(&mut self, timing: TickTiming) -> bool {
        self.record(timing.started.elapsed())
    }

    /// Record a tick that took `elapsed`.
    pub fn record(&mut self, elapsed: Duration) -> bool {
        self.count += 1;
        self.last = Some(elapsed);
        self.max = self.max.max(elapsed);

        let overran = elapsed > self.budget;
        if overran {
            self.overruns += 1;
        }
        overran
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    pub fn last(&self) -> Option<Duration> {
        self.last
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Clear all statistics, keeping the budget.
    pub fn reset(&mut self) {
        self.count = 0;
        self.overruns = 0;
        self.last = None;
        self.max = Duration::ZERO;
    }
}
