// src/core/timing.rs — Burst timing configuration and bookkeeping

use std::time::Duration;

use tokio::time::Instant;

/// Default delay before a deferred continuation runs.
pub const DEFAULT_YIELD_DELAY_MS: u64 = 15;
/// Default maximum length of one synchronous burst before a forced yield.
pub const DEFAULT_BATCH_TIME_MS: u64 = 50;

/// Timing knobs read by the driver on every budget check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// How long a deferred continuation waits before it runs.
    pub yield_delay: Duration,
    /// Longest synchronous burst allowed before the driver yields.
    pub batch_time: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            yield_delay: Duration::from_millis(DEFAULT_YIELD_DELAY_MS),
            batch_time: Duration::from_millis(DEFAULT_BATCH_TIME_MS),
        }
    }
}

impl TimingConfig {
    pub fn from_millis(yield_delay_ms: u64, batch_time_ms: u64) -> Self {
        Self {
            yield_delay: Duration::from_millis(yield_delay_ms),
            batch_time: Duration::from_millis(batch_time_ms),
        }
    }

    pub fn with_yield_delay(mut self, delay: Duration) -> Self {
        self.yield_delay = delay;
        self
    }

    pub fn with_batch_time(mut self, budget: Duration) -> Self {
        self.batch_time = budget;
        self
    }
}

/// State of the current synchronous burst.
///
/// `stepped` guards against a yield loop: a burst that has not visited an
/// item yet never yields, so one slow worker still makes progress.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Burst {
    started_at: Instant,
    stepped: bool,
}

impl Burst {
    pub(crate) fn start(now: Instant) -> Self {
        Self {
            started_at: now,
            stepped: false,
        }
    }

    pub(crate) fn over_budget(&self, now: Instant, budget: Duration) -> bool {
        self.stepped && now.saturating_duration_since(self.started_at) > budget
    }

    pub(crate) fn mark_stepped(&mut self) {
        self.stepped = true;
    }

    pub(crate) fn restart(&mut self, now: Instant) {
        *self = Self::start(now);
    }
}
