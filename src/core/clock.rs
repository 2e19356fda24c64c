// src/core/clock.rs — Monotonic clock capability
//
// The driver only ever asks "what time is it now" to size its bursts. Real
// runs read tokio's clock (which honours `tokio::time::pause`), tests can
// step a `ManualClock` by hand or on every read.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::Instant;

/// Source of monotonic timestamps for burst budgeting.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Clock backed by `tokio::time::Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Deterministic clock for tests.
///
/// Time only moves when `advance` is called, plus an optional fixed `tick`
/// applied after every `now()` read.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed_nanos: AtomicU64,
    tick_nanos: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::with_tick(Duration::ZERO)
    }

    /// A clock that advances by `tick` every time it is read.
    pub fn with_tick(tick: Duration) -> Self {
        Self {
            origin: Instant::now(),
            elapsed_nanos: AtomicU64::new(0),
            tick_nanos: saturating_nanos(tick),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed_nanos
            .fetch_add(saturating_nanos(by), Ordering::SeqCst);
    }

    /// Total virtual time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos.load(Ordering::SeqCst))
    }
}

fn saturating_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let nanos = self
            .elapsed_nanos
            .fetch_add(self.tick_nanos, Ordering::SeqCst);
        self.origin + Duration::from_nanos(nanos)
    }
}
