// src/core/scheduler.rs — "Defer to a later scheduler turn" capability

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

/// Hands control back to the runtime and resumes after `delay`.
///
/// Awaiting `defer` is the async form of "schedule this continuation on a
/// future turn": everything after the `.await` is the continuation.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn defer(&self, delay: Duration);
}

/// Production scheduler on top of the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn defer(&self, delay: Duration) {
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Scheduler that records every deferral and yields without sleeping.
///
/// Lets tests count suspension points without depending on timers.
#[derive(Debug, Default)]
pub struct CountingScheduler {
    delays: Mutex<Vec<Duration>>,
}

impl CountingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `defer` has been awaited.
    pub fn count(&self) -> usize {
        self.delays.lock().map(|d| d.len()).unwrap_or(0)
    }

    /// The delays requested so far, in order.
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().map(|d| d.clone()).unwrap_or_default()
    }

    fn record(&self, delay: Duration) {
        if let Ok(mut delays) = self.delays.lock() {
            delays.push(delay);
        }
    }
}

#[async_trait]
impl Scheduler for CountingScheduler {
    async fn defer(&self, delay: Duration) {
        self.record(delay);
        tokio::task::yield_now().await;
    }
}
