// src/core/engine.rs — Time-budgeted fold driver
//
// Every other operation in this crate is a fold with a particular seed and
// worker. The driver visits items strictly in order, one worker at a time,
// and hands the thread back to the runtime whenever a synchronous burst has
// run longer than `TimingConfig::batch_time`.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use super::clock::{Clock, TokioClock};
use super::scheduler::{Scheduler, TokioScheduler};
use super::timing::{Burst, TimingConfig};
use crate::infra::errors::FoldError;

/// Outcome of one worker invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<A> {
    /// Keep folding with this accumulator.
    Continue(A),
    /// Stop now; this accumulator is the final result.
    Stop(A),
}

impl<A> Step<A> {
    pub fn into_inner(self) -> A {
        match self {
            Step::Continue(acc) | Step::Stop(acc) => acc,
        }
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Step::Stop(_))
    }
}

/// Drives folds over in-memory sequences without hogging the runtime.
///
/// Cloning is cheap; clones share the scheduler and clock but each carries
/// its own `TimingConfig`, so `driver.clone().with_timing(..)` tunes one
/// call site without touching the others.
#[derive(Clone)]
pub struct Driver {
    scheduler: Arc<dyn Scheduler>,
    clock: Arc<dyn Clock>,
    timing: TimingConfig,
}

impl Driver {
    pub fn new() -> Self {
        Self {
            scheduler: Arc::new(TokioScheduler),
            clock: Arc::new(TokioClock),
            timing: TimingConfig::default(),
        }
    }

    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn timing(&self) -> TimingConfig {
        self.timing
    }

    /// Fold `items` left to right starting from `seed`.
    ///
    /// The worker is called once per item until the sequence runs out or it
    /// returns [`Step::Stop`]. Nothing runs before the first deferral, so a
    /// caller never sees a worker execute in its own turn.
    ///
    /// Panics raised by the worker unwind through this future untouched.
    pub async fn fold<I, A, W, Fut>(&self, items: I, seed: A, mut worker: W) -> A
    where
        I: IntoIterator,
        W: FnMut(A, I::Item) -> Fut,
        Fut: Future<Output = Step<A>>,
    {
        let mut cursor = items.into_iter();
        let mut acc = seed;
        let mut visited = 0usize;
        let mut yields = 0usize;

        self.scheduler.defer(self.timing.yield_delay).await;
        let mut burst = Burst::start(self.clock.now());

        tracing::debug!(
            yield_delay_ms = self.timing.yield_delay.as_millis() as u64,
            batch_time_ms = self.timing.batch_time.as_millis() as u64,
            "fold started"
        );

        loop {
            // 1. Burst used up its budget: yield, then pick up where we were
            if burst.over_budget(self.clock.now(), self.timing.batch_time) {
                yields += 1;
                tracing::trace!(visited, yields, "burst budget exhausted, yielding");
                self.scheduler.defer(self.timing.yield_delay).await;
                burst.restart(self.clock.now());
                continue;
            }

            // 2. Sequence exhausted
            let Some(item) = cursor.next() else {
                tracing::debug!(visited, yields, "fold complete");
                return acc;
            };

            // 3. One worker step
            burst.mark_stepped();
            visited += 1;
            match worker(acc, item).await {
                Step::Continue(next) => acc = next,
                Step::Stop(last) => {
                    tracing::debug!(visited, yields, "fold stopped early");
                    return last;
                }
            }
        }
    }

    /// Fold without a seed: the first item becomes the accumulator.
    ///
    /// An empty sequence is rejected here, synchronously, before anything is
    /// scheduled.
    pub fn reduce<'a, I, W, Fut>(
        &'a self,
        items: I,
        worker: W,
    ) -> Result<impl Future<Output = I::Item> + 'a, FoldError>
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: 'a,
        W: FnMut(I::Item, I::Item) -> Fut + 'a,
        Fut: Future<Output = Step<I::Item>> + 'a,
    {
        let mut cursor = items.into_iter();
        let Some(first) = cursor.next() else {
            return Err(FoldError::EmptyWithoutSeed);
        };
        Ok(self.fold(cursor, first, worker))
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}
