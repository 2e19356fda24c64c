// src/core/continuation.rs — Explicit proceed/finish continuations
//
// Some workers would rather be handed "what to do next" than return a
// future, e.g. when the result arrives from a spawned task or a callback
// API. `Continuation` is that handle: it is consumed by `proceed` or
// `finish`, so it can be signalled at most once.

use futures::channel::oneshot;

use super::engine::{Driver, Step};

/// One-shot handle a continuation-style worker uses to report its step.
#[must_use = "a worker must call `proceed` or `finish`, otherwise the fold never completes"]
pub struct Continuation<A> {
    tx: oneshot::Sender<Step<A>>,
}

impl<A> Continuation<A> {
    /// Continue folding with `acc`.
    pub fn proceed(self, acc: A) {
        // A closed receiver means the fold future was dropped; nothing to resume.
        let _ = self.tx.send(Step::Continue(acc));
    }

    /// Stop folding; `acc` is the final result.
    pub fn finish(self, acc: A) {
        let _ = self.tx.send(Step::Stop(acc));
    }
}

impl Driver {
    /// Seeded fold whose worker signals through a [`Continuation`].
    ///
    /// If the worker drops its continuation without calling either method,
    /// the fold stays pending forever. This is logged once at `warn` and is
    /// otherwise not reported.
    pub async fn fold_with_continuation<I, A, W>(&self, items: I, seed: A, mut worker: W) -> A
    where
        I: IntoIterator,
        W: FnMut(A, I::Item, Continuation<A>),
    {
        self.fold(items, seed, move |acc, item| {
            let (tx, rx) = oneshot::channel();
            worker(acc, item, Continuation { tx });
            async move {
                match rx.await {
                    Ok(step) => step,
                    Err(oneshot::Canceled) => {
                        tracing::warn!("worker dropped its continuation; fold will not complete");
                        std::future::pending::<Step<A>>().await
                    }
                }
            }
        })
        .await
    }
}
