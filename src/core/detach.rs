// src/core/detach.rs — Callback-style completion for fold futures

use std::future::Future;

use tokio::task::JoinHandle;

/// Run `future` on the current `LocalSet` and hand its output to `on_done`.
///
/// Returns immediately; `on_done` fires exactly once, on a later turn, when
/// the future resolves. Combined with the synchronous error from
/// [`Driver::reduce`](super::engine::Driver::reduce) this gives the classic
/// "call now, get a callback later" shape. Pass `drop` as `on_done` to run
/// a fold for its side effects only; a fold future that is merely dropped
/// never runs at all.
///
/// Panics if called outside a `tokio::task::LocalSet`.
pub fn detach<F, C>(future: F, on_done: C) -> JoinHandle<()>
where
    F: Future + 'static,
    C: FnOnce(F::Output) + 'static,
{
    tokio::task::spawn_local(async move {
        let output = future.await;
        on_done(output);
    })
}
