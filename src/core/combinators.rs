// src/core/combinators.rs — map / filter / for_each / every / some
//
// Each combinator is a `Driver::fold` with its own seed and a worker that
// adapts the caller's per-item function. Timing, ordering and early exit all
// come from the fold.

use std::future::Future;
use std::ops::ControlFlow;

use super::engine::{Driver, Step};
use super::truthy::Truthy;

impl Driver {
    /// Apply `f` to every item, keeping input order.
    pub async fn map<I, U, F, Fut>(&self, items: I, mut f: F) -> Vec<U>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Fut,
        Fut: Future<Output = U>,
    {
        let items = items.into_iter();
        let seed = Vec::with_capacity(items.size_hint().0);
        self.fold(items, seed, move |mut mapped, item| {
            let value = f(item);
            async move {
                mapped.push(value.await);
                Step::Continue(mapped)
            }
        })
        .await
    }

    /// Keep the items for which `predicate` resolves to `true`.
    ///
    /// The kept values are the original items, in their original order.
    pub async fn filter<I, F, Fut>(&self, items: I, mut predicate: F) -> Vec<I::Item>
    where
        I: IntoIterator,
        F: FnMut(&I::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.fold(items, Vec::new(), move |mut kept, item| {
            let verdict = predicate(&item);
            async move {
                if verdict.await {
                    kept.push(item);
                }
                Step::Continue(kept)
            }
        })
        .await
    }

    /// Run `f` for its side effects on each item, with the item's index.
    ///
    /// `ControlFlow::Break(())` stops the walk early. Resolves to the
    /// original items either way.
    pub async fn for_each<I, F, Fut>(&self, items: I, mut f: F) -> Vec<I::Item>
    where
        I: IntoIterator,
        F: FnMut(&I::Item, usize) -> Fut,
        Fut: Future<Output = ControlFlow<()>>,
    {
        let items: Vec<I::Item> = items.into_iter().collect();
        let all = &items;
        self.fold(0..items.len(), (), move |(), index| {
            let flow = f(&all[index], index);
            async move {
                match flow.await {
                    ControlFlow::Continue(()) => Step::Continue(()),
                    ControlFlow::Break(()) => Step::Stop(()),
                }
            }
        })
        .await;
        items
    }

    /// `true` unless some item fails `predicate`; stops at the first failure.
    ///
    /// An empty sequence is vacuously `true` and never calls `predicate`.
    pub async fn every<I, F, Fut>(&self, items: I, mut predicate: F) -> bool
    where
        I: IntoIterator,
        F: FnMut(&I::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.fold(items, true, move |_, item| {
            let verdict = predicate(&item);
            async move {
                if verdict.await {
                    Step::Continue(true)
                } else {
                    Step::Stop(false)
                }
            }
        })
        .await
    }

    /// `true` as soon as one item passes `predicate`; stops there.
    ///
    /// An empty sequence is `false` and never calls `predicate`.
    pub async fn some<I, F, Fut>(&self, items: I, mut predicate: F) -> bool
    where
        I: IntoIterator,
        F: FnMut(&I::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.fold(items, false, move |_, item| {
            let verdict = predicate(&item);
            async move {
                if verdict.await {
                    Step::Stop(true)
                } else {
                    Step::Continue(false)
                }
            }
        })
        .await
    }

    /// [`Driver::every`] using each item's own truthiness.
    pub async fn every_truthy<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Truthy,
    {
        self.every(items, |item| std::future::ready(item.truthy()))
            .await
    }

    /// [`Driver::some`] using each item's own truthiness.
    pub async fn some_truthy<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Truthy,
    {
        self.some(items, |item| std::future::ready(item.truthy()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::scheduler::CountingScheduler;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn driver() -> Driver {
        Driver::new()
            .with_scheduler(Arc::new(CountingScheduler::new()))
            .with_clock(Arc::new(ManualClock::new()))
    }

    #[tokio::test]
    async fn test_map_squares() {
        let squares = driver()
            .map(vec![1, 2, 3, 4, 5], |n| async move { n * n })
            .await;
        assert_eq!(squares, vec![1, 4, 9, 16, 25]);
    }

    #[tokio::test]
    async fn test_filter_evens() {
        let evens = driver()
            .filter(1..=9, |&n| async move { n % 2 == 0 })
            .await;
        assert_eq!(evens, vec![2, 4, 6, 8]);
    }

    #[tokio::test]
    async fn test_filter_keeps_original_items() {
        let words = vec!["apple".to_string(), "kiwi".into(), "banana".into()];
        let long = driver()
            .filter(words, |w| {
                let len = w.len();
                async move { len > 4 }
            })
            .await;
        assert_eq!(long, vec!["apple".to_string(), "banana".to_string()]);
    }

    #[tokio::test]
    async fn test_for_each_supplies_indices_and_returns_items() {
        let mut seen = Vec::new();
        let items = driver()
            .for_each(vec!['a', 'b', 'c'], |&c, i| {
                seen.push((i, c));
                async { ControlFlow::Continue(()) }
            })
            .await;
        assert_eq!(items, vec!['a', 'b', 'c']);
        assert_eq!(seen, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    }

    #[tokio::test]
    async fn test_for_each_break_stops_walk() {
        let mut visited = 0;
        let items = driver()
            .for_each(vec![1, 2, 3, 4], |&n, _| {
                visited += 1;
                async move {
                    if n == 2 {
                        ControlFlow::Break(())
                    } else {
                        ControlFlow::Continue(())
                    }
                }
            })
            .await;
        assert_eq!(visited, 2);
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_every_and_some() {
        let d = driver();
        assert!(d.every(vec![2, 4, 6, 8], |&n| async move { n % 2 == 0 }).await);
        assert!(!d.some(vec![1, 3, 5, 7, 9], |&n| async move { n % 2 == 0 }).await);
    }

    #[tokio::test]
    async fn test_truthy_defaults() {
        let d = driver();
        assert!(d.every_truthy(vec![1, 2, 3]).await);
        assert!(!d.every_truthy(vec![1, 0, 3]).await);
        assert!(d.some_truthy(vec!["", "x"]).await);
        assert!(!d.some_truthy(Vec::<bool>::new()).await);
        assert!(d.every_truthy(Vec::<bool>::new()).await);
    }
}
