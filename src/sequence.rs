//! Core trait for lazy pull-based sequences.
//!
//! This module defines the [`Sequence`] trait, the fundamental building block
//! of this library. A [`Sequence`] is a stateful producer of values of a
//! single type: each call to [`pull`](Sequence::pull) either yields the next
//! element or signals exhaustion with `None`.
//!
//! # The pull contract
//!
//! - Once `pull` returns `None`, every subsequent call must also return
//!   `None`. Sources and adapters in this crate latch their exhausted state
//!   so a pipeline can never resurrect.
//! - An adapter never pulls further ahead of its own next output than its
//!   definition requires (`zip` pulls one element per side per step, nothing
//!   buffers beyond that).
//! - Pulling is an ordinary synchronous call. Stopping to pull is the only
//!   cancellation; an abandoned partially-drained sequence is not guaranteed
//!   reusable.
//!
//! # Examples
//!
//! ```rust
//! use sequin::prelude::*;
//!
//! let squares: Vec<i64> = range(1, 3).map(|x| x * x).collect();
//! assert_eq!(squares, vec![1, 4, 9]);
//!
//! let first_even = count_from(1).find(|x| x % 10 == 0);
//! assert_eq!(first_even, Maybe::Present(10));
//! ```

use either::Either;

use crate::accum::Accumulate;
use crate::adapt::{
    bound, chain as chain_mod, filter as filter_mod, flat, map as map_mod, scan as scan_mod,
    zip as zip_mod,
};
use crate::adapt::{
    Chain, Enumerate, Filter, FilterMap, FlatMap, Flatten, Inspect, Map, Scan, Skip, SkipWhile,
    Take, TakeWhile, Zip,
};
use crate::bridge::{IntoSequence, SeqIter};
use crate::error::EmptySequence;
use crate::maybe::Maybe;

/// A stateful producer of values, driven by repeated calls to `pull`.
///
/// Adapters wrap an upstream sequence and are themselves sequences, so
/// pipelines compose without limit; terminal consumers drive the outermost
/// sequence to exhaustion (or an early exit) and produce a final value.
///
/// ```rust
/// use sequin::prelude::*;
///
/// let total: i64 = range(1, 100).filter(|x| x % 3 == 0).sum();
/// assert_eq!(total, 1683);
/// ```
pub trait Sequence {
    /// Element type produced by this sequence.
    type Item;

    /// Produces the next element, or `None` once the sequence is exhausted.
    fn pull(&mut self) -> Option<Self::Item>;

    // ---- adapters -------------------------------------------------------

    /// Transforms every element with `f`.
    ///
    /// ```rust
    /// use sequin::prelude::*;
    ///
    /// let doubled: Vec<i64> = range(1, 3).map(|x| x * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        map_mod::map(self, f)
    }

    /// Keeps only the elements satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        filter_mod::filter(self, predicate)
    }

    /// Transforms and filters in one pass: elements for which `f` comes up
    /// [`Absent`](Maybe::Absent) are skipped.
    ///
    /// ```rust
    /// use sequin::prelude::*;
    ///
    /// let halves: Vec<i64> = range(1, 6)
    ///     .filter_map(|x| if x % 2 == 0 { Maybe::Present(x / 2) } else { Maybe::Absent })
    ///     .collect();
    /// assert_eq!(halves, vec![1, 2, 3]);
    /// ```
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Maybe<U>,
    {
        filter_mod::filter_map(self, f)
    }

    /// Yields at most `n` elements, then exhausts permanently without
    /// touching the upstream again.
    ///
    /// ```rust
    /// use sequin::prelude::*;
    ///
    /// // Terminates even over an unbounded source.
    /// let head: Vec<i64> = count_from(1).take(5).collect();
    /// assert_eq!(head, vec![1, 2, 3, 4, 5]);
    /// ```
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        bound::take(self, n)
    }

    /// Yields elements while `predicate` holds; the first failing element
    /// ends the sequence for good.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        bound::take_while(self, predicate)
    }

    /// Discards the first `n` elements, then passes the rest through. The
    /// discard happens eagerly on the first pull.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        bound::skip(self, n)
    }

    /// Discards elements while `predicate` holds, then passes everything
    /// through unconditionally — including later elements that would satisfy
    /// the predicate again.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        bound::skip_while(self, predicate)
    }

    /// Yields all of this sequence's elements, then all of `other`'s. The
    /// second side is not touched before the first exhausts.
    ///
    /// ```rust
    /// use sequin::prelude::*;
    ///
    /// let joined: Vec<i64> = range(1, 2).chain(vec![10, 20]).collect();
    /// assert_eq!(joined, vec![1, 2, 10, 20]);
    /// ```
    fn chain<R>(self, other: R) -> Chain<Self, R::Seq>
    where
        Self: Sized,
        R: IntoSequence<Item = Self::Item>,
    {
        chain_mod::chain(self, other.into_sequence())
    }

    /// Pairs this sequence's elements with `other`'s, one pull per side per
    /// step; exhausts as soon as either side does.
    ///
    /// ```rust
    /// use sequin::prelude::*;
    ///
    /// let pairs: Vec<(i64, char)> = range(1, 5).zip(vec!['a', 'b', 'c']).collect();
    /// assert_eq!(pairs, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    /// ```
    fn zip<R>(self, other: R) -> Zip<Self, R::Seq>
    where
        Self: Sized,
        R: IntoSequence,
    {
        zip_mod::zip(self, other.into_sequence())
    }

    /// Pairs each element with a 1-based running index.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        zip_mod::enumerate(self)
    }

    /// Maps each element to an inner sequence and drains it fully before
    /// pulling the next outer element.
    ///
    /// ```rust
    /// use sequin::prelude::*;
    ///
    /// let repeated: Vec<i64> = range(1, 3).flat_map(|x| vec![x; x as usize]).collect();
    /// assert_eq!(repeated, vec![1, 2, 2, 3, 3, 3]);
    /// ```
    fn flat_map<U, F>(self, f: F) -> FlatMap<Self, U, F>
    where
        Self: Sized,
        U: IntoSequence,
        F: FnMut(Self::Item) -> U,
    {
        flat::flat_map(self, f)
    }

    /// Flattens a sequence of sequences, draining each inner sequence fully.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoSequence,
    {
        flat::flatten(self)
    }

    /// Calls `f` on each element for its side effect without altering the
    /// value or the sequence.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        map_mod::inspect(self, f)
    }

    /// Carries running state across pulls, yielding the new state produced by
    /// `f(state, element)` at each step. The state is adapter-owned and never
    /// exposed by reference.
    ///
    /// ```rust
    /// use sequin::prelude::*;
    ///
    /// let running: Vec<i64> = range(1, 4).scan(0, |acc, x| acc + x).collect();
    /// assert_eq!(running, vec![1, 3, 6, 10]);
    /// ```
    fn scan<St, F>(self, init: St, f: F) -> Scan<Self, St, F>
    where
        Self: Sized,
        St: Clone,
        F: FnMut(St, Self::Item) -> St,
    {
        scan_mod::scan(self, init, f)
    }

    /// Erases the concrete adapter type behind a boxed trait object, so
    /// differently-shaped pipelines can share one type.
    fn boxed(self) -> Box<dyn Sequence<Item = Self::Item>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Wraps this sequence as a standard [`Iterator`], enabling `for` loops
    /// and the std collection machinery over a pipeline.
    fn into_iterator(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }

    // ---- terminal consumers: full drain ---------------------------------

    /// Folds every element into an accumulator seeded with `init`.
    ///
    /// On an empty sequence the accumulator is returned unchanged.
    ///
    /// ```rust
    /// use sequin::prelude::*;
    ///
    /// let digits = range(1, 4).fold(String::new(), |mut acc, d| {
    ///     acc.push_str(&d.to_string());
    ///     acc
    /// });
    /// assert_eq!(digits, "1234");
    /// ```
    fn fold<A, F>(mut self, init: A, mut f: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        let mut acc = init;
        while let Some(item) = self.pull() {
            acc = f(acc, item);
        }
        acc
    }

    /// Folds the sequence seeded by its first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequence`] if the sequence produces no elements.
    ///
    /// ```rust
    /// use sequin::prelude::*;
    ///
    /// assert_eq!(range(1, 4).reduce(|a, b| a * b), Ok(24));
    /// assert!(empty::<i64>().reduce(|a, b| a + b).is_err());
    /// ```
    fn reduce<F>(mut self, f: F) -> Result<Self::Item, EmptySequence>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.pull().ok_or(EmptySequence)?;
        Ok(self.fold(first, f))
    }

    /// Sums every element. An empty sequence sums to the additive identity.
    fn sum(self) -> Self::Item
    where
        Self: Sized,
        Self::Item: Accumulate,
    {
        self.fold(Self::Item::ZERO, Accumulate::add)
    }

    /// Multiplies every element. An empty sequence yields the multiplicative
    /// identity.
    fn product(self) -> Self::Item
    where
        Self: Sized,
        Self::Item: Accumulate,
    {
        self.fold(Self::Item::ONE, Accumulate::mul)
    }

    /// Counts the elements, draining the sequence.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut n = 0;
        while self.pull().is_some() {
            n += 1;
        }
        n
    }

    /// Calls `f` on every element for its side effect, draining the sequence.
    fn for_each<F>(mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while let Some(item) = self.pull() {
            f(item);
        }
    }

    /// Materializes the sequence into a collection, preserving pull order
    /// where the collection is ordered.
    ///
    /// ```rust
    /// use sequin::prelude::*;
    /// use std::collections::HashSet;
    ///
    /// let evens: HashSet<i64> = range(1, 6).filter(|x| x % 2 == 0).collect();
    /// assert_eq!(evens.len(), 3);
    /// ```
    fn collect<C>(self) -> C
    where
        Self: Sized,
        C: crate::bridge::FromSequence<Self::Item>,
    {
        C::from_sequence(self)
    }

    /// Returns the final element, draining the sequence; there is no way to
    /// know the end without consuming it.
    fn last(mut self) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        let mut last = Maybe::Absent;
        while let Some(item) = self.pull() {
            last = Maybe::Present(item);
        }
        last
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequence`] if the sequence produces no elements.
    fn min(self) -> Result<Self::Item, EmptySequence>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.reduce(|a, b| if b < a { b } else { a })
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequence`] if the sequence produces no elements.
    fn max(self) -> Result<Self::Item, EmptySequence>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.reduce(|a, b| if b > a { b } else { a })
    }

    // ---- terminal consumers: short-circuiting ---------------------------

    /// Returns the first element satisfying `predicate`, pulling nothing
    /// past it.
    fn find<P>(&mut self, mut predicate: P) -> Maybe<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.pull() {
            if predicate(&item) {
                return Maybe::Present(item);
            }
        }
        Maybe::Absent
    }

    /// Returns the 0-based index of the first element satisfying `predicate`.
    fn position<P>(&mut self, mut predicate: P) -> Maybe<usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut index = 0;
        while let Some(item) = self.pull() {
            if predicate(&item) {
                return Maybe::Present(index);
            }
            index += 1;
        }
        Maybe::Absent
    }

    /// Returns `true` as soon as any element satisfies `predicate`.
    fn any<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.pull() {
            if predicate(&item) {
                return true;
            }
        }
        false
    }

    /// Returns `false` as soon as any element fails `predicate`.
    fn all<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(item) = self.pull() {
            if !predicate(&item) {
                return false;
            }
        }
        true
    }

    /// Skips `n` elements and returns the next one, pulling nothing past it.
    fn nth(&mut self, n: usize) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        for _ in 0..n {
            if self.pull().is_none() {
                return Maybe::Absent;
            }
        }
        self.pull().into()
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        (**self).pull()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        (**self).pull()
    }
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        match self {
            Either::Left(l) => l.pull(),
            Either::Right(r) => r.pull(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{count_from, empty, range, range_step};

    #[test]
    fn test_fold_accumulates_in_pull_order() {
        let concatenated = range(1, 3).fold(String::new(), |mut acc, d| {
            acc.push_str(&d.to_string());
            acc
        });
        assert_eq!(concatenated, "123");
    }

    #[test]
    fn test_fold_on_empty_returns_init_unchanged() {
        assert_eq!(empty::<i64>().fold(42, |a, b| a + b), 42);
    }

    #[test]
    fn test_reduce_on_empty_signals_error() {
        assert_eq!(empty::<i64>().reduce(|a, b| a + b), Err(EmptySequence));
    }

    #[test]
    fn test_reduce_seeds_from_first_element() {
        assert_eq!(range(2, 4).reduce(|a, b| a * b), Ok(24));
    }

    #[test]
    fn test_sum_and_product_over_full_drain() {
        assert_eq!(range(1, 4).sum(), 10);
        assert_eq!(range(1, 4).product(), 24);
        assert_eq!(empty::<i64>().sum(), 0);
        assert_eq!(empty::<i64>().product(), 1);
    }

    #[test]
    fn test_min_max_and_empty_errors() {
        assert_eq!(range_step(9, 1, -3).min(), Ok(3));
        assert_eq!(range_step(9, 1, -3).max(), Ok(9));
        assert_eq!(empty::<i64>().min(), Err(EmptySequence));
        assert_eq!(empty::<i64>().max(), Err(EmptySequence));
    }

    #[test]
    fn test_find_stops_pulling_at_first_match() {
        let mut pulls = 0;
        let mut seq = range(1, 100).inspect(|_| pulls += 1);
        assert_eq!(seq.find(|x| x % 7 == 0), Maybe::Present(7));
        drop(seq);
        assert_eq!(pulls, 7);
    }

    #[test]
    fn test_position_is_zero_based() {
        assert_eq!(range(10, 20).position(|x| *x == 12), Maybe::Present(2));
        assert_eq!(range(10, 20).position(|x| *x == 99), Maybe::Absent);
    }

    #[test]
    fn test_any_all_short_circuit() {
        // Over an unbounded counter these only terminate if they stop early.
        assert!(count_from(1).any(|x| *x > 3));
        assert!(!count_from(1).all(|x| *x < 3));
    }

    #[test]
    fn test_nth_skips_then_returns_the_next() {
        assert_eq!(range(0, 9).nth(0), Maybe::Present(0));
        assert_eq!(range(0, 9).nth(3), Maybe::Present(3));
        assert_eq!(range(0, 9).nth(50), Maybe::Absent);
    }

    #[test]
    fn test_last_requires_full_drain() {
        assert_eq!(range(1, 5).last(), Maybe::Present(5));
        assert_eq!(empty::<i64>().last(), Maybe::Absent);
    }

    #[test]
    fn test_for_each_visits_every_element_in_order() {
        let mut seen = Vec::new();
        range(1, 4).for_each(|x| seen.push(x));
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_count_drains_everything() {
        assert_eq!(range(1, 5).filter(|x| x % 2 == 1).count(), 3);
    }

    #[test]
    fn test_boxed_pipelines_share_one_type() {
        let sequences: Vec<Box<dyn Sequence<Item = i64>>> = vec![
            range(1, 3).boxed(),
            range(1, 3).map(|x| x * x).boxed(),
            empty::<i64>().boxed(),
        ];
        let lengths: Vec<usize> = sequences.into_iter().map(|s| s.count()).collect();
        assert_eq!(lengths, vec![3, 3, 0]);
    }

    #[test]
    fn test_either_dispatches_to_the_held_side() {
        let pick = |left: bool| {
            if left {
                Either::Left(range(1, 2))
            } else {
                Either::Right(count_from(10).take(2))
            }
        };
        assert_eq!(pick(true).collect::<Vec<i64>>(), vec![1, 2]);
        assert_eq!(pick(false).collect::<Vec<i64>>(), vec![10, 11]);
    }

    #[test]
    fn test_mut_reference_resumes_where_it_left_off() {
        let mut seq = range(1, 5);
        let head: Vec<i64> = (&mut seq).take(2).collect();
        assert_eq!(head, vec![1, 2]);
        assert_eq!(seq.pull(), Some(3));
    }
}
