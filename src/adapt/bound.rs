//! Prefix/suffix bounding adapters: take, take-while, skip, skip-while.
//!
//! The taking adapters latch: once the bound is reached the adapter is
//! permanently exhausted and never re-checks the upstream, even if the
//! upstream has more elements. The skipping adapters latch the other way:
//! once the discard phase ends, everything passes through unconditionally.

use crate::sequence::Sequence;

/// Yields at most `n` upstream elements.
pub struct Take<S> {
    upstream: S,
    remaining: usize,
}

/// Create a sequence over the first `n` elements of `upstream`.
pub fn take<S: Sequence>(upstream: S, n: usize) -> Take<S> {
    Take {
        upstream,
        remaining: n,
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.upstream.pull() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }
}

/// Yields upstream elements until the predicate first fails.
pub struct TakeWhile<S, P> {
    upstream: S,
    predicate: P,
    done: bool,
}

/// Create a sequence over the leading elements of `upstream` satisfying
/// `predicate`.
pub fn take_while<S, P>(upstream: S, predicate: P) -> TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile {
        upstream,
        predicate,
        done: false,
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        match self.upstream.pull() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                // The failing element is consumed and dropped; the cutoff is
                // permanent.
                self.done = true;
                None
            }
        }
    }
}

/// Discards the first `n` upstream elements, then passes through.
pub struct Skip<S> {
    upstream: S,
    to_skip: usize,
}

/// Create a sequence over `upstream` with its first `n` elements discarded.
pub fn skip<S: Sequence>(upstream: S, n: usize) -> Skip<S> {
    Skip {
        upstream,
        to_skip: n,
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        // Discard eagerly on the first pull.
        while self.to_skip > 0 {
            self.to_skip -= 1;
            self.upstream.pull()?;
        }
        self.upstream.pull()
    }
}

/// Discards upstream elements while the predicate holds, then passes
/// everything through — including elements that would satisfy the predicate
/// again later.
pub struct SkipWhile<S, P> {
    upstream: S,
    // Present only while still in the discard phase.
    predicate: Option<P>,
}

/// Create a sequence over `upstream` with its matching prefix discarded.
pub fn skip_while<S, P>(upstream: S, predicate: P) -> SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    SkipWhile {
        upstream,
        predicate: Some(predicate),
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        if let Some(mut predicate) = self.predicate.take() {
            loop {
                let item = self.upstream.pull()?;
                if !predicate(&item) {
                    return Some(item);
                }
            }
        }
        self.upstream.pull()
    }
}
