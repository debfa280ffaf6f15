//! Interop between sequences, eager collections, and std iterators.
//!
//! Collections produce sequences through [`IntoSequence`] and absorb them
//! through [`FromSequence`] (the trait behind
//! [`collect`](crate::Sequence::collect)). Standard iterators cross the same
//! boundary in both directions via [`from_iter`] and
//! [`into_iterator`](crate::Sequence::into_iterator).
//!
//! # Iteration and mutation
//!
//! A borrowed source ([`SliceSource`]) snapshots the collection's length at
//! creation and holds a shared borrow for its lifetime, so structural
//! mutation of the collection while a sequence over it is live is rejected
//! at compile time rather than left undefined. Owned sources consume the
//! collection outright. Two sources derived independently from one
//! collection share no cursor state.
//!
//! Vec-backed sequences yield in insertion order. `HashMap`/`HashSet`
//! sequences carry no ordering guarantee, but a complete drain visits every
//! stored entry exactly once.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::sequence::Sequence;

/// Conversion into a [`Sequence`].
///
/// Implemented by every sequence (identity) and by the eager collections, so
/// adapter arguments like [`chain`](crate::Sequence::chain) and
/// [`flat_map`](crate::Sequence::flat_map) accept either.
pub trait IntoSequence {
    /// Element type of the resulting sequence.
    type Item;
    /// Concrete sequence type produced.
    type Seq: Sequence<Item = Self::Item>;

    fn into_sequence(self) -> Self::Seq;
}

/// Collections that can absorb a drained sequence, preserving pull order
/// where the collection is ordered.
pub trait FromSequence<T>: Sized {
    fn from_sequence<S: Sequence<Item = T>>(seq: S) -> Self;
}

impl<S: Sequence> IntoSequence for S {
    type Item = S::Item;
    type Seq = S;

    fn into_sequence(self) -> S {
        self
    }
}

// ---- borrowed sources ---------------------------------------------------

/// A sequence over a borrowed slice, cloning elements by increasing index.
///
/// The element count is snapshotted at creation; the borrow guarantees it
/// cannot change underneath the cursor.
#[derive(Debug, Clone)]
pub struct SliceSource<'a, T> {
    items: &'a [T],
    cursor: usize,
}

impl<'a, T: Clone> SliceSource<'a, T> {
    /// Create a sequence over `items`, yielding clones front to back.
    pub fn new(items: &'a [T]) -> Self {
        SliceSource { items, cursor: 0 }
    }
}

impl<T: Clone> Sequence for SliceSource<'_, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let item = self.items.get(self.cursor)?;
        self.cursor += 1;
        Some(item.clone())
    }
}

impl<'a, T: Clone> IntoSequence for &'a [T] {
    type Item = T;
    type Seq = SliceSource<'a, T>;

    fn into_sequence(self) -> Self::Seq {
        SliceSource::new(self)
    }
}

impl<'a, T: Clone> IntoSequence for &'a Vec<T> {
    type Item = T;
    type Seq = SliceSource<'a, T>;

    fn into_sequence(self) -> Self::Seq {
        SliceSource::new(self)
    }
}

// ---- std iterator interop -----------------------------------------------

/// A sequence pulling from a standard iterator.
///
/// The iterator's first `None` latches the source exhausted; std iterators
/// are not required to be fused, but sequences are.
pub struct IterSource<I> {
    iter: I,
    done: bool,
}

/// Wrap anything iterable as a [`Sequence`].
///
/// ```rust
/// use sequin::prelude::*;
///
/// let shouted: Vec<String> = from_iter(["a", "b"]).map(str::to_uppercase).collect();
/// assert_eq!(shouted, vec!["A", "B"]);
/// ```
pub fn from_iter<C: IntoIterator>(collection: C) -> IterSource<C::IntoIter> {
    IterSource {
        iter: collection.into_iter(),
        done: false,
    }
}

impl<I: Iterator> Sequence for IterSource<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(item) => Some(item),
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// A standard [`Iterator`] over a sequence; see
/// [`into_iterator`](crate::Sequence::into_iterator).
pub struct SeqIter<S> {
    seq: S,
}

impl<S: Sequence> SeqIter<S> {
    pub(crate) fn new(seq: S) -> Self {
        SeqIter { seq }
    }
}

impl<S: Sequence> Iterator for SeqIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.seq.pull()
    }
}

// ---- owned collection sources -------------------------------------------

impl<T> IntoSequence for Vec<T> {
    type Item = T;
    type Seq = IterSource<std::vec::IntoIter<T>>;

    fn into_sequence(self) -> Self::Seq {
        from_iter(self)
    }
}

impl<T, const N: usize> IntoSequence for [T; N] {
    type Item = T;
    type Seq = IterSource<std::array::IntoIter<T, N>>;

    fn into_sequence(self) -> Self::Seq {
        from_iter(self)
    }
}

impl<K, V> IntoSequence for HashMap<K, V> {
    type Item = (K, V);
    type Seq = IterSource<std::collections::hash_map::IntoIter<K, V>>;

    fn into_sequence(self) -> Self::Seq {
        from_iter(self)
    }
}

impl<T> IntoSequence for HashSet<T> {
    type Item = T;
    type Seq = IterSource<std::collections::hash_set::IntoIter<T>>;

    fn into_sequence(self) -> Self::Seq {
        from_iter(self)
    }
}

// ---- collectors ----------------------------------------------------------

impl<T> FromSequence<T> for Vec<T> {
    fn from_sequence<S: Sequence<Item = T>>(mut seq: S) -> Self {
        let mut out = Vec::new();
        while let Some(item) = seq.pull() {
            out.push(item);
        }
        out
    }
}

impl<K: Eq + Hash, V> FromSequence<(K, V)> for HashMap<K, V> {
    fn from_sequence<S: Sequence<Item = (K, V)>>(mut seq: S) -> Self {
        let mut out = HashMap::new();
        while let Some((key, value)) = seq.pull() {
            out.insert(key, value);
        }
        out
    }
}

impl<T: Eq + Hash> FromSequence<T> for HashSet<T> {
    fn from_sequence<S: Sequence<Item = T>>(mut seq: S) -> Self {
        let mut out = HashSet::new();
        while let Some(item) = seq.pull() {
            out.insert(item);
        }
        out
    }
}

impl FromSequence<char> for String {
    fn from_sequence<S: Sequence<Item = char>>(mut seq: S) -> Self {
        let mut out = String::new();
        while let Some(c) = seq.pull() {
            out.push(c);
        }
        out
    }
}
