//! Repetition, single-value, empty, and closure sources.

use std::marker::PhantomData;

use crate::sequence::Sequence;

/// Yields clones of one value, a bounded or unbounded number of times.
#[derive(Debug, Clone)]
pub struct RepeatValue<T> {
    value: T,
    remaining: Option<usize>,
}

/// Yields exactly one value, then exhausts.
#[derive(Debug, Clone)]
pub struct Once<T> {
    value: Option<T>,
}

/// Exhausts immediately.
#[derive(Debug, Clone)]
pub struct Empty<T> {
    _marker: PhantomData<T>,
}

/// Pulls elements from a closure until it returns `None`.
///
/// The closure's first `None` latches the source exhausted; a later `Some`
/// from the closure is never observed.
pub struct FromFn<F> {
    f: F,
    done: bool,
}

/// Yields `value` exactly `n` times.
///
/// ```rust
/// use sequin::prelude::*;
///
/// let xs: Vec<&str> = repeat_value("x", 3).collect();
/// assert_eq!(xs, vec!["x", "x", "x"]);
/// ```
pub fn repeat_value<T: Clone>(value: T, n: usize) -> RepeatValue<T> {
    RepeatValue {
        value,
        remaining: Some(n),
    }
}

/// Yields `value` indefinitely.
///
/// ```rust
/// use sequin::prelude::*;
///
/// assert_eq!(repeat_forever(7).take(4).sum(), 28);
/// ```
pub fn repeat_forever<T: Clone>(value: T) -> RepeatValue<T> {
    RepeatValue {
        value,
        remaining: None,
    }
}

/// Yields exactly one value, then exhausts.
pub fn once_value<T>(value: T) -> Once<T> {
    Once { value: Some(value) }
}

/// A sequence with no elements.
///
/// ```rust
/// use sequin::prelude::*;
///
/// assert_eq!(empty::<i64>().count(), 0);
/// ```
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

/// Builds a source from a closure, pulling until it returns `None`.
///
/// ```rust
/// use sequin::prelude::*;
///
/// let mut next = 1u64;
/// let powers: Vec<u64> = from_fn(move || {
///     let value = next;
///     next *= 2;
///     if value <= 16 { Some(value) } else { None }
/// })
/// .collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
/// ```
pub fn from_fn<T, F: FnMut() -> Option<T>>(f: F) -> FromFn<F> {
    FromFn { f, done: false }
}

impl<T: Clone> Sequence for RepeatValue<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        match &mut self.remaining {
            Some(0) => None,
            Some(n) => {
                *n -= 1;
                Some(self.value.clone())
            }
            None => Some(self.value.clone()),
        }
    }
}

impl<T> Sequence for Once<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        None
    }
}

impl<T, F: FnMut() -> Option<T>> Sequence for FromFn<F> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        match (self.f)() {
            Some(value) => Some(value),
            None => {
                self.done = true;
                None
            }
        }
    }
}
