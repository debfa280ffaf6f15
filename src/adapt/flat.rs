//! Flattening adapters.

use crate::bridge::IntoSequence;
use crate::sequence::Sequence;

/// Maps each upstream element to an inner sequence and yields the inner
/// elements in order.
///
/// Each inner sequence is drained fully before the next upstream element is
/// pulled.
pub struct FlatMap<S, U: IntoSequence, F> {
    upstream: S,
    current: Option<U::Seq>,
    f: F,
}

/// Create a sequence of the elements of every sequence produced by applying
/// `f` to `upstream`.
pub fn flat_map<S, U, F>(upstream: S, f: F) -> FlatMap<S, U, F>
where
    S: Sequence,
    U: IntoSequence,
    F: FnMut(S::Item) -> U,
{
    FlatMap {
        upstream,
        current: None,
        f,
    }
}

impl<S, U, F> Sequence for FlatMap<S, U, F>
where
    S: Sequence,
    U: IntoSequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U::Item;

    fn pull(&mut self) -> Option<U::Item> {
        loop {
            if let Some(inner) = &mut self.current {
                if let Some(item) = inner.pull() {
                    return Some(item);
                }
                self.current = None;
            }
            let outer = self.upstream.pull()?;
            self.current = Some((self.f)(outer).into_sequence());
        }
    }
}

/// Flattens a sequence whose elements are themselves sequences (or
/// collections convertible to sequences).
pub struct Flatten<S: Sequence>
where
    S::Item: IntoSequence,
{
    upstream: S,
    current: Option<<S::Item as IntoSequence>::Seq>,
}

/// Create a sequence of the elements of every inner sequence of `upstream`.
pub fn flatten<S>(upstream: S) -> Flatten<S>
where
    S: Sequence,
    S::Item: IntoSequence,
{
    Flatten {
        upstream,
        current: None,
    }
}

impl<S> Sequence for Flatten<S>
where
    S: Sequence,
    S::Item: IntoSequence,
{
    type Item = <S::Item as IntoSequence>::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.current {
                if let Some(item) = inner.pull() {
                    return Some(item);
                }
                self.current = None;
            }
            let outer = self.upstream.pull()?;
            self.current = Some(outer.into_sequence());
        }
    }
}
