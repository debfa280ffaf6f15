//! Element-wise transformation adapters.

use crate::sequence::Sequence;

/// Transforms every upstream element with a function.
///
/// Upstream exhaustion propagates immediately.
pub struct Map<S, F> {
    upstream: S,
    f: F,
}

/// Create a sequence that transforms every element of `upstream` with `f`.
pub fn map<S, U, F>(upstream: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    Map { upstream, f }
}

impl<S, U, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn pull(&mut self) -> Option<U> {
        self.upstream.pull().map(&mut self.f)
    }
}

/// Calls a function on each element for its side effect, passing the element
/// through unchanged.
pub struct Inspect<S, F> {
    upstream: S,
    f: F,
}

/// Create a sequence that observes each element of `upstream` with `f`.
pub fn inspect<S, F>(upstream: S, f: F) -> Inspect<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    Inspect { upstream, f }
}

impl<S, F> Sequence for Inspect<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        let item = self.upstream.pull()?;
        (self.f)(&item);
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, range};

    #[test]
    fn test_map_squares_each_element() {
        let squared: Vec<i64> = range(1, 3).map(|x| x * x).collect();
        assert_eq!(squared, vec![1, 4, 9]);
    }

    #[test]
    fn test_map_propagates_exhaustion_immediately() {
        let mut calls = 0;
        let mut seq = empty::<i64>().map(|x| {
            calls += 1;
            x
        });
        assert_eq!(seq.pull(), None);
        drop(seq);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_inspect_observes_without_altering() {
        let mut seen = Vec::new();
        let passed: Vec<i64> = range(1, 3).inspect(|x| seen.push(*x)).collect();
        assert_eq!(passed, vec![1, 2, 3]);
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
