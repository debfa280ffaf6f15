//! Discarding adapters: predicate filtering and filter-map.

use crate::maybe::Maybe;
use crate::sequence::Sequence;

/// Yields only the upstream elements satisfying a predicate.
///
/// Each pull loops over the upstream, discarding failing elements, until a
/// passing element is found or the upstream exhausts.
pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
}

/// Create a sequence over the elements of `upstream` satisfying `predicate`.
pub fn filter<S, P>(upstream: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter {
        upstream,
        predicate,
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        loop {
            let item = self.upstream.pull()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }
}

/// Transforms and filters in one pass.
///
/// The function decides inclusion itself: a [`Maybe::Absent`] result means
/// "skip this element", so each pull loops until a present result or
/// upstream exhaustion.
pub struct FilterMap<S, F> {
    upstream: S,
    f: F,
}

/// Create a sequence of the present results of applying `f` to `upstream`.
pub fn filter_map<S, U, F>(upstream: S, f: F) -> FilterMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Maybe<U>,
{
    FilterMap { upstream, f }
}

impl<S, U, F> Sequence for FilterMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Maybe<U>,
{
    type Item = U;

    fn pull(&mut self) -> Option<U> {
        loop {
            let item = self.upstream.pull()?;
            if let Maybe::Present(mapped) = (self.f)(item) {
                return Some(mapped);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::range;

    #[test]
    fn test_filter_never_yields_a_failing_element() {
        let evens: Vec<i64> = range(1, 20).filter(|x| x % 2 == 0).collect();
        assert!(evens.iter().all(|x| x % 2 == 0));
        assert_eq!(evens.len(), 10);
    }

    #[test]
    fn test_filter_exhausts_when_no_element_passes() {
        let mut seq = range(1, 5).filter(|x| *x > 100);
        assert_eq!(seq.pull(), None);
        assert_eq!(seq.pull(), None);
    }

    #[test]
    fn test_filter_map_skips_absent_results() {
        let parsed: Vec<i64> = crate::bridge::from_iter(["3", "x", "5", ""])
            .filter_map(|s| Maybe::from(s.parse::<i64>().ok()))
            .collect();
        assert_eq!(parsed, vec![3, 5]);
    }

    #[test]
    fn test_filter_map_transforms_present_results() {
        let halves: Vec<i64> = range(1, 6)
            .filter_map(|x| {
                if x % 2 == 0 {
                    Maybe::Present(x / 2)
                } else {
                    Maybe::Absent
                }
            })
            .collect();
        assert_eq!(halves, vec![1, 2, 3]);
    }
}
