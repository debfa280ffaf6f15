//! Pairing adapters: zip and enumerate.

use crate::sequence::Sequence;

/// Pairs elements from two sequences, one pull per side per step.
///
/// Exhausts as soon as either side does (the shorter sequence wins). The
/// right side is not pulled on a step where the left side already exhausted.
pub struct Zip<A, B> {
    left: A,
    right: B,
    done: bool,
}

/// Create a sequence of pairs drawn step-wise from `left` and `right`.
pub fn zip<A, B>(left: A, right: B) -> Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    Zip {
        left,
        right,
        done: false,
    }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);

    fn pull(&mut self) -> Option<(A::Item, B::Item)> {
        if self.done {
            return None;
        }
        let Some(a) = self.left.pull() else {
            self.done = true;
            return None;
        };
        let Some(b) = self.right.pull() else {
            // The element already pulled from the left is dropped; the pair
            // it would have joined does not exist.
            self.done = true;
            return None;
        };
        Some((a, b))
    }
}

/// Pairs each element with a 1-based running index.
pub struct Enumerate<S> {
    upstream: S,
    index: usize,
}

/// Create a sequence pairing each element of `upstream` with its 1-based
/// ordinal.
pub fn enumerate<S: Sequence>(upstream: S) -> Enumerate<S> {
    Enumerate { upstream, index: 0 }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    fn pull(&mut self) -> Option<(usize, S::Item)> {
        let item = self.upstream.pull()?;
        self.index += 1;
        Some((self.index, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{count_from, range};

    #[test]
    fn test_zip_stops_at_the_shorter_side() {
        let pairs: Vec<(i64, i64)> = range(1, 3).zip(range(10, 14)).collect();
        assert_eq!(pairs, vec![(1, 10), (2, 11), (3, 12)]);

        let pairs: Vec<(i64, i64)> = range(10, 14).zip(range(1, 3)).collect();
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_zip_latches_after_either_side_exhausts() {
        let mut seq = range(1, 1).zip(count_from(0));
        assert_eq!(seq.pull(), Some((1, 0)));
        assert_eq!(seq.pull(), None);
        assert_eq!(seq.pull(), None);
    }

    #[test]
    fn test_zip_skips_right_pull_when_left_is_spent() {
        let right_pulls = std::cell::Cell::new(0);
        let right = count_from(0).inspect(|_| right_pulls.set(right_pulls.get() + 1));
        let mut seq = range(1, 2).zip(right);
        while seq.pull().is_some() {}
        // Two pairs, then the left side exhausts before the right is touched.
        assert_eq!(right_pulls.get(), 2);
    }

    #[test]
    fn test_zip_pairs_disparate_element_types() {
        let labeled: Vec<(i64, char)> = range(1, 3).zip(vec!['a', 'b', 'c']).collect();
        assert_eq!(labeled, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    }

    #[test]
    fn test_enumerate_indexes_from_one() {
        let indexed: Vec<(usize, i64)> = range(10, 12).enumerate().collect();
        assert_eq!(indexed, vec![(1, 10), (2, 11), (3, 12)]);
    }
}
