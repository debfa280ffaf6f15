//! Sequential composition of two sequences.

use crate::sequence::Sequence;

/// Yields every element of the first sequence, then every element of the
/// second.
///
/// The second sequence is not pulled, or otherwise touched, before the first
/// exhausts. Once the first side exhausts it is dropped; the switch is
/// permanent.
pub struct Chain<A, B> {
    // Present only while the first side is still draining.
    first: Option<A>,
    second: B,
}

/// Create a sequence running `first` to exhaustion, then `second`.
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Chain {
        first: Some(first),
        second,
    }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn pull(&mut self) -> Option<A::Item> {
        if let Some(first) = &mut self.first {
            if let Some(item) = first.pull() {
                return Some(item);
            }
            self.first = None;
        }
        self.second.pull()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, range};

    #[test]
    fn test_chain_preserves_each_sides_order() {
        let joined: Vec<i64> = range(1, 3).chain(range(10, 12)).collect();
        assert_eq!(joined, vec![1, 2, 3, 10, 11, 12]);
    }

    #[test]
    fn test_chain_does_not_peek_at_second_before_first_exhausts() {
        let second_pulled = std::cell::Cell::new(false);
        let second = range(10, 12).inspect(|_| second_pulled.set(true));
        let mut seq = range(1, 2).chain(second);
        assert_eq!(seq.pull(), Some(1));
        assert_eq!(seq.pull(), Some(2));
        assert!(!second_pulled.get());
        assert_eq!(seq.pull(), Some(10));
        assert!(second_pulled.get());
    }

    #[test]
    fn test_chain_with_empty_sides() {
        let left_empty: Vec<i64> = empty().chain(range(1, 2)).collect();
        assert_eq!(left_empty, vec![1, 2]);

        let right_empty: Vec<i64> = range(1, 2).chain(empty()).collect();
        assert_eq!(right_empty, vec![1, 2]);
    }

    #[test]
    fn test_chain_accepts_a_collection_directly() {
        let joined: Vec<i64> = range(1, 2).chain(vec![7, 8]).collect();
        assert_eq!(joined, vec![1, 2, 7, 8]);
    }
}
