//! Numeric range sources.
//!
//! Bounded ranges and unbounded counters are deliberately separate
//! constructors: [`range`]/[`range_step`] always carry both bounds, while
//! [`count_from`] is openly unbounded. Omitting the stop bound is not a
//! spelling of "count forever" here.

use crate::sequence::Sequence;

/// A bounded, inclusive range of `i64` values with a signed step.
#[derive(Debug, Clone)]
pub struct Range {
    current: i64,
    stop: i64,
    step: i64,
    done: bool,
}

/// An unbounded counter advancing by 1.
#[derive(Debug, Clone)]
pub struct Counter {
    next: i64,
    done: bool,
}

/// Counts from `start` to `stop` inclusive, stepping by 1.
///
/// ```rust
/// use sequin::prelude::*;
///
/// let values: Vec<i64> = range(3, 6).collect();
/// assert_eq!(values, vec![3, 4, 5, 6]);
///
/// // start past stop: empty.
/// assert_eq!(range(6, 3).count(), 0);
/// ```
pub fn range(start: i64, stop: i64) -> Range {
    range_step(start, stop, 1)
}

/// Counts from `start` toward `stop` inclusive by `step`, which may be
/// negative.
///
/// Produces values while `step > 0` implies `current <= stop`, or `step < 0`
/// implies `current >= stop`.
///
/// # Panics
///
/// Panics if `step` is zero.
///
/// ```rust
/// use sequin::prelude::*;
///
/// let down: Vec<i64> = range_step(10, 1, -3).collect();
/// assert_eq!(down, vec![10, 7, 4, 1]);
/// ```
pub fn range_step(start: i64, stop: i64, step: i64) -> Range {
    assert!(step != 0, "range step must be nonzero");
    Range {
        current: start,
        stop,
        step,
        done: false,
    }
}

/// Counts upward from `start` without bound, stepping by 1.
///
/// Pair with [`take`](Sequence::take) or another early-exit consumer; a
/// full-drain terminal over a counter never terminates.
///
/// ```rust
/// use sequin::prelude::*;
///
/// let head: Vec<i64> = count_from(5).take(3).collect();
/// assert_eq!(head, vec![5, 6, 7]);
/// ```
pub fn count_from(start: i64) -> Counter {
    Counter {
        next: start,
        done: false,
    }
}

impl Sequence for Range {
    type Item = i64;

    fn pull(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        let in_bounds = if self.step > 0 {
            self.current <= self.stop
        } else {
            self.current >= self.stop
        };
        if !in_bounds {
            self.done = true;
            return None;
        }
        let value = self.current;
        match value.checked_add(self.step) {
            Some(next) => self.current = next,
            // The next step would overflow; this was the final value.
            None => self.done = true,
        }
        Some(value)
    }
}

impl Sequence for Counter {
    type Item = i64;

    fn pull(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        let value = self.next;
        match value.checked_add(1) {
            Some(next) => self.next = next,
            None => self.done = true,
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // floor((stop - start) / step) + 1 when the range is non-empty, else 0.
    fn expected_len(start: i64, stop: i64, step: i64) -> usize {
        let span = stop - start;
        if span.signum() != 0 && span.signum() != step.signum() {
            return 0;
        }
        (span / step + 1) as usize
    }

    #[test]
    fn test_element_count_matches_closed_form() {
        let cases = [
            (1, 10, 1),
            (1, 10, 3),
            (1, 10, 4),
            (10, 1, -2),
            (5, 5, 1),
            (5, 5, -7),
            (5, 1, 1),
            (1, 5, -1),
            (-10, 10, 5),
        ];
        for (start, stop, step) in cases {
            assert_eq!(
                range_step(start, stop, step).count(),
                expected_len(start, stop, step),
                "range_step({start}, {stop}, {step})"
            );
        }
    }

    #[test]
    fn test_stop_bound_is_inclusive() {
        let values: Vec<i64> = range_step(1, 10, 3).collect();
        assert_eq!(values, vec![1, 4, 7, 10]);
    }

    #[test]
    fn test_exhausted_range_stays_exhausted() {
        let mut seq = range(1, 2);
        assert_eq!(seq.pull(), Some(1));
        assert_eq!(seq.pull(), Some(2));
        assert_eq!(seq.pull(), None);
        assert_eq!(seq.pull(), None);
    }

    #[test]
    fn test_range_at_i64_max_terminates() {
        let values: Vec<i64> = range(i64::MAX - 2, i64::MAX).collect();
        assert_eq!(values, vec![i64::MAX - 2, i64::MAX - 1, i64::MAX]);
    }

    #[test]
    #[should_panic(expected = "nonzero")]
    fn test_zero_step_is_rejected_at_construction() {
        let _ = range_step(1, 10, 0);
    }

    // A stop-less range is not an unbounded counter in disguise; the two
    // behaviors have distinct constructors with distinct semantics.
    #[test]
    fn test_counter_and_range_are_distinct_constructors() {
        let counted: Vec<i64> = count_from(3).take(4).collect();
        assert_eq!(counted, vec![3, 4, 5, 6]);

        let bounded: Vec<i64> = range(3, 4).collect();
        assert_eq!(bounded, vec![3, 4]);
    }

    #[test]
    fn test_counter_is_unbounded_past_any_stop() {
        assert_eq!(count_from(1).nth(1_000), crate::Maybe::Present(1_001));
    }
}
