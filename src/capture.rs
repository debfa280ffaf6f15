//! Panic-capturing outcome boundary.
//!
//! The library never retries internally: an empty-source `unwrap`, a
//! [`Maybe::required`](crate::Maybe::required) contract violation, or a
//! panicking user closure aborts the whole pipeline. Callers wanting
//! resilience wrap the full terminal call in [`capture`], which converts the
//! panic into a [`Failure`](crate::Outcome::Failure).

use std::panic::{catch_unwind, UnwindSafe};

use crate::error::CapturedPanic;
use crate::outcome::Outcome;

/// Runs `f`, converting a panic into `Failure(CapturedPanic)`.
///
/// Results materialized by earlier terminal calls are unaffected; only the
/// wrapped call is lost.
///
/// # Examples
///
/// ```rust
/// use sequin::prelude::*;
/// use sequin::capture::capture;
///
/// let outcome = capture(|| empty::<i64>().reduce(|a, b| a + b).unwrap());
/// assert!(outcome.is_failure());
///
/// let outcome = capture(|| range(1, 3).sum());
/// assert_eq!(outcome, Outcome::Success(6));
/// ```
pub fn capture<R, F>(f: F) -> Outcome<R, CapturedPanic>
where
    F: FnOnce() -> R + UnwindSafe,
{
    match catch_unwind(f) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => {
            let message = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "<non-string panic payload>".to_string()
            };
            Outcome::Failure(CapturedPanic { message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::Maybe;
    use crate::sequence::Sequence;
    use crate::source::{empty, range};

    #[test]
    fn test_capture_passes_success_through() {
        assert_eq!(capture(|| range(1, 3).count()), Outcome::Success(3));
    }

    #[test]
    fn test_capture_turns_contract_violation_into_failure() {
        let outcome = capture(|| Maybe::<i32>::required(None));
        match outcome {
            Outcome::Failure(e) => assert!(e.message().contains("absent value")),
            Outcome::Success(_) => panic!("expected a captured panic"),
        }
    }

    #[test]
    fn test_capture_turns_empty_unwrap_into_failure() {
        let outcome = capture(|| empty::<i64>().last().unwrap());
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_panicking_closure_aborts_the_whole_pipeline() {
        let outcome = capture(|| {
            range(1, 10)
                .map(|x| if x == 4 { panic!("bad element: {x}") } else { x })
                .collect::<Vec<i64>>()
        });
        match outcome {
            Outcome::Failure(e) => assert!(e.message().contains("bad element: 4")),
            Outcome::Success(_) => panic!("expected a captured panic"),
        }
    }
}
