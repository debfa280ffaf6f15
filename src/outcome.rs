//! Success/failure container.
//!
//! [`Outcome<T, E>`] is a two-variant tagged value holding either a success
//! payload or a failure payload. It mirrors the vocabulary of [`Maybe`]:
//! variant predicates, transforms that act only on the matching variant,
//! monadic chaining, unwrapping with a diagnostic or a default, pattern
//! dispatch, and conversion to and from [`Result`] and [`Maybe`].
//!
//! # Examples
//!
//! ```rust
//! use sequin::Outcome;
//!
//! fn parse_digit(c: char) -> Outcome<u32, String> {
//!     match c.to_digit(10) {
//!         Some(d) => Outcome::Success(d),
//!         None => Outcome::Failure(format!("not a digit: {c:?}")),
//!     }
//! }
//!
//! let doubled = parse_digit('4').map(|d| d * 2);
//! assert_eq!(doubled, Outcome::Success(8));
//!
//! let failed = parse_digit('x').map(|d| d * 2);
//! assert!(failed.is_failure());
//! ```

use std::fmt;

use crate::maybe::Maybe;

/// A value that is either a success carrying `T` or a failure carrying `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The operation succeeded.
    Success(T),
    /// The operation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequin::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(1);
    /// assert!(x.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Converts into `Maybe`, discarding the failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequin::{Maybe, Outcome};
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(2);
    /// assert_eq!(x.success(), Maybe::Present(2));
    ///
    /// let y: Outcome<i32, &str> = Outcome::Failure("nope");
    /// assert_eq!(y.success(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn success(self) -> Maybe<T> {
        match self {
            Outcome::Success(v) => Maybe::Present(v),
            Outcome::Failure(_) => Maybe::Absent,
        }
    }

    /// Converts into `Maybe` over the failure payload, discarding success.
    #[inline]
    pub fn failure(self) -> Maybe<E> {
        match self {
            Outcome::Success(_) => Maybe::Absent,
            Outcome::Failure(e) => Maybe::Present(e),
        }
    }

    /// Transforms the success payload, passing `Failure` through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequin::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Success(5);
    /// assert_eq!(x.map(|v| v * 2), Outcome::Success(10));
    ///
    /// let y: Outcome<i32, &str> = Outcome::Failure("nope");
    /// assert_eq!(y.map(|v| v * 2), Outcome::Failure("nope"));
    /// ```
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Transforms the failure payload, passing `Success` through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequin::Outcome;
    ///
    /// let y: Outcome<i32, &str> = Outcome::Failure("nope");
    /// assert_eq!(y.map_failure(|e| e.len()), Outcome::Failure(4));
    /// ```
    #[inline]
    pub fn map_failure<E2, F: FnOnce(E) -> E2>(self, f: F) -> Outcome<T, E2> {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(e) => Outcome::Failure(f(e)),
        }
    }

    /// Monadic chaining: `f` runs on the success payload and may itself fail,
    /// short-circuiting the pipeline of checks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequin::Outcome;
    ///
    /// let checked_halve = |x: i32| -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 { Outcome::Success(x / 2) } else { Outcome::Failure("odd") }
    /// };
    ///
    /// assert_eq!(Outcome::Success(8).and_then(checked_halve), Outcome::Success(4));
    /// assert_eq!(Outcome::Success(3).and_then(checked_halve), Outcome::Failure("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        match self {
            Outcome::Success(v) => f(v),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with a diagnostic embedding the failure payload if this is a
    /// `Failure`.
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(e) => {
                panic!("called `Outcome::unwrap()` on a `Failure` value: {e:?}")
            }
        }
    }

    /// Returns the success payload or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the success payload or computes one from the failure payload.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Failure(e) => f(e),
        }
    }

    /// Converts into `Maybe`, equivalent to [`Outcome::success`].
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        self.success()
    }

    /// Pattern dispatch: invokes the handler matching this variant.
    ///
    /// Both handlers are optional. If the handler for the matching variant is
    /// missing the dispatch is a silent no-op and returns `Absent`; this is
    /// deliberate, not an oversight.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequin::{Maybe, Outcome};
    ///
    /// let x: Outcome<i32, &str> = Outcome::Failure("bad input");
    /// let report = x.dispatch(
    ///     Some(|v: i32| format!("ok: {v}")),
    ///     Some(|e: &str| format!("error: {e}")),
    /// );
    /// assert_eq!(report, Maybe::Present("error: bad input".to_string()));
    /// ```
    pub fn dispatch<R, F, G>(self, on_success: Option<F>, on_failure: Option<G>) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Outcome::Success(v) => match on_success {
                Some(f) => Maybe::Present(f(v)),
                None => Maybe::Absent,
            },
            Outcome::Failure(e) => match on_failure {
                Some(g) => Maybe::Present(g(e)),
                None => Maybe::Absent,
            },
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::Failure(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_leaves_failure_untouched() {
        let failed: Outcome<i32, &str> = Outcome::Failure("broken");
        assert_eq!(failed.map(|v| v + 1), Outcome::Failure("broken"));
    }

    #[test]
    fn test_and_then_short_circuits_on_first_failure() {
        let step = |x: i32| -> Outcome<i32, &'static str> {
            if x < 100 {
                Outcome::Success(x * 10)
            } else {
                Outcome::Failure("too large")
            }
        };
        assert_eq!(
            Outcome::Success(1).and_then(step).and_then(step).and_then(step),
            Outcome::Failure("too large")
        );
    }

    #[test]
    fn test_round_trip_through_result() {
        let original: Outcome<i32, String> = Outcome::Failure("e".to_string());
        let result: Result<i32, String> = original.clone().into();
        assert_eq!(Outcome::from(result), original);
    }

    #[test]
    fn test_dispatch_without_matching_handler_is_silent_noop() {
        let x: Outcome<i32, &str> = Outcome::Success(1);
        let out = x.dispatch(None::<fn(i32) -> i32>, Some(|_e: &str| 0));
        assert_eq!(out, Maybe::Absent);
    }

    #[test]
    #[should_panic(expected = "`Failure` value: \"boom\"")]
    fn test_unwrap_failure_embeds_payload_in_message() {
        let x: Outcome<i32, &str> = Outcome::Failure("boom");
        let _ = x.unwrap();
    }

    #[test]
    fn test_maybe_conversion_drops_failure_payload() {
        let x: Outcome<i32, &str> = Outcome::Failure("gone");
        assert_eq!(x.into_maybe(), Maybe::Absent);
    }
}
