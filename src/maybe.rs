//! Presence/absence container.
//!
//! [`Maybe<T>`] is a two-variant tagged value representing a value that is
//! either present or absent. Unlike a bare [`Option`], it carries the full
//! combinator vocabulary used throughout this library (predicates, transforms,
//! monadic chaining, pattern dispatch) and a checked constructor,
//! [`Maybe::required`], that treats "present but empty" as a contract
//! violation rather than a representable state.
//!
//! # Examples
//!
//! ```rust
//! use sequin::Maybe;
//!
//! let found: Maybe<i32> = Maybe::Present(3);
//! assert_eq!(found.map(|x| x * 10).unwrap_or(0), 30);
//!
//! let missing: Maybe<i32> = Maybe::Absent;
//! assert_eq!(missing.unwrap_or(0), 0);
//! ```

use crate::outcome::Outcome;

/// A value that is either present or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Maybe<T> {
    /// Checked constructor: the payload is required to be there.
    ///
    /// Converts `Some(v)` into `Present(v)`. Passing `None` is a contract
    /// violation and panics; use `Maybe::from` for the lenient conversion.
    ///
    /// # Panics
    ///
    /// Panics if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequin::Maybe;
    ///
    /// assert_eq!(Maybe::required(Some(7)), Maybe::Present(7));
    /// ```
    ///
    /// ```rust,should_panic
    /// use sequin::Maybe;
    ///
    /// let _ = Maybe::<i32>::required(None); // panics
    /// ```
    pub fn required(value: Option<T>) -> Maybe<T> {
        match value {
            Some(v) => Maybe::Present(v),
            None => panic!("called `Maybe::required()` with an absent value"),
        }
    }

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequin::Maybe;
    ///
    /// assert!(Maybe::Present(1).is_present());
    /// assert!(!Maybe::<i32>::Absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Transforms the present value, passing `Absent` through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequin::Maybe;
    ///
    /// assert_eq!(Maybe::Present(2).map(|x| x + 1), Maybe::Present(3));
    /// assert_eq!(Maybe::<i32>::Absent.map(|x| x + 1), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Present(v) => Maybe::Present(f(v)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keeps the present value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequin::Maybe;
    ///
    /// assert_eq!(Maybe::Present(4).filter(|x| x % 2 == 0), Maybe::Present(4));
    /// assert_eq!(Maybe::Present(3).filter(|x| x % 2 == 0), Maybe::Absent);
    /// ```
    #[inline]
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Maybe<T> {
        match self {
            Maybe::Present(v) if predicate(&v) => Maybe::Present(v),
            _ => Maybe::Absent,
        }
    }

    /// Monadic chaining: `f` runs on the present value and may itself come up
    /// absent, short-circuiting the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequin::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::Present(x / 2) } else { Maybe::Absent };
    /// assert_eq!(Maybe::Present(8).and_then(half).and_then(half), Maybe::Present(2));
    /// assert_eq!(Maybe::Present(6).and_then(half).and_then(half), Maybe::Absent);
    /// ```
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Maybe<U>>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Present(v) => f(v),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Returns the present value.
    ///
    /// # Panics
    ///
    /// Panics with a diagnostic if the value is absent.
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => panic!("called `Maybe::unwrap()` on an `Absent` value"),
        }
    }

    /// Returns the present value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => default,
        }
    }

    /// Returns the present value or computes one from `f`.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => f(),
        }
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(v) => Some(v),
            Maybe::Absent => None,
        }
    }

    /// Converts into an [`Outcome`], with absence becoming the supplied
    /// failure value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequin::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::Present(1).into_outcome("missing"), Outcome::Success(1));
    /// assert_eq!(Maybe::<i32>::Absent.into_outcome("missing"), Outcome::Failure("missing"));
    /// ```
    #[inline]
    pub fn into_outcome<E>(self, failure: E) -> Outcome<T, E> {
        match self {
            Maybe::Present(v) => Outcome::Success(v),
            Maybe::Absent => Outcome::Failure(failure),
        }
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
    /// use sequin::Maybe;
    ///
    /// let described = Maybe::Present(3).dispatch(
    ///     Some(|v: i32| format!("got {v}")),
    ///     Some(|| "nothing".to_string()),
    /// );
    /// assert_eq!(described, Maybe::Present("got 3".to_string()));
    ///
    /// // No handler for the matching variant: silent no-op.
    /// let skipped = Maybe::Present(3).dispatch(None::<fn(i32) -> String>, Some(|| "nothing".to_string()));
    /// assert_eq!(skipped, Maybe::Absent);
    /// ```
    pub fn dispatch<R, F, G>(self, on_present: Option<F>, on_absent: Option<G>) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Maybe::Present(v) => match on_present {
                Some(f) => Maybe::Present(f(v)),
                None => Maybe::Absent,
            },
            Maybe::Absent => match on_absent {
                Some(g) => Maybe::Present(g()),
                None => Maybe::Absent,
            },
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Present(v),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_accepts_present_payload() {
        assert_eq!(Maybe::required(Some("x")), Maybe::Present("x"));
    }

    #[test]
    #[should_panic(expected = "absent value")]
    fn test_required_rejects_absent_payload() {
        let _ = Maybe::<u8>::required(None);
    }

    #[test]
    fn test_filter_passes_absent_through() {
        assert_eq!(Maybe::<i32>::Absent.filter(|_| true), Maybe::Absent);
    }

    #[test]
    fn test_dispatch_runs_matching_handler_only() {
        let mut absent_ran = false;
        let out = Maybe::Present(2).dispatch(
            Some(|v: i32| v * 100),
            Some(|| {
                absent_ran = true;
                0
            }),
        );
        assert_eq!(out, Maybe::Present(200));
        assert!(!absent_ran);
    }

    #[test]
    fn test_dispatch_without_matching_handler_is_silent_noop() {
        let out = Maybe::Present(2).dispatch(None::<fn(i32) -> i32>, Some(|| 0));
        assert_eq!(out, Maybe::Absent);

        let out = Maybe::<i32>::Absent.dispatch(Some(|v: i32| v), None::<fn() -> i32>);
        assert_eq!(out, Maybe::Absent);
    }

    #[test]
    fn test_outcome_conversion_uses_supplied_failure() {
        assert_eq!(
            Maybe::<i32>::Absent.into_outcome("empty"),
            Outcome::Failure("empty")
        );
    }

    #[test]
    #[should_panic(expected = "`Absent` value")]
    fn test_unwrap_absent_panics_with_diagnostic() {
        let _ = Maybe::<i32>::Absent.unwrap();
    }
}
