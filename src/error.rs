//! Error types surfaced by terminal consumers and the capture boundary.

use thiserror::Error;

/// A terminal operation that needs at least one element was invoked on an
/// exhausted or empty sequence.
///
/// Returned by [`reduce`](crate::Sequence::reduce),
/// [`min`](crate::Sequence::min) and [`max`](crate::Sequence::max).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("terminal operation invoked on an empty sequence")]
pub struct EmptySequence;

/// A panic caught by [`capture`](crate::capture::capture), carrying the panic
/// message when one was attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("captured panic: {message}")]
pub struct CapturedPanic {
    pub(crate) message: String,
}

impl CapturedPanic {
    /// The panic message, or `"<non-string panic payload>"` when the payload
    /// was not a string.
    pub fn message(&self) -> &str {
        &self.message
    }
}
