//! Building sequences from scratch.
//!
//! This module provides the source constructors: bounded and counting ranges,
//! repetition, single-value and empty sequences, and closures.

mod gen;
mod range;

pub use gen::{empty, from_fn, once_value, repeat_forever, repeat_value, Empty, FromFn, Once, RepeatValue};
pub use range::{count_from, range, range_step, Counter, Range};
