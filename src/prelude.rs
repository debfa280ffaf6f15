//! Commonly used imports
//!
//! Use `use sequin::prelude::*;` for quick access to the most common types
//! and constructors.

// Core types
pub use crate::{Maybe, Outcome, Sequence};

// Source constructors
pub use crate::source::{
    count_from, empty, from_fn, once_value, range, range_step, repeat_forever, repeat_value,
};

// Collection and iterator interop
pub use crate::bridge::{from_iter, FromSequence, IntoSequence};

// Terminal error
pub use crate::error::EmptySequence;
