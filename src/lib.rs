//! # Sequin: Lazy Pull-Based Sequence Pipelines
//!
//! Build lazy sequence pipelines from sources, composable transformation
//! adapters, and terminal consumers, with explicit outcome types for
//! success/failure and presence/absence.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: stateful producers driven by `pull()`, which yields the
//!   next element or `None` once exhausted — permanently, never resurrecting
//! - **[`IntoSequence`](bridge::IntoSequence)** / **[`FromSequence`](bridge::FromSequence)**:
//!   how eager collections produce and absorb sequences
//!
//! ## Key Features
//!
//! - **Lazy**: nothing is computed until a terminal consumer pulls
//! - **Composable**: adapters like `.map()`, `.filter()`, `.take()`,
//!   `.zip()`, `.flat_map()` stack without limit
//! - **Explicit outcomes**: [`Outcome<T, E>`] and [`Maybe<T>`] carry
//!   success/failure and presence/absence through the whole vocabulary of
//!   combinators
//!
//! ## Example
//!
//! ```
//! use sequin::prelude::*;
//!
//! // Squares of the odd numbers up to 9, as a Vec.
//! let squares: Vec<i64> = range(1, 9)
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * x)
//!     .collect();
//! assert_eq!(squares, vec![1, 9, 25, 49, 81]);
//!
//! // Short-circuiting search over an unbounded counter.
//! let found = count_from(1).find(|x| x * x > 50);
//! assert_eq!(found, Maybe::Present(8));
//! ```
//!
//! ## Common Functions
//!
//! **Building sources:**
//! - [`range(start, stop)`](source::range) / [`range_step`](source::range_step) - inclusive bounded ranges
//! - [`count_from(start)`](source::count_from) - unbounded counter
//! - [`repeat_value(v, n)`](source::repeat_value) / [`repeat_forever(v)`](source::repeat_forever)
//! - [`once_value(v)`](source::once_value) / [`empty()`](source::empty) / [`from_fn(f)`](source::from_fn)
//! - [`from_iter(c)`](bridge::from_iter) - wrap any std iterable
//!
//! **Consuming pipelines:**
//! - [`collect()`](Sequence::collect) - materialize into `Vec`, `HashMap`, `HashSet`, `String`
//! - [`fold`](Sequence::fold) / [`reduce`](Sequence::reduce) / [`sum`](Sequence::sum) - full-drain reducers
//! - [`find`](Sequence::find) / [`any`](Sequence::any) / [`all`](Sequence::all) - short-circuiting
//! - [`capture(f)`](capture::capture) - wrap a terminal call, panics become `Failure`

pub mod accum;
pub mod adapt;
pub mod bridge;
pub mod capture;
pub mod error;
pub mod maybe;
pub mod outcome;
pub mod prelude;
pub mod sequence;
pub mod source;

pub use error::{CapturedPanic, EmptySequence};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use sequence::Sequence;
