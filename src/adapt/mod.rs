//! Transformation adapters.
//!
//! Every adapter owns exactly one upstream sequence by move and is itself a
//! [`Sequence`](crate::Sequence), so pipelines compose without limit. The
//! constructor functions here are what the [`Sequence`](crate::Sequence)
//! trait methods call; prefer the method syntax.

pub mod bound;
pub mod chain;
pub mod filter;
pub mod flat;
pub mod map;
pub mod scan;
pub mod zip;

pub use bound::{Skip, SkipWhile, Take, TakeWhile};
pub use chain::Chain;
pub use filter::{Filter, FilterMap};
pub use flat::{FlatMap, Flatten};
pub use map::{Inspect, Map};
pub use scan::Scan;
pub use zip::{Enumerate, Zip};
