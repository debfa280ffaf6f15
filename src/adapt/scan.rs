//! Stateful accumulation adapter.

use crate::sequence::Sequence;

/// Carries running state across pulls, yielding the new state at each step.
///
/// The state is adapter-owned; a clone is yielded and the original retained,
/// so downstream code never observes the live accumulator.
pub struct Scan<S, St, F> {
    upstream: S,
    state: Option<St>,
    f: F,
}

/// Create a sequence of the running states of folding `upstream` with `f`
/// from `init`.
pub fn scan<S, St, F>(upstream: S, init: St, f: F) -> Scan<S, St, F>
where
    S: Sequence,
    St: Clone,
    F: FnMut(St, S::Item) -> St,
{
    Scan {
        upstream,
        state: Some(init),
        f,
    }
}

impl<S, St, F> Sequence for Scan<S, St, F>
where
    S: Sequence,
    St: Clone,
    F: FnMut(St, S::Item) -> St,
{
    type Item = St;

    fn pull(&mut self) -> Option<St> {
        let item = self.upstream.pull()?;
        // None only if a previous step panicked mid-update; stay exhausted.
        let previous = self.state.take()?;
        let next = (self.f)(previous, item);
        self.state = Some(next.clone());
        Some(next)
    }
}
