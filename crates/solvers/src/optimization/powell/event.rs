use crate::optimization::Evaluation;

use super::DirectionSet;

/// Event emitted by the Powell solver after each sweep.
///
/// The event describes the state the solver will carry into the next sweep:
/// the adopted evaluation and the (possibly updated) direction set. It is
/// emitted before the convergence check, so an observer sees every sweep,
/// including the terminating one.
pub struct Event<'a, I, O, const N: usize> {
    /// Sweep counter (1-based).
    pub iter: usize,

    /// Evaluation adopted at the end of the sweep.
    pub eval: &'a Evaluation<I, O, N>,

    /// Largest single-direction improvement during the sweep.
    pub best_delta: f64,

    /// Slot whose direction was replaced, if the sweep accelerated.
    pub replaced: Option<usize>,

    /// Direction set after the sweep.
    pub directions: &'a DirectionSet<N>,
}

impl<I, O, const N: usize> Event<'_, I, O, N> {
    /// Returns the adopted point.
    #[must_use]
    pub fn x(&self) -> [f64; N] {
        self.eval.x
    }

    /// Returns the objective at the adopted point.
    #[must_use]
    pub fn objective(&self) -> f64 {
        self.eval.objective
    }

    /// Returns `true` if the sweep moved to the extrapolated point.
    #[must_use]
    pub fn accelerated(&self) -> bool {
        self.replaced.is_some()
    }
}
