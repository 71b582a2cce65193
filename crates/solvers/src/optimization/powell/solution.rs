use sweep_core::Snapshot;

use crate::optimization::Evaluation;

use super::DirectionSet;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The largest single-direction improvement of a sweep fell below tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Powell search.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Point adopted by the last completed sweep.
    pub x: [f64; N],

    /// Objective value at the reported x.
    pub objective: f64,

    /// Snapshot at the reported x.
    pub snapshot: Snapshot<I, O>,

    /// Number of sweeps performed, including the terminating one.
    pub iters: usize,

    /// Direction set after the last sweep.
    pub directions: DirectionSet<N>,
}

impl<I, O, const N: usize> Solution<I, O, N> {
    pub(super) fn from_eval(
        eval: Evaluation<I, O, N>,
        status: Status,
        iters: usize,
        directions: DirectionSet<N>,
    ) -> Self {
        Self {
            status,
            x: eval.x,
            objective: eval.objective,
            snapshot: eval.snapshot,
            iters,
            directions,
        }
    }
}
