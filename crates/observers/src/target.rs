use sweep_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops the solver once an event reports an objective at or below `target`.
///
/// Useful when any point that is good enough will do and further sweeps
/// would only spend evaluations. NaN objectives never trigger a stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopBelow {
    target: f64,
}

impl StopBelow {
    /// Creates an observer that stops at or below `target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    /// Returns the objective target.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for StopBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.objective() <= self.target).then(A::stop_early)
    }
}
