//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use sweep_core::Observer;
//! use sweep_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct Patience {
//!     best: f64,
//!     stale: usize,
//!     limit: usize,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for Patience {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.objective() < self.best {
//!             self.best = event.objective();
//!             self.stale = 0;
//!         } else {
//!             self.stale += 1;
//!         }
//!         (self.stale >= self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use sweep_solvers::optimization::powell;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<I, O, const N: usize> HasObjective for powell::Event<'_, I, O, N> {
    fn objective(&self) -> f64 {
        self.eval.objective
    }
}

impl CanStopEarly for powell::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
