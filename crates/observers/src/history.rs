use sweep_core::Observer;

use crate::traits::HasObjective;

/// Records the objective of every observed event, in order.
///
/// Never requests an action. Pass it by `&mut` so the history is still
/// available once the solver returns.
///
/// # Example
///
/// ```rust
/// use sweep_core::Options;
/// use sweep_observers::ObjectiveHistory;
/// use sweep_solvers::optimization::powell;
/// # use std::convert::Infallible;
/// # use sweep_core::{Model, OptimizationProblem};
/// # struct Bowl;
/// # impl Model for Bowl {
/// #     type Input = [f64; 2];
/// #     type Output = f64;
/// #     type Error = Infallible;
/// #     fn call(&self, x: &[f64; 2]) -> Result<f64, Infallible> {
/// #         Ok((x[0] - 1.0).powi(2) + (x[1] - 2.0).powi(2))
/// #     }
/// # }
/// # struct Raw;
/// # impl OptimizationProblem<2> for Raw {
/// #     type Input = [f64; 2];
/// #     type Output = f64;
/// #     type Error = Infallible;
/// #     fn input(&self, x: &[f64; 2]) -> Result<[f64; 2], Infallible> { Ok(*x) }
/// #     fn objective(&self, _: &[f64; 2], y: &f64) -> Result<f64, Infallible> { Ok(*y) }
/// # }
///
/// let mut history = ObjectiveHistory::new();
/// let solution = powell::minimize(&Bowl, &Raw, [0.0, 0.0], &Options::default(), &mut history)
///     .unwrap();
///
/// assert_eq!(history.len(), solution.iters);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectiveHistory {
    objectives: Vec<f64>,
}

impl ObjectiveHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded objectives, oldest first.
    #[must_use]
    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    /// Returns the most recent objective, if any event was observed.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.objectives.last().copied()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objectives.len()
    }

    /// Returns `true` if no event was observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objectives.is_empty()
    }
}

impl<E: HasObjective, A> Observer<E, A> for ObjectiveHistory {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.objectives.push(event.objective());
        None
    }
}

impl<E: HasObjective, A> Observer<E, A> for &mut ObjectiveHistory {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
