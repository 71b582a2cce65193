//! Powell's direction-set search for multi-variable optimization.
//!
//! # Algorithm
//!
//! The solver keeps a set of `N` search directions, starting from the
//! coordinate axes. Each iteration (a *sweep*) runs a line search along every
//! direction in turn, then looks at the net displacement of the sweep:
//!
//! 1. The point `2 * end - origin` is evaluated.
//! 2. If it beats the sweep's end point and passes the acceleration
//!    criterion, the solver moves there and the net displacement replaces the
//!    direction that produced the sweep's largest single improvement.
//! 3. Otherwise the end point is kept and the directions are unchanged.
//!
//! The search converges when the largest single-direction improvement of a
//! sweep drops below [`Options::tolerance`].
//!
//! The line search is a step-doubling heuristic: starting with a unit step it
//! doubles after every improving trial and reverses/halves after every
//! non-improving one, for at most 20 trials or until the step is shorter than
//! `1e-4`. It does not bracket the one-dimensional minimum.
//!
//! # When to Use
//!
//! - Derivative information is unavailable or the objective is not smooth
//! - The number of variables is small and known at compile time
//! - Each evaluation is a black box (a simulation, an external model)
//!
//! # Limitations
//!
//! - **Local only**: finds a local optimum near the starting point
//! - **Heuristic line search**: may stop short of the minimum along a
//!   direction, so highly curved objectives can need many sweeps
//! - **No bounds or constraints**
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after each sweep, before the convergence
//! check. Observers can return [`Action::StopEarly`] to halt with the point the
//! sweep adopted.
//!
//! # Entry Points
//!
//! - [`Powell`] implements [`Optimizer`] for plain closures
//! - [`minimize`] / [`maximize`] drive a [`Model`] through an
//!   [`OptimizationProblem`], reporting model snapshots and errors
//!
//! [`Optimizer`]: sweep_core::Optimizer

mod action;
mod directions;
mod error;
mod event;
mod line_search;
mod optimizer;
mod search;
mod solution;
mod sweep;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use directions::DirectionSet;
pub use error::Error;
pub use event::Event;
pub use optimizer::Powell;
pub use solution::{Solution, Status};

use sweep_core::{Model, Observer, OptimizationProblem, Options};

use crate::optimization::evaluate;

use search::search;

/// Finds a minimum of the objective using Powell's method.
///
/// The observer receives an [`Event`] after each sweep.
/// See the [module docs](self) for details on event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the model or problem fails during any evaluation.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    options: &Options,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
{
    let mut eval = |x: [f64; N]| evaluate(model, problem, x).map_err(Error::from);
    search(&mut eval, x0, options, observer, &|v: f64| v)
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails during any evaluation.
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    options: &Options,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, x0, options, ())
}

/// Finds a maximum of the objective using Powell's method.
///
/// Scores are negated internally; the reported objective is the untransformed
/// value. The observer receives an [`Event`] after each sweep.
///
/// # Errors
///
/// Returns an error if the model or problem fails during any evaluation.
pub fn maximize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    options: &Options,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
{
    let mut eval = |x: [f64; N]| evaluate(model, problem, x).map_err(Error::from);
    search(&mut eval, x0, options, observer, &|v: f64| -v)
}

/// Finds a maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails during any evaluation.
pub fn maximize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    options: &Options,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, x0, options, ())
}
