use sweep_core::{Observer, Options};
use tracing::debug;

use crate::optimization::Evaluation;

use super::{Action, DirectionSet, Event, Solution, Status, sweep::sweep};

/// Core Powell search loop.
///
/// `evaluate` produces an evaluation for a point; its error type is whatever
/// the entry point needs (a solver [`Error`](super::Error) for model/problem
/// pairs, `Infallible` for plain closures).
///
/// The `transform` function is applied to objective values before every
/// comparison, allowing the same algorithm to handle both minimization
/// (transform = identity) and maximization (transform = negation).
pub(super) fn search<I, O, Fail, E, Obs, F, const N: usize>(
    evaluate: &mut E,
    x0: [f64; N],
    options: &Options,
    mut observer: Obs,
    transform: &F,
) -> Result<Solution<I, O, N>, Fail>
where
    E: FnMut([f64; N]) -> Result<Evaluation<I, O, N>, Fail>,
    Obs: for<'a> Observer<Event<'a, I, O, N>, Action>,
    F: Fn(f64) -> f64,
{
    let mut directions = DirectionSet::identity();
    let mut current = evaluate(x0)?;

    for iter in 1..=options.max_iterations {
        let outcome = sweep(evaluate, current.x, &mut directions, transform)?;
        current = outcome.next;

        debug!(
            iter,
            objective = current.objective,
            best_delta = outcome.best_delta,
            replaced = ?outcome.replaced,
            "sweep complete"
        );

        let event = Event {
            iter,
            eval: &current,
            best_delta: outcome.best_delta,
            replaced: outcome.replaced,
            directions: &directions,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(iter, "stopped by observer");
            return Ok(Solution::from_eval(
                current,
                Status::StoppedByObserver,
                iter,
                directions,
            ));
        }

        if outcome.best_delta < options.tolerance {
            debug!(iter, objective = current.objective, "converged");
            return Ok(Solution::from_eval(
                current,
                Status::Converged,
                iter,
                directions,
            ));
        }
    }

    debug!(
        max_iterations = options.max_iterations,
        objective = current.objective,
        "iteration limit reached"
    );
    Ok(Solution::from_eval(
        current,
        Status::MaxIters,
        options.max_iterations,
        directions,
    ))
}
