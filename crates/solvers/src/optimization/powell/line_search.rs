use tracing::trace;

use crate::optimization::Evaluation;

/// First trial step length along the direction.
const INITIAL_STEP: f64 = 1.0;

/// Maximum number of trial points per line search.
const MAX_STEPS: usize = 20;

/// Step multiplier after an accepted trial point.
const GROWTH: f64 = 2.0;

/// Step multiplier after a rejected trial point: reverse and halve.
const REVERSAL: f64 = -0.5;

/// The search stops once the step magnitude falls below this.
const MIN_STEP: f64 = 1e-4;

/// Searches along `direction` from `start` for a lower objective.
///
/// Trial points are always measured from the start point:
/// `start.x + step * direction`. An improving trial point is kept and the step
/// doubles; a non-improving one reverses the step and halves it. The search
/// ends after [`MAX_STEPS`] trials or once the step is shorter than
/// [`MIN_STEP`].
///
/// This is an acceptance heuristic, not a bracketing search, so it can stop
/// short of the true minimum along the line. The returned evaluation is never
/// worse than `start` and is `start` itself when no trial point improves.
///
/// Scores are compared after `transform`, which lets maximization reuse the
/// same search by negating the objective.
pub(super) fn line_minimize<I, O, Fail, E, F, const N: usize>(
    evaluate: &mut E,
    start: Evaluation<I, O, N>,
    direction: &[f64; N],
    transform: &F,
) -> Result<Evaluation<I, O, N>, Fail>
where
    E: FnMut([f64; N]) -> Result<Evaluation<I, O, N>, Fail>,
    F: Fn(f64) -> f64,
{
    let origin = start.x;
    let mut best = start;
    let mut step = INITIAL_STEP;

    for trial in 1..=MAX_STEPS {
        let x: [f64; N] = std::array::from_fn(|j| origin[j] + step * direction[j]);
        let candidate = evaluate(x)?;

        if transform(candidate.objective) < transform(best.objective) {
            best = candidate;
            step *= GROWTH;
        } else {
            step *= REVERSAL;
        }

        if step.abs() < MIN_STEP {
            trace!(trial, objective = best.objective, "line search step exhausted");
            return Ok(best);
        }
    }

    trace!(objective = best.objective, "line search trial limit reached");
    Ok(best)
}
