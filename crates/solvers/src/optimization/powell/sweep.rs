use crate::optimization::Evaluation;

use super::{DirectionSet, line_search::line_minimize};

/// What a single sweep decided.
pub(super) struct SweepOutcome<I, O, const N: usize> {
    /// Evaluation to carry into the next sweep.
    pub(super) next: Evaluation<I, O, N>,

    /// Largest single-direction improvement seen during the sweep.
    pub(super) best_delta: f64,

    /// Slot that received the net sweep direction, if the sweep accelerated.
    pub(super) replaced: Option<usize>,
}

/// Runs one sweep of line searches starting from `origin`.
///
/// Each direction is searched in slot order from the point reached by the
/// previous one. The objective is re-evaluated at the start of every line
/// search and again at the origin and end point after the loop, so every
/// logical evaluation is a separate call to `evaluate`.
///
/// When the extrapolated point `2 * end - origin` passes [`accelerates`], the
/// direction responsible for the largest improvement is replaced by the net
/// displacement `end - origin` and the sweep adopts the extrapolated point.
/// Otherwise the end point is adopted and the directions are left unchanged.
pub(super) fn sweep<I, O, Fail, E, F, const N: usize>(
    evaluate: &mut E,
    origin: [f64; N],
    directions: &mut DirectionSet<N>,
    transform: &F,
) -> Result<SweepOutcome<I, O, N>, Fail>
where
    E: FnMut([f64; N]) -> Result<Evaluation<I, O, N>, Fail>,
    F: Fn(f64) -> f64,
{
    let mut end = origin;
    let mut best_index = 0;
    let mut best_delta = 0.0;

    for (i, direction) in directions.iter().enumerate() {
        let before = evaluate(end)?;
        let value_before = before.objective;

        let after = line_minimize(evaluate, before, direction, transform)?;
        let delta = (value_before - after.objective).abs();
        if delta > best_delta {
            best_delta = delta;
            best_index = i;
        }

        end = after.x;
    }

    let extrapolated = evaluate(std::array::from_fn(|j| 2.0 * end[j] - origin[j]))?;
    let previous = evaluate(origin)?;
    let current = evaluate(end)?;

    if accelerates(
        transform(previous.objective),
        transform(current.objective),
        transform(extrapolated.objective),
    ) {
        directions.replace(best_index, std::array::from_fn(|j| end[j] - origin[j]));
        Ok(SweepOutcome {
            next: extrapolated,
            best_delta,
            replaced: Some(best_index),
        })
    } else {
        Ok(SweepOutcome {
            next: current,
            best_delta,
            replaced: None,
        })
    }
}

/// Decides whether a sweep should move to its extrapolated point.
///
/// Takes scores at the sweep origin (`previous`), the sweep end (`current`),
/// and the extrapolated point. Only an extrapolated score strictly below
/// `current` is considered; it is then accepted when
///
/// ```text
/// 2 (f0 - 2 f1 + fe) (f0 - f1 - d)² < d (f0 - f1)²,   d = f0 - fe
/// ```
///
/// Any NaN score rejects the extrapolation.
pub(super) fn accelerates(previous: f64, current: f64, extrapolated: f64) -> bool {
    if extrapolated >= current || extrapolated.is_nan() || current.is_nan() {
        return false;
    }

    let improvement = previous - extrapolated;
    let curvature = 2.0 * (previous - 2.0 * current + extrapolated);
    let lhs = curvature * (previous - current - improvement).powi(2);
    let rhs = improvement * (previous - current).powi(2);
    lhs < rhs
}
