use sweep_core::{OptimizationResult, Optimizer, Options, Remarks};

use crate::optimization::Evaluation;

use super::{Status, search::search};

/// Powell's direction-set method behind the [`Optimizer`] contract.
///
/// `Powell` carries no state: every call builds its own direction set and
/// working points, so one value can be shared freely, including across
/// threads.
///
/// # Example
///
/// ```
/// use sweep_core::{Optimizer, Options};
/// use sweep_solvers::Powell;
///
/// let objective = |x: &[f64; 2]| (x[0] - 1.0).powi(2) + (x[1] - 2.0).powi(2) + 3.0;
/// let options = Options { max_iterations: 2000, tolerance: 1e-4 };
///
/// let result = Powell.optimize(objective, [0.0, 0.0], &options);
///
/// assert!(result.converged);
/// assert!((result.best_objective_value - 3.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Powell;

impl Optimizer for Powell {
    fn optimize<const N: usize, F>(
        &self,
        mut objective: F,
        initial_guess: [f64; N],
        options: &Options,
    ) -> OptimizationResult<N>
    where
        F: FnMut(&[f64; N]) -> f64,
    {
        let mut evaluate = |x: [f64; N]| -> Result<_, std::convert::Infallible> {
            Ok(Evaluation::bare(x, objective(&x)))
        };
        let Ok(solution) = search(&mut evaluate, initial_guess, options, (), &|v: f64| v);

        // Without an observer the search ends converged or at the cap.
        let converged = solution.status == Status::Converged;
        OptimizationResult {
            best_solution: solution.x,
            best_objective_value: solution.objective,
            converged,
            iterations: solution.iters,
            remarks: if converged {
                Remarks::Converged
            } else {
                Remarks::MaxIterationsReached
            },
        }
    }
}
