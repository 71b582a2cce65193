use std::fmt;

/// A derivative-free optimizer over `N` real variables.
///
/// Implementations minimize a black-box objective starting from an initial
/// guess. Non-convergence is not an error: it is reported through
/// [`OptimizationResult::converged`] and [`OptimizationResult::remarks`], and
/// callers should inspect both outcomes.
///
/// Implementors hold no state between calls, so a single optimizer value can
/// serve independent calls, including concurrent ones on separate threads.
pub trait Optimizer {
    /// Minimizes `objective` starting from `initial_guess`.
    ///
    /// The objective is called synchronously and repeatedly; a panic inside it
    /// unwinds to the caller unchanged.
    fn optimize<const N: usize, F>(
        &self,
        objective: F,
        initial_guess: [f64; N],
        options: &Options,
    ) -> OptimizationResult<N>
    where
        F: FnMut(&[f64; N]) -> f64;
}

/// Caller-supplied limits for a single optimize call.
///
/// Fields are used as given; no range validation is performed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Maximum number of outer iterations (sweeps).
    pub max_iterations: usize,

    /// Convergence tolerance on the largest per-sweep improvement.
    pub tolerance: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-6,
        }
    }
}

/// Human-readable outcome of an optimize call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Remarks {
    /// The convergence criterion was met.
    Converged,

    /// The iteration cap was reached first.
    MaxIterationsReached,
}

impl Remarks {
    /// Returns the remark text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Converged => "Optimization converged successfully",
            Self::MaxIterationsReached => "Maximum iterations reached",
        }
    }
}

impl fmt::Display for Remarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of an optimize call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationResult<const N: usize> {
    /// Best point found.
    pub best_solution: [f64; N],

    /// Objective value at [`best_solution`](Self::best_solution).
    pub best_objective_value: f64,

    /// Whether the convergence criterion was met.
    pub converged: bool,

    /// Number of iterations attempted, including the terminating one.
    pub iterations: usize,

    /// Outcome description.
    pub remarks: Remarks,
}
