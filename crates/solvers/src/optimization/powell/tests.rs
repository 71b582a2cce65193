use std::convert::Infallible;

use approx::assert_relative_eq;
use sweep_core::{Model, OptimizationProblem, Optimizer, Options, Remarks};

use super::{
    Action, DirectionSet, Error, Event, Powell, Status, maximize_unobserved, minimize,
    minimize_unobserved,
};

/// Shifted paraboloid: f(x, y) = (x - 1)² + (y - 2)² + 3.
fn paraboloid(x: &[f64; 2]) -> f64 {
    (x[0] - 1.0).powi(2) + (x[1] - 2.0).powi(2) + 3.0
}

fn options(max_iterations: usize, tolerance: f64) -> Options {
    Options {
        max_iterations,
        tolerance,
    }
}

/// Model wrapping [`paraboloid`].
struct Paraboloid;

impl Model for Paraboloid {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(paraboloid(x))
    }
}

/// Objective: just use the model output as the objective.
struct ObjectiveOutput;

impl OptimizationProblem<2> for ObjectiveOutput {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 2], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

fn assert_reaches_paraboloid_minimum(x0: [f64; 2]) {
    let result = Powell.optimize(paraboloid, x0, &options(2000, 1e-4));

    assert!(result.converged, "should converge from {x0:?}");
    assert_eq!(result.remarks, Remarks::Converged);
    assert!((result.best_objective_value - 3.0).abs() < 1e-4);
    assert!((result.best_solution[0] - 1.0).abs() < 1e-4);
    assert!((result.best_solution[1] - 2.0).abs() < 1e-4);
}

#[test]
fn converges_from_origin() {
    assert_reaches_paraboloid_minimum([0.0, 0.0]);
}

#[test]
fn converges_from_positive_start() {
    assert_reaches_paraboloid_minimum([5.0, 5.0]);
}

#[test]
fn converges_from_negative_start() {
    assert_reaches_paraboloid_minimum([-5.0, -5.0]);
}

#[test]
fn sweep_counts_on_paraboloid() {
    // From the origin one sweep lands on (1, 2) and the next finds nothing.
    // From (±5, ±5) the first sweep stops one unit short along y.
    let opts = options(2000, 1e-4);

    assert_eq!(Powell.optimize(paraboloid, [0.0, 0.0], &opts).iterations, 2);
    assert_eq!(Powell.optimize(paraboloid, [5.0, 5.0], &opts).iterations, 3);
    assert_eq!(Powell.optimize(paraboloid, [-5.0, -5.0], &opts).iterations, 3);
}

#[test]
fn zero_dimensions_converge_on_first_sweep() {
    let result = Powell.optimize(|_: &[f64; 0]| 42.0, [], &Options::default());

    assert!(result.converged);
    assert_eq!(result.iterations, 1);
    assert_relative_eq!(result.best_objective_value, 42.0);
}

#[test]
fn single_dimension_is_repeated_line_search() {
    let result = Powell.optimize(
        |x: &[f64; 1]| (x[0] - 0.75).powi(2),
        [0.0],
        &options(100, 1e-12),
    );

    assert!(result.converged);
    assert_relative_eq!(result.best_solution[0], 0.75, epsilon = 1e-6);
}

#[test]
fn iteration_cap_reports_max_iterations() {
    let result = Powell.optimize(paraboloid, [0.0, 0.0], &options(1, 1e-4));

    assert!(!result.converged);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.remarks, Remarks::MaxIterationsReached);
    assert_eq!(result.remarks.to_string(), "Maximum iterations reached");
    assert_eq!(result.best_solution, [1.0, 2.0]);
}

#[test]
fn converges_on_last_allowed_sweep() {
    // Convergence is checked before the cap, so the second sweep from the
    // origin converges even though it is also the last one allowed.
    let result = Powell.optimize(paraboloid, [0.0, 0.0], &options(2, 1e-4));

    assert!(result.converged);
    assert_eq!(result.iterations, 2);
    assert_eq!(result.remarks, Remarks::Converged);
    assert_eq!(result.best_solution, [1.0, 2.0]);
}

#[test]
fn zero_iterations_report_initial_guess() {
    let mut calls = 0;
    let objective = |x: &[f64; 2]| {
        calls += 1;
        paraboloid(x)
    };

    let result = Powell.optimize(objective, [0.0, 0.0], &options(0, 1e-4));

    assert!(!result.converged);
    assert_eq!(result.iterations, 0);
    assert_eq!(result.best_solution, [0.0, 0.0]);
    assert_relative_eq!(result.best_objective_value, 8.0);
    assert_eq!(calls, 1);
}

#[test]
fn nan_tolerance_never_converges() {
    let result = Powell.optimize(paraboloid, [0.0, 0.0], &options(5, f64::NAN));

    assert!(!result.converged);
    assert_eq!(result.iterations, 5);
}

#[test]
fn minimizes_model_and_keeps_snapshot() {
    let solution = minimize_unobserved(&Paraboloid, &ObjectiveOutput, [0.0, 0.0], &options(2000, 1e-4))
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.x, [1.0, 2.0]);
    assert_relative_eq!(solution.objective, 3.0);
    assert_eq!(solution.snapshot.input, [1.0, 2.0]);
    assert_relative_eq!(solution.snapshot.output, 3.0);
    assert_eq!(solution.directions, DirectionSet::identity());
}

/// Inverted paraboloid: f(x, y) = 3 - (x - 1)² - (y - 2)².
struct Dome;

impl Model for Dome {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(6.0 - paraboloid(x))
    }
}

#[test]
fn maximizes_model() {
    let solution = maximize_unobserved(&Dome, &ObjectiveOutput, [5.0, 5.0], &options(2000, 1e-4))
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 3);
    assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(solution.x[1], 2.0, epsilon = 1e-10);
    assert_relative_eq!(solution.objective, 3.0, epsilon = 1e-10);
}

#[test]
fn observer_can_stop_early() {
    let mut seen = Vec::new();
    let observer = |event: &Event<'_, [f64; 2], f64, 2>| {
        seen.push(event.iter);
        Some(Action::StopEarly)
    };

    let solution = minimize(
        &Paraboloid,
        &ObjectiveOutput,
        [5.0, 5.0],
        &options(2000, 1e-4),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
    assert_eq!(seen, vec![1]);
    assert_eq!(solution.x, [1.0, 3.0]);
}

#[test]
fn observer_sees_every_sweep() {
    let mut deltas = Vec::new();
    let observer = |event: &Event<'_, [f64; 2], f64, 2>| {
        deltas.push(event.best_delta);
        assert!(!event.accelerated());
        None
    };

    let solution = minimize(
        &Paraboloid,
        &ObjectiveOutput,
        [0.0, 0.0],
        &options(2000, 1e-4),
        observer,
    )
    .expect("should converge");

    assert_eq!(solution.iters, 2);
    assert_eq!(deltas, vec![4.0, 0.0]);
}

/// Unbounded plane: f(x, y) = -(x + y).
struct Plane;

impl Model for Plane {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(-(x[0] + x[1]))
    }
}

#[test]
fn acceleration_replaces_best_direction() {
    let mut replaced = Vec::new();
    let observer = |event: &Event<'_, [f64; 2], f64, 2>| {
        replaced.push(event.replaced);
        None
    };

    let solution = minimize(&Plane, &ObjectiveOutput, [0.0, 0.0], &options(1, 1e-4), observer)
        .expect("should run one sweep");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(replaced, vec![Some(0)]);
    assert_eq!(solution.x, [1_048_576.0, 1_048_576.0]);
    assert_eq!(
        solution.directions.as_array(),
        &[[524_288.0, 524_288.0], [0.0, 1.0]]
    );
}

#[derive(Debug, thiserror::Error)]
#[error("model diverged at x = {0}")]
struct Diverged(f64);

/// Paraboloid that fails once `x` leaves `[-limit, limit]`.
struct Fragile {
    limit: f64,
}

impl Model for Fragile {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Diverged;

    fn call(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        if x[0].abs() > self.limit {
            Err(Diverged(x[0]))
        } else {
            Ok(paraboloid(x))
        }
    }
}

#[test]
fn model_error_aborts_search() {
    // The first trial step along x lands at x = 1.
    let model = Fragile { limit: 0.5 };

    let result = minimize_unobserved(&model, &ObjectiveOutput, [0.0, 0.0], &Options::default());

    match result {
        Err(Error::Model(source)) => {
            assert_eq!(source.to_string(), "model diverged at x = 1");
        }
        other => panic!("expected model error, got {other:?}"),
    }
}

#[derive(Debug, thiserror::Error)]
#[error("objective unavailable")]
struct Unavailable;

/// Problem whose objective cannot be computed.
struct Broken;

impl OptimizationProblem<2> for Broken {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Unavailable;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 2], _output: &f64) -> Result<f64, Self::Error> {
        Err(Unavailable)
    }
}

#[test]
fn problem_error_aborts_search() {
    let result = minimize_unobserved(&Paraboloid, &Broken, [0.0, 0.0], &Options::default());
    assert!(matches!(result, Err(Error::Problem(_))));
}

#[test]
fn independent_calls_run_concurrently() {
    let handles: Vec<_> = [[0.0, 0.0], [5.0, 5.0], [-5.0, -5.0]]
        .into_iter()
        .map(|x0| std::thread::spawn(move || Powell.optimize(paraboloid, x0, &options(2000, 1e-4))))
        .collect();

    for handle in handles {
        let result = handle.join().expect("thread should not panic");
        assert!(result.converged);
        assert_eq!(result.best_solution, [1.0, 2.0]);
    }
}
