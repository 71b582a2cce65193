//! Core traits and types for the Sweep optimizer.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Optimizer`] — the closure-based optimizer contract, configured with
//!   [`Options`] and reporting an [`OptimizationResult`]
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OptimizationProblem`] — adapts solver variables to model inputs and
//!   extracts an objective from outputs

mod model;
mod observer;
mod optimizer;
mod problems;

pub use observer::Observer;
pub use optimizer::{OptimizationResult, Optimizer, Options, Remarks};
pub use problems::OptimizationProblem;
pub use {model::Model, model::Snapshot};
