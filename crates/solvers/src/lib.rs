//! Numerical solvers for the Sweep optimizer.
//!
//! - [`optimization`] — solvers that minimize or maximize an objective
//!
//! Most callers want [`Powell`], which implements the [`Optimizer`] contract
//! for plain closures.
//!
//! [`Optimizer`]: sweep_core::Optimizer

pub mod optimization;

pub use optimization::powell::Powell;
