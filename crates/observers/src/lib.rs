//! Reusable observers for the Sweep optimizer.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events and actions implement them.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`CanStopEarly`])
//! - [`ObjectiveHistory`] — records the objective reported by every event
//! - [`StopBelow`] — stops the solver once the objective reaches a target
//!
//! [`Observer`]: sweep_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

mod history;
mod target;
pub mod traits;

pub use history::ObjectiveHistory;
pub use target::StopBelow;
