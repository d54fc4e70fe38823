//! # accord-value-sync
//!
//! A small, fully worked application of the accord decision kernel: four
//! agents on a chain, each bound to one integer field of a shared grid,
//! nudge their fields up or down by one until every field holds the same
//! value.
//!
//! The crate exists to exercise the kernel end to end. It supplies the
//! three domain pieces the kernel leaves open:
//!
//! - [`ValueGrid`]: the immutable environment snapshot,
//! - [`Nudge`]: the action vocabulary (single steps, clamped at the grid
//!   bounds, opposite directions contradict),
//! - [`FieldAgent`]: the agent, whose criticality is the largest distance
//!   to a topological neighbor normalized by the grid span.
//!
//! [`driver`] adds the round loop: every agent, in a fixed order, decides
//! and acts; the run ends when every criticality reaches zero. A
//! [`ConvergenceReport`] records the trajectory and carries a determinism
//! fingerprint.

pub mod action;
pub mod agent;
pub mod driver;
pub mod env;
pub mod report;

pub use action::{Direction, Nudge};
pub use agent::FieldAgent;
pub use driver::{max_criticality, run_round, run_to_convergence, ConvergenceError, RoundLimits};
pub use env::{ValueGrid, LOWER_BOUND, UPPER_BOUND};
pub use report::{ConvergenceReport, RoundReport};
