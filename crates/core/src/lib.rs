//! # accord-core
//!
//! A cooperative multi-agent decision kernel. Each agent repeatedly selects
//! a conflict-free set of actions that minimizes the worst predicted
//! criticality in its local neighborhood, using a lexicographic comparison
//! of neighbor criticality vectors.
//!
//! The kernel is domain agnostic. The environment, the action vocabulary,
//! and the criticality measure are supplied by the application through the
//! [`Agent`] trait; the kernel supplies the selection rule:
//!
//! - [`select::one_step`] grows a selection greedily: pick the candidate
//!   whose predicted neighborhood vector is lexicographically smallest,
//!   keep it while the neighborhood does not strictly worsen, prune
//!   contradicted candidates, repeat.
//! - [`lookahead::to_depth`] scores candidates in a simulated environment
//!   in which every predicted neighbor has already responded, down to a
//!   configurable search depth.
//!
//! ## Determinism Guarantees
//!
//! Every decision is a pure function of its inputs and the deterministic
//! methods of the agents it consults:
//!
//! - Action sets are insertion ordered ([`ActionSet`]); ties between
//!   equally preferred candidates go to the first one encountered.
//! - The kernel is single threaded and allocates no shared state.
//! - Run artifacts can be fingerprinted through [`fingerprint`] to make
//!   the determinism checkable end to end.

pub mod agent;
pub mod fingerprint;
pub mod invariants;
pub mod lexmin;
pub mod lookahead;
pub mod select;

pub use agent::{ActionSet, Agent, EnvAction, Lookahead};
pub use fingerprint::FingerprintError;
pub use lexmin::compare_vectors;
pub use lookahead::to_depth;
pub use select::{best_action, criticality_vector, one_step};
