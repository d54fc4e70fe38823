//! Debug-mode contract checks for the decision paths.
//!
//! These predicates back `debug_assert!` calls in the selection loops.
//! The kernel never validates application contracts at runtime; a release
//! build compiles all of these checks away.

use std::collections::BTreeSet;
use std::hash::Hash;

use crate::agent::ActionSet;

/// The selection loops guard on nonempty candidate sets before asking for
/// a best action.
#[must_use]
pub fn candidates_nonempty(candidate_count: usize) -> bool {
    candidate_count > 0
}

/// Vectors compared by the monotone-acceptance check always describe one
/// and the same neighborhood.
#[must_use]
pub fn vectors_same_length(left: usize, right: usize) -> bool {
    left == right
}

/// A well-formed neighborhood names every agent at most once; a duplicate
/// would inflate the criticality vector.
#[must_use]
pub fn neighborhood_free_of_duplicates<'a, I>(ids: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = BTreeSet::new();
    ids.into_iter().all(|id| seen.insert(id))
}

/// No selected action may appear in the contradiction set induced by its
/// own selection.
#[must_use]
pub fn selection_self_consistent<A: Eq + Hash>(
    selected: &ActionSet<A>,
    contradicted: &ActionSet<A>,
) -> bool {
    selected.iter().all(|action| !contradicted.contains(action))
}
