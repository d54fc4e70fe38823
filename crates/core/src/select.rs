//! Greedy lexicographic selection.
//!
//! One decision round grows a selected set action by action. Every
//! iteration picks the candidate whose predicted neighborhood vector is
//! lexicographically smallest, keeps it only while the neighborhood does
//! not strictly worsen, and drops the candidates the grown selection
//! contradicts. The round ends when the candidates run out or the best
//! remaining candidate would make things worse.

use std::cmp::Ordering;
use std::hash::Hash;

use tracing::trace;

use crate::agent::{ActionSet, Agent};
use crate::{invariants, lexmin};

/// The criticality bag of the deciding agent's predicted neighborhood
/// under `selected`.
pub fn criticality_vector<A: Agent>(
    agent: &A,
    env: &A::Env,
    selected: &ActionSet<A::Action>,
) -> Vec<A::Criticality> {
    let neighbors = agent.predicted_neighbors(env, selected);
    debug_assert!(invariants::neighborhood_free_of_duplicates(
        neighbors.iter().map(Agent::id)
    ));
    neighbors
        .iter()
        .map(|neighbor| agent.predicted_criticality(env, selected, neighbor))
        .collect()
}

/// The candidate whose predicted neighborhood vector is lex-minimal.
///
/// Each candidate is scored over `selected` plus the candidate itself;
/// every vector is computed once per call. Ties go to the first candidate
/// encountered, so the result is deterministic for any deterministic
/// candidate iteration. Calling this with no candidates is a programmer
/// error; the selection loops guard on nonempty candidate sets.
pub fn best_action<A: Agent>(
    agent: &A,
    env: &A::Env,
    candidates: &ActionSet<A::Action>,
    selected: &ActionSet<A::Action>,
) -> A::Action {
    debug_assert!(invariants::candidates_nonempty(candidates.len()));
    best_by(candidates, |candidate| {
        let trial = with_candidate(selected, candidate);
        criticality_vector(agent, env, &trial)
    })
}

/// One-step decision: grow the selection while the best remaining
/// candidate does not strictly worsen the predicted neighborhood.
pub fn one_step<A: Agent>(agent: &A, env: &A::Env) -> ActionSet<A::Action> {
    select_with(agent, env, |candidates, selected| {
        best_action(agent, env, candidates, selected)
    })
}

/// The shared selection loop.
///
/// `pick` names the best remaining candidate; acceptance and pruning are
/// identical for the one-step and lookahead variants. An equal-vectors
/// candidate is accepted: a move that does not worsen the neighborhood may
/// still unlock compatible combinations later in the round.
pub(crate) fn select_with<A, F>(agent: &A, env: &A::Env, pick: F) -> ActionSet<A::Action>
where
    A: Agent,
    F: Fn(&ActionSet<A::Action>, &ActionSet<A::Action>) -> A::Action,
{
    let mut candidates = agent.possible_actions(env);
    let mut selected = ActionSet::default();

    while !candidates.is_empty() {
        let best = pick(&candidates, &selected);
        let trial = with_candidate(&selected, &best);

        let current = criticality_vector(agent, env, &selected);
        let predicted = criticality_vector(agent, env, &trial);
        debug_assert!(invariants::vectors_same_length(
            predicted.len(),
            current.len()
        ));
        if lexmin::compare_vectors(&predicted, &current) == Ordering::Greater {
            trace!(
                agent = agent.id(),
                selected = selected.len(),
                "best remaining candidate worsens the neighborhood"
            );
            break;
        }

        selected = trial;
        candidates.shift_remove(&best);

        let contradicted = agent.contradictory_actions(env, &selected);
        debug_assert!(invariants::selection_self_consistent(
            &selected,
            &contradicted
        ));
        candidates.retain(|candidate| !contradicted.contains(candidate));
        trace!(
            agent = agent.id(),
            selected = selected.len(),
            remaining = candidates.len(),
            "candidate accepted"
        );
    }

    selected
}

/// `selected` plus `candidate`, leaving `selected` untouched.
pub(crate) fn with_candidate<T>(selected: &ActionSet<T>, candidate: &T) -> ActionSet<T>
where
    T: Clone + Eq + Hash,
{
    let mut trial = selected.clone();
    trial.insert(candidate.clone());
    trial
}

/// First candidate with a lex-minimal score vector.
pub(crate) fn best_by<T, C, F>(candidates: &ActionSet<T>, score: F) -> T
where
    T: Clone + Eq + Hash,
    C: Ord + Clone,
    F: Fn(&T) -> Vec<C>,
{
    let mut best: Option<(&T, Vec<C>)> = None;
    for candidate in candidates {
        let vector = score(candidate);
        let improves = match &best {
            None => true,
            Some((_, incumbent)) => {
                lexmin::compare_vectors(&vector, incumbent) == Ordering::Less
            }
        };
        if improves {
            best = Some((candidate, vector));
        }
    }
    // The selection loops guard on nonempty candidate sets.
    best.map(|(candidate, _)| candidate.clone())
        .expect("candidate set must be nonempty")
}
