//! Bounded-lookahead selection.
//!
//! Instead of scoring a candidate by its direct effect on the
//! neighborhood, the lookahead variant simulates one level of neighbor
//! response per depth unit: apply the candidate, let every predicted
//! neighbor decide and act at the reduced depth, decide once more for the
//! agent itself, and only then read the neighborhood criticalities. Depth
//! zero is exactly the one-step selection.
//!
//! Cost grows exponentially with depth and branching factor; the
//! recursion is bounded by the depth argument and uses no state beyond
//! the call stack.

use tracing::trace;

use crate::agent::{ActionSet, Agent, EnvAction};
use crate::select;

/// Select a conflict-free action set, scoring candidates `depth` levels
/// of neighbor response ahead.
///
/// Only the choice of best candidate looks ahead. Acceptance stays the
/// one-step rule: a candidate joins the selection only while the directly
/// predicted neighborhood does not strictly worsen.
pub fn to_depth<A: Agent>(agent: &A, env: &A::Env, depth: usize) -> ActionSet<A::Action> {
    select::select_with(agent, env, |candidates, selected| {
        if depth == 0 {
            select::best_action(agent, env, candidates, selected)
        } else {
            best_response_aware(agent, env, candidates, selected, depth)
        }
    })
}

/// Lex-minimal candidate under simulated neighbor response.
///
/// The score is read in the settled environment but predicted at the
/// current commitment level `selected`, not `selected` plus the
/// candidate: the candidate's influence enters through the simulation
/// alone, and the settled snapshot already contains its application.
fn best_response_aware<A: Agent>(
    agent: &A,
    env: &A::Env,
    candidates: &ActionSet<A::Action>,
    selected: &ActionSet<A::Action>,
    depth: usize,
) -> A::Action {
    select::best_by(candidates, |candidate| {
        let settled = settle(agent, env, candidate, selected, depth);
        let own_future = to_depth(agent, &settled, depth - 1);
        agent
            .predicted_neighbors(&settled, &own_future)
            .iter()
            .map(|neighbor| agent.predicted_criticality(&settled, selected, neighbor))
            .collect()
    })
}

/// Apply `candidate`, then fold in one decision round of every predicted
/// neighbor at the reduced depth.
///
/// Each neighbor decides against the post-candidate snapshot; the
/// responses land sequentially on a running copy of it.
fn settle<A: Agent>(
    agent: &A,
    env: &A::Env,
    candidate: &A::Action,
    selected: &ActionSet<A::Action>,
    depth: usize,
) -> A::Env {
    let applied = candidate.apply(env);
    let trial = select::with_candidate(selected, candidate);

    let mut settled = applied.clone();
    for neighbor in agent.predicted_neighbors(&applied, &trial) {
        let response = to_depth(&neighbor, &applied, depth - 1);
        trace!(
            agent = agent.id(),
            neighbor = neighbor.id(),
            depth,
            responses = response.len(),
            "folding neighbor response"
        );
        for action in &response {
            settled = action.apply(&settled);
        }
    }
    settled
}
