//! The agent contract surface.
//!
//! An application plugs into the kernel by implementing [`Agent`] (and,
//! for bounded lookahead, [`Lookahead`]). The environment is an opaque
//! immutable snapshot; actions are pure transformations of it; the
//! criticality is any totally ordered measure where smaller means better.

use std::hash::Hash;

use indexmap::IndexSet;

/// A pure transformation of an environment snapshot.
///
/// Applying an action never mutates its input; it returns the successor
/// snapshot. Actions carry value semantics so they can live in sets and
/// serve as map keys.
pub trait EnvAction<E>: Clone + Eq + Hash {
    /// Produce the successor environment.
    fn apply(&self, env: &E) -> E;
}

/// An insertion-ordered action set.
///
/// Iteration order is the order of insertion, which makes tie-breaking
/// and sequential application reproducible across runs.
pub type ActionSet<A> = IndexSet<A>;

/// A decision-making entity bound to a stable identity.
///
/// The four required operations describe the agent's local view of the
/// world; the provided operations derive the standard behavior from them.
/// All operations must be deterministic and total on well-formed inputs.
pub trait Agent: Clone {
    /// Immutable snapshot of the state actions observe and replace.
    type Env: Clone;
    /// The agent's action vocabulary.
    type Action: EnvAction<Self::Env>;
    /// Totally ordered measure of local tension; smaller is better.
    type Criticality: Ord + Clone;

    /// Stable identity. Two values with the same id are the same agent.
    fn id(&self) -> &str;

    /// The agents whose criticalities this agent optimizes for, as they
    /// would stand if `actions` were applied. Static topologies ignore
    /// `actions`. The sequence includes the agent itself whenever its own
    /// criticality is part of the objective, and names no agent twice.
    fn predicted_neighbors(
        &self,
        env: &Self::Env,
        actions: &ActionSet<Self::Action>,
    ) -> Vec<Self>;

    /// The actions the agent may legitimately propose in `env`.
    fn possible_actions(&self, env: &Self::Env) -> ActionSet<Self::Action>;

    /// Every action that cannot coexist with `actions` in one selection.
    fn contradictory_actions(
        &self,
        env: &Self::Env,
        actions: &ActionSet<Self::Action>,
    ) -> ActionSet<Self::Action>;

    /// Estimate of `agent`'s criticality once `actions` are applied to
    /// `env`.
    fn predicted_criticality(
        &self,
        env: &Self::Env,
        actions: &ActionSet<Self::Action>,
        agent: &Self,
    ) -> Self::Criticality;

    /// The agent's own criticality in `env` with nothing applied.
    ///
    /// Applications may override this when a direct reading is cheaper
    /// than a prediction over the empty action set.
    fn criticality(&self, env: &Self::Env) -> Self::Criticality {
        self.predicted_criticality(env, &ActionSet::default(), self)
    }

    /// Apply every action in `actions` exactly once, in iteration order.
    fn act(&self, env: &Self::Env, actions: &ActionSet<Self::Action>) -> Self::Env {
        actions
            .iter()
            .fold(env.clone(), |snapshot, action| action.apply(&snapshot))
    }

    /// Whether `candidate` can join `selected` without contradiction.
    fn is_compatible(
        &self,
        env: &Self::Env,
        selected: &ActionSet<Self::Action>,
        candidate: &Self::Action,
    ) -> bool {
        !self.contradictory_actions(env, selected).contains(candidate)
    }

    /// Select a conflict-free action set for this round.
    ///
    /// Shorthand for [`crate::select::one_step`].
    fn decision(&self, env: &Self::Env) -> ActionSet<Self::Action> {
        crate::select::one_step(self, env)
    }
}

/// Agents that score candidates in a simulated future environment.
pub trait Lookahead: Agent {
    /// Recursion budget for simulating neighbor responses before scoring
    /// a candidate.
    fn search_depth(&self) -> usize;

    /// Select a conflict-free action set, scoring candidates at
    /// [`search_depth`](Lookahead::search_depth) levels of simulated
    /// neighbor response. Depth zero agrees with [`Agent::decision`] on
    /// every input.
    fn decision_to_depth(&self, env: &Self::Env) -> ActionSet<Self::Action> {
        crate::lookahead::to_depth(self, env, self.search_depth())
    }
}
