//! The field-synchronizing agent.

use ordered_float::OrderedFloat;

use accord_core::{ActionSet, Agent, Lookahead};

use crate::action::Nudge;
use crate::env::{ValueGrid, LOWER_BOUND, UPPER_BOUND};

/// An agent bound to one field of the grid.
///
/// Its criticality is the largest distance between its field and any
/// roster neighbor, normalized by the grid span; zero means the field
/// agrees with its whole neighborhood. The optimization neighborhood is
/// the agent itself plus its roster neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAgent {
    id: String,
    depth: usize,
}

impl FieldAgent {
    /// A one-step agent for `field`.
    #[must_use]
    pub fn new(field: &str) -> Self {
        Self::with_search_depth(field, 0)
    }

    /// An agent that scores candidates `depth` levels of neighbor
    /// response ahead.
    #[must_use]
    pub fn with_search_depth(field: &str, depth: usize) -> Self {
        Self {
            id: field.to_string(),
            depth,
        }
    }

    fn tension(grid: &ValueGrid, field: &str) -> OrderedFloat<f64> {
        let own = grid.value(field);
        let worst = grid
            .neighbor_ids(field)
            .iter()
            .map(|neighbor| (grid.value(neighbor) - own).abs())
            .max()
            .unwrap_or(0);
        OrderedFloat(worst as f64 / (UPPER_BOUND - LOWER_BOUND) as f64)
    }
}

impl Agent for FieldAgent {
    type Env = ValueGrid;
    type Action = Nudge;
    type Criticality = OrderedFloat<f64>;

    fn id(&self) -> &str {
        &self.id
    }

    fn predicted_neighbors(&self, env: &ValueGrid, _actions: &ActionSet<Nudge>) -> Vec<Self> {
        let mut hood = vec![self.clone()];
        hood.extend(
            env.neighbor_ids(&self.id)
                .iter()
                .map(|field| Self::with_search_depth(field, self.depth)),
        );
        hood
    }

    fn possible_actions(&self, env: &ValueGrid) -> ActionSet<Nudge> {
        let mut actions = ActionSet::default();
        let value = env.value(&self.id);
        if value < UPPER_BOUND {
            actions.insert(Nudge::up(&self.id));
        }
        if value > LOWER_BOUND {
            actions.insert(Nudge::down(&self.id));
        }
        actions
    }

    fn contradictory_actions(
        &self,
        _env: &ValueGrid,
        actions: &ActionSet<Nudge>,
    ) -> ActionSet<Nudge> {
        actions.iter().map(Nudge::inverse).collect()
    }

    fn predicted_criticality(
        &self,
        env: &ValueGrid,
        actions: &ActionSet<Nudge>,
        agent: &Self,
    ) -> OrderedFloat<f64> {
        let future = self.act(env, actions);
        Self::tension(&future, agent.id())
    }
}

impl Lookahead for FieldAgent {
    fn search_depth(&self) -> usize {
        self.depth
    }
}
