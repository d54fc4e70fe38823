//! Single-step field nudges.

use serde::{Deserialize, Serialize};

use accord_core::EnvAction;

use crate::env::{ValueGrid, LOWER_BOUND, UPPER_BOUND};

/// Direction of a nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    fn delta(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

/// Move one field by one step, clamped at the grid bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nudge {
    pub field: String,
    pub direction: Direction,
}

impl Nudge {
    #[must_use]
    pub fn up(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: Direction::Up,
        }
    }

    #[must_use]
    pub fn down(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: Direction::Down,
        }
    }

    /// The nudge that undoes this one. A selection never holds both.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            field: self.field.clone(),
            direction: self.direction.inverse(),
        }
    }
}

impl EnvAction<ValueGrid> for Nudge {
    fn apply(&self, env: &ValueGrid) -> ValueGrid {
        let moved = (env.value(&self.field) + self.direction.delta())
            .clamp(LOWER_BOUND, UPPER_BOUND);
        env.with_value(&self.field, moved)
    }
}
