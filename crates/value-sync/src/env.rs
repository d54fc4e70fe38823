//! The shared value grid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Smallest value a field may hold.
pub const LOWER_BOUND: i64 = 0;
/// Largest value a field may hold.
pub const UPPER_BOUND: i64 = 10;

/// Immutable snapshot of every field value plus the static topology.
///
/// Actions never mutate a grid; they return a replacement. The roster maps
/// every field to the fields whose values it is compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueGrid {
    values: BTreeMap<String, i64>,
    roster: BTreeMap<String, Vec<String>>,
}

impl ValueGrid {
    /// Build a grid over a chain topology, in the given field order.
    ///
    /// Every field is linked to its immediate predecessor and successor;
    /// values are clamped into `[LOWER_BOUND, UPPER_BOUND]`.
    #[must_use]
    pub fn chain(fields: &[(&str, i64)]) -> Self {
        let values = fields
            .iter()
            .map(|(id, value)| ((*id).to_string(), (*value).clamp(LOWER_BOUND, UPPER_BOUND)))
            .collect();
        let mut roster = BTreeMap::new();
        for (index, (id, _)) in fields.iter().enumerate() {
            let mut neighbors = Vec::new();
            if index > 0 {
                neighbors.push(fields[index - 1].0.to_string());
            }
            if index + 1 < fields.len() {
                neighbors.push(fields[index + 1].0.to_string());
            }
            roster.insert((*id).to_string(), neighbors);
        }
        Self { values, roster }
    }

    /// Build a grid with an explicit topology.
    #[must_use]
    pub fn with_roster(
        values: BTreeMap<String, i64>,
        roster: BTreeMap<String, Vec<String>>,
    ) -> Self {
        let values = values
            .into_iter()
            .map(|(id, value)| (id, value.clamp(LOWER_BOUND, UPPER_BOUND)))
            .collect();
        Self { values, roster }
    }

    /// Current value of `field`; zero for an unknown field.
    #[must_use]
    pub fn value(&self, field: &str) -> i64 {
        self.values.get(field).copied().unwrap_or_default()
    }

    /// Topological neighbors of `field`.
    #[must_use]
    pub fn neighbor_ids(&self, field: &str) -> &[String] {
        self.roster.get(field).map_or(&[][..], Vec::as_slice)
    }

    /// All field values, keyed by field id.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, i64> {
        &self.values
    }

    /// The grid with one field replaced, everything else shared.
    #[must_use]
    pub fn with_value(&self, field: &str, value: i64) -> Self {
        let mut next = self.clone();
        next.values
            .insert(field.to_string(), value.clamp(LOWER_BOUND, UPPER_BOUND));
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chain_links_interior_fields_both_ways() {
        let grid = ValueGrid::chain(&[("a", 2), ("b", 9), ("c", 3), ("d", 6)]);
        assert_eq!(grid.neighbor_ids("a"), ["b".to_string()]);
        assert_eq!(grid.neighbor_ids("b"), ["a".to_string(), "c".to_string()]);
        assert_eq!(grid.neighbor_ids("d"), ["c".to_string()]);
    }

    #[test]
    fn chain_clamps_out_of_range_values() {
        let grid = ValueGrid::chain(&[("a", -3), ("b", 40)]);
        assert_eq!(grid.value("a"), LOWER_BOUND);
        assert_eq!(grid.value("b"), UPPER_BOUND);
    }

    #[test]
    fn with_roster_builds_the_same_grid_as_chain() {
        let mut values = BTreeMap::new();
        values.insert("a".to_string(), 2);
        values.insert("b".to_string(), 9);
        let mut roster = BTreeMap::new();
        roster.insert("a".to_string(), vec!["b".to_string()]);
        roster.insert("b".to_string(), vec!["a".to_string()]);

        assert_eq!(
            ValueGrid::with_roster(values, roster),
            ValueGrid::chain(&[("a", 2), ("b", 9)])
        );
    }

    #[test]
    fn replacement_leaves_the_original_untouched() {
        let grid = ValueGrid::chain(&[("a", 2), ("b", 9)]);
        let next = grid.with_value("a", 3);
        assert_eq!(grid.value("a"), 2);
        assert_eq!(next.value("a"), 3);
        assert_eq!(next.value("b"), 9);
    }
}
