//! Property tests for the criticality vector comparator.

use std::cmp::Ordering;

use proptest::prelude::*;

use accord_core::compare_vectors;

proptest! {
    #[test]
    fn comparison_ignores_input_order(
        mut bag in prop::collection::vec(0u32..100, 0..8),
        rotation in 0usize..8,
    ) {
        let original = bag.clone();
        if !bag.is_empty() {
            let split = rotation % bag.len();
            bag.rotate_left(split);
        }
        prop_assert_eq!(compare_vectors(&bag, &original), Ordering::Equal);
    }

    #[test]
    fn comparison_is_antisymmetric(
        left in prop::collection::vec(0u32..100, 0..8),
        right in prop::collection::vec(0u32..100, 0..8),
    ) {
        prop_assert_eq!(
            compare_vectors(&left, &right),
            compare_vectors(&right, &left).reverse()
        );
    }

    #[test]
    fn sorted_prefixes_compare_equal(
        bag in prop::collection::vec(0u32..100, 0..8),
        keep in 0usize..8,
    ) {
        let mut sorted = bag.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let prefix: Vec<u32> = sorted.iter().take(keep).copied().collect();
        prop_assert_eq!(compare_vectors(&sorted, &prefix), Ordering::Equal);
    }

    #[test]
    fn first_sorted_difference_decides(
        pairs in prop::collection::vec((0u32..100, 0u32..100), 1..8),
    ) {
        let (left, right): (Vec<u32>, Vec<u32>) = pairs.into_iter().unzip();

        let mut left_sorted = left.clone();
        let mut right_sorted = right.clone();
        left_sorted.sort_unstable_by(|a, b| b.cmp(a));
        right_sorted.sort_unstable_by(|a, b| b.cmp(a));

        let expected = left_sorted
            .iter()
            .zip(right_sorted.iter())
            .map(|(l, r)| l.cmp(r))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal);

        prop_assert_eq!(compare_vectors(&left, &right), expected);
    }
}
