//! Property tests for arbor-bst
//!
//! This module contains property-based tests for search-tree ordering and
//! agreement with a reference set across mixed operation sequences.

use std::collections::BTreeSet;

use proptest::prelude::*;

use arbor_bst::Bst;
use arbor_ports::{TraverseOrder, Tree};
use arbor_walk::Traverse;

proptest! {
    // In-order traversal yields the distinct inputs in sorted order.
    #[test]
    fn prop_in_order_is_sorted_dedup(values in proptest::collection::vec(any::<i64>(), 0..200)) {
        let mut tree = Bst::new();
        for &v in &values {
            tree.insert(v);
        }

        let expected: Vec<i64> = values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        let walked: Vec<i64> = tree.traverse(TraverseOrder::InOrder).copied().collect();
        prop_assert_eq!(expected, walked);
    }

    // Reverse order is exactly the in-order walk backwards.
    #[test]
    fn prop_reverse_mirrors_in_order(values in proptest::collection::vec(any::<i64>(), 0..100)) {
        let mut tree = Bst::new();
        for &v in &values {
            tree.insert(v);
        }

        let mut forward: Vec<i64> = tree.traverse(TraverseOrder::InOrder).copied().collect();
        forward.reverse();
        let backward: Vec<i64> = tree.traverse(TraverseOrder::ReverseOrder).copied().collect();
        prop_assert_eq!(forward, backward);
    }

    // Every traversal order visits each value exactly once.
    #[test]
    fn prop_all_orders_visit_everything(values in proptest::collection::vec(-50i64..50, 0..100)) {
        let mut tree = Bst::new();
        for &v in &values {
            tree.insert(v);
        }

        let reference: BTreeSet<i64> = values.into_iter().collect();
        for order in [
            TraverseOrder::InOrder,
            TraverseOrder::PreOrder,
            TraverseOrder::PostOrder,
            TraverseOrder::ReverseOrder,
            TraverseOrder::LevelOrder,
        ] {
            let visited: BTreeSet<i64> = tree.traverse(order).copied().collect();
            prop_assert_eq!(&reference, &visited, "order {} lost values", order);
            prop_assert_eq!(tree.traverse(order).count(), reference.len());
        }
    }

    // Mixed insert/delete/search sequences agree with a reference set.
    #[test]
    fn prop_matches_reference_set(
        ops in proptest::collection::vec((0u8..3, -30i64..30), 0..200)
    ) {
        let mut tree = Bst::new();
        let mut reference = BTreeSet::new();

        for (op, v) in ops {
            match op {
                0 => prop_assert_eq!(tree.insert(v), reference.insert(v)),
                1 => prop_assert_eq!(tree.delete(&v), reference.remove(&v)),
                _ => prop_assert_eq!(tree.search(&v), reference.contains(&v)),
            }
            prop_assert_eq!(tree.len(), reference.len());
        }

        let expected: Vec<i64> = reference.into_iter().collect();
        let walked: Vec<i64> = tree.traverse(TraverseOrder::InOrder).copied().collect();
        prop_assert_eq!(expected, walked);
    }
}
