//! Property tests for arbor-avl
//!
//! This module contains property-based tests for the AVL invariants
//! (balance window, ordering, and agreement with a reference set).

use std::collections::BTreeSet;

use proptest::prelude::*;

use arbor_avl::{Avl, AvlNode};
use arbor_ports::{TraverseOrder, Tree};
use arbor_walk::Traverse;

fn check_balanced(node: &AvlNode<i64>) -> Result<(), TestCaseError> {
    prop_assert!(
        (-1..=1).contains(&node.balance_factor()),
        "balance factor {} out of range",
        node.balance_factor()
    );
    if let Some(l) = node.left_node() {
        check_balanced(l)?;
    }
    if let Some(r) = node.right_node() {
        check_balanced(r)?;
    }
    Ok(())
}

// ============================================================================
// Insert Invariant Tests
// ============================================================================

proptest! {
    // In-order traversal yields the distinct inputs in sorted order.
    #[test]
    fn prop_in_order_is_sorted_dedup(values in proptest::collection::vec(any::<i64>(), 0..200)) {
        let mut tree = Avl::new();
        for &v in &values {
            tree.insert(v);
        }

        let expected: Vec<i64> = values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        let walked: Vec<i64> = tree.traverse(TraverseOrder::InOrder).copied().collect();
        prop_assert_eq!(expected, walked);
    }

    // Every node stays inside the AVL balance window after each insert.
    #[test]
    fn prop_balanced_after_every_insert(values in proptest::collection::vec(any::<i64>(), 1..200)) {
        let mut tree = Avl::new();
        for &v in &values {
            tree.insert(v);
            if let Some(root) = tree.root_node() {
                check_balanced(root)?;
            }
        }
    }

    // Height never exceeds the AVL worst-case bound of ~1.44 * log2(n).
    #[test]
    fn prop_height_is_logarithmic(values in proptest::collection::vec(any::<i64>(), 1..500)) {
        let mut tree = Avl::new();
        for &v in &values {
            tree.insert(v);
        }

        let n = tree.len() as f64;
        let bound = (1.45 * (n + 2.0).log2()).ceil() as usize;
        prop_assert!(tree.height() <= bound, "height {} exceeds bound {}", tree.height(), bound);
    }

    // insert returns true exactly when the value was not already present,
    // and len tracks the distinct count.
    #[test]
    fn prop_insert_reports_novelty(values in proptest::collection::vec(-50i64..50, 0..100)) {
        let mut tree = Avl::new();
        let mut seen = BTreeSet::new();
        for &v in &values {
            prop_assert_eq!(tree.insert(v), seen.insert(v));
        }
        prop_assert_eq!(tree.len(), seen.len());
    }
}

// ============================================================================
// Search and Delete Tests
// ============================================================================

proptest! {
    // search agrees with reference set membership.
    #[test]
    fn prop_search_matches_reference(
        values in proptest::collection::vec(-100i64..100, 0..100),
        probes in proptest::collection::vec(-100i64..100, 0..50)
    ) {
        let mut tree = Avl::new();
        let mut reference = BTreeSet::new();
        for &v in &values {
            tree.insert(v);
            reference.insert(v);
        }
        for p in probes {
            prop_assert_eq!(tree.search(&p), reference.contains(&p));
        }
    }

    // Deleting keeps the tree balanced and consistent with the reference.
    #[test]
    fn prop_delete_keeps_balance(
        values in proptest::collection::vec(-100i64..100, 1..100),
        deletions in proptest::collection::vec(-100i64..100, 1..50)
    ) {
        let mut tree = Avl::new();
        let mut reference = BTreeSet::new();
        for &v in &values {
            tree.insert(v);
            reference.insert(v);
        }
        for d in deletions {
            prop_assert_eq!(tree.delete(&d), reference.remove(&d));
            if let Some(root) = tree.root_node() {
                check_balanced(root)?;
            }
        }

        let expected: Vec<i64> = reference.into_iter().collect();
        let walked: Vec<i64> = tree.traverse(TraverseOrder::InOrder).copied().collect();
        prop_assert_eq!(expected, walked);
    }
}
