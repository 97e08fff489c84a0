//! Fuzz harness for the equivalence/equality comparator
//!
//! Builds two trees from the two halves of the input and checks the
//! relation laws: equal implies equivalent, every tree is equal to itself,
//! and same-input trees of different variants are always equivalent.

#![no_main]

use libfuzzer_sys::fuzz_target;

use arbor_avl::Avl;
use arbor_bst::Bst;
use arbor_compare::{equal, equivalent, shape};
use arbor_ports::Tree;

fn fill<T: Tree<i64>>(tree: &mut T, bytes: &[u8]) {
    for &b in bytes {
        tree.insert(i64::from(b as i8));
    }
}

fuzz_target!(|data: &[u8]| {
    let (left_bytes, right_bytes) = data.split_at(data.len() / 2);

    let mut left_bst = Bst::new();
    let mut left_avl = Avl::new();
    fill(&mut left_bst, left_bytes);
    fill(&mut left_avl, left_bytes);

    let mut right_bst = Bst::new();
    fill(&mut right_bst, right_bytes);

    // Same inputs, different variants: always equivalent.
    assert!(equivalent(&left_bst, &left_avl));

    // Reflexivity.
    assert!(equal(&left_bst, &left_bst));
    assert!(equal(&left_avl, &left_avl));

    // equal is equivalent plus shape.
    if equal(&left_bst, &right_bst) {
        assert!(equivalent(&left_bst, &right_bst));
        assert_eq!(shape(left_bst.root()), shape(right_bst.root()));
    }

    // One value token per stored value.
    let tokens = shape(left_avl.root());
    let values = tokens
        .iter()
        .filter(|t| **t == arbor_compare::ShapeToken::Value)
        .count();
    assert_eq!(values, left_avl.len());
});
