//! Fuzz harness for tree mutation sequences
//!
//! Drives every tree variant with the same insert/delete/search sequence
//! derived from the input bytes, cross-checking each against a reference
//! set and checking the AVL balance window after every mutation.

#![no_main]

use std::collections::BTreeSet;

use libfuzzer_sys::fuzz_target;

use arbor_avl::{Avl, AvlNode};
use arbor_bst::Bst;
use arbor_ports::{TraverseOrder, Tree};
use arbor_redblack::RedBlack;
use arbor_walk::Traverse;

fn assert_balanced(node: &AvlNode<i64>) {
    assert!(
        (-1..=1).contains(&node.balance_factor()),
        "balance factor out of range"
    );
    if let Some(l) = node.left_node() {
        assert_balanced(l);
    }
    if let Some(r) = node.right_node() {
        assert_balanced(r);
    }
}

fuzz_target!(|data: &[u8]| {
    let mut bst = Bst::new();
    let mut avl = Avl::new();
    let mut rb = RedBlack::new();
    let mut reference = BTreeSet::new();

    for chunk in data.chunks_exact(2) {
        let op = chunk[0] % 3;
        let value = i64::from(chunk[1] as i8);

        match op {
            0 => {
                let expected = reference.insert(value);
                assert_eq!(bst.insert(value), expected);
                assert_eq!(avl.insert(value), expected);
                assert_eq!(rb.insert(value), expected);
            }
            1 => {
                let expected = reference.remove(&value);
                assert_eq!(bst.delete(&value), expected);
                assert_eq!(avl.delete(&value), expected);
                assert_eq!(rb.delete(&value), expected);
            }
            _ => {
                let expected = reference.contains(&value);
                assert_eq!(bst.search(&value), expected);
                assert_eq!(avl.search(&value), expected);
                assert_eq!(rb.search(&value), expected);
            }
        }

        if let Some(root) = avl.root_node() {
            assert_balanced(root);
        }
        assert_eq!(bst.len(), reference.len());
        assert_eq!(avl.len(), reference.len());
        assert_eq!(rb.len(), reference.len());
    }

    let expected: Vec<i64> = reference.into_iter().collect();
    let bst_walk: Vec<i64> = bst.traverse(TraverseOrder::InOrder).copied().collect();
    let avl_walk: Vec<i64> = avl.traverse(TraverseOrder::InOrder).copied().collect();
    let rb_walk: Vec<i64> = rb.traverse(TraverseOrder::InOrder).copied().collect();
    assert_eq!(bst_walk, expected);
    assert_eq!(avl_walk, expected);
    assert_eq!(rb_walk, expected);
});
