//! Structural comparisons between arbor trees.
//!
//! Two trees are *equivalent* when their in-order value sequences match
//! element for element, regardless of shape or variant. They are *equal*
//! when they are equivalent and additionally have the same shape, captured
//! as a token sequence from an in-order structural walk. A balanced AVL
//! tree and an unbalanced search tree holding the same values in the same
//! shape are equal; a left-spine tree holding the same values is merely
//! equivalent.
//!
//! All comparisons go through the read-only [`TreeNode`] capability, so any
//! two variants can be compared with each other.

use std::fmt;

use itertools::equal as sequences_equal;

use arbor_ports::{TraverseOrder, Tree, TreeNode};
use arbor_walk::TreeWalk;

/// One step of an in-order structural walk.
///
/// The walk emits [`ShapeToken::DescendLeft`] before recursing into a left
/// child, [`ShapeToken::Value`] at the node itself, [`ShapeToken::DescendRight`]
/// before recursing into a right child, and [`ShapeToken::Ascend`] after
/// returning from either child. Two trees have the same shape iff they emit
/// the same token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeToken {
    DescendLeft,
    Value,
    Ascend,
    DescendRight,
}

impl fmt::Display for ShapeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeToken::DescendLeft => f.write_str("↓L"),
            ShapeToken::Value => f.write_str("V"),
            ShapeToken::Ascend => f.write_str("↑"),
            ShapeToken::DescendRight => f.write_str("↓R"),
        }
    }
}

/// Settings for tree comparison and combination functions.
#[derive(Debug, Clone, Copy)]
pub struct CompareOptions {
    ignore_duplicates: bool,
    fp_tolerance: f64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            ignore_duplicates: true,
            fp_tolerance: 1e-15,
        }
    }
}

impl CompareOptions {
    /// Sets whether duplicate values are ignored by combining operations.
    pub fn ignore_duplicates(mut self, ignore: bool) -> Self {
        self.ignore_duplicates = ignore;
        self
    }

    /// Sets the tolerance used by [`CompareOptions::float_eq`].
    pub fn fp_tolerance(mut self, tolerance: f64) -> Self {
        self.fp_tolerance = tolerance;
        self
    }

    /// Whether duplicate values are ignored by combining operations.
    pub fn ignores_duplicates(&self) -> bool {
        self.ignore_duplicates
    }

    /// Compares two floating-point values within the configured tolerance,
    /// for use with [`equivalent_by`] on float-valued trees.
    pub fn float_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.fp_tolerance
    }
}

/// Returns the shape token sequence for the subtree at `root`. An absent
/// root produces an empty sequence.
pub fn shape<T>(root: Option<&dyn TreeNode<T>>) -> Vec<ShapeToken> {
    let mut tokens = Vec::new();
    if let Some(node) = root {
        walk_shape(node, &mut tokens);
    }
    tokens
}

fn walk_shape<T>(node: &dyn TreeNode<T>, tokens: &mut Vec<ShapeToken>) {
    if let Some(l) = node.left() {
        tokens.push(ShapeToken::DescendLeft);
        walk_shape(l, tokens);
        tokens.push(ShapeToken::Ascend);
    }
    tokens.push(ShapeToken::Value);
    if let Some(r) = node.right() {
        tokens.push(ShapeToken::DescendRight);
        walk_shape(r, tokens);
        tokens.push(ShapeToken::Ascend);
    }
}

/// Reports whether the two trees hold the same values in the same in-order
/// sequence, ignoring shape and variant. Two empty trees are equivalent.
pub fn equivalent<T: PartialEq>(a: &dyn Tree<T>, b: &dyn Tree<T>) -> bool {
    sequences_equal(
        TreeWalk::new(a.root(), TraverseOrder::InOrder),
        TreeWalk::new(b.root(), TraverseOrder::InOrder),
    )
}

/// Like [`equivalent`] but with a caller-supplied value comparison, which
/// also allows the two trees to hold different value types.
pub fn equivalent_by<T, U>(
    a: &dyn Tree<T>,
    b: &dyn Tree<U>,
    mut eq: impl FnMut(&T, &U) -> bool,
) -> bool {
    let mut wa = TreeWalk::new(a.root(), TraverseOrder::InOrder);
    let mut wb = TreeWalk::new(b.root(), TraverseOrder::InOrder);
    loop {
        match (wa.next(), wb.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if eq(x, y) => {}
            _ => return false,
        }
    }
}

/// Reports whether the two trees are equivalent *and* have the same shape.
pub fn equal<T: PartialEq>(a: &dyn Tree<T>, b: &dyn Tree<T>) -> bool {
    equivalent(a, b) && shape(a.root()) == shape(b.root())
}

/// Like [`equal`] but with a caller-supplied value comparison.
pub fn equal_by<T, U>(a: &dyn Tree<T>, b: &dyn Tree<U>, eq: impl FnMut(&T, &U) -> bool) -> bool {
    equivalent_by(a, b, eq) && shape(a.root()) == shape(b.root())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_avl::Avl;
    use arbor_bst::Bst;
    use arbor_redblack::RedBlack;

    fn bst(values: &[i32]) -> Bst<i32> {
        let mut tree = Bst::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    fn avl(values: &[i32]) -> Avl<i32> {
        let mut tree = Avl::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    #[test]
    fn shape_token_display() {
        let rendered: Vec<String> = [
            ShapeToken::DescendLeft,
            ShapeToken::Value,
            ShapeToken::Ascend,
            ShapeToken::DescendRight,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(rendered, vec!["↓L", "V", "↑", "↓R"]);
    }

    #[test]
    fn shape_of_empty_tree() {
        let tree: Bst<i32> = Bst::new();
        assert!(shape(tree.root()).is_empty());
    }

    #[test]
    fn shape_of_small_tree() {
        //   5
        //  / \
        // 2   8
        let tree = bst(&[5, 2, 8]);
        assert_eq!(
            shape(tree.root()),
            vec![
                ShapeToken::DescendLeft,
                ShapeToken::Value,
                ShapeToken::Ascend,
                ShapeToken::Value,
                ShapeToken::DescendRight,
                ShapeToken::Value,
                ShapeToken::Ascend,
            ]
        );
    }

    #[test]
    fn same_shape_different_variants_are_equal() {
        // Insertion order that leaves the AVL tree shaped exactly like
        // the plain search tree.
        let a = bst(&[5, 2, 8]);
        let b = avl(&[5, 2, 8]);
        assert!(equivalent(&a, &b));
        assert!(equal(&a, &b));
    }

    #[test]
    fn single_value_trees_are_equal_across_variants() {
        let a = bst(&[42]);
        let b = avl(&[42]);
        assert!(equal(&a, &b));
    }

    #[test]
    fn left_spine_vs_balanced_is_equivalent_not_equal() {
        // Descending inserts leave the plain tree as a left spine while
        // the AVL tree rebalances.
        let a = bst(&[8, 5, 2]);
        let b = avl(&[8, 5, 2]);
        assert!(equivalent(&a, &b));
        assert!(!equal(&a, &b));
    }

    #[test]
    fn different_values_are_not_equivalent() {
        let a = bst(&[1, 2, 3]);
        let b = bst(&[1, 2, 4]);
        assert!(!equivalent(&a, &b));
        assert!(!equal(&a, &b));
    }

    #[test]
    fn prefix_sequences_are_not_equivalent() {
        let a = bst(&[1, 2, 3]);
        let b = bst(&[1, 2]);
        assert!(!equivalent(&a, &b));
        assert!(!equivalent(&b, &a));
    }

    #[test]
    fn empty_trees_are_equal() {
        let a: Bst<i32> = Bst::new();
        let b: Avl<i32> = Avl::new();
        assert!(equivalent(&a, &b));
        assert!(equal(&a, &b));
    }

    #[test]
    fn empty_vs_nonempty() {
        let a: Bst<i32> = Bst::new();
        let b = bst(&[1]);
        assert!(!equivalent(&a, &b));
        assert!(!equal(&a, &b));
    }

    #[test]
    fn color_annotation_does_not_affect_comparison() {
        let mut rb = RedBlack::new();
        for v in [5, 2, 8] {
            rb.insert(v);
        }
        let plain = bst(&[5, 2, 8]);
        assert!(equal(&plain, &rb));
    }

    #[test]
    fn equivalent_by_across_value_types() {
        let a = bst(&[1, 2, 3]);
        let mut b = Bst::new();
        for v in [1i64, 2, 3] {
            b.insert(v);
        }
        assert!(equivalent_by(&a, &b, |x, y| i64::from(*x) == *y));
    }

    #[test]
    fn equivalent_by_rejects_length_and_value_mismatch() {
        let a = bst(&[1, 2, 3]);

        let mut longer = Bst::new();
        for v in [1i64, 2, 3, 4] {
            longer.insert(v);
        }
        assert!(!equivalent_by(&a, &longer, |x, y| i64::from(*x) == *y));
        assert!(!equivalent_by(&longer, &a, |x, y| *x == i64::from(*y)));

        let mut differs = Bst::new();
        for v in [1i64, 2, 9] {
            differs.insert(v);
        }
        assert!(!equivalent_by(&a, &differs, |x, y| i64::from(*x) == *y));
    }

    #[test]
    fn float_tolerance() {
        let opts = CompareOptions::default();
        assert!(opts.float_eq(1.0, 1.0 + 1e-16));
        assert!(!opts.float_eq(1.0, 1.0 + 1e-9));

        let loose = CompareOptions::default().fp_tolerance(1e-6);
        assert!(loose.float_eq(1.0, 1.0 + 1e-9));
    }

    #[test]
    fn options_builder() {
        let opts = CompareOptions::default();
        assert!(opts.ignores_duplicates());
        assert!(!opts.ignore_duplicates(false).ignores_duplicates());
    }
}
