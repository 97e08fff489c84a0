//! Capability contracts for arbor trees.
//!
//! Every tree variant implements [`Tree`] for its container type and
//! [`TreeNode`] for its node type. Collaborators that only need to read a
//! tree (rendering, comparison, the benchmark harness) take
//! `&dyn TreeNode<T>` and never see a mutation-capable reference.

use std::fmt;

/// The common orders that tree nodes may be traversed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraverseOrder {
    /// Left subtree, then the node, then the right subtree.
    ///
    /// For a valid search tree this yields the values in ascending order.
    InOrder,
    /// The node, then the left subtree, then the right subtree.
    PreOrder,
    /// Left subtree, then the right subtree, then the node.
    PostOrder,
    /// Right subtree, then the node, then the left subtree.
    ///
    /// For a valid search tree this yields the values in descending order.
    ReverseOrder,
    /// Breadth first, each level visited left to right before the next
    /// level down.
    LevelOrder,
}

impl fmt::Display for TraverseOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TraverseOrder::InOrder => "In-Order",
            TraverseOrder::PreOrder => "Pre-Order",
            TraverseOrder::PostOrder => "Post-Order",
            TraverseOrder::ReverseOrder => "Reverse-Order",
            TraverseOrder::LevelOrder => "Level-Order",
        };
        f.write_str(label)
    }
}

/// Read-only view of a single node and the subtree below it.
///
/// An absent child is `None`; there is no nil-node sentinel.
pub trait TreeNode<T> {
    /// The value stored at this node.
    fn value(&self) -> &T;

    /// The left child, if any.
    fn left(&self) -> Option<&dyn TreeNode<T>>;

    /// The right child, if any.
    fn right(&self) -> Option<&dyn TreeNode<T>>;

    /// Reports if this node has a left child.
    fn has_left(&self) -> bool {
        self.left().is_some()
    }

    /// Reports if this node has a right child.
    fn has_right(&self) -> bool {
        self.right().is_some()
    }

    /// A short diagnostic string for this node.
    ///
    /// Balance factor for an AVL node, color for a Red-Black node, empty
    /// for a plain BST node. Primarily used when rendering the tree.
    fn metadata(&self) -> String {
        String::new()
    }

    /// Height of the subtree rooted at this node. A node with no children
    /// has height 1; an absent child contributes 0.
    fn height(&self) -> usize {
        let lh = self.left().map_or(0, |n| n.height());
        let rh = self.right().map_or(0, |n| n.height());
        lh.max(rh) + 1
    }
}

/// The container contract common to all tree variants.
///
/// All operations report failure as `false` rather than an error: a failed
/// call always leaves the tree exactly as it was. The container owns its
/// whole node graph and never shares it with another container.
pub trait Tree<T> {
    /// Adds the value, growing the tree. Returns `false` and leaves the
    /// tree unchanged if the value is already present; duplicates are not
    /// allowed.
    fn insert(&mut self, value: T) -> bool;

    /// Removes the value if present and reports if it was. An interior
    /// node is replaced by its in-order successor; otherwise the node is
    /// spliced out. Returns `false` on an absent value or an empty tree,
    /// tree unchanged.
    fn delete(&mut self, value: &T) -> bool;

    /// Reports if the value is in the tree. Pure read.
    fn search(&self, value: &T) -> bool;

    /// Height of the longest path from the root to the farthest leaf.
    /// 0 for an empty tree.
    fn height(&self) -> usize;

    /// Read-only root node, for traversal, rendering, and comparison.
    /// `None` for an empty tree.
    fn root(&self) -> Option<&dyn TreeNode<T>>;

    /// Number of values currently stored.
    fn len(&self) -> usize;

    /// Reports if the tree holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
