//! Self-balancing AVL tree for arbor.
//!
//! An AVL tree (named after inventors Adelson-Velsky and Landis) is a
//! binary search tree in which the heights of the two child subtrees of
//! any node differ by at most one. Each node stores its balance factor,
//! `height(right) - height(left)`; whenever an insertion or deletion
//! pushes a node's balance factor outside `[-1, 1]`, a single or double
//! rotation restores the property.
//!
//! Rebalancing is driven by the recursive walk itself: every node on the
//! insertion (or deletion) path recomputes its balance factor as the
//! recursion unwinds, and the first node found out of range rotates. The
//! unwind visits exactly the ancestors of the touched leaf, so no parent
//! back-reference is stored.

use std::cmp::Ordering;
use std::mem;

use arbor_ports::{Tree, TreeNode};

/// A node in an AVL tree.
#[derive(Debug, Clone)]
pub struct AvlNode<T> {
    value: T,

    /// Balance factor: the height of the right subtree minus the height
    /// of the left. In `[-1, 1]` between operations, `[-2, 2]` while a
    /// rebalance is in flight.
    bf: i8,

    left: Option<Box<AvlNode<T>>>,
    right: Option<Box<AvlNode<T>>>,
}

impl<T> AvlNode<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            bf: 0,
            left: None,
            right: None,
        }
    }

    /// The node's balance factor.
    pub fn balance_factor(&self) -> i8 {
        self.bf
    }

    /// The left child as a concrete node, if any.
    pub fn left_node(&self) -> Option<&AvlNode<T>> {
        self.left.as_deref()
    }

    /// The right child as a concrete node, if any.
    pub fn right_node(&self) -> Option<&AvlNode<T>> {
        self.right.as_deref()
    }

    fn height_of(slot: &Option<Box<Self>>) -> usize {
        slot.as_ref().map_or(0, |n| n.subtree_height())
    }

    fn subtree_height(&self) -> usize {
        Self::height_of(&self.left).max(Self::height_of(&self.right)) + 1
    }

    /// Recomputes this node's balance factor from its children's current
    /// heights.
    fn update_balance(&mut self) {
        let lh = Self::height_of(&self.left) as i64;
        let rh = Self::height_of(&self.right) as i64;
        self.bf = (rh - lh) as i8;
    }
}

impl<T: Ord> AvlNode<T> {
    /// Recursive insert. On the unwind every ancestor of the new leaf
    /// recomputes its balance factor and rebalances if it has gone out of
    /// range; at most one rotation fires per insertion.
    fn insert_into(node: &mut Box<Self>, value: T) -> bool {
        let grew = match value.cmp(&node.value) {
            // Duplicates are not allowed.
            Ordering::Equal => return false,
            Ordering::Less => match node.left.as_mut() {
                Some(child) => Self::insert_into(child, value),
                None => {
                    node.left = Some(Box::new(Self::new(value)));
                    true
                }
            },
            Ordering::Greater => match node.right.as_mut() {
                Some(child) => Self::insert_into(child, value),
                None => {
                    node.right = Some(Box::new(Self::new(value)));
                    true
                }
            },
        };
        if grew {
            node.update_balance();
            Self::rebalance(node);
        }
        grew
    }

    fn search(&self, value: &T) -> bool {
        match value.cmp(&self.value) {
            Ordering::Equal => true,
            Ordering::Less => self.left.as_ref().is_some_and(|n| n.search(value)),
            Ordering::Greater => self.right.as_ref().is_some_and(|n| n.search(value)),
        }
    }

    /// Applies the rotation called for by this node's balance factor, if
    /// any. The child inspected to pick single versus double rotation is
    /// guaranteed present on the heavy side.
    fn rebalance(node: &mut Box<Self>) {
        if node.bf > 1 {
            // Right-heavy.
            if node.right.as_ref().is_some_and(|r| r.bf < 0) {
                // Right-Left case: double rotation.
                Self::rotate_right_left(node);
            } else {
                // Right-Right case: single left rotation.
                Self::rotate_left(node);
            }
        } else if node.bf < -1 {
            // Left-heavy.
            if node.left.as_ref().is_some_and(|l| l.bf > 0) {
                // Left-Right case: double rotation.
                Self::rotate_left_right(node);
            } else {
                // Left-Left case: single right rotation.
                Self::rotate_right(node);
            }
        }
    }

    /// Single left rotation: the right child is promoted into this node's
    /// structural position, its former left child becomes this node's new
    /// right child, and this node becomes the promoted child's left child.
    ///
    /// ```text
    ///    [H]                [N]
    ///      \                / \
    ///      [N]     =>    [H] [Z]
    ///        \
    ///        [Z]
    /// ```
    fn rotate_left(node: &mut Box<Self>) {
        let Some(mut pivot) = node.right.take() else {
            return;
        };
        node.right = pivot.left.take();
        node.update_balance();
        // The box under `node` becomes the pivot; the old contents hang
        // off its left side.
        mem::swap(node, &mut pivot);
        node.left = Some(pivot);
        node.update_balance();
    }

    /// Single right rotation, the mirror of [`Self::rotate_left`].
    fn rotate_right(node: &mut Box<Self>) {
        let Some(mut pivot) = node.left.take() else {
            return;
        };
        node.left = pivot.right.take();
        node.update_balance();
        mem::swap(node, &mut pivot);
        node.right = Some(pivot);
        node.update_balance();
    }

    /// Right-Left double rotation: rotate right around the right child to
    /// reduce to the Right-Right form, then rotate left around this node.
    fn rotate_right_left(node: &mut Box<Self>) {
        if let Some(r) = node.right.as_mut() {
            Self::rotate_right(r);
        }
        Self::rotate_left(node);
    }

    /// Left-Right double rotation: rotate left around the left child,
    /// then right around this node.
    fn rotate_left_right(node: &mut Box<Self>) {
        if let Some(l) = node.left.as_mut() {
            Self::rotate_left(l);
        }
        Self::rotate_right(node);
    }

    /// Removes `value` from the subtree, rebalancing each node on the way
    /// back up. Returns the new subtree root and whether anything was
    /// removed.
    fn remove(node: Option<Box<Self>>, value: &T) -> (Option<Box<Self>>, bool) {
        let Some(mut node) = node else {
            return (None, false);
        };
        let (mut node, removed) = match value.cmp(&node.value) {
            Ordering::Less => {
                let (left, removed) = Self::remove(node.left.take(), value);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove(node.right.take(), value);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => {
                let n = *node;
                let replacement = match (n.left, n.right) {
                    (None, None) => None,
                    (Some(l), None) => Some(l),
                    (None, Some(r)) => Some(r),
                    (Some(l), Some(r)) => {
                        let (rest, successor) = Self::pop_min(r);
                        Some(Box::new(Self {
                            value: successor,
                            bf: 0,
                            left: Some(l),
                            right: rest,
                        }))
                    }
                };
                (replacement, true)
            }
        };
        if removed {
            if let Some(n) = node.as_mut() {
                n.update_balance();
                Self::rebalance(n);
            }
        }
        (node, removed)
    }

    /// Detaches the smallest value in the subtree, rebalancing the nodes
    /// left behind.
    fn pop_min(mut node: Box<Self>) -> (Option<Box<Self>>, T) {
        match node.left.take() {
            None => {
                let n = *node;
                (n.right, n.value)
            }
            Some(l) => {
                let (rest, value) = Self::pop_min(l);
                node.left = rest;
                node.update_balance();
                Self::rebalance(&mut node);
                (Some(node), value)
            }
        }
    }
}

impl<T> TreeNode<T> for AvlNode<T> {
    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&dyn TreeNode<T>> {
        self.left.as_deref().map(|n| n as &dyn TreeNode<T>)
    }

    fn right(&self) -> Option<&dyn TreeNode<T>> {
        self.right.as_deref().map(|n| n as &dyn TreeNode<T>)
    }

    fn metadata(&self) -> String {
        format!("BF:{:2}", self.bf)
    }
}

/// A self-balancing AVL tree container.
#[derive(Debug, Clone, Default)]
pub struct Avl<T> {
    root: Option<Box<AvlNode<T>>>,
    size: usize,
}

impl<T> Avl<T> {
    /// Returns an empty tree ready to use.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The root as a concrete AVL node, for callers that need the balance
    /// factor rather than the read-only capability.
    pub fn root_node(&self) -> Option<&AvlNode<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> Tree<T> for Avl<T> {
    fn insert(&mut self, value: T) -> bool {
        let inserted = match self.root.as_mut() {
            Some(root) => AvlNode::insert_into(root, value),
            None => {
                self.root = Some(Box::new(AvlNode::new(value)));
                true
            }
        };
        if inserted {
            self.size += 1;
        }
        inserted
    }

    fn delete(&mut self, value: &T) -> bool {
        let (root, removed) = AvlNode::remove(self.root.take(), value);
        self.root = root;
        if removed {
            self.size -= 1;
        }
        removed
    }

    fn search(&self, value: &T) -> bool {
        self.root.as_ref().is_some_and(|root| root.search(value))
    }

    fn height(&self) -> usize {
        AvlNode::height_of(&self.root)
    }

    fn root(&self) -> Option<&dyn TreeNode<T>> {
        self.root.as_deref().map(|n| n as &dyn TreeNode<T>)
    }

    fn len(&self) -> usize {
        self.size
    }
}
