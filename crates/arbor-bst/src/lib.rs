//! Unbalanced binary search tree for arbor.
//!
//! The simplest variant: recursive insert and search with no rebalancing,
//! so the shape depends entirely on insertion order. Every value in a
//! node's left subtree is less than the node's value and every value in its
//! right subtree is greater; duplicates are rejected.

use std::cmp::Ordering;

use arbor_ports::{Tree, TreeNode};

/// A node in an unbalanced binary search tree.
#[derive(Debug, Clone)]
pub struct BstNode<T> {
    value: T,
    left: Option<Box<BstNode<T>>>,
    right: Option<Box<BstNode<T>>>,
}

impl<T> BstNode<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

impl<T: Ord> BstNode<T> {
    fn insert(&mut self, value: T) -> bool {
        match value.cmp(&self.value) {
            // Duplicates are not allowed.
            Ordering::Equal => false,
            Ordering::Less => match self.left.as_mut() {
                Some(child) => child.insert(value),
                None => {
                    self.left = Some(Box::new(BstNode::new(value)));
                    true
                }
            },
            Ordering::Greater => match self.right.as_mut() {
                Some(child) => child.insert(value),
                None => {
                    self.right = Some(Box::new(BstNode::new(value)));
                    true
                }
            },
        }
    }

    fn search(&self, value: &T) -> bool {
        match value.cmp(&self.value) {
            Ordering::Equal => true,
            Ordering::Less => self.left.as_ref().is_some_and(|n| n.search(value)),
            Ordering::Greater => self.right.as_ref().is_some_and(|n| n.search(value)),
        }
    }

    /// Removes `value` from the subtree, returning the new subtree root
    /// and whether anything was removed. A node with two children is
    /// replaced by its in-order successor.
    fn remove(node: Option<Box<Self>>, value: &T) -> (Option<Box<Self>>, bool) {
        let Some(mut node) = node else {
            return (None, false);
        };
        match value.cmp(&node.value) {
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
                            left: Some(l),
                            right: rest,
                        }))
                    }
                };
                (replacement, true)
            }
        }
    }

    /// Detaches the smallest value in the subtree, returning what is left
    /// of the subtree and the detached value.
    fn pop_min(mut node: Box<Self>) -> (Option<Box<Self>>, T) {
        match node.left.take() {
            None => {
                let n = *node;
                (n.right, n.value)
            }
            Some(l) => {
                let (rest, value) = Self::pop_min(l);
                node.left = rest;
                (Some(node), value)
            }
        }
    }
}

impl<T> TreeNode<T> for BstNode<T> {
    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&dyn TreeNode<T>> {
        self.left.as_deref().map(|n| n as &dyn TreeNode<T>)
    }

    fn right(&self) -> Option<&dyn TreeNode<T>> {
        self.right.as_deref().map(|n| n as &dyn TreeNode<T>)
    }
}

/// An unbalanced binary search tree container.
#[derive(Debug, Clone, Default)]
pub struct Bst<T> {
    root: Option<Box<BstNode<T>>>,
    size: usize,
}

impl<T> Bst<T> {
    /// Returns an empty tree ready to use.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }
}

impl<T: Ord> Tree<T> for Bst<T> {
    fn insert(&mut self, value: T) -> bool {
        let inserted = match self.root.as_mut() {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Box::new(BstNode::new(value)));
                true
            }
        };
        if inserted {
            self.size += 1;
        }
        inserted
    }

    fn delete(&mut self, value: &T) -> bool {
        let (root, removed) = BstNode::remove(self.root.take(), value);
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
        self.root.as_ref().map_or(0, |root| TreeNode::height(&**root))
    }

    fn root(&self) -> Option<&dyn TreeNode<T>> {
        self.root.as_deref().map(|n| n as &dyn TreeNode<T>)
    }

    fn len(&self) -> usize {
        self.size
    }
}
