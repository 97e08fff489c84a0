//! Color-annotated binary search tree for arbor.
//!
//! Each node carries a red/black color flag that surfaces through
//! [`TreeNode::metadata`]. Insertion and deletion currently mirror the
//! unbalanced search tree; color-driven rebalancing is an extension point
//! that has not been built, so new nodes enter black and stay black until
//! a fixup pass exists to recolor them.

use std::cmp::Ordering;
use std::fmt;

use arbor_ports::{Tree, TreeNode};

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    Red,
    #[default]
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("Red"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// A node in a color-annotated binary search tree.
#[derive(Debug, Clone)]
pub struct RedBlackNode<T> {
    value: T,
    color: Color,
    left: Option<Box<RedBlackNode<T>>>,
    right: Option<Box<RedBlackNode<T>>>,
}

impl<T> RedBlackNode<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            color: Color::default(),
            left: None,
            right: None,
        }
    }

    /// The node's color.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl<T: Ord> RedBlackNode<T> {
    fn insert(&mut self, value: T) -> bool {
        match value.cmp(&self.value) {
            // Duplicates are not allowed.
            Ordering::Equal => false,
            Ordering::Less => match self.left.as_mut() {
                Some(child) => child.insert(value),
                None => {
                    self.left = Some(Box::new(RedBlackNode::new(value)));
                    true
                }
            },
            Ordering::Greater => match self.right.as_mut() {
                Some(child) => child.insert(value),
                None => {
                    self.right = Some(Box::new(RedBlackNode::new(value)));
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
                            color: n.color,
                            left: Some(l),
                            right: rest,
                        }))
                    }
                };
                (replacement, true)
            }
        }
    }

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

impl<T> TreeNode<T> for RedBlackNode<T> {
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
        self.color.to_string()
    }
}

/// A color-annotated binary search tree container.
#[derive(Debug, Clone, Default)]
pub struct RedBlack<T> {
    root: Option<Box<RedBlackNode<T>>>,
    size: usize,
}

impl<T> RedBlack<T> {
    /// Returns an empty tree ready to use.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }
}

impl<T: Ord> Tree<T> for RedBlack<T> {
    fn insert(&mut self, value: T) -> bool {
        let inserted = match self.root.as_mut() {
            Some(root) => root.insert(value),
            None => {
                self.root = Some(Box::new(RedBlackNode::new(value)));
                true
            }
        };
        if inserted {
            self.size += 1;
        }
        inserted
    }

    fn delete(&mut self, value: &T) -> bool {
        let (root, removed) = RedBlackNode::remove(self.root.take(), value);
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

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_ports::TraverseOrder;
    use arbor_walk::Traverse;

    fn from_values(values: &[i32]) -> RedBlack<i32> {
        let mut tree = RedBlack::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    #[test]
    fn insert_and_search() {
        let tree = from_values(&[5, 3, 8]);
        assert_eq!(tree.len(), 3);
        assert!(tree.search(&3));
        assert!(!tree.search(&4));
    }

    #[test]
    fn insert_duplicate_rejected() {
        let mut tree = from_values(&[5, 3]);
        assert!(!tree.insert(3));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn new_nodes_are_black() {
        let tree = from_values(&[5, 3, 8]);
        let root = tree.root().unwrap();
        assert_eq!(root.metadata(), "Black");
        assert_eq!(root.left().unwrap().metadata(), "Black");
        assert_eq!(root.right().unwrap().metadata(), "Black");
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::Red.to_string(), "Red");
        assert_eq!(Color::Black.to_string(), "Black");
    }

    #[test]
    fn shape_follows_insertion_order() {
        let tree = from_values(&[42, 21, 1, 30, 29, 84, 57]);
        let walked: Vec<i32> = tree.traverse(TraverseOrder::InOrder).copied().collect();
        assert_eq!(walked, vec![1, 21, 29, 30, 42, 57, 84]);
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn delete_keeps_color_of_replaced_slot() {
        let mut tree = from_values(&[5, 3, 8, 7, 9]);
        assert!(tree.delete(&8));
        let walked: Vec<i32> = tree.traverse(TraverseOrder::InOrder).copied().collect();
        assert_eq!(walked, vec![3, 5, 7, 9]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn empty_tree() {
        let tree: RedBlack<i32> = RedBlack::new();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.height(), 0);
    }
}
