//! Traversal engine for arbor trees.
//!
//! One iterator type, [`TreeWalk`], drives all five traversal orders over
//! anything that exposes the read-only [`TreeNode`] capability. The walk is
//! pull-based: it keeps an explicit stack (or queue, for level order) of
//! pending nodes and advances one step per `next` call, so a consumer that
//! stops early just drops the iterator. Nothing is left suspended.
//!
//! A `TreeWalk` borrows the tree for its whole lifetime, which means the
//! borrow checker rejects any attempt to mutate the tree while a walk from
//! it is still open.

use std::collections::VecDeque;

use arbor_ports::{TraverseOrder, Tree, TreeNode};

struct Frame<'a, T> {
    node: &'a dyn TreeNode<T>,
    /// Post-order only: both children have been pushed and the node is
    /// ready to emit.
    ready: bool,
}

/// A finite, non-restartable walk over a tree in one [`TraverseOrder`].
///
/// Yields `&T` in the requested order. Each call to
/// [`Traverse::traverse`] produces a fresh walk.
pub struct TreeWalk<'a, T> {
    order: TraverseOrder,
    stack: Vec<Frame<'a, T>>,
    queue: VecDeque<&'a dyn TreeNode<T>>,
}

impl<'a, T> TreeWalk<'a, T> {
    /// Starts a walk from the given root. A `None` root produces an empty
    /// walk.
    pub fn new(root: Option<&'a dyn TreeNode<T>>, order: TraverseOrder) -> Self {
        let mut walk = Self {
            order,
            stack: Vec::new(),
            queue: VecDeque::new(),
        };
        let Some(node) = root else {
            return walk;
        };
        match order {
            TraverseOrder::InOrder => walk.push_left_spine(node),
            TraverseOrder::ReverseOrder => walk.push_right_spine(node),
            TraverseOrder::PreOrder | TraverseOrder::PostOrder => walk.stack.push(Frame {
                node,
                ready: false,
            }),
            TraverseOrder::LevelOrder => walk.queue.push_back(node),
        }
        walk
    }

    fn push_left_spine(&mut self, start: &'a dyn TreeNode<T>) {
        let mut node = start;
        loop {
            self.stack.push(Frame { node, ready: false });
            match node.left() {
                Some(l) => node = l,
                None => break,
            }
        }
    }

    fn push_right_spine(&mut self, start: &'a dyn TreeNode<T>) {
        let mut node = start;
        loop {
            self.stack.push(Frame { node, ready: false });
            match node.right() {
                Some(r) => node = r,
                None => break,
            }
        }
    }
}

impl<'a, T> Iterator for TreeWalk<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self.order {
            TraverseOrder::InOrder => {
                let frame = self.stack.pop()?;
                if let Some(r) = frame.node.right() {
                    self.push_left_spine(r);
                }
                Some(frame.node.value())
            }
            TraverseOrder::ReverseOrder => {
                let frame = self.stack.pop()?;
                if let Some(l) = frame.node.left() {
                    self.push_right_spine(l);
                }
                Some(frame.node.value())
            }
            TraverseOrder::PreOrder => {
                let frame = self.stack.pop()?;
                // Right first so the left child pops first.
                if let Some(r) = frame.node.right() {
                    self.stack.push(Frame { node: r, ready: false });
                }
                if let Some(l) = frame.node.left() {
                    self.stack.push(Frame { node: l, ready: false });
                }
                Some(frame.node.value())
            }
            TraverseOrder::PostOrder => loop {
                let frame = self.stack.pop()?;
                if frame.ready {
                    return Some(frame.node.value());
                }
                self.stack.push(Frame {
                    node: frame.node,
                    ready: true,
                });
                if let Some(r) = frame.node.right() {
                    self.stack.push(Frame { node: r, ready: false });
                }
                if let Some(l) = frame.node.left() {
                    self.stack.push(Frame { node: l, ready: false });
                }
            },
            TraverseOrder::LevelOrder => {
                let node = self.queue.pop_front()?;
                if let Some(l) = node.left() {
                    self.queue.push_back(l);
                }
                if let Some(r) = node.right() {
                    self.queue.push_back(r);
                }
                Some(node.value())
            }
        }
    }
}

/// Extension trait giving every [`Tree`] container a `traverse` method.
pub trait Traverse<T> {
    /// Returns a fresh walk over this tree in the given order.
    fn traverse(&self, order: TraverseOrder) -> TreeWalk<'_, T>;
}

impl<T, C: Tree<T> + ?Sized> Traverse<T> for C {
    fn traverse(&self, order: TraverseOrder) -> TreeWalk<'_, T> {
        TreeWalk::new(self.root(), order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node {
        value: i32,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    }

    impl Node {
        fn leaf(value: i32) -> Option<Box<Node>> {
            Some(Box::new(Node {
                value,
                left: None,
                right: None,
            }))
        }
    }

    impl TreeNode<i32> for Node {
        fn value(&self) -> &i32 {
            &self.value
        }
        fn left(&self) -> Option<&dyn TreeNode<i32>> {
            self.left.as_deref().map(|n| n as &dyn TreeNode<i32>)
        }
        fn right(&self) -> Option<&dyn TreeNode<i32>> {
            self.right.as_deref().map(|n| n as &dyn TreeNode<i32>)
        }
    }

    //         21
    //        /
    //       1
    //      / \
    //   -13   11
    fn sample() -> Node {
        Node {
            value: 21,
            left: Some(Box::new(Node {
                value: 1,
                left: Node::leaf(-13),
                right: Node::leaf(11),
            })),
            right: None,
        }
    }

    fn collect(node: &Node, order: TraverseOrder) -> Vec<i32> {
        TreeWalk::new(Some(node as &dyn TreeNode<i32>), order)
            .copied()
            .collect()
    }

    #[test]
    fn walk_in_order() {
        assert_eq!(
            collect(&sample(), TraverseOrder::InOrder),
            vec![-13, 1, 11, 21]
        );
    }

    #[test]
    fn walk_pre_order() {
        assert_eq!(
            collect(&sample(), TraverseOrder::PreOrder),
            vec![21, 1, -13, 11]
        );
    }

    #[test]
    fn walk_post_order() {
        assert_eq!(
            collect(&sample(), TraverseOrder::PostOrder),
            vec![-13, 11, 1, 21]
        );
    }

    #[test]
    fn walk_reverse_order() {
        assert_eq!(
            collect(&sample(), TraverseOrder::ReverseOrder),
            vec![21, 11, 1, -13]
        );
    }

    #[test]
    fn walk_level_order() {
        assert_eq!(
            collect(&sample(), TraverseOrder::LevelOrder),
            vec![21, 1, -13, 11]
        );
    }

    #[test]
    fn walk_empty() {
        let mut walk: TreeWalk<'_, i32> = TreeWalk::new(None, TraverseOrder::InOrder);
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn walk_abandoned_early() {
        let tree = sample();
        let mut walk = TreeWalk::new(
            Some(&tree as &dyn TreeNode<i32>),
            TraverseOrder::InOrder,
        );
        assert_eq!(walk.next(), Some(&-13));
        // Dropping a half-finished walk must be fine.
        drop(walk);
    }
}
