//! Chain cells.
//!
//! A [`Node`] holds one value and exclusively owns its successor, so a chain
//! of nodes is owned transitively by whoever holds the first one. Nodes never
//! rewrite their own links; [`LinkedList`](crate::LinkedList) does that.
//!
//! `Node` implements neither `Clone` nor `PartialEq`, and its `Debug` prints
//! only the node's own value. Any of these walking the successor would recurse
//! once per node. Whole-chain copies and comparisons belong to the list, which
//! does them iteratively.

use core::fmt;

/// Owned link to the next cell in a chain.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single cell in a singly-linked chain.
///
/// # Example
///
/// ```
/// use linkstack::Node;
///
/// let tail = Node::new(2, None);
/// let head = Node::new(1, Some(Box::new(tail)));
///
/// assert_eq!(*head.data(), 1);
/// assert_eq!(head.next().map(|n| *n.data()), Some(2));
/// ```
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a node with the given value and successor.
    #[inline]
    pub fn new(data: T, next: Link<T>) -> Self {
        Self { data, next }
    }

    /// Returns a reference to the stored value.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the stored value.
    #[inline]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the successor, if any.
    #[inline]
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Consumes the node, returning its value.
    ///
    /// The successor is dropped along with the node. That drop recurses once
    /// per remaining node, so on a long hand-built chain detach the successor
    /// first or hand the chain to a [`LinkedList`](crate::LinkedList).
    #[inline]
    pub fn into_data(self) -> T {
        self.data
    }

    /// Detaches and returns the successor, leaving this node as a tail.
    #[inline]
    pub(crate) fn take_next(&mut self) -> Link<T> {
        self.next.take()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tail_has_no_successor() {
        let node = Node::new(7u32, None);
        assert_eq!(*node.data(), 7);
        assert!(node.next().is_none());
    }

    #[test]
    fn successor_is_reachable() {
        let node = Node::new("a", Some(Box::new(Node::new("b", None))));
        let next = node.next().unwrap();
        assert_eq!(*next.data(), "b");
        assert!(next.next().is_none());
    }

    #[test]
    fn data_mut_updates_value() {
        let mut node = Node::new(1u64, None);
        *node.data_mut() += 41;
        assert_eq!(node.into_data(), 42);
    }

    #[test]
    fn debug_shows_only_own_value() {
        let node = Node::new(1u8, Some(Box::new(Node::new(2, None))));
        assert_eq!(format!("{node:?}"), "Node { data: 1, has_next: true }");
        let tail = node.next().unwrap();
        assert_eq!(format!("{tail:?}"), "Node { data: 2, has_next: false }");
    }

    #[test]
    fn take_next_detaches() {
        let mut node = Node::new(1, Some(Box::new(Node::new(2, None))));
        let rest = node.take_next().unwrap();
        assert!(node.next().is_none());
        assert_eq!(rest.into_data(), 2);
    }
}
