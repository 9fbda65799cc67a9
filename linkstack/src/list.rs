//! Bounded singly-linked list.
//!
//! Values are inserted at the head, so the most recently appended value is
//! always the one [`peek`](LinkedList::peek) returns. Removal by value scans
//! from the head and unlinks the first match.
//!
//! # Example
//!
//! ```
//! use linkstack::{LinkedList, RemoveError};
//!
//! let mut list = LinkedList::with_limit(3);
//! list.append(1).unwrap();
//! list.append(2).unwrap();
//! list.append(3).unwrap();
//!
//! // Full: the rejected value comes back in the error
//! assert_eq!(list.append(4).unwrap_err().into_inner(), 4);
//!
//! assert_eq!(list.peek(), Ok(&3));
//! assert_eq!(list.remove(&2), Ok(2));
//! assert_eq!(list.remove(&2), Err(RemoveError::NotFound));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1]);
//! ```
//!
//! # Empty Collections
//!
//! Every read on an empty list is an error, including
//! [`contain`](LinkedList::contain), which reports [`EmptyCollection`] rather
//! than `Ok(false)`.
//!
//! ```
//! use linkstack::{EmptyCollection, LinkedList, Underflow};
//!
//! let list: LinkedList<u32> = LinkedList::unbounded();
//! assert_eq!(list.peek(), Err(Underflow));
//! assert_eq!(list.contain(&1), Err(EmptyCollection));
//! ```

use core::fmt;
use core::iter::FusedIterator;

use log::{debug, trace};

use crate::{
    CapacityExceeded, Chain, EmptyCollection, Limit, Link, Node, RemoveError, Underflow,
};

/// A singly-linked list with an optional capacity limit.
///
/// The list exclusively owns its chain of [`Node`]s. Dropping the list
/// releases the chain one node at a time, so arbitrarily long lists can be
/// dropped without deep recursion.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
    limit: Limit,
}

impl<T> LinkedList<T> {
    /// Creates an empty list. `None` (or `Some(0)`) means unbounded.
    #[inline]
    pub fn new(limit: Option<usize>) -> Self {
        Self::with_config(Limit::from(limit))
    }

    /// Creates an empty list with no capacity limit.
    #[inline]
    pub fn unbounded() -> Self {
        Self::with_config(Limit::Unbounded)
    }

    /// Creates an empty list holding at most `max` values.
    ///
    /// A `max` of zero is treated as unbounded.
    #[inline]
    pub fn with_limit(max: usize) -> Self {
        Self::with_config(Limit::bounded(max))
    }

    /// Creates an empty list with the given limit.
    #[inline]
    pub const fn with_config(limit: Limit) -> Self {
        Self {
            head: None,
            len: 0,
            limit,
        }
    }

    /// Returns the number of values in the list.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns the number of values in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity limit.
    #[inline]
    pub fn limit(&self) -> Limit {
        self.limit
    }

    /// Returns `true` if the next append would be rejected.
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.limit.admits(self.len)
    }

    /// Returns the first node of the chain.
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Inserts `data` at the head of the list.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] holding `data` if the list is at its
    /// limit. The list is left unchanged.
    pub fn append(&mut self, data: T) -> Result<(), CapacityExceeded<T>> {
        if !self.limit.admits(self.len) {
            // Only a bounded limit can reject.
            let limit = self.limit.get().unwrap_or_default();
            debug!("append rejected: list is at its limit of {limit}");
            return Err(CapacityExceeded { value: data, limit });
        }
        let next = self.head.take();
        self.head = Some(Box::new(Node::new(data, next)));
        self.len += 1;
        Ok(())
    }

    /// Removes the first value equal to `data`, scanning from the head.
    ///
    /// # Errors
    ///
    /// - [`RemoveError::Underflow`] if the list is empty.
    /// - [`RemoveError::NotFound`] if no value matches. The list is left
    ///   unchanged.
    pub fn remove(&mut self, data: &T) -> Result<T, RemoveError>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            debug!("remove rejected: list is empty");
            return Err(RemoveError::Underflow);
        }

        // Walk the link slots so head and interior nodes unlink the same way.
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.data != *data) {
            let Some(node) = cursor else { break };
            cursor = &mut node.next;
        }

        let Some(mut node) = cursor.take() else {
            debug!("remove rejected: value not in list of {}", self.len);
            return Err(RemoveError::NotFound);
        };
        *cursor = node.take_next();
        self.len -= 1;
        Ok(node.data)
    }

    /// Removes and returns the head value.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, Underflow> {
        let mut node = self.head.take().ok_or(Underflow)?;
        self.head = node.take_next();
        self.len -= 1;
        Ok(node.data)
    }

    /// Returns a reference to the head value.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the list is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T, Underflow> {
        self.head.as_deref().map(Node::data).ok_or(Underflow)
    }

    /// Returns a mutable reference to the head value.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the list is empty.
    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T, Underflow> {
        self.head
            .as_deref_mut()
            .map(Node::data_mut)
            .ok_or(Underflow)
    }

    /// Returns whether a value equal to `data` is in the list.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCollection`] if the list is empty, instead of
    /// `Ok(false)`.
    pub fn contain(&self, data: &T) -> Result<bool, EmptyCollection>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(EmptyCollection);
        }
        Ok(self.iter().any(|value| value == data))
    }

    /// Removes every value, dropping nodes iteratively.
    pub fn clear(&mut self) {
        if self.len > 0 {
            trace!("releasing chain of {} nodes", self.len);
        }
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.take_next();
        }
        self.len = 0;
    }

    /// Returns an iterator over values, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Chain<T> for LinkedList<T> {
    fn peek(&self) -> Result<&T, Underflow> {
        LinkedList::peek(self)
    }

    fn contain(&self, data: &T) -> Result<bool, EmptyCollection>
    where
        T: PartialEq,
    {
        LinkedList::contain(self, data)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn limit(&self) -> Limit {
        self.limit
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        // Rebuild tail-first so head insertion restores the source order.
        let values: Vec<&T> = self.iter().collect();
        let mut out = Self::with_config(self.limit);
        for value in values.into_iter().rev() {
            out.head = Some(Box::new(Node::new(value.clone(), out.head.take())));
        }
        out.len = self.len;
        out
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkedList({})", self.len)
    }
}

impl<T: fmt::Debug> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LinkedList has a size of {}", self.len)?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to values, head to tail.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        self.remaining -= 1;
        Some(node.data())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over values, head to tail.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
