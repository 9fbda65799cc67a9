//! LIFO stack over a bounded linked list.
//!
//! [`Stack`] owns a [`LinkedList`] and only ever touches its head: `push`
//! appends, `pop` unlinks the head in O(1). Everything else delegates.

use core::fmt;

use log::debug;

use crate::{CapacityExceeded, Chain, EmptyCollection, Iter, Limit, LinkedList, Underflow};

/// A last-in, first-out stack with an optional capacity limit.
///
/// # Example
///
/// ```
/// use linkstack::Stack;
///
/// let mut stack = Stack::new(None);
/// for i in 1..=5 {
///     stack.push(i).unwrap();
/// }
///
/// assert_eq!(stack.pop(), Ok(5));
/// assert_eq!(stack.pop(), Ok(4));
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.size(), 2);
/// assert_eq!(stack.contain(&4), Ok(false));
/// assert_eq!(stack.contain(&2), Ok(true));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    chain: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack. `None` (or `Some(0)`) means unbounded.
    #[inline]
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            chain: LinkedList::new(limit),
        }
    }

    /// Creates an empty stack with no capacity limit.
    #[inline]
    pub fn unbounded() -> Self {
        Self {
            chain: LinkedList::unbounded(),
        }
    }

    /// Creates an empty stack holding at most `max` values.
    #[inline]
    pub fn with_limit(max: usize) -> Self {
        Self {
            chain: LinkedList::with_limit(max),
        }
    }

    /// Pushes `data` onto the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] holding `data` if the stack is at its
    /// limit.
    #[inline]
    pub fn push(&mut self, data: T) -> Result<(), CapacityExceeded<T>> {
        self.chain.append(data)
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, Underflow> {
        self.chain.pop_front().inspect_err(|_| debug!("pop on empty stack"))
    }

    /// Returns a reference to the top value.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T, Underflow> {
        self.chain.peek()
    }

    /// Returns a mutable reference to the top value.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the stack is empty.
    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T, Underflow> {
        self.chain.peek_mut()
    }

    /// Returns whether a value equal to `data` is on the stack.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCollection`] if the stack is empty.
    #[inline]
    pub fn contain(&self, data: &T) -> Result<bool, EmptyCollection>
    where
        T: PartialEq,
    {
        self.chain.contain(data)
    }

    /// Returns the number of values on the stack.
    #[inline]
    pub fn size(&self) -> usize {
        self.chain.size()
    }

    /// Returns the number of values on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns `true` if the next push would be rejected.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.chain.is_full()
    }

    /// Returns the capacity limit.
    #[inline]
    pub fn limit(&self) -> Limit {
        self.chain.limit()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Returns an iterator over values, top to bottom.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    /// Returns the underlying list.
    #[inline]
    pub fn as_list(&self) -> &LinkedList<T> {
        &self.chain
    }

    /// Consumes the stack, returning the underlying list.
    #[inline]
    pub fn into_list(self) -> LinkedList<T> {
        self.chain
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> From<LinkedList<T>> for Stack<T> {
    /// The list's head becomes the top of the stack.
    fn from(chain: LinkedList<T>) -> Self {
        Self { chain }
    }
}

impl<T> Chain<T> for Stack<T> {
    fn peek(&self) -> Result<&T, Underflow> {
        self.chain.peek()
    }

    fn contain(&self, data: &T) -> Result<bool, EmptyCollection>
    where
        T: PartialEq,
    {
        self.chain.contain(data)
    }

    fn size(&self) -> usize {
        self.chain.size()
    }

    fn limit(&self) -> Limit {
        self.chain.limit()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack({})", self.chain.size())
    }
}

impl<T: fmt::Debug> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stack has a size of {}", self.chain.size())?;
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of_five() -> Stack<u64> {
        let mut stack = Stack::new(None);
        for i in 1..=5 {
            stack.push(i).unwrap();
        }
        stack
    }

    #[test]
    fn new_is_empty() {
        let stack: Stack<u64> = Stack::new(None);
        assert!(stack.is_empty());
        assert_eq!(stack.size(), 0);
        assert_eq!(stack.limit(), Limit::Unbounded);
    }

    #[test]
    fn push_sets_top() {
        let mut stack = stack_of_five();
        assert_eq!(stack.size(), 5);
        stack.push(6).unwrap();
        assert_eq!(stack.size(), 6);
        assert_eq!(stack.peek(), Ok(&6));
    }

    #[test]
    fn pop_is_lifo() {
        let mut stack = stack_of_five();

        assert_eq!(stack.pop(), Ok(5));
        assert_eq!(stack.size(), 4);
        assert_eq!(stack.peek(), Ok(&4));

        assert_eq!(stack.pop(), Ok(4));
        assert_eq!(stack.size(), 3);
        assert_eq!(stack.peek(), Ok(&3));

        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.size(), 2);
        assert_eq!(stack.peek(), Ok(&2));

        assert_eq!(stack.contain(&4), Ok(false));
        assert_eq!(stack.contain(&2), Ok(true));
    }

    #[test]
    fn peek_does_not_pop() {
        let stack = stack_of_five();
        assert_eq!(stack.peek(), Ok(&5));
        assert_eq!(stack.size(), 5);
    }

    #[test]
    fn contain() {
        let stack = stack_of_five();
        for i in 1..=5 {
            assert_eq!(stack.contain(&i), Ok(true));
        }
        assert_eq!(stack.contain(&6), Ok(false));
    }

    #[test]
    fn size_tracks_push_and_pop() {
        let mut stack = stack_of_five();
        assert_eq!(stack.size(), 5);
        stack.push(6).unwrap();
        assert_eq!(stack.size(), 6);
        stack.pop().unwrap();
        assert_eq!(stack.size(), 5);
    }

    #[test]
    fn drains_to_empty() {
        let mut stack = stack_of_five();
        assert!(!stack.is_empty());
        for _ in 0..5 {
            stack.pop().unwrap();
        }
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(Underflow));
        assert_eq!(stack.peek(), Err(Underflow));
        assert_eq!(stack.contain(&1), Err(EmptyCollection));
    }

    #[test]
    fn push_at_limit_fails() {
        let mut stack = Stack::with_limit(2);
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert!(stack.is_full());

        let err = stack.push('c').unwrap_err();
        assert_eq!(err.into_inner(), 'c');
        assert_eq!(stack.size(), 2);
        assert_eq!(stack.peek(), Ok(&'b'));

        stack.pop().unwrap();
        stack.push('c').unwrap();
        assert_eq!(stack.peek(), Ok(&'c'));
    }

    fn full_through_chain<T, C: Chain<T>>(chain: &C) -> bool {
        chain.is_full()
    }

    #[test]
    fn chain_is_full_on_bounded_stack() {
        let mut stack = Stack::with_limit(1);
        assert!(!full_through_chain(&stack));
        assert!(Chain::is_empty(&stack));

        stack.push(7u8).unwrap();
        assert!(full_through_chain(&stack));
        assert!(stack.push(8).is_err());

        stack.pop().unwrap();
        assert!(!full_through_chain(&stack));

        let unbounded: Stack<u8> = Stack::unbounded();
        assert!(!full_through_chain(&unbounded));
    }

    #[test]
    fn peek_mut_updates_top() {
        let mut stack = stack_of_five();
        *stack.peek_mut().unwrap() *= 10;
        assert_eq!(stack.pop(), Ok(50));
    }

    #[test]
    fn iter_top_to_bottom() {
        let stack = stack_of_five();
        let values: Vec<_> = stack.iter().copied().collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn from_list_keeps_head_on_top() {
        let mut list = LinkedList::unbounded();
        list.append(1u64).unwrap();
        list.append(2).unwrap();

        let mut stack = Stack::from(list);
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.into_list().peek(), Ok(&1));
    }

    #[test]
    fn display_and_debug() {
        let stack = stack_of_five();
        assert_eq!(stack.to_string(), "Stack has a size of 5\n[5, 4, 3, 2, 1]");
        assert_eq!(format!("{stack:?}"), "Stack(5)");
    }

    #[test]
    fn clear() {
        let mut stack = stack_of_five();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.as_list().size(), 0);
    }
}
