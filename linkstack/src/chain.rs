//! Shared read-side contract for chain-backed collections.

use crate::{EmptyCollection, Limit, Underflow};

/// Read operations common to every collection built on a node chain.
///
/// Implemented by [`LinkedList`](crate::LinkedList) and
/// [`Stack`](crate::Stack). Generic code can inspect either one without caring
/// whether it was filled with `append` or `push`.
///
/// ```
/// use linkstack::{Chain, LinkedList, Stack};
///
/// fn top_or_zero<C: Chain<u32>>(c: &C) -> u32 {
///     c.peek().copied().unwrap_or(0)
/// }
///
/// let mut list = LinkedList::unbounded();
/// list.append(3).unwrap();
/// let stack: Stack<u32> = Stack::unbounded();
///
/// assert_eq!(top_or_zero(&list), 3);
/// assert_eq!(top_or_zero(&stack), 0);
/// ```
pub trait Chain<T> {
    /// Returns the head value.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the collection is empty.
    fn peek(&self) -> Result<&T, Underflow>;

    /// Returns whether `data` is present, comparing by value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCollection`] if the collection is empty.
    fn contain(&self, data: &T) -> Result<bool, EmptyCollection>
    where
        T: PartialEq;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns the configured capacity limit.
    fn limit(&self) -> Limit;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if the next insertion would be rejected.
    fn is_full(&self) -> bool {
        !self.limit().admits(self.size())
    }
}
