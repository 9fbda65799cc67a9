//! Bounded singly-linked list and a stack built on it.
//!
//! Both collections own a chain of boxed [`Node`]s, insert at the head, and
//! enforce an optional capacity [`Limit`] fixed at construction.
//!
//! ```text
//! head
//!  │
//!  ▼
//! [5] ──► [4] ──► [3] ──► [2] ──► [1] ──► None
//! newest                           oldest
//! ```
//!
//! - [`LinkedList`] - append at the head, remove by value, peek, membership
//! - [`Stack`] - LIFO view over the same chain, O(1) push/pop
//!
//! # Quick Start
//!
//! ```
//! use linkstack::{LinkedList, Stack};
//!
//! let mut list = LinkedList::new(Some(8));
//! list.append("a").unwrap();
//! list.append("b").unwrap();
//! assert_eq!(list.peek(), Ok(&"b"));
//! assert_eq!(list.remove(&"a"), Ok("a"));
//!
//! let mut stack = Stack::new(None);
//! stack.push(1).unwrap();
//! stack.push(2).unwrap();
//! assert_eq!(stack.pop(), Ok(2));
//! ```
//!
//! # Strict Errors
//!
//! Misuse is reported, never papered over with a sentinel:
//!
//! | Operation | Failure | Error |
//! |-----------|---------|-------|
//! | `append` / `push` | at limit | [`CapacityExceeded`] (returns the value) |
//! | `peek` / `pop` | empty | [`Underflow`] |
//! | `remove` | empty / no match | [`RemoveError`] |
//! | `contain` | empty | [`EmptyCollection`] |
//!
//! A failed operation leaves the collection unchanged.
//!
//! # Logging
//!
//! Rejected operations are reported at `debug` level and chain teardown at
//! `trace` level through the [`log`] facade. No logger is installed by this
//! crate.

#![warn(missing_docs)]

pub mod chain;
pub mod error;
pub mod limit;
pub mod list;
pub mod node;
pub mod stack;

pub use chain::Chain;
pub use error::{CapacityExceeded, EmptyCollection, NotFound, RemoveError, Underflow};
pub use limit::Limit;
pub use list::{IntoIter, Iter, LinkedList};
pub use node::{Link, Node};
pub use stack::Stack;
