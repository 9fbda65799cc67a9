//! Capacity limits.
//!
//! Collections in this crate are either unbounded or capped at a fixed number
//! of elements chosen at construction. There is no other configuration.

use core::fmt;
use core::num::NonZeroUsize;

/// Maximum number of elements a collection may hold.
///
/// Built from an `Option<usize>`: `None` means unbounded. A limit of zero is
/// also treated as unbounded, since a collection that can never accept a
/// value has no use.
///
/// ```
/// use linkstack::Limit;
///
/// assert_eq!(Limit::from(None), Limit::Unbounded);
/// assert_eq!(Limit::from(Some(0)), Limit::Unbounded);
/// assert_eq!(Limit::from(Some(4)).get(), Some(4));
///
/// assert!(Limit::bounded(4).admits(3));
/// assert!(!Limit::bounded(4).admits(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Limit {
    /// No cap on the number of elements.
    #[default]
    Unbounded,
    /// At most this many elements.
    Bounded(NonZeroUsize),
}

impl Limit {
    /// Creates a bounded limit, or [`Limit::Unbounded`] if `max` is zero.
    #[inline]
    pub const fn bounded(max: usize) -> Self {
        match NonZeroUsize::new(max) {
            Some(max) => Limit::Bounded(max),
            None => Limit::Unbounded,
        }
    }

    /// Returns `true` if a collection currently holding `len` elements can
    /// accept one more.
    #[inline]
    pub const fn admits(self, len: usize) -> bool {
        match self {
            Limit::Unbounded => true,
            Limit::Bounded(max) => len < max.get(),
        }
    }

    /// Returns the cap, or `None` if unbounded.
    #[inline]
    pub const fn get(self) -> Option<usize> {
        match self {
            Limit::Unbounded => None,
            Limit::Bounded(max) => Some(max.get()),
        }
    }

    /// Returns `true` if there is no cap.
    #[inline]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Limit::Unbounded)
    }
}

impl From<Option<usize>> for Limit {
    fn from(limit: Option<usize>) -> Self {
        match limit {
            Some(max) => Limit::bounded(max),
            None => Limit::Unbounded,
        }
    }
}

impl From<usize> for Limit {
    fn from(max: usize) -> Self {
        Limit::bounded(max)
    }
}

impl From<NonZeroUsize> for Limit {
    fn from(max: NonZeroUsize) -> Self {
        Limit::Bounded(max)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Unbounded => f.write_str("unbounded"),
            Limit::Bounded(max) => write!(f, "{max}"),
        }
    }
}
