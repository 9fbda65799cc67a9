//! Error types for chain operations.

use core::fmt;

/// The collection is at its limit and cannot accept another value.
///
/// Carries the rejected value so the caller keeps ownership of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded<T> {
    /// The value that could not be inserted.
    pub value: T,
    /// The limit that was reached.
    pub limit: usize,
}

impl<T> CapacityExceeded<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Display for CapacityExceeded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collection is full (limit {})", self.limit)
    }
}

impl<T: fmt::Debug> std::error::Error for CapacityExceeded<T> {}

/// Read or removal from the head of an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Underflow;

impl fmt::Display for Underflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("collection is empty")
    }
}

impl std::error::Error for Underflow {}

/// Removal of a value that is not in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value not found")
    }
}

impl std::error::Error for NotFound {}

/// Membership test on an empty collection.
///
/// `contain` reports this instead of `Ok(false)`. An empty collection is
/// treated as a misuse in the same way as `peek` on an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl fmt::Display for EmptyCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot search an empty collection")
    }
}

impl std::error::Error for EmptyCollection {}

/// Failure of a search-and-remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveError {
    /// The collection was empty.
    Underflow,
    /// The chain was scanned without a match.
    NotFound,
}

impl From<Underflow> for RemoveError {
    fn from(_: Underflow) -> Self {
        RemoveError::Underflow
    }
}

impl From<NotFound> for RemoveError {
    fn from(_: NotFound) -> Self {
        RemoveError::NotFound
    }
}

impl fmt::Display for RemoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveError::Underflow => fmt::Display::fmt(&Underflow, f),
            RemoveError::NotFound => fmt::Display::fmt(&NotFound, f),
        }
    }
}

impl std::error::Error for RemoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_exceeded_returns_value() {
        let err = CapacityExceeded {
            value: String::from("late"),
            limit: 3,
        };
        assert_eq!(err.to_string(), "collection is full (limit 3)");
        assert_eq!(err.into_inner(), "late");
    }

    #[test]
    fn remove_error_from_parts() {
        assert_eq!(RemoveError::from(Underflow), RemoveError::Underflow);
        assert_eq!(RemoveError::from(NotFound), RemoveError::NotFound);
    }

    #[test]
    fn display_messages() {
        assert_eq!(Underflow.to_string(), "collection is empty");
        assert_eq!(NotFound.to_string(), "value not found");
        assert_eq!(
            EmptyCollection.to_string(),
            "cannot search an empty collection"
        );
        assert_eq!(RemoveError::NotFound.to_string(), "value not found");
    }

    #[test]
    fn errors_box_as_dyn_error() {
        let errs: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(Underflow),
            Box::new(RemoveError::Underflow),
            Box::new(EmptyCollection),
            Box::new(CapacityExceeded { value: 1u8, limit: 1 }),
        ];
        assert_eq!(errs.len(), 4);
    }
}
