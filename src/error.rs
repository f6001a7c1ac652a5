//! Error types for the container and its iterators.
//!
//! Every fallible operation in this crate returns [`ContainerError`]. Errors are
//! never retried or recovered internally; they are surfaced to the caller as-is.

use crate::iterator::IteratorKind;

/// Represents errors that can occur when mutating a container or moving an
/// iterator over it.
///
/// # Examples
///
/// ```rust
/// use magical_container::{ContainerError, MagicalContainer};
///
/// let mut container = MagicalContainer::new();
/// container.add_element(3);
///
/// let error = container.remove_element(4).unwrap_err();
/// assert_eq!(error, ContainerError::NotFound { value: 4 });
/// assert_eq!(format!("{error}"), "element 4 not found in container");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerError {
    /// The value to remove is not present in the container.
    NotFound {
        /// The value that was looked up.
        value: i32,
    },
    /// The iterator is already at its terminal position.
    EndOfRange {
        /// The variant of the iterator that was moved or read.
        kind: IteratorKind,
    },
    /// The two iterators cannot be compared or assigned to each other.
    ///
    /// Raised when the variants differ, or when an assignment crosses
    /// container instances (in which case `left == right`).
    IncompatibleIterator {
        /// The variant of the receiving iterator.
        left: IteratorKind,
        /// The variant of the other iterator.
        right: IteratorKind,
    },
}

impl std::fmt::Display for ContainerError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { value } => write!(formatter, "element {value} not found in container"),
            Self::EndOfRange { kind } => write!(formatter, "{kind} iterator is already at the end"),
            Self::IncompatibleIterator { left, right } => {
                write!(formatter, "incompatible iterators: {left} and {right}")
            }
        }
    }
}

impl std::error::Error for ContainerError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ContainerError::NotFound { value: -7 }, "element -7 not found in container")]
    #[case(
        ContainerError::EndOfRange { kind: IteratorKind::SideCross },
        "side-cross iterator is already at the end"
    )]
    #[case(
        ContainerError::IncompatibleIterator {
            left: IteratorKind::Ascending,
            right: IteratorKind::Prime,
        },
        "incompatible iterators: ascending and prime"
    )]
    fn test_container_error_display(#[case] error: ContainerError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_container_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ContainerError::NotFound { value: 1 });
    }

    #[rstest]
    fn test_container_error_equality() {
        assert_eq!(
            ContainerError::EndOfRange { kind: IteratorKind::Prime },
            ContainerError::EndOfRange { kind: IteratorKind::Prime }
        );
        assert_ne!(
            ContainerError::EndOfRange { kind: IteratorKind::Prime },
            ContainerError::EndOfRange { kind: IteratorKind::Ascending }
        );
    }
}
