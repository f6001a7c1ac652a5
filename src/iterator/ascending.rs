//! Ascending traversal over every element.

use std::cmp::Ordering;

use super::{ContainerIterator, Cursor, IteratorKind, impl_std_iterator};
use crate::container::MagicalContainer;
use crate::error::ContainerError;

/// Visits every element from smallest to largest.
///
/// The logical position is a direct index into
/// [`MagicalContainer::elements`]. `begin()` is position 0 and `end()` is
/// position `size()`.
///
/// # Examples
///
/// ```rust
/// use magical_container::{ContainerIterator, MagicalContainer};
///
/// let container: MagicalContainer = [5, 1, 3].into_iter().collect();
/// let mut iterator = container.ascending();
///
/// assert_eq!(iterator.current(), Ok(1));
/// iterator.advance().unwrap();
/// assert_eq!(iterator.current(), Ok(3));
///
/// let values: Vec<i32> = container.ascending().collect();
/// assert_eq!(values, vec![1, 3, 5]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AscendingIterator<'a> {
    cursor: Cursor<'a>,
}

impl<'a> AscendingIterator<'a> {
    /// Creates an iterator over `container` positioned at `begin()`.
    #[inline]
    #[must_use]
    pub const fn new(container: &'a MagicalContainer) -> Self {
        Self {
            cursor: Cursor::new(container),
        }
    }
}

impl<'a> ContainerIterator<'a> for AscendingIterator<'a> {
    #[inline]
    fn kind(&self) -> IteratorKind {
        IteratorKind::Ascending
    }

    #[inline]
    fn container(&self) -> &'a MagicalContainer {
        self.cursor.container
    }

    #[inline]
    fn index(&self) -> usize {
        self.cursor.position
    }

    #[inline]
    fn is_front_side(&self) -> bool {
        self.cursor.front_side
    }

    fn current(&self) -> Result<i32, ContainerError> {
        self.cursor
            .container
            .elements()
            .get(self.cursor.position)
            .copied()
            .ok_or(ContainerError::EndOfRange {
                kind: IteratorKind::Ascending,
            })
    }

    fn advance(&mut self) -> Result<(), ContainerError> {
        let end = self.cursor.container.size();
        self.cursor.step(end, IteratorKind::Ascending)
    }

    fn begin(&self) -> Self {
        Self::new(self.cursor.container)
    }

    fn end(&self) -> Self {
        let container = self.cursor.container;
        Self {
            cursor: Cursor::at(container, container.size(), true),
        }
    }

    fn assign_from(&mut self, other: &Self) -> Result<(), ContainerError> {
        self.cursor.assign_from(&other.cursor, IteratorKind::Ascending)
    }

    fn remaining(&self) -> usize {
        self.cursor.container.size().saturating_sub(self.cursor.position)
    }
}

impl PartialEq for AscendingIterator<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor.same_position(&other.cursor)
    }
}

impl Eq for AscendingIterator<'_> {}

impl PartialOrd for AscendingIterator<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for AscendingIterator<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cursor.ordering(&other.cursor)
    }
}

impl std::hash::Hash for AscendingIterator<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.cursor.hash_position(state);
    }
}

impl_std_iterator!(AscendingIterator);
