//! Ascending traversal restricted to prime-valued elements.

use std::cmp::Ordering;

use super::{ContainerIterator, Cursor, IteratorKind, impl_std_iterator};
use crate::container::MagicalContainer;
use crate::error::ContainerError;

/// Visits the prime-valued elements from smallest to largest.
///
/// The logical position indexes [`MagicalContainer::primes`], so
/// `end()` is position `prime_count()` rather than `size()`.
///
/// # Examples
///
/// ```rust
/// use magical_container::MagicalContainer;
///
/// let container: MagicalContainer = (1..=7).collect();
/// let primes: Vec<i32> = container.prime().collect();
/// assert_eq!(primes, vec![2, 3, 5, 7]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrimeIterator<'a> {
    cursor: Cursor<'a>,
}

impl<'a> PrimeIterator<'a> {
    /// Creates an iterator over `container` positioned at `begin()`.
    #[inline]
    #[must_use]
    pub const fn new(container: &'a MagicalContainer) -> Self {
        Self {
            cursor: Cursor::new(container),
        }
    }
}

impl<'a> ContainerIterator<'a> for PrimeIterator<'a> {
    #[inline]
    fn kind(&self) -> IteratorKind {
        IteratorKind::Prime
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
            .primes()
            .get(self.cursor.position)
            .copied()
            .ok_or(ContainerError::EndOfRange {
                kind: IteratorKind::Prime,
            })
    }

    fn advance(&mut self) -> Result<(), ContainerError> {
        let end = self.cursor.container.prime_count();
        self.cursor.step(end, IteratorKind::Prime)
    }

    fn begin(&self) -> Self {
        Self::new(self.cursor.container)
    }

    fn end(&self) -> Self {
        let container = self.cursor.container;
        Self {
            cursor: Cursor::at(container, container.prime_count(), true),
        }
    }

    fn assign_from(&mut self, other: &Self) -> Result<(), ContainerError> {
        self.cursor.assign_from(&other.cursor, IteratorKind::Prime)
    }

    fn remaining(&self) -> usize {
        self.cursor
            .container
            .prime_count()
            .saturating_sub(self.cursor.position)
    }
}

impl PartialEq for PrimeIterator<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor.same_position(&other.cursor)
    }
}

impl Eq for PrimeIterator<'_> {}

impl PartialOrd for PrimeIterator<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for PrimeIterator<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cursor.ordering(&other.cursor)
    }
}

impl std::hash::Hash for PrimeIterator<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.cursor.hash_position(state);
    }
}

impl_std_iterator!(PrimeIterator);
