//! Alternating traversal from both ends toward the middle.

use std::cmp::Ordering;

use super::{ContainerIterator, Cursor, IteratorKind, impl_std_iterator};
use crate::container::MagicalContainer;
use crate::error::ContainerError;

/// Visits the first element, then the last, then the second, then the
/// second-to-last, and so on until the two ends meet.
///
/// The logical position counts how many elements have been consumed from the
/// side currently being read, and the side flag says which end the next read
/// comes from:
///
/// ```text
/// elements = [1, 2, 3, 4, 5]
///
/// (0, front) -> 1
/// (0, back)  -> 5
/// (1, front) -> 2
/// (1, back)  -> 4
/// (2, front) -> 3
/// (5, back)  -> end
/// ```
///
/// Which side performs the final read depends on the parity of `size()`:
/// with an odd size the middle element is read from the front, with an even
/// size the last read comes from the back. Either way the final advance lands
/// on `end()`, which is `(size(), back)`.
///
/// # Examples
///
/// ```rust
/// use magical_container::MagicalContainer;
///
/// let even: MagicalContainer = [1, 2, 3, 4].into_iter().collect();
/// assert_eq!(even.side_cross().collect::<Vec<_>>(), vec![1, 4, 2, 3]);
///
/// let odd: MagicalContainer = [1, 2, 3, 4, 5].into_iter().collect();
/// assert_eq!(odd.side_cross().collect::<Vec<_>>(), vec![1, 5, 2, 4, 3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SideCrossIterator<'a> {
    cursor: Cursor<'a>,
}

impl<'a> SideCrossIterator<'a> {
    /// Creates an iterator over `container` positioned at `begin()`.
    ///
    /// On an empty container this is the same position as `end()`.
    #[inline]
    #[must_use]
    pub fn new(container: &'a MagicalContainer) -> Self {
        if container.is_empty() {
            Self::terminal(container)
        } else {
            Self {
                cursor: Cursor::new(container),
            }
        }
    }

    fn terminal(container: &'a MagicalContainer) -> Self {
        Self {
            cursor: Cursor::at(container, container.size(), false),
        }
    }

    /// Returns how many reads precede the state `(position, front_side)`.
    const fn consumed(position: usize, front_side: bool) -> usize {
        2 * position + if front_side { 0 } else { 1 }
    }
}

impl<'a> ContainerIterator<'a> for SideCrossIterator<'a> {
    #[inline]
    fn kind(&self) -> IteratorKind {
        IteratorKind::SideCross
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
        let elements = self.cursor.container.elements();
        let position = self.cursor.position;
        if position >= elements.len() {
            return Err(ContainerError::EndOfRange {
                kind: IteratorKind::SideCross,
            });
        }
        let index = if self.cursor.front_side {
            position
        } else {
            elements.len() - 1 - position
        };
        Ok(elements[index])
    }

    fn advance(&mut self) -> Result<(), ContainerError> {
        let size = self.cursor.container.size();
        if self.cursor.position >= size {
            return Err(ContainerError::EndOfRange {
                kind: IteratorKind::SideCross,
            });
        }

        // A back-side read completes one front/back pair.
        let (position, front_side) = if self.cursor.front_side {
            (self.cursor.position, false)
        } else {
            (self.cursor.position + 1, true)
        };

        // Stop once the next read would meet or cross the other end. This also
        // covers states left by `assign_from`, which copies only the position.
        if Self::consumed(position, front_side) >= size {
            *self = Self::terminal(self.cursor.container);
        } else {
            self.cursor.position = position;
            self.cursor.front_side = front_side;
        }
        Ok(())
    }

    fn begin(&self) -> Self {
        Self::new(self.cursor.container)
    }

    fn end(&self) -> Self {
        Self::terminal(self.cursor.container)
    }

    fn assign_from(&mut self, other: &Self) -> Result<(), ContainerError> {
        self.cursor.assign_from(&other.cursor, IteratorKind::SideCross)
    }

    fn remaining(&self) -> usize {
        let size = self.cursor.container.size();
        if self.cursor.position >= size {
            return 0;
        }
        // A state at or past the meet point still reads once before `end()`.
        let consumed = Self::consumed(self.cursor.position, self.cursor.front_side);
        size.saturating_sub(consumed).max(1)
    }
}

impl PartialEq for SideCrossIterator<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor.same_position(&other.cursor)
    }
}

impl Eq for SideCrossIterator<'_> {}

impl PartialOrd for SideCrossIterator<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for SideCrossIterator<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cursor.ordering(&other.cursor)
    }
}

impl std::hash::Hash for SideCrossIterator<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.cursor.hash_position(state);
    }
}

impl_std_iterator!(SideCrossIterator);
