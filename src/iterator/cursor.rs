//! State shared by every iterator variant.

use std::cmp::Ordering;

use super::IteratorKind;
use crate::container::MagicalContainer;
use crate::error::ContainerError;

/// A position inside one of the container's views.
///
/// `front_side` only matters to the side-cross iterator, but every variant
/// carries it so equality and ordering are defined the same way for all.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    pub(crate) container: &'a MagicalContainer,
    pub(crate) position: usize,
    pub(crate) front_side: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(container: &'a MagicalContainer) -> Self {
        Self::at(container, 0, true)
    }

    pub(crate) const fn at(container: &'a MagicalContainer, position: usize, front_side: bool) -> Self {
        Self {
            container,
            position,
            front_side,
        }
    }

    pub(crate) fn same_container(&self, other: &Self) -> bool {
        std::ptr::eq(self.container, other.container)
    }

    pub(crate) const fn same_position(&self, other: &Self) -> bool {
        self.position == other.position && self.front_side == other.front_side
    }

    /// Front side sorts before back side at equal positions.
    pub(crate) fn ordering(&self, other: &Self) -> Ordering {
        self.position
            .cmp(&other.position)
            .then_with(|| other.front_side.cmp(&self.front_side))
    }

    /// Copies only the position from `other`.
    pub(crate) fn assign_from(&mut self, other: &Self, kind: IteratorKind) -> Result<(), ContainerError> {
        if !self.same_container(other) {
            return Err(ContainerError::IncompatibleIterator {
                left: kind,
                right: kind,
            });
        }
        self.position = other.position;
        Ok(())
    }

    /// Moves one step forward in a view of length `end`.
    pub(crate) const fn step(&mut self, end: usize, kind: IteratorKind) -> Result<(), ContainerError> {
        if self.position >= end {
            return Err(ContainerError::EndOfRange { kind });
        }
        self.position += 1;
        Ok(())
    }

    pub(crate) fn hash_position<H: std::hash::Hasher>(&self, state: &mut H) {
        use std::hash::Hash;
        self.position.hash(state);
        self.front_side.hash(state);
    }
}
