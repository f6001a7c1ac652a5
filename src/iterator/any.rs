//! A closed sum over the three iterator variants.

use std::cmp::Ordering;

use super::{
    AscendingIterator, ContainerIterator, IteratorKind, PrimeIterator, SideCrossIterator,
    impl_std_iterator,
};
use crate::container::MagicalContainer;
use crate::error::ContainerError;

/// Any of the three iterator variants.
///
/// Comparison and assignment between two `AnyIterator`s only succeed when
/// both hold the same variant, so it does not implement `PartialEq`. Use
/// [`try_eq`](Self::try_eq) and [`try_cmp`](Self::try_cmp).
///
/// # Examples
///
/// ```rust
/// use magical_container::{AnyIterator, ContainerError, IteratorKind, MagicalContainer};
///
/// let container: MagicalContainer = (1..=7).collect();
/// let ascending = AnyIterator::from(container.ascending());
/// let prime = AnyIterator::from(container.prime());
///
/// assert_eq!(
///     ascending.try_eq(&prime),
///     Err(ContainerError::IncompatibleIterator {
///         left: IteratorKind::Ascending,
///         right: IteratorKind::Prime,
///     })
/// );
/// assert_eq!(ascending.try_eq(&ascending), Ok(true));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum AnyIterator<'a> {
    /// An [`AscendingIterator`].
    Ascending(AscendingIterator<'a>),
    /// A [`SideCrossIterator`].
    SideCross(SideCrossIterator<'a>),
    /// A [`PrimeIterator`].
    Prime(PrimeIterator<'a>),
}

impl AnyIterator<'_> {
    const fn incompatible(&self, other: &Self) -> ContainerError {
        ContainerError::IncompatibleIterator {
            left: self.variant(),
            right: other.variant(),
        }
    }

    const fn variant(&self) -> IteratorKind {
        match self {
            Self::Ascending(_) => IteratorKind::Ascending,
            Self::SideCross(_) => IteratorKind::SideCross,
            Self::Prime(_) => IteratorKind::Prime,
        }
    }

    /// Returns whether both iterators sit at the same position and side.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IncompatibleIterator`] if the variants differ,
    /// even when their numeric positions happen to match.
    pub fn try_eq(&self, other: &Self) -> Result<bool, ContainerError> {
        match (self, other) {
            (Self::Ascending(left), Self::Ascending(right)) => Ok(left == right),
            (Self::SideCross(left), Self::SideCross(right)) => Ok(left == right),
            (Self::Prime(left), Self::Prime(right)) => Ok(left == right),
            _ => Err(self.incompatible(other)),
        }
    }

    /// Orders two iterators of the same variant.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IncompatibleIterator`] if the variants differ.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, ContainerError> {
        match (self, other) {
            (Self::Ascending(left), Self::Ascending(right)) => Ok(Ord::cmp(left, right)),
            (Self::SideCross(left), Self::SideCross(right)) => Ok(Ord::cmp(left, right)),
            (Self::Prime(left), Self::Prime(right)) => Ok(Ord::cmp(left, right)),
            _ => Err(self.incompatible(other)),
        }
    }
}

impl<'a> ContainerIterator<'a> for AnyIterator<'a> {
    fn kind(&self) -> IteratorKind {
        self.variant()
    }

    fn container(&self) -> &'a MagicalContainer {
        match self {
            Self::Ascending(iterator) => iterator.container(),
            Self::SideCross(iterator) => iterator.container(),
            Self::Prime(iterator) => iterator.container(),
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Ascending(iterator) => iterator.index(),
            Self::SideCross(iterator) => iterator.index(),
            Self::Prime(iterator) => iterator.index(),
        }
    }

    fn is_front_side(&self) -> bool {
        match self {
            Self::Ascending(iterator) => iterator.is_front_side(),
            Self::SideCross(iterator) => iterator.is_front_side(),
            Self::Prime(iterator) => iterator.is_front_side(),
        }
    }

    fn current(&self) -> Result<i32, ContainerError> {
        match self {
            Self::Ascending(iterator) => iterator.current(),
            Self::SideCross(iterator) => iterator.current(),
            Self::Prime(iterator) => iterator.current(),
        }
    }

    fn advance(&mut self) -> Result<(), ContainerError> {
        match self {
            Self::Ascending(iterator) => iterator.advance(),
            Self::SideCross(iterator) => iterator.advance(),
            Self::Prime(iterator) => iterator.advance(),
        }
    }

    fn begin(&self) -> Self {
        match self {
            Self::Ascending(iterator) => Self::Ascending(iterator.begin()),
            Self::SideCross(iterator) => Self::SideCross(iterator.begin()),
            Self::Prime(iterator) => Self::Prime(iterator.begin()),
        }
    }

    fn end(&self) -> Self {
        match self {
            Self::Ascending(iterator) => Self::Ascending(iterator.end()),
            Self::SideCross(iterator) => Self::SideCross(iterator.end()),
            Self::Prime(iterator) => Self::Prime(iterator.end()),
        }
    }

    fn assign_from(&mut self, other: &Self) -> Result<(), ContainerError> {
        let error = self.incompatible(other);
        match (self, other) {
            (Self::Ascending(left), Self::Ascending(right)) => left.assign_from(right),
            (Self::SideCross(left), Self::SideCross(right)) => left.assign_from(right),
            (Self::Prime(left), Self::Prime(right)) => left.assign_from(right),
            _ => Err(error),
        }
    }

    fn remaining(&self) -> usize {
        match self {
            Self::Ascending(iterator) => iterator.remaining(),
            Self::SideCross(iterator) => iterator.remaining(),
            Self::Prime(iterator) => iterator.remaining(),
        }
    }
}

impl<'a> From<AscendingIterator<'a>> for AnyIterator<'a> {
    fn from(iterator: AscendingIterator<'a>) -> Self {
        Self::Ascending(iterator)
    }
}

impl<'a> From<SideCrossIterator<'a>> for AnyIterator<'a> {
    fn from(iterator: SideCrossIterator<'a>) -> Self {
        Self::SideCross(iterator)
    }
}

impl<'a> From<PrimeIterator<'a>> for AnyIterator<'a> {
    fn from(iterator: PrimeIterator<'a>) -> Self {
        Self::Prime(iterator)
    }
}

impl_std_iterator!(AnyIterator);
