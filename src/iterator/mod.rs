//! Iterators over a [`MagicalContainer`].
//!
//! Three traversal orders are provided over the same container:
//!
//! - [`AscendingIterator`]: every element, smallest first
//! - [`SideCrossIterator`]: alternates between the smallest and largest
//!   remaining element until the two ends meet in the middle
//! - [`PrimeIterator`]: prime-valued elements only, smallest first
//!
//! All three implement [`ContainerIterator`], a cursor contract built from
//! `begin`/`end`/`advance`/`current`, and [`std::iter::Iterator`], which yields
//! from the current position up to `end`. [`AnyIterator`] holds any of the
//! three and reports [`ContainerError::IncompatibleIterator`] when two
//! different variants are compared or assigned.
//!
//! Iterators borrow the container, so it cannot be mutated while they are
//! alive.
//!
//! # Examples
//!
//! ```rust
//! use magical_container::{ContainerIterator, MagicalContainer, traverse};
//!
//! let container: MagicalContainer = [1, 2, 3, 4].into_iter().collect();
//!
//! assert_eq!(traverse(&container.ascending()).unwrap(), vec![1, 2, 3, 4]);
//! assert_eq!(traverse(&container.side_cross()).unwrap(), vec![1, 4, 2, 3]);
//! assert_eq!(traverse(&container.prime()).unwrap(), vec![2, 3]);
//!
//! // Cursor-style traversal
//! let mut cursor = container.side_cross().begin();
//! let end = cursor.end();
//! let mut values = Vec::new();
//! while cursor != end {
//!     values.push(cursor.current().unwrap());
//!     cursor.advance().unwrap();
//! }
//! assert_eq!(values, vec![1, 4, 2, 3]);
//! ```
//!
//! [`MagicalContainer`]: crate::MagicalContainer

mod any;
mod ascending;
mod cursor;
mod prime;
mod side_cross;

pub use any::AnyIterator;
pub use ascending::AscendingIterator;
pub use prime::PrimeIterator;
pub use side_cross::SideCrossIterator;

pub(crate) use cursor::Cursor;

use crate::container::MagicalContainer;
use crate::error::ContainerError;

/// Identifies an iterator variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IteratorKind {
    /// [`AscendingIterator`]
    Ascending,
    /// [`SideCrossIterator`]
    SideCross,
    /// [`PrimeIterator`]
    Prime,
}

impl std::fmt::Display for IteratorKind {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ascending => "ascending",
            Self::SideCross => "side-cross",
            Self::Prime => "prime",
        };
        formatter.write_str(name)
    }
}

/// The cursor contract shared by every iterator variant.
///
/// A cursor is a logical position inside one of the container's views. The
/// position ranges from `begin()` to `end()`, the terminal one-past-last
/// position. Reading or advancing at `end()` fails with
/// [`ContainerError::EndOfRange`].
///
/// Methods are named so they do not collide with [`Iterator`]'s; in particular
/// the logical position is exposed as [`index`](Self::index).
pub trait ContainerIterator<'a>: Sized {
    /// Returns the variant tag of this iterator.
    fn kind(&self) -> IteratorKind;

    /// Returns the container this iterator is bound to.
    fn container(&self) -> &'a MagicalContainer;

    /// Returns the logical position.
    fn index(&self) -> usize;

    /// Returns `true` if the next read comes from the front of the view.
    ///
    /// Only the side-cross iterator ever reports `false` before reaching
    /// `end()`.
    fn is_front_side(&self) -> bool;

    /// Reads the value at the current position.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EndOfRange`] at the terminal position.
    fn current(&self) -> Result<i32, ContainerError>;

    /// Moves to the next logical position.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::EndOfRange`] if already at `end()`. The
    /// iterator is left unchanged.
    fn advance(&mut self) -> Result<(), ContainerError>;

    /// Returns a cursor at the first position of this traversal order.
    ///
    /// # Note
    ///
    /// When the traversal has nothing to visit, `begin()` equals `end()`. For
    /// [`SideCrossIterator`] over an empty container this means `begin()` is
    /// `(0, back)` rather than `(0, front)`.
    #[must_use]
    fn begin(&self) -> Self;

    /// Returns a cursor at the terminal position of this traversal order.
    #[must_use]
    fn end(&self) -> Self;

    /// Copies the position of `other` into `self`.
    ///
    /// Only the position is copied; the side flag is left as it is.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IncompatibleIterator`] if `other` is bound to
    /// a different container instance (or, for [`AnyIterator`], is a different
    /// variant).
    fn assign_from(&mut self, other: &Self) -> Result<(), ContainerError>;

    /// Returns the number of values left before `end()`.
    fn remaining(&self) -> usize;

    /// Returns `true` if this cursor sits at `end()`.
    fn is_end(&self) -> bool {
        let end = self.end();
        self.index() == end.index() && self.is_front_side() == end.is_front_side()
    }
}

/// Runs a full pass from `begin()` to `end()` and collects the values read.
///
/// Works uniformly over every variant, including [`AnyIterator`]. The position
/// of `iterator` itself is ignored; traversal always starts at `begin()`.
///
/// # Errors
///
/// Propagates any [`ContainerError`] raised while reading or advancing. For a
/// container that is not mutated during the pass this never happens.
///
/// # Examples
///
/// ```rust
/// use magical_container::{AnyIterator, MagicalContainer, traverse};
///
/// let container: MagicalContainer = [1, 2, 3, 4, 5].into_iter().collect();
/// let iterators = [
///     AnyIterator::from(container.ascending()),
///     AnyIterator::from(container.side_cross()),
///     AnyIterator::from(container.prime()),
/// ];
///
/// let passes: Vec<Vec<i32>> = iterators
///     .iter()
///     .map(|iterator| traverse(iterator).unwrap())
///     .collect();
/// assert_eq!(passes[0], vec![1, 2, 3, 4, 5]);
/// assert_eq!(passes[1], vec![1, 5, 2, 4, 3]);
/// assert_eq!(passes[2], vec![2, 3, 5]);
/// ```
pub fn traverse<'a, I: ContainerIterator<'a>>(iterator: &I) -> Result<Vec<i32>, ContainerError> {
    let mut cursor = iterator.begin();
    let mut values = Vec::with_capacity(cursor.remaining());
    while !cursor.is_end() {
        values.push(cursor.current()?);
        cursor.advance()?;
    }
    Ok(values)
}

/// Implements the std iterator traits for a [`ContainerIterator`] in terms of
/// `current` and `advance`.
macro_rules! impl_std_iterator {
    ($iterator:ident) => {
        impl Iterator for $iterator<'_> {
            type Item = i32;

            fn next(&mut self) -> Option<Self::Item> {
                let value = $crate::ContainerIterator::current(self).ok()?;
                $crate::ContainerIterator::advance(self).ok()?;
                Some(value)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let remaining = $crate::ContainerIterator::remaining(self);
                (remaining, Some(remaining))
            }
        }

        impl ExactSizeIterator for $iterator<'_> {}

        impl std::iter::FusedIterator for $iterator<'_> {}
    };
}

pub(crate) use impl_std_iterator;

static_assertions::assert_impl_all!(AscendingIterator<'static>: Copy, Send, Sync, Ord, std::hash::Hash);
static_assertions::assert_impl_all!(SideCrossIterator<'static>: Copy, Send, Sync, Ord, std::hash::Hash);
static_assertions::assert_impl_all!(PrimeIterator<'static>: Copy, Send, Sync, Ord, std::hash::Hash);
static_assertions::assert_impl_all!(AnyIterator<'static>: Copy, Send, Sync);
// Cross-variant comparison must go through the fallible `try_eq`/`try_cmp`.
static_assertions::assert_not_impl_any!(AnyIterator<'static>: PartialEq, PartialOrd);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(IteratorKind::Ascending, "ascending")]
    #[case(IteratorKind::SideCross, "side-cross")]
    #[case(IteratorKind::Prime, "prime")]
    fn test_iterator_kind_display(#[case] kind: IteratorKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[rstest]
    fn test_traverse_ignores_current_position() {
        let container: MagicalContainer = [3, 1, 2].into_iter().collect();
        let mut iterator = container.ascending();
        iterator.advance().unwrap();
        iterator.advance().unwrap();

        assert_eq!(traverse(&iterator).unwrap(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_traverse_empty_container() {
        let container = MagicalContainer::new();
        assert!(traverse(&container.ascending()).unwrap().is_empty());
        assert!(traverse(&container.side_cross()).unwrap().is_empty());
        assert!(traverse(&container.prime()).unwrap().is_empty());
    }
}
