//! The sorted integer container.
//!
//! [`MagicalContainer`] keeps two views over the same data:
//!
//! - `elements`: every stored value, strictly increasing
//! - `primes`: the prime-valued subset of `elements`, strictly increasing
//!
//! Both views are updated together by [`MagicalContainer::add_element`] and
//! [`MagicalContainer::remove_element`], so iterators can index into either one
//! without further bookkeeping.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity                          |
//! |------------------|-------------------------------------|
//! | `add_element`    | O(log n) search + O(n) shift        |
//! | `remove_element` | O(log n) search + O(n) shift        |
//! | `contains`       | O(log n)                            |
//! | `size`           | O(1)                                |
//!
//! # Examples
//!
//! ```rust
//! use magical_container::MagicalContainer;
//!
//! let mut container = MagicalContainer::new();
//! for value in [7, 2, 9, 4, 3] {
//!     container.add_element(value);
//! }
//! container.remove_element(4).unwrap();
//!
//! assert_eq!(container.elements(), &[2, 3, 7, 9]);
//! assert_eq!(container.primes(), &[2, 3, 7]);
//! ```

mod prime;

pub use prime::is_prime;

use crate::error::ContainerError;
use crate::iterator::{AscendingIterator, PrimeIterator, SideCrossIterator};

/// A set of integers with ascending, side-cross and prime-only traversals.
///
/// Values are unique and kept sorted. Iterators borrow the container, so it
/// cannot be mutated while any iterator over it is alive.
///
/// # Examples
///
/// ```rust
/// use magical_container::MagicalContainer;
///
/// let container: MagicalContainer = [1, 2, 3, 4, 5].into_iter().collect();
///
/// let cross: Vec<i32> = container.side_cross().collect();
/// assert_eq!(cross, vec![1, 5, 2, 4, 3]);
///
/// let primes: Vec<i32> = container.prime().collect();
/// assert_eq!(primes, vec![2, 3, 5]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MagicalContainer {
    elements: Vec<i32>,
    primes: Vec<i32>,
}

impl MagicalContainer {
    /// Creates a new empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magical_container::MagicalContainer;
    ///
    /// let container = MagicalContainer::new();
    /// assert_eq!(container.size(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            primes: Vec::new(),
        }
    }

    /// Returns `true` if `number` is prime.
    ///
    /// See [`is_prime`] for the definition used.
    #[inline]
    #[must_use]
    pub const fn is_prime(number: i32) -> bool {
        is_prime(number)
    }

    /// Inserts `value`, keeping both views sorted.
    ///
    /// Inserting a value that is already present does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magical_container::MagicalContainer;
    ///
    /// let mut container = MagicalContainer::new();
    /// container.add_element(5);
    /// container.add_element(1);
    /// container.add_element(5);
    ///
    /// assert_eq!(container.elements(), &[1, 5]);
    /// assert_eq!(container.primes(), &[5]);
    /// ```
    pub fn add_element(&mut self, value: i32) {
        let Err(position) = self.elements.binary_search(&value) else {
            log::trace!("add_element({value}): already present");
            return;
        };
        self.elements.insert(position, value);

        if is_prime(value) {
            // Primes are a subset of elements, so a fresh element is never already here.
            let prime_position = self.primes.partition_point(|&prime| prime < value);
            self.primes.insert(prime_position, value);
            log::trace!("add_element({value}): inserted at {position}, prime at {prime_position}");
        } else {
            log::trace!("add_element({value}): inserted at {position}");
        }
    }

    /// Removes `value` from both views.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::NotFound`] if `value` is not present. The
    /// container is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magical_container::{ContainerError, MagicalContainer};
    ///
    /// let mut container: MagicalContainer = [2, 3, 4].into_iter().collect();
    /// container.remove_element(3).unwrap();
    /// assert_eq!(container.elements(), &[2, 4]);
    /// assert_eq!(container.primes(), &[2]);
    ///
    /// assert_eq!(
    ///     container.remove_element(3),
    ///     Err(ContainerError::NotFound { value: 3 })
    /// );
    /// ```
    pub fn remove_element(&mut self, value: i32) -> Result<(), ContainerError> {
        let Ok(position) = self.elements.binary_search(&value) else {
            log::debug!("remove_element({value}): not found");
            return Err(ContainerError::NotFound { value });
        };
        self.elements.remove(position);
        if is_prime(value)
            && let Ok(prime_position) = self.primes.binary_search(&value)
        {
            self.primes.remove(prime_position);
        }
        log::trace!("remove_element({value}): removed from {position}");
        Ok(())
    }

    /// Returns the number of elements (not the number of primes).
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements. Same as [`size`](Self::size).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of prime-valued elements.
    #[inline]
    #[must_use]
    pub fn prime_count(&self) -> usize {
        self.primes.len()
    }

    /// Returns `true` if `value` is stored in the container.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.elements.binary_search(&value).is_ok()
    }

    /// Returns every element in ascending order.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[i32] {
        &self.elements
    }

    /// Returns the prime-valued elements in ascending order.
    #[inline]
    #[must_use]
    pub fn primes(&self) -> &[i32] {
        &self.primes
    }

    /// Returns an [`AscendingIterator`] positioned at its first element.
    #[inline]
    #[must_use]
    pub const fn ascending(&self) -> AscendingIterator<'_> {
        AscendingIterator::new(self)
    }

    /// Returns a [`SideCrossIterator`] positioned at its first element.
    #[inline]
    #[must_use]
    pub fn side_cross(&self) -> SideCrossIterator<'_> {
        SideCrossIterator::new(self)
    }

    /// Returns a [`PrimeIterator`] positioned at its first element.
    #[inline]
    #[must_use]
    pub const fn prime(&self) -> PrimeIterator<'_> {
        PrimeIterator::new(self)
    }
}

impl FromIterator<i32> for MagicalContainer {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl Extend<i32> for MagicalContainer {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.add_element(value);
        }
    }
}

impl<'a> IntoIterator for &'a MagicalContainer {
    type Item = i32;
    type IntoIter = AscendingIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.ascending()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for MagicalContainer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct MagicalContainerVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for MagicalContainerVisitor {
    type Value = MagicalContainer;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Input order and duplicates are not trusted; add_element re-derives both views.
        let mut container = MagicalContainer::new();
        while let Some(element) = seq.next_element::<i32>()? {
            container.add_element(element);
        }
        Ok(container)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MagicalContainer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(MagicalContainerVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
