//! # magical-container
//!
//! A sorted set of integers that can be walked in three different orders.
//!
//! ## Overview
//!
//! [`MagicalContainer`] stores unique `i32` values in ascending order and keeps
//! a second sorted view of the prime-valued ones. Three iterators run over
//! those views:
//!
//! - [`AscendingIterator`]: 1, 2, 3, 4, 5
//! - [`SideCrossIterator`]: 1, 5, 2, 4, 3
//! - [`PrimeIterator`]: 2, 3, 5
//!
//! Every iterator implements the cursor contract [`ContainerIterator`]
//! (`begin`/`end`/`advance`/`current`, comparison and assignment) as well as
//! [`std::iter::Iterator`]. [`AnyIterator`] wraps any of them for code that
//! needs to handle the variants uniformly at run time.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`MagicalContainer`]
//!
//! ## Logging
//!
//! Container mutations are reported through the [`log`] facade at `trace`
//! level, failed removals at `debug` level. The crate never installs a logger.
//!
//! ## Example
//!
//! ```rust
//! use magical_container::prelude::*;
//!
//! let mut container = MagicalContainer::new();
//! for value in [17, 2, 9, 4, 3] {
//!     container.add_element(value);
//! }
//!
//! assert_eq!(container.ascending().collect::<Vec<_>>(), vec![2, 3, 4, 9, 17]);
//! assert_eq!(container.side_cross().collect::<Vec<_>>(), vec![2, 17, 3, 9, 4]);
//! assert_eq!(container.prime().collect::<Vec<_>>(), vec![2, 3, 17]);
//!
//! let mut iterator = container.prime().end();
//! assert_eq!(
//!     iterator.advance(),
//!     Err(ContainerError::EndOfRange { kind: IteratorKind::Prime })
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use magical_container::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::MagicalContainer;
    pub use crate::error::ContainerError;
    pub use crate::iterator::{
        AnyIterator, AscendingIterator, ContainerIterator, IteratorKind, PrimeIterator,
        SideCrossIterator, traverse,
    };
}

pub mod container;
pub mod error;
pub mod iterator;

pub use container::MagicalContainer;
pub use error::ContainerError;
pub use iterator::{
    AnyIterator, AscendingIterator, ContainerIterator, IteratorKind, PrimeIterator,
    SideCrossIterator, traverse,
};
