#![warn(missing_docs)]
#![recursion_limit = "1024"]
//! This crate offers a random-access cursor over contiguous storage and traits to abstract over sequence containers built on top of it.
//!
//! ```rust
//! use traitcontainer::interface::Sequence;
//!
//! let sequence = vec![10, 20, 30];
//! assert_eq!(*(sequence.begin() + 1), 20);
//! assert_eq!(*(sequence.end() - 1), 30);
//! assert_eq!(sequence.index_of(sequence.begin() + 2).unwrap(), 2);
//! ```

/// Generic algorithms written against the random-access cursor contract.
pub mod algorithm;
/// The random-access cursor.
pub mod cursor;
/// The errors reported by checked container accesses.
pub mod error;
/// Implementations of the container traits for stdlib types.
pub mod implementation;
/// The traits abstracting over a sequence container.
pub mod interface;
/// Iterators over a half-open pair of cursors.
pub mod range;
/// The reverse adaptor for cursors.
pub mod reverse_cursor;

pub use crate::error::{Error, ErrorKind, Result};
