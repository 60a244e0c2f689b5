//! Error types for index-checked container operations.

use std::error::Error;
use std::fmt;

/// Errors returned by [`DynamicArray`](crate::DynamicArray) operations.
///
/// Every fallible operation validates its index before touching any state,
/// so an `Err` return implies the container is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The supplied index falls outside the valid range for the operation.
    ///
    /// For `get`/`remove`/`set` the valid range is `[0, len)`; `insert`
    /// additionally permits `index == len`.
    IndexOutOfBounds,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds => write!(f, "Index out of bounds"),
        }
    }
}

impl Error for ArrayError {}
