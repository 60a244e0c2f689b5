//! A growable dynamic array with index-checked access and comparator quicksort.
//!
//! [`DynamicArray`] is a minimal, owning, contiguous sequence of generic
//! elements: amortized O(1) append, O(n) arbitrary insert/remove, replace,
//! clear, in-place comparator sort, and a bracketed `Display` rendering.
//! It is a pedagogical reimplementation of a resizable array, not a
//! replacement for `Vec`.
//!
//! # Quick start
//!
//! ```rust
//! use dynarray::DynamicArray;
//!
//! let mut values = DynamicArray::new();
//! values.push(10);
//! values.push(20);
//! values.push(30);
//! values.insert(1, 15)?;
//! assert_eq!(values.to_string(), "[10, 15, 20, 30]");
//!
//! values.sort_by(|a, b| b.cmp(a));
//! assert_eq!(values.to_string(), "[30, 20, 15, 10]");
//! # Ok::<(), dynarray::ArrayError>(())
//! ```
//!
//! Every index-taking operation validates its argument before mutating
//! anything and returns [`ArrayError::IndexOutOfBounds`] on violation, so
//! a failed call leaves the container untouched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;
mod sort;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use error::ArrayError;
