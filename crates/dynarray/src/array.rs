//! The dynamic array container.
//!
//! [`DynamicArray`] owns a contiguous buffer of `Option<T>` slots. The
//! occupied prefix `[0, len)` holds the logically present elements; the
//! vacant tail is `None`. Wrapping elements in `Option` makes "absent"
//! structurally distinct from every valid `T`, so removal and clearing
//! release ownership of the stored payloads immediately rather than
//! leaving stale values alive in the buffer.

use std::cmp::Ordering;
use std::fmt;

use crate::error::ArrayError;
use crate::sort;

/// A growable, contiguous sequence of elements with index-checked access.
///
/// Appending is amortized O(1): when the buffer is full the capacity is
/// doubled and the elements carried over in order. Arbitrary insert and
/// remove are O(n) shifts. Capacity never shrinks during the container's
/// lifetime, and callers cannot observe or depend on it.
///
/// The container exclusively owns its backing storage. Indexed access
/// hands out element references or values, never a handle into the raw
/// buffer. It is an ordinary single-threaded structure; Rust's `&mut`
/// rules already forbid unsynchronized concurrent mutation.
#[derive(Debug)]
pub struct DynamicArray<T> {
    /// Backing storage. The length of this vector is the capacity;
    /// slots `[0, len)` are `Some`, slots `[len, capacity)` are `None`.
    slots: Vec<Option<T>>,
    /// Number of logically present elements.
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Initial capacity used by [`DynamicArray::new`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Create an empty array with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty array with the given initial capacity.
    ///
    /// A capacity of zero is allowed; the buffer grows on the first push.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, len: 0 }
    }

    /// Number of elements currently present.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `element` at the current end.
    ///
    /// Doubles the capacity first if the buffer is full. Logical indices
    /// of existing elements are stable across the reallocation.
    pub fn push(&mut self, element: T) {
        self.grow_if_full();
        self.slots[self.len] = Some(element);
        self.len += 1;
    }

    /// Insert `element` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` behaves as an append. Returns
    /// `Err(ArrayError::IndexOutOfBounds)` when `index > len`, before any
    /// mutation takes place.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfBounds);
        }
        self.grow_if_full();
        // Rotate the vacant slot at `len` into position `index`; this is
        // the rightward shift of `[index, len)` in one pass.
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(element);
        self.len += 1;
        Ok(())
    }

    /// Shared reference to the element at `index`.
    ///
    /// Returns `Err(ArrayError::IndexOutOfBounds)` when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds);
        }
        Ok(self.slots[index]
            .as_ref()
            .expect("slots below len are occupied"))
    }

    /// Remove and return the element at `index`, shifting `(index, len)`
    /// one slot left.
    ///
    /// The vacated trailing slot is cleared to `None`, so the returned
    /// value is the only remaining owner of the payload. Returns
    /// `Err(ArrayError::IndexOutOfBounds)` when `index >= len`, before
    /// any mutation takes place.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds);
        }
        let removed = self.slots[index]
            .take()
            .expect("slots below len are occupied");
        // Carry the hole left by `take` to the tail; this is the leftward
        // shift of `(index, len)` in one pass.
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    /// Replace the element at `index`, returning the previous value.
    ///
    /// No resizing occurs. Returns `Err(ArrayError::IndexOutOfBounds)`
    /// when `index >= len`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds);
        }
        let previous = self.slots[index]
            .replace(element)
            .expect("slots below len are occupied");
        Ok(previous)
    }

    /// Remove all elements, releasing their ownership.
    ///
    /// Capacity is retained. Calling `clear` on an empty array is a no-op.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Iterate over the elements in logical order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.len]
            .iter()
            .map(|slot| slot.as_ref().expect("slots below len are occupied"))
    }

    /// Sort the elements in place with a three-way comparator.
    ///
    /// Recursive partition-exchange sort (quicksort) with the last element
    /// of each subrange as the pivot, so already-sorted input is the
    /// O(n²) worst case. Not stable: equal elements may be reordered. The
    /// comparator must implement a consistent total or weak ordering; the
    /// resulting order is unspecified if it does not.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::quicksort(&mut self.slots, self.len, &mut compare);
    }

    /// Current capacity of the backing buffer, for internal assertions.
    /// Deliberately not public: callers must not depend on capacity.
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Double the backing buffer when full so the next size-increasing
    /// mutation has a vacant slot. A zero-capacity buffer grows straight
    /// to [`DynamicArray::DEFAULT_CAPACITY`].
    fn grow_if_full(&mut self) {
        if self.len == self.slots.len() {
            let new_capacity = (self.slots.len() * 2).max(Self::DEFAULT_CAPACITY);
            self.slots.resize_with(new_capacity, || None);
        }
    }
}

impl<T: Ord> DynamicArray<T> {
    /// Sort the elements in place by their natural order.
    ///
    /// Equivalent to `sort_by(T::cmp)`.
    pub fn sort(&mut self) {
        self.sort_by(T::cmp);
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    /// Renders the elements as a bracketed, comma-and-space-separated
    /// list in logical order: `[10, 20, 30]`, or `[]` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}
