//! Partition-exchange (quicksort) routine over the array's backing slots.
//!
//! Operates directly on the occupied prefix of the slot buffer so that
//! swaps move the owned elements without cloning. Pivot selection is
//! deliberately naive — always the last element of the current subrange —
//! so already-sorted or adversarial inputs degrade to O(n²). That
//! trade-off is accepted for this container.

use std::cmp::Ordering;

/// Sort the occupied slots `[0, len)` in place with the given comparator.
///
/// The comparator must implement a consistent total or weak ordering;
/// the resulting order is unspecified if it does not. Equal elements may
/// be reordered (the sort is not stable).
pub(crate) fn quicksort<T, F>(slots: &mut [Option<T>], len: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if len > 1 {
        sort_range(slots, 0, len - 1, compare);
    }
}

/// Recursively sort the inclusive subrange `[low, high]`.
///
/// A subrange of length <= 1 is the recursion base case.
fn sort_range<T, F>(slots: &mut [Option<T>], low: usize, high: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if low >= high {
        return;
    }
    let pivot = partition(slots, low, high, compare);
    // Guard the left recursion: pivot == low would underflow.
    if pivot > low {
        sort_range(slots, low, pivot - 1, compare);
    }
    sort_range(slots, pivot + 1, high, compare);
}

/// Partition `[low, high]` around the pivot element at `high`.
///
/// Single left-to-right scan. `boundary` is one past the last slot known
/// to hold an element comparing `Less` than the pivot; such elements are
/// swapped forward as the scan finds them, and the pivot is finally
/// swapped into the boundary position. Returns the pivot's final index.
fn partition<T, F>(slots: &mut [Option<T>], low: usize, high: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut boundary = low;
    for scan in low..high {
        let is_less = {
            let element = slots[scan].as_ref().expect("slots below len are occupied");
            let pivot = slots[high].as_ref().expect("slots below len are occupied");
            compare(element, pivot) == Ordering::Less
        };
        if is_less {
            slots.swap(boundary, scan);
            boundary += 1;
        }
    }
    slots.swap(boundary, high);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(values: &[i32]) -> Vec<Option<i32>> {
        values.iter().copied().map(Some).collect()
    }

    fn unwrapped(slots: &[Option<i32>]) -> Vec<i32> {
        slots.iter().map(|s| s.unwrap()).collect()
    }

    #[test]
    fn sorts_shuffled_input() {
        let mut slots = occupied(&[5, 3, 8, 1, 9, 2]);
        let len = slots.len();
        quicksort(&mut slots, len, &mut i32::cmp);
        assert_eq!(unwrapped(&slots), vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn already_sorted_input_is_preserved() {
        let mut slots = occupied(&[1, 2, 3, 4, 5]);
        let len = slots.len();
        quicksort(&mut slots, len, &mut i32::cmp);
        assert_eq!(unwrapped(&slots), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut slots = occupied(&[4, 1, 4, 2, 4, 1]);
        let len = slots.len();
        quicksort(&mut slots, len, &mut i32::cmp);
        assert_eq!(unwrapped(&slots), vec![1, 1, 2, 4, 4, 4]);
    }

    #[test]
    fn descending_comparator_reverses_order() {
        let mut slots = occupied(&[3, 1, 2]);
        let len = slots.len();
        quicksort(&mut slots, len, &mut |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(unwrapped(&slots), vec![3, 2, 1]);
    }

    #[test]
    fn ignores_vacant_tail_slots() {
        let mut slots = occupied(&[2, 1]);
        slots.push(None);
        slots.push(None);
        quicksort(&mut slots, 2, &mut i32::cmp);
        assert_eq!(slots, vec![Some(1), Some(2), None, None]);
    }

    #[test]
    fn empty_and_singleton_are_no_ops() {
        let mut empty: Vec<Option<i32>> = vec![];
        quicksort(&mut empty, 0, &mut i32::cmp);
        assert!(empty.is_empty());

        let mut single = occupied(&[7]);
        quicksort(&mut single, 1, &mut i32::cmp);
        assert_eq!(unwrapped(&single), vec![7]);
    }
}
