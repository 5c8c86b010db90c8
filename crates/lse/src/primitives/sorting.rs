//! In-place hybrid sort for log-domain buffers.
//!
//! ## Purpose
//!
//! This module orders a buffer of log-domain values ascending so that the
//! log-sum-exp kernel finds the maximum at the last index and accumulates
//! the remaining terms from smallest to largest.
//!
//! ## Design notes
//!
//! * **Hybrid**: Quicksort partitioning above [`INSERTION_SORT_THRESHOLD`], insertion sort
//!   below it.
//! * **Pivot**: Always the last element of the current range.
//! * **Bounded stack**: Only the smaller partition is recursed into; the larger one is looped over.
//! * **Allocation-free**: Works entirely in the caller's buffer.
//!
//! ## Key concepts
//!
//! ### Partition step
//! Two cursors scan inward from the ends of the range. The left cursor stops
//! on the first element not below the pivot, the right cursor on the first
//! element not above it. Misordered pairs are swapped until the cursors
//! cross, and the pivot is then swapped into the crossing point.
//!
//! ## Invariants
//!
//! * After `sort_range(a, low, high)`, `a[low..=high]` is non-decreasing.
//! * Elements outside `[low, high]` are never touched.
//! * The multiset of values is preserved.
//!
//! ## Non-goals
//!
//! * No stability guarantee (values carry no payload).
//! * NaN ordering is unspecified; the sort still terminates.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Ranges with `high - low` at or below this value are insertion sorted.
pub const INSERTION_SORT_THRESHOLD: usize = 25;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort the whole buffer ascending, in place.
#[inline]
pub fn sort<T: Float>(array: &mut [T]) {
    if array.len() > 1 {
        sort_range(array, 0, array.len() - 1);
    }
}

/// Sort the inclusive range `[low, high]` of `array` ascending, in place.
///
/// A range with `low >= high` is left untouched.
///
/// # Panics
///
/// Panics if `high` is out of bounds for a non-empty range.
pub fn sort_range<T: Float>(array: &mut [T], mut low: usize, mut high: usize) {
    if low >= high {
        return;
    }

    while high > low && high - low > INSERTION_SORT_THRESHOLD {
        let split = partition(array, low, high);

        if split - low < high - split {
            if split > low {
                sort_range(array, low, split - 1);
            }
            low = split + 1;
        } else {
            // split > low here: the left side is the larger one and the range spans > 25 elements
            sort_range(array, split + 1, high);
            high = split - 1;
        }
    }

    insertion_sort(array, low, high);
}

/// Partition `[low, high]` around `array[high]` and return the pivot's final index.
///
/// Requires `high - low > INSERTION_SORT_THRESHOLD`.
fn partition<T: Float>(array: &mut [T], low: usize, high: usize) -> usize {
    let pivot = array[high];
    let mut left = low;
    let mut right = high;

    loop {
        // array[high] == pivot stops this scan at the latest
        while array[left] < pivot {
            left += 1;
        }

        loop {
            right -= 1;
            if !(array[right] > pivot && right > left) {
                break;
            }
        }

        if left >= right {
            break;
        }

        array.swap(left, right);
        left += 1;
    }

    array.swap(left, high);
    left
}

/// Insertion sort over the inclusive range `[low, high]`.
///
/// Requires `low < high`.
#[inline]
fn insertion_sort<T: Float>(array: &mut [T], low: usize, high: usize) {
    for i in (low + 1)..=high {
        let value = array[i];
        let mut j = i;
        while j > low && value < array[j - 1] {
            array[j] = array[j - 1];
            j -= 1;
        }
        array[j] = value;
    }
}
