use std::cmp::Ordering;

use crate::stable::insertion_sort::insertion_sort;
use crate::unstable::quicksort::partition_lomuto;

/// Range length at or below which partitioning stops and insertion sort
/// takes over.
pub const DEFAULT_THRESHOLD: usize = 10;

sort_impl!("hybrid_quicksort");

/// Quicksort that hands ranges of at most the threshold length to insertion
/// sort instead of partitioning further. Insertion sort has the lower
/// constant factors on small ranges, so this trims wall-clock time near the
/// recursion leaves without changing the output or the asymptotics.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    sort_with_threshold(arr, DEFAULT_THRESHOLD);
}

#[inline]
pub fn sort_by<T, F>(arr: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with_threshold(arr, DEFAULT_THRESHOLD, compare);
}

/// [`sort`] with a caller supplied cutover threshold, `threshold >= 1`.
#[inline]
pub fn sort_with_threshold<T>(arr: &mut [T], threshold: usize)
where
    T: Ord,
{
    debug_assert!(threshold >= 1);
    hybrid_quicksort(arr, threshold, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by_with_threshold<T, F>(arr: &mut [T], threshold: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(threshold >= 1);
    hybrid_quicksort(arr, threshold, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn hybrid_quicksort<T, F>(mut v: &mut [T], threshold: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() <= threshold {
            insertion_sort(v, is_less);
            return;
        }

        let pivot_pos = partition_lomuto(v, is_less);

        let (left, right) = v.split_at_mut(pivot_pos);
        hybrid_quicksort(left, threshold, is_less);

        v = &mut right[1..];
    }
}
