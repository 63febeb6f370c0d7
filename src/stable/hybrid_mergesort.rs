use std::cmp::Ordering;
use std::mem::size_of;

use crate::stable::insertion_sort::insertion_sort;
use crate::stable::mergesort::merge;

/// Range length at or below which recursion stops and insertion sort takes
/// over.
pub const DEFAULT_THRESHOLD: usize = 10;

sort_impl!("hybrid_mergesort");

/// Merge sort that insertion sorts ranges of at most the threshold length
/// instead of splitting further. Same output as the pure merge sort for
/// every input and threshold, including stability; only the constant
/// factors near the recursion leaves change.
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
    hybrid_merge_sort(arr, threshold, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by_with_threshold<T, F>(arr: &mut [T], threshold: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(threshold >= 1);
    hybrid_merge_sort(arr, threshold, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}

fn hybrid_merge_sort<T, F>(v: &mut [T], threshold: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len <= threshold {
        insertion_sort(v, is_less);
        return;
    }

    let mut buf = Vec::with_capacity(len / 2);
    hybrid_merge_sort_rec(v, buf.as_mut_ptr(), threshold, is_less);
}

fn hybrid_merge_sort_rec<T, F>(v: &mut [T], buf: *mut T, threshold: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= threshold {
        insertion_sort(v, is_less);
        return;
    }

    let mid = len / 2;
    hybrid_merge_sort_rec(&mut v[..mid], buf, threshold, is_less);
    hybrid_merge_sort_rec(&mut v[mid..], buf, threshold, is_less);

    // SAFETY: same contract as the pure merge sort, `buf` covers `len / 2`.
    unsafe { merge(v, mid, buf, is_less) };
}
