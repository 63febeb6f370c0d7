use std::cmp::Ordering;

sort_impl!("bubble_sort");

/// Sorts the slice with repeated adjacent-pair sweeps. Each pass bubbles
/// the maximum of the unsorted prefix into its final position.
///
/// O(n^2) comparisons in every case. The classic formulation runs all n-1
/// passes without an early exit on a swap-free pass, and so does this one.
/// Not stable by contract, even though the adjacent swaps happen to keep
/// equal elements in order.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    bubble_sort(arr, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(arr, |a, b| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        for j in 0..(len - i - 1) {
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
            }
        }
    }
}
