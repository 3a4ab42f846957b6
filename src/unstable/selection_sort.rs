//! Selection sort.
//!
//! For every position from the front, finds the minimum of the unsorted rest and swaps it into
//! place. The swap can carry an element past its equals, so the sort is not stable.
//!
//! O(n^2) comparisons in every case, at most n - 1 swaps. O(1) extra space.

use std::cmp::Ordering;

sort_impl!("selection_sort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let min_idx = min_index(&v[i..], is_less) + i;
        v.swap(i, min_idx);
    }
}

/// Index of the first minimum in `v`. Expects `v` to be non-empty.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn min_index<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut min_idx = 0;

    for j in 1..v.len() {
        if is_less(&v[j], &v[min_idx]) {
            min_idx = j;
        }
    }

    min_idx
}
