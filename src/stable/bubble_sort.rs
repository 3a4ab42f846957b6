//! Bubble sort with early exit.
//!
//! Every pass walks the unsorted prefix and swaps adjacent out-of-order pairs, which carries the
//! prefix maximum to its final position. A pass without any swap proves the prefix is sorted.
//!
//! Stable. O(n) comparisons on sorted input, O(n^2) average and worst case. O(1) extra space.

use std::cmp::Ordering;

sort_impl!("bubble_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // After each pass `v[end - 1..]` holds its final values.
    for end in (2..=len).rev() {
        if !bubble_pass(&mut v[..end], is_less) {
            break;
        }
    }
}

/// Swaps every adjacent pair `(v[i], v[i + 1])` where `v[i + 1] < v[i]`, front to back. Afterwards
/// the maximum of `v` is at `v[len - 1]`. Returns `true` if at least one swap happened.
///
/// Equal neighbours are never swapped, which is what keeps every bubble based sort stable.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn bubble_pass<T, F>(v: &mut [T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let mut swapped = false;

    for i in 1..v.len() {
        if is_less(&v[i], &v[i - 1]) {
            v.swap(i - 1, i);
            swapped = true;
        }
    }

    swapped
}
