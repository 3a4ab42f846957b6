//! Insertion sort expressed as recursion over the prefix length.
//!
//! The first `n - 1` elements are sorted recursively, then element `n - 1` is inserted into that
//! sorted prefix with the same shifting step the iterative version uses.
//!
//! Stable. Same comparison counts as [`insertion_sort`](super::insertion_sort), O(n) stack depth.

use std::cmp::Ordering;

use crate::stable::insertion_sort::insert_tail;

sort_impl!("recursive_insertion_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    recursive_insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    recursive_insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v[..n]` and leaves `v[n..]` untouched.
///
/// # Panics
///
/// Panics if `n > v.len()`.
#[inline]
pub fn sort_prefix<T>(v: &mut [T], n: usize)
where
    T: Ord,
{
    recursive_insertion_sort(&mut v[..n], &mut |a, b| a.lt(b));
}

/// Like [`sort_prefix`] with a comparison function.
///
/// # Panics
///
/// Panics if `n > v.len()`.
#[inline]
pub fn sort_prefix_by<T, F>(v: &mut [T], n: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    recursive_insertion_sort(&mut v[..n], &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn recursive_insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    recursive_insertion_sort(&mut v[..len - 1], is_less);
    insert_tail(v, is_less);
}
