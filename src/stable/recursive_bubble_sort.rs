//! Bubble sort expressed as recursion over the prefix length.
//!
//! One bubbling pass over the first `n` elements puts their maximum at `n - 1`, after which the
//! first `n - 1` elements are sorted the same way. A pass without swaps ends the recursion early.
//!
//! Stable. Same comparison counts as [`bubble_sort`](super::bubble_sort), but O(n) stack depth.

use std::cmp::Ordering;

use crate::stable::bubble_sort::bubble_pass;

sort_impl!("recursive_bubble_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    recursive_bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    recursive_bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
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
    recursive_bubble_sort(&mut v[..n], &mut |a, b| a.lt(b));
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
    recursive_bubble_sort(&mut v[..n], &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn recursive_bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    if !bubble_pass(v, is_less) {
        // Nothing moved, so the rest is already in order.
        return;
    }

    recursive_bubble_sort(&mut v[..len - 1], is_less);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_only() {
        let mut v = [5, 2, 8, 1, 9, 0, -4];
        sort_prefix(&mut v, 5);
        assert_eq!(v, [1, 2, 5, 8, 9, 0, -4]);
    }

    #[test]
    fn prefix_zero_and_full() {
        let mut v = [3, 1, 2];
        sort_prefix(&mut v, 0);
        assert_eq!(v, [3, 1, 2]);

        sort_prefix_by(&mut v, 3, |a, b| b.cmp(a));
        assert_eq!(v, [3, 2, 1]);
    }

    #[test]
    #[should_panic]
    fn prefix_out_of_range() {
        let mut v = [3, 1, 2];
        sort_prefix(&mut v, 4);
    }

    #[test]
    fn sorted_input_single_pass() {
        let mut comp_count = 0;
        let mut v = [1, 2, 3, 4, 5];
        sort_by(&mut v, |a, b| {
            comp_count += 1;
            a.cmp(b)
        });

        assert_eq!(comp_count, 4);
    }
}
