//! Basic quicksort with Lomuto partitioning.
//!
//! The last element of the active range is the pivot, there is no randomization and no median
//! selection. Already sorted and reverse sorted inputs therefore hit the O(n^2) worst case.
//!
//! Not stable. O(n log n) comparisons on average. Recursing into the shorter side bounds the stack
//! depth to O(log n) even in the worst case.

use std::cmp::Ordering;
use std::mem;

sort_impl!("quicksort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        let pivot_pos = lomuto_partition(v, is_less);

        // The pivot is in its final position, neither side includes it.
        let (left, right) = mem::take(&mut v).split_at_mut(pivot_pos);
        let right = &mut right[1..];

        // Recurse into the shorter side, continue with the longer one.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its last element and returns the final position of that pivot.
///
/// Afterwards every element in `v[..pos]` is less than the pivot and every element in
/// `v[pos + 1..]` is not. Expects `v` to be non-empty.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn lomuto_partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    let (v_without_pivot, pivot) = v.split_at_mut(len - 1);
    let pivot = &pivot[0];

    let mut lt_count = 0;
    for r in 0..v_without_pivot.len() {
        if is_less(&v_without_pivot[r], pivot) {
            v_without_pivot.swap(lt_count, r);
            lt_count += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(lt_count, len - 1);

    lt_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_places_pivot() {
        let mut v = [64, 34, 25, 12, 22];
        let pos = lomuto_partition(&mut v, &mut |a, b| a < b);

        assert_eq!(pos, 1);
        assert_eq!(v, [12, 22, 25, 64, 34]);
    }

    #[test]
    fn partition_pivot_is_max() {
        let mut v = [3, 1, 2, 9];
        let pos = lomuto_partition(&mut v, &mut |a, b| a < b);

        assert_eq!(pos, 3);
        assert_eq!(v, [3, 1, 2, 9]);
    }

    #[test]
    fn partition_equal_to_pivot_goes_right() {
        let mut v = [2, 1, 2, 3, 2];
        let pos = lomuto_partition(&mut v, &mut |a, b| a < b);

        assert_eq!(pos, 1);
        assert_eq!(v[..pos], [1]);
        assert_eq!(v[pos], 2);
        assert!(v[pos + 1..].iter().all(|x| *x >= 2));
    }

    #[test]
    fn sorted_input_quadratic() {
        // Last element pivoting degrades to n * (n - 1) / 2 comparisons on sorted input.
        let len = 100;
        let mut comp_count = 0;
        let mut v = (0..len as i32).collect::<Vec<_>>();
        sort_by(&mut v, |a, b| {
            comp_count += 1;
            a.cmp(b)
        });

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(comp_count, len * (len - 1) / 2);
    }

    #[test]
    fn reversed_large_input_no_stack_overflow() {
        let mut v = (0..5_000).rev().collect::<Vec<i32>>();
        sort(&mut v);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }
}
