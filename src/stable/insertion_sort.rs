//! Insertion sort.
//!
//! Grows a sorted prefix one element at a time. The next element is shifted left past every
//! strictly greater predecessor, so equal elements never pass each other.
//!
//! Stable. O(n) comparisons on sorted input, O(n^2) average and worst case. O(1) extra space.

use std::cmp::Ordering;

sort_impl!("insertion_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 1..len {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Sorts `v` assuming `v[..len - 1]` is already sorted.
///
/// The last element is moved left until its predecessor is not greater than it. Does nothing for
/// `len < 2`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut i = v.len().saturating_sub(1);

    while i > 0 && is_less(&v[i], &v[i - 1]) {
        v.swap(i - 1, i);
        i -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_tail_steps() {
        // Mirrors how [64, 34, 25, 12, 22] is built up one insertion at a time.
        let mut v = [64, 34, 25, 12, 22];
        let expected_after_step = [
            [34, 64, 25, 12, 22],
            [25, 34, 64, 12, 22],
            [12, 25, 34, 64, 22],
            [12, 22, 25, 34, 64],
        ];

        for (i, expected) in (1..v.len()).zip(expected_after_step.iter()) {
            insert_tail(&mut v[..=i], &mut |a, b| a < b);
            assert_eq!(&v, expected);
        }
    }

    #[test]
    fn insert_tail_short() {
        let mut empty: [i32; 0] = [];
        insert_tail(&mut empty, &mut |a, b| a < b);

        let mut single = [7];
        insert_tail(&mut single, &mut |_, _| panic!("no comparison expected"));
        assert_eq!(single, [7]);
    }

    #[test]
    fn sorted_input_linear() {
        let mut comp_count = 0;
        let mut v = [1, 2, 3, 4, 5];
        sort_by(&mut v, |a, b| {
            comp_count += 1;
            a.cmp(b)
        });

        assert_eq!(v, [1, 2, 3, 4, 5]);
        assert_eq!(comp_count, 4);
    }
}
