//! Top-down merge sort.
//!
//! Splits the slice in half, sorts both halves recursively and merges them through two temporary
//! buffers allocated per merge step. Ties are resolved in favour of the left half.
//!
//! Stable. O(n log n) comparisons in every case, O(n) auxiliary memory and O(log n) stack depth.

use std::cmp::Ordering;
use std::ptr;

sort_impl!("merge_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    let mid = len / 2;

    merge_sort(&mut v[..mid], is_less);
    merge_sort(&mut v[mid..], is_less);

    merge(v, mid, is_less);
}

/// Merges the non-decreasing runs `v[..mid]` and `v[mid..]` into `v`.
///
/// Both runs are first moved into their own buffer. From then on `v` is a hole that gets filled
/// front to back by repeatedly taking the lesser head, the left one if both are equal.
///
/// Panic safety:
///
/// If `is_less` panics, `state` gets dropped and moves the unconsumed rest of both buffers into
/// the remaining hole in `v`, so `v` still holds every element it initially held exactly once.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(mid > 0 && mid < len);

    let right_len = len - mid;

    // The buffers keep a length of 0, dropping them releases the memory but never an element.
    let mut left_buf = Vec::<T>::with_capacity(mid);
    let mut right_buf = Vec::<T>::with_capacity(right_len);

    let arr_ptr = v.as_mut_ptr();
    let left = left_buf.as_mut_ptr();
    let right = right_buf.as_mut_ptr();

    // SAFETY: Both buffers were allocated with enough capacity for their run, are freshly
    // allocated and thus can't overlap with `v`.
    unsafe {
        ptr::copy_nonoverlapping(arr_ptr, left, mid);
        ptr::copy_nonoverlapping(arr_ptr.add(mid), right, right_len);
    }

    let mut state = MergeState {
        left,
        left_len: mid,
        left_pos: 0,
        right,
        right_len,
        right_pos: 0,
        dest: arr_ptr,
    };

    while state.left_pos < state.left_len && state.right_pos < state.right_len {
        // SAFETY: Both positions are checked against their run length above, and every element
        // before them has already been moved out, those after are still initialized.
        unsafe {
            let left_head = state.left.add(state.left_pos);
            let right_head = state.right.add(state.right_pos);

            // Strictly less, so equal elements are taken from the left run first.
            let take_right = is_less(&*right_head, &*left_head);
            let src = if take_right { right_head } else { left_head };

            ptr::copy_nonoverlapping(src, state.dest, 1);
            state.dest = state.dest.add(1);

            state.right_pos += take_right as usize;
            state.left_pos += (!take_right) as usize;
        }
    }

    // Dropping `state` moves the leftover of the run that is not exhausted yet into `v`.
    drop(state);

    // When dropped, copies the unconsumed parts of both runs into `dest`. Left first, which
    // leaves a valid permutation in `v` even when stopping half way.
    struct MergeState<T> {
        left: *mut T,
        left_len: usize,
        left_pos: usize,
        right: *mut T,
        right_len: usize,
        right_pos: usize,
        dest: *mut T,
    }

    impl<T> Drop for MergeState<T> {
        fn drop(&mut self) {
            // SAFETY: `dest` points at the first unfilled slot of `v` and exactly
            // `(left_len - left_pos) + (right_len - right_pos)` slots are left to fill.
            unsafe {
                let left_rest = self.left_len - self.left_pos;
                let right_rest = self.right_len - self.right_pos;

                ptr::copy_nonoverlapping(self.left.add(self.left_pos), self.dest, left_rest);
                ptr::copy_nonoverlapping(
                    self.right.add(self.right_pos),
                    self.dest.add(left_rest),
                    right_rest,
                );
            }
        }
    }
}
