//! Textbook comparison sorts over `&mut [T]`.
//!
//! Every algorithm lives in its own module and exposes `sort`, `sort_by` and a `SortImpl` type
//! implementing [`Sort`], so the same test suite and benchmarks can be run against each of them.
//! Modules are grouped by whether they keep equal elements in input order (`stable`) or not
//! (`unstable`).

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub use sort_test_tools::Sort;

pub mod algorithm;
pub mod stable;
pub mod unstable;

pub use algorithm::{Algorithm, Complexity, ParseAlgorithmError};
