/// Common interface of every sort under test or benchmark.
///
/// `name` must contain `unstable` for sorts that may reorder equal elements, the stability tests
/// are skipped for those.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
