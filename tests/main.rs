use classic_sorts::{stable, unstable, Algorithm, Sort};

use sort_test_tools::patterns;

macro_rules! instantiate_for {
    ($($group:ident::$sort_mod:ident),* $(,)?) => {
        paste::paste! {
            $(
                mod [<$sort_mod _tests>] {
                    sort_test_tools::instantiate_sort_tests!(
                        classic_sorts::$group::$sort_mod::SortImpl
                    );
                }
            )*
        }
    };
}

instantiate_for!(
    stable::bubble_sort,
    stable::insertion_sort,
    stable::merge_sort,
    stable::recursive_bubble_sort,
    stable::recursive_insertion_sort,
    unstable::quicksort,
    unstable::selection_sort,
);

fn count_comparisons<S: Sort>(v: &mut [i32]) -> usize {
    let mut comp_count = 0;
    S::sort_by(v, |a, b| {
        comp_count += 1;
        a.cmp(b)
    });

    comp_count
}

#[test]
fn adaptive_sorts_linear_on_sorted_input() {
    for len in [2, 3, 10, 100, 1_000] {
        let expected = patterns::ascending(len);

        let mut v = expected.clone();
        assert_eq!(count_comparisons::<stable::bubble_sort::SortImpl>(&mut v), len - 1);
        assert_eq!(v, expected);

        let mut v = expected.clone();
        assert_eq!(count_comparisons::<stable::insertion_sort::SortImpl>(&mut v), len - 1);
        assert_eq!(v, expected);

        let mut v = expected.clone();
        assert_eq!(
            count_comparisons::<stable::recursive_bubble_sort::SortImpl>(&mut v),
            len - 1
        );
        assert_eq!(v, expected);

        let mut v = expected.clone();
        assert_eq!(
            count_comparisons::<stable::recursive_insertion_sort::SortImpl>(&mut v),
            len - 1
        );
        assert_eq!(v, expected);
    }
}

#[test]
fn quicksort_reverse_sorted_worst_case() {
    let len = 500;
    let mut v = patterns::descending(len);

    let comp_count = count_comparisons::<unstable::quicksort::SortImpl>(&mut v);

    assert_eq!(v, patterns::ascending(len));
    // Quadratic, but still correct.
    assert!(comp_count >= len * (len - 1) / 4);
}

#[test]
fn recursive_variants_match_iterative() {
    let input = patterns::random_uniform(300, -50..=50);

    let mut bubble = input.clone();
    let mut recursive_bubble = input.clone();
    stable::bubble_sort::sort_by(&mut bubble, |a, b| b.cmp(a));
    stable::recursive_bubble_sort::sort_by(&mut recursive_bubble, |a, b| b.cmp(a));
    assert_eq!(bubble, recursive_bubble);

    let mut insertion = input.clone();
    let mut recursive_insertion = input;
    stable::insertion_sort::sort(&mut insertion);
    stable::recursive_insertion_sort::sort_prefix(&mut recursive_insertion, 300);
    assert_eq!(insertion, recursive_insertion);
}

#[test]
fn registry_dispatches_every_algorithm() {
    let input = patterns::random(200);
    let mut expected = input.clone();
    expected.sort();

    for algorithm in Algorithm::ALL {
        let mut v = input.clone();
        algorithm.sort(&mut v);
        assert_eq!(v, expected, "{algorithm}");

        let mut v = input.clone();
        algorithm.sort_by(&mut v, |a, b| b.cmp(a));
        assert!(v.windows(2).all(|w| w[0] >= w[1]), "{algorithm}");
    }
}

#[test]
fn registry_stability_matches_behavior() {
    // Keys with many duplicates, tagged with their input position.
    let input = patterns::random_uniform(400, 0..=3)
        .into_iter()
        .enumerate()
        .map(|(i, key)| (key, i))
        .collect::<Vec<_>>();

    for algorithm in Algorithm::ALL.into_iter().filter(Algorithm::is_stable) {
        let mut v = input.clone();
        algorithm.sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert!(v.windows(2).all(|w| w[0] <= w[1]), "{algorithm}");
    }
}
