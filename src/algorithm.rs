//! Runtime selection of one of the sorts in this crate.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{stable, unstable};

/// The sorting algorithms implemented by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    RecursiveBubbleSort,
    RecursiveInsertionSort,
    QuickSort,
}

/// Asymptotic cost of an algorithm, as big-O expressions over the input length `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    /// Memory beyond the input itself, call stack included.
    pub space: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAlgorithmError {
    #[error(
        "unknown sorting algorithm '{0}', expected one of: {names}",
        names = Algorithm::names().join(", ")
    )]
    Unknown(String),
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::RecursiveBubbleSort,
        Algorithm::RecursiveInsertionSort,
        Algorithm::QuickSort,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble",
            Algorithm::SelectionSort => "selection",
            Algorithm::InsertionSort => "insertion",
            Algorithm::MergeSort => "merge",
            Algorithm::RecursiveBubbleSort => "recursive-bubble",
            Algorithm::RecursiveInsertionSort => "recursive-insertion",
            Algorithm::QuickSort => "quick",
        }
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Algorithm::name).collect()
    }

    /// Whether elements that compare equal keep their input order.
    pub fn is_stable(&self) -> bool {
        !matches!(self, Algorithm::SelectionSort | Algorithm::QuickSort)
    }

    pub fn complexity(&self) -> Complexity {
        match self {
            Algorithm::BubbleSort | Algorithm::InsertionSort => Complexity {
                best: "O(n)",
                average: "O(n^2)",
                worst: "O(n^2)",
                space: "O(1)",
            },
            Algorithm::SelectionSort => Complexity {
                best: "O(n^2)",
                average: "O(n^2)",
                worst: "O(n^2)",
                space: "O(1)",
            },
            Algorithm::MergeSort => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
            },
            Algorithm::RecursiveBubbleSort | Algorithm::RecursiveInsertionSort => Complexity {
                best: "O(n)",
                average: "O(n^2)",
                worst: "O(n^2)",
                space: "O(n)",
            },
            Algorithm::QuickSort => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n^2)",
                space: "O(log n)",
            },
        }
    }

    pub fn sort<T>(&self, v: &mut [T])
    where
        T: Ord,
    {
        match self {
            Algorithm::BubbleSort => stable::bubble_sort::sort(v),
            Algorithm::SelectionSort => unstable::selection_sort::sort(v),
            Algorithm::InsertionSort => stable::insertion_sort::sort(v),
            Algorithm::MergeSort => stable::merge_sort::sort(v),
            Algorithm::RecursiveBubbleSort => stable::recursive_bubble_sort::sort(v),
            Algorithm::RecursiveInsertionSort => stable::recursive_insertion_sort::sort(v),
            Algorithm::QuickSort => unstable::quicksort::sort(v),
        }
    }

    pub fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::BubbleSort => stable::bubble_sort::sort_by(v, compare),
            Algorithm::SelectionSort => unstable::selection_sort::sort_by(v, compare),
            Algorithm::InsertionSort => stable::insertion_sort::sort_by(v, compare),
            Algorithm::MergeSort => stable::merge_sort::sort_by(v, compare),
            Algorithm::RecursiveBubbleSort => stable::recursive_bubble_sort::sort_by(v, compare),
            Algorithm::RecursiveInsertionSort => {
                stable::recursive_insertion_sort::sort_by(v, compare)
            }
            Algorithm::QuickSort => unstable::quicksort::sort_by(v, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");

        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| ParseAlgorithmError::Unknown(s.to_owned()))
    }
}
