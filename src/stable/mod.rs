pub mod bubble_sort;
pub mod insertion_sort;
pub mod merge_sort;

// Recursive formulations of bubble and insertion sort. Same results, O(n) stack depth.
pub mod recursive_bubble_sort;
pub mod recursive_insertion_sort;
