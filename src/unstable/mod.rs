pub mod quicksort;
pub mod selection_sort;
