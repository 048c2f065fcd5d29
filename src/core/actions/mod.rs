pub mod cancellation;
pub mod quicksort;
