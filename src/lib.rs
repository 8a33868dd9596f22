pub mod array;
pub mod complex;
pub mod error;
pub mod sort;
mod config;

pub use array::DynamicArray;
pub use complex::Complex;
pub use config::{MIN_CAPACITY, SHRINK_FLOOR, SHRINK_RATIO};
pub use error::ArrayError;
pub use sort::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort, sort_slice,
    SortAlgorithm,
};
