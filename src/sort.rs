use std::fmt;

use log::debug;

use crate::error::ArrayError;

/// Closed enumeration of the sorting strategies. Discriminants 1-5 follow
/// the id mapping callers have always used (`sort(1)` is bubble, `sort(3)`
/// is merge); insertion sort was added later as id 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SortAlgorithm {
    Bubble = 1,
    Selection = 2,
    Merge = 3,
    Quick = 4,
    Heap = 5,
    Insertion = 6,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Insertion,
    ];

    pub fn from_id(id: u8) -> Result<Self, ArrayError> {
        match id {
            1 => Ok(SortAlgorithm::Bubble),
            2 => Ok(SortAlgorithm::Selection),
            3 => Ok(SortAlgorithm::Merge),
            4 => Ok(SortAlgorithm::Quick),
            5 => Ok(SortAlgorithm::Heap),
            6 => Ok(SortAlgorithm::Insertion),
            _ => Err(ArrayError::UnknownAlgorithm(id)),
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Whether equal elements keep their relative order. Callers must not
    /// rely on stability from selection, quick, or heap sort.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble | SortAlgorithm::Merge | SortAlgorithm::Insertion
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Insertion => "insertion",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sorts `arr` ascending with the selected algorithm.
pub fn sort_slice<T: Ord + Clone>(arr: &mut [T], algorithm: SortAlgorithm) {
    debug!("sorting {} elements with {} sort", arr.len(), algorithm);
    match algorithm {
        SortAlgorithm::Bubble => bubble_sort(arr),
        SortAlgorithm::Selection => selection_sort(arr),
        SortAlgorithm::Merge => merge_sort(arr),
        SortAlgorithm::Quick => quick_sort(arr),
        SortAlgorithm::Heap => heap_sort(arr),
        SortAlgorithm::Insertion => insertion_sort(arr),
    }
}

/// Adjacent-swap passes over a shrinking suffix; exits early once a pass
/// performs no swap. Stable. O(n^2) worst, O(n) on sorted input.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let mut hi = arr.len();
    while hi > 1 {
        let mut sorted = true;
        for i in 1..hi {
            if arr[i - 1] > arr[i] {
                arr.swap(i - 1, i);
                sorted = false;
            }
        }
        if sorted {
            return;
        }
        hi -= 1;
    }
}

/// Shift-inserts each element into the sorted prefix. Stable. O(n^2).
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Swaps the minimum of the unsorted suffix to its front. Not stable.
/// O(n^2) regardless of input order.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if arr[j] < arr[min] {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
        }
    }
}

/// Midpoint divide with a temp-buffer merge that takes the left element on
/// ties. Stable. O(n log n).
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }
    let mid = arr.len() / 2;
    merge_sort(&mut arr[..mid]);
    merge_sort(&mut arr[mid..]);
    merge(arr, mid);
}

fn merge<T: Ord + Clone>(arr: &mut [T], mid: usize) {
    let mut tmp = Vec::with_capacity(arr.len());
    {
        let (left, right) = arr.split_at(mid);
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            if left[i] <= right[j] {
                tmp.push(left[i].clone());
                i += 1;
            } else {
                tmp.push(right[j].clone());
                j += 1;
            }
        }
        tmp.extend_from_slice(&left[i..]);
        tmp.extend_from_slice(&right[j..]);
    }
    arr.clone_from_slice(&tmp);
}

/// Lomuto partition around the last element. Not stable. O(n log n)
/// average, O(n^2) on adversarial pivots (e.g. already sorted input).
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }
    let pivot = partition(arr);
    quick_sort(&mut arr[..pivot]);
    quick_sort(&mut arr[pivot + 1..]);
}

fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let hi = arr.len() - 1;
    let mut i = 0;
    for j in 0..hi {
        if arr[j] < arr[hi] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, hi);
    i
}

/// Builds a max-heap by sifting down from the last internal node, then
/// repeatedly swaps the root behind the shrinking heap. Not stable.
/// O(n log n).
pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    if n < 2 {
        return;
    }
    for root in (0..n / 2).rev() {
        sift_down(arr, root, n);
    }
    for end in (1..n).rev() {
        arr.swap(0, end);
        sift_down(arr, 0, end);
    }
}

fn sift_down<T: Ord>(arr: &mut [T], mut root: usize, end: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }
        let mut largest = if arr[left] > arr[root] { left } else { root };
        let right = left + 1;
        if right < end && arr[right] > arr[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        arr.swap(root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    use super::*;

    fn check_sorted(arr: &[u32]) {
        for i in 1..arr.len() {
            assert!(arr[i - 1] <= arr[i], "not sorted at index {}", i);
        }
    }

    #[test]
    fn all_algorithms_sort_shuffled_input() {
        for algorithm in SortAlgorithm::ALL {
            let mut arr: Vec<u32> = (1..=256).rev().collect();
            arr.shuffle(&mut thread_rng());
            sort_slice(&mut arr, algorithm);
            check_sorted(&arr);
            for (i, elem) in arr.iter().enumerate() {
                assert_eq!(*elem, i as u32 + 1, "{} sort lost an element", algorithm);
            }
        }
    }

    #[test]
    fn all_algorithms_handle_degenerate_slices() {
        for algorithm in SortAlgorithm::ALL {
            let mut empty: Vec<u32> = vec![];
            sort_slice(&mut empty, algorithm);
            assert!(empty.is_empty());

            let mut single = vec![7u32];
            sort_slice(&mut single, algorithm);
            assert_eq!(single, vec![7]);

            let mut equal = vec![5u32; 16];
            sort_slice(&mut equal, algorithm);
            assert_eq!(equal, vec![5; 16]);
        }
    }

    #[test]
    fn already_sorted_and_reversed_inputs() {
        for algorithm in SortAlgorithm::ALL {
            let mut ascending: Vec<u32> = (0..128).collect();
            sort_slice(&mut ascending, algorithm);
            check_sorted(&ascending);

            let mut descending: Vec<u32> = (0..128).rev().collect();
            sort_slice(&mut descending, algorithm);
            check_sorted(&descending);
        }
    }

    #[test]
    fn id_round_trip() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(SortAlgorithm::from_id(algorithm.id()), Ok(algorithm));
        }
        assert_eq!(
            SortAlgorithm::from_id(0),
            Err(ArrayError::UnknownAlgorithm(0))
        );
        assert_eq!(
            SortAlgorithm::from_id(7),
            Err(ArrayError::UnknownAlgorithm(7))
        );
    }

    #[test]
    fn id_mapping_is_stable() {
        assert_eq!(SortAlgorithm::Bubble.id(), 1);
        assert_eq!(SortAlgorithm::Selection.id(), 2);
        assert_eq!(SortAlgorithm::Merge.id(), 3);
        assert_eq!(SortAlgorithm::Quick.id(), 4);
        assert_eq!(SortAlgorithm::Heap.id(), 5);
        assert_eq!(SortAlgorithm::Insertion.id(), 6);
    }
}
