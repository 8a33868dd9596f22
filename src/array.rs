use std::fmt;
use std::mem::MaybeUninit;
use std::ops::{Index, IndexMut};
use std::ptr;

use log::debug;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::config::{MIN_CAPACITY, SHRINK_FLOOR, SHRINK_RATIO};
use crate::error::ArrayError;
use crate::sort::{sort_slice, SortAlgorithm};

/// Growable contiguous sequence with explicit capacity tracking.
///
/// Capacity doubles when the array fills up and halves when fewer than a
/// quarter of the slots are live (never below [`SHRINK_FLOOR`]). The
/// hysteresis between the two thresholds keeps mixed insert/remove workloads
/// at amortized O(1) per operation.
///
/// Slots `[0, len)` are initialized; slots beyond hold no valid value.
pub struct DynamicArray<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Empty array with the minimum starting capacity.
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DynamicArray {
            buf: Box::new_uninit_slice(capacity),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn as_ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }

    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::OutOfRange { index, len: self.len });
        }
        Ok(())
    }

    fn check_range(&self, lo: usize, hi: usize) -> Result<(), ArrayError> {
        if lo > hi || hi > self.len {
            return Err(ArrayError::InvalidRange { lo, hi, len: self.len });
        }
        Ok(())
    }

    /// Bounds-checked element access.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Appends `value`, growing the backing storage when full. Amortized O(1).
    pub fn push_back(&mut self, value: T) {
        self.grow();
        unsafe {
            ptr::write(self.as_mut_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    /// `index == len` appends. Returns the index the value landed at.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, ArrayError> {
        if index > self.len {
            return Err(ArrayError::OutOfRange { index, len: self.len });
        }
        self.grow();
        unsafe {
            let p = self.as_mut_ptr();
            ptr::copy(p.add(index), p.add(index + 1), self.len - index);
            ptr::write(p.add(index), value);
        }
        self.len += 1;
        Ok(index)
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check_index(index)?;
        let value = unsafe {
            let p = self.as_mut_ptr();
            let value = ptr::read(p.add(index));
            ptr::copy(p.add(index + 1), p.add(index), self.len - index - 1);
            value
        };
        self.len -= 1;
        self.shrink();
        Ok(value)
    }

    /// Removes the range `[lo, hi)` and returns the number of elements
    /// removed (0 when `lo == hi`).
    pub fn remove_range(&mut self, lo: usize, hi: usize) -> Result<usize, ArrayError> {
        self.check_range(lo, hi)?;
        if lo == hi {
            return Ok(0);
        }
        let removed = hi - lo;
        let old_len = self.len;
        unsafe {
            let p = self.as_mut_ptr();
            // leak instead of double-dropping if a destructor panics
            self.len = lo;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(p.add(lo), removed));
            ptr::copy(p.add(hi), p.add(lo), old_len - hi);
            self.len = old_len - removed;
        }
        self.shrink();
        Ok(removed)
    }

    /// Applies `visit` to every live element in index order.
    pub fn traverse<F: FnMut(&mut T)>(&mut self, mut visit: F) {
        for elem in self.as_mut_slice() {
            visit(elem);
        }
    }

    /// Randomly permutes the whole array (uniform Fisher-Yates).
    pub fn unsort(&mut self) {
        self.as_mut_slice().shuffle(&mut thread_rng());
    }

    /// Randomly permutes the sub-range `[lo, hi)`.
    pub fn unsort_range(&mut self, lo: usize, hi: usize) -> Result<(), ArrayError> {
        self.check_range(lo, hi)?;
        self.as_mut_slice()[lo..hi].shuffle(&mut thread_rng());
        Ok(())
    }

    fn grow(&mut self) {
        if self.len < self.capacity() {
            return;
        }
        let new_capacity = self.capacity().max(MIN_CAPACITY) * 2;
        self.realloc(new_capacity);
    }

    fn shrink(&mut self) {
        let capacity = self.capacity();
        if capacity < SHRINK_FLOOR || self.len * SHRINK_RATIO > capacity {
            return;
        }
        self.realloc(capacity / 2);
    }

    fn realloc(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        debug!(
            "realloc: capacity {} -> {} (len {})",
            self.capacity(),
            new_capacity,
            self.len
        );
        let mut new_buf: Box<[MaybeUninit<T>]> = Box::new_uninit_slice(new_capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), new_buf.as_mut_ptr() as *mut T, self.len);
        }
        // old buffer holds only vacated slots now, dropping it frees raw storage
        self.buf = new_buf;
    }
}

impl<T: Clone> DynamicArray<T> {
    /// `count` clones of `value` in storage of at least `capacity` slots.
    pub fn filled(capacity: usize, count: usize, value: T) -> Self {
        let mut arr = Self::with_capacity(capacity.max(count).max(MIN_CAPACITY));
        for _ in 0..count {
            arr.push_back(value.clone());
        }
        arr
    }

    /// Deep copy of `source` into fresh storage sized at twice the copied
    /// length. The 2x capacity reproduces the source implementation's copy
    /// convention; growth-policy tests depend on it.
    pub fn from_slice(source: &[T]) -> Self {
        let mut arr = Self::with_capacity(2 * source.len());
        for value in source {
            arr.push_back(value.clone());
        }
        arr
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Backward linear scan over the whole array; returns the highest index
    /// holding a value equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.as_slice().iter().rposition(|elem| elem == value)
    }

    /// Backward linear scan over `[lo, hi)`.
    pub fn find_in(&self, value: &T, lo: usize, hi: usize) -> Result<Option<usize>, ArrayError> {
        self.check_range(lo, hi)?;
        Ok(self.as_slice()[lo..hi]
            .iter()
            .rposition(|elem| elem == value)
            .map(|pos| lo + pos))
    }

    /// Removes duplicates from an arbitrary (not necessarily sorted) array,
    /// keeping the last occurrence of each value. For each element from
    /// index 1 on, an equal element found in the already-scanned prefix is
    /// removed; the scan position stays put because the tail shifts into it.
    /// O(n^2). Returns the number of elements removed.
    pub fn deduplicate(&mut self) -> usize {
        let mut removed = 0;
        let mut i = 1;
        while i < self.len {
            let dup = {
                let s = self.as_slice();
                s[..i].iter().rposition(|elem| *elem == s[i])
            };
            match dup {
                Some(j) => {
                    // j < i < len, cannot fail
                    if self.remove(j).is_ok() {
                        removed += 1;
                    }
                }
                None => i += 1,
            }
        }
        removed
    }

    /// Collapses adjacent-equal runs to their first element via a two-pointer
    /// scan. O(n). Returns the number of elements removed.
    ///
    /// Precondition: the array is sorted. On unsorted input only adjacent
    /// duplicates are merged and the result is silently incomplete; use
    /// [`DynamicArray::deduplicate`] instead.
    pub fn uniquify(&mut self) -> usize {
        if self.len < 2 {
            return 0;
        }
        let old_len = self.len;
        unsafe {
            let p = self.as_mut_ptr();
            // leak instead of double-dropping if a comparison panics
            self.len = 0;
            let mut write = 1;
            for read in 1..old_len {
                if *p.add(read) != *p.add(write - 1) {
                    if read != write {
                        ptr::copy_nonoverlapping(p.add(read), p.add(write), 1);
                    }
                    write += 1;
                } else {
                    ptr::drop_in_place(p.add(read));
                }
            }
            self.len = write;
        }
        let removed = old_len - self.len;
        self.shrink();
        removed
    }
}

impl<T: Ord> DynamicArray<T> {
    /// Binary search over the whole (sorted) array; see
    /// [`DynamicArray::search_in`].
    pub fn search(&self, value: &T) -> Option<usize> {
        self.search_in(value, 0, self.len).unwrap_or(None)
    }

    /// Binary search over the sorted sub-range `[lo, hi)`. Returns the
    /// highest index whose element is `<= value`, or `None` when every
    /// element is greater. Precondition: the range is sorted ascending.
    pub fn search_in(&self, value: &T, lo: usize, hi: usize) -> Result<Option<usize>, ArrayError> {
        self.check_range(lo, hi)?;
        let pos = self.as_slice()[lo..hi].partition_point(|elem| elem <= value);
        Ok(pos.checked_sub(1).map(|p| lo + p))
    }
}

impl<T: PartialOrd> DynamicArray<T> {
    /// Number of adjacent inversions (`elem[i-1] > elem[i]`); 0 means sorted.
    pub fn disordered(&self) -> usize {
        self.as_slice()
            .windows(2)
            .filter(|pair| pair[0] > pair[1])
            .count()
    }
}

impl<T: Ord + Clone> DynamicArray<T> {
    /// Sorts the whole array ascending with the selected algorithm.
    pub fn sort(&mut self, algorithm: SortAlgorithm) {
        sort_slice(self.as_mut_slice(), algorithm);
    }

    /// Sorts the sub-range `[lo, hi)` ascending with the selected algorithm.
    pub fn sort_range(
        &mut self,
        lo: usize,
        hi: usize,
        algorithm: SortAlgorithm,
    ) -> Result<(), ArrayError> {
        self.check_range(lo, hi)?;
        sort_slice(&mut self.as_mut_slice()[lo..hi], algorithm);
        Ok(())
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice() as *mut [T]);
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(source: &[T]) -> Self {
        Self::from_slice(source)
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        for value in iter {
            arr.push_back(value);
        }
        arr
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
