use super::buffer::RawBuffer;
use super::{growth, search, IntoIter};
use crate::error::ListError;
use crate::memory::AllocationTracker;
use std::{
    cmp::Ordering,
    fmt, mem,
    ops::{Index, IndexMut},
    ptr, slice,
};
use tracing::{debug, trace};

/// Contiguous, index-addressable, growable sequence.
///
/// Elements live in `[0, len)` of a single buffer of `capacity` slots.
/// Appending grows the buffer to the smallest power of two that fits, so `n`
/// appends cost `O(log n)` reallocations and amortized `O(1)` each.
///
/// Every public accessor is bounds-checked; unchecked pointer work is
/// confined to the shifting and compaction loops inside this module.
///
/// # Views
///
/// [`as_slice`](Self::as_slice) and [`as_mut_slice`](Self::as_mut_slice)
/// return views that alias the live region of the buffer. A view is
/// invalidated by every structural mutation (`push`, `insert`, `remove`,
/// `remove_at`, `remove_all`, `set_capacity`, ...), since those may shift
/// elements or replace the buffer. The borrow checker rejects code that keeps
/// a view alive across such a call.
pub struct DynamicArray<T> {
    buf: RawBuffer<T>,
    len: usize,
    allocations: AllocationTracker,
}

impl<T> DynamicArray<T> {
    /// Create an empty array. Does not allocate.
    pub fn new() -> Self {
        Self {
            buf: RawBuffer::empty(),
            len: 0,
            allocations: AllocationTracker::new(),
        }
    }

    /// Create an empty array with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if the byte size of `capacity` elements overflows.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut list = Self::new();
        if capacity > 0 {
            if let Err(err) = RawBuffer::<T>::check_capacity(capacity) {
                panic!("{err}");
            }
            list.reallocate(capacity);
        }
        list
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Buffer allocation history for this array.
    #[inline]
    pub fn allocations(&self) -> &AllocationTracker {
        &self.allocations
    }

    /// Resize the backing buffer to exactly `capacity` slots.
    ///
    /// This is a destructive resize: when `capacity < len`, every element at
    /// index `>= capacity` is dropped and the length becomes `capacity`. It is
    /// the only operation other than explicit removal that shortens the array.
    ///
    /// Fails with [`ListError::CapacityOverflow`] (leaving the array
    /// untouched) if the request cannot be represented as an allocation.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), ListError> {
        if capacity == self.capacity() {
            return Ok(());
        }
        RawBuffer::<T>::check_capacity(capacity)?;
        if capacity < self.len {
            debug!(
                len = self.len,
                capacity, "set_capacity truncating live elements"
            );
            self.truncate(capacity);
        }
        self.reallocate(capacity);
        Ok(())
    }

    /// Grow so that at least `additional` more elements fit without
    /// reallocating, using the power-of-two policy.
    pub fn reserve(&mut self, additional: usize) {
        let required = self
            .len
            .checked_add(additional)
            .unwrap_or_else(|| panic!("capacity overflow"));
        self.ensure_capacity(required);
    }

    /// Release slack so that `capacity == len`.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            self.reallocate(self.len);
        }
    }

    /// Borrow the live region `[0, len)`.
    ///
    /// The view aliases the internal buffer and is invalidated by the next
    /// structural mutation.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            // SAFETY: slots 0..len are initialized.
            slice::from_raw_parts(self.buf.as_ptr(), self.len)
        }
    }

    /// Mutably borrow the live region `[0, len)`.
    ///
    /// Same invalidation rules as [`as_slice`](Self::as_slice).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            // SAFETY: slots 0..len are initialized and `&mut self` is unique.
            slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len)
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(ListError::IndexOutOfBounds { index, len })
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ListError::IndexOutOfBounds { index, len })
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Append `item` at the end, growing the buffer first if it is full.
    pub fn push(&mut self, item: T) {
        self.grow_for_one();
        unsafe {
            // SAFETY: grow_for_one guarantees len < capacity.
            ptr::write(self.buf.as_mut_ptr().add(self.len), item);
        }
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe {
            // SAFETY: the slot at the old `len - 1` is initialized and is now
            // outside the live region, so it is read exactly once.
            ptr::read(self.buf.as_ptr().add(self.len))
        })
    }

    /// Insert `item` at `index`, shifting `[index, len)` up by one.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InsertOutOfBounds`] when `index > len`. The array
    /// is left unchanged and `item` is consumed (dropped); callers that need
    /// the value back should check `index <= len()` first.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::InsertOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.grow_for_one();
        unsafe {
            // SAFETY: index <= len < capacity; the shifted range ends at
            // len + 1 <= capacity.
            let slot = self.buf.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, item);
        }
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements
    /// down so the survivors keep their order.
    ///
    /// The vacated trailing slot is left uninitialized; the array retains no
    /// copy of the removed value.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let tail = self.len - index - 1;
        let item = unsafe {
            // SAFETY: index < len, so the slot is initialized; the tail copy
            // stays within [index, len).
            let slot = self.buf.as_mut_ptr().add(index);
            let item = ptr::read(slot);
            ptr::copy(slot.add(1), slot, tail);
            item
        };
        self.len -= 1;
        Ok(item)
    }

    /// Remove and return the element at `index` in `O(1)` by moving the last
    /// element into its place. Does not preserve order.
    pub fn swap_remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let last = self.len - 1;
        let item = unsafe {
            // SAFETY: index and last are both < len and initialized.
            let base = self.buf.as_mut_ptr();
            let item = ptr::read(base.add(index));
            if index != last {
                ptr::copy_nonoverlapping(base.add(last), base.add(index), 1);
            }
            item
        };
        self.len = last;
        Ok(item)
    }

    /// Drop every element at index `>= len`. No effect if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = self.len - len;
        // Shorten first so a panicking destructor cannot cause a double drop.
        self.len = len;
        unsafe {
            // SAFETY: slots len..len+tail were initialized and are no longer
            // reachable through the array.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().add(len),
                tail,
            ));
        }
    }

    /// Drop all elements, keeping the buffer.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Remove every element matching `predicate` in a single forward pass,
    /// keeping the survivors in their original order. Returns how many were
    /// removed.
    ///
    /// The pass finds the first match, then moves each later non-matching
    /// element down to the compaction cursor and drops each match. No
    /// allocation takes place. If `predicate` panics, the elements visited so
    /// far stay compacted and the unvisited tail is shifted down behind them.
    pub fn remove_all<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let len = self.len;
        let first = match self.iter().position(|item| predicate(item)) {
            Some(first) => first,
            None => return 0,
        };

        self.len = 0;
        let mut pass = Compaction {
            list: self,
            free: first,
            current: first,
            len,
        };
        let base = pass.list.buf.as_mut_ptr();

        pass.current += 1;
        unsafe {
            // SAFETY: `first` is initialized and now behind the read cursor.
            ptr::drop_in_place(base.add(first));
        }

        while pass.current < len {
            while pass.current < len && predicate(unsafe { &*base.add(pass.current) }) {
                pass.current += 1;
                unsafe {
                    // SAFETY: the read cursor has moved past this slot.
                    ptr::drop_in_place(base.add(pass.current - 1));
                }
            }
            if pass.current < len {
                unsafe {
                    // SAFETY: free < current, both within the original
                    // live region; the slot at `free` is vacant.
                    ptr::copy_nonoverlapping(base.add(pass.current), base.add(pass.free), 1);
                }
                pass.free += 1;
                pass.current += 1;
            }
        }

        len - pass.free
    }

    /// Position of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == item)
    }

    /// [`index_of`](Self::index_of) with `-1` for "not found".
    pub fn index_of_signed(&self, item: &T) -> isize
    where
        T: PartialEq,
    {
        self.index_of(item).map_or(-1, |index| index as isize)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Remove the first element equal to `item`, preserving order.
    /// Returns `false` and leaves the array unchanged if there is none.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Binary search using the natural ordering of `T`.
    ///
    /// The live region must already be sorted; this is the caller's
    /// responsibility and is not checked. See [`search`] for the result
    /// convention.
    pub fn binary_search(&self, item: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        self.binary_search_by(item, T::cmp)
    }

    /// Binary search with an explicit comparer, called as
    /// `compare(element, item)`. Element types without a natural total order
    /// must go through this method.
    pub fn binary_search_by<F>(&self, item: &T, compare: F) -> Result<usize, usize>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        search::search_by(self.as_slice(), item, compare)
    }

    /// Binary search restricted to `[index, index + count)`. Returned indices,
    /// found or insertion point, are absolute.
    pub fn binary_search_in<F>(
        &self,
        index: usize,
        count: usize,
        item: &T,
        compare: F,
    ) -> Result<Result<usize, usize>, ListError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let end = index
            .checked_add(count)
            .filter(|&end| end <= self.len)
            .ok_or(ListError::RangeOutOfBounds {
                index,
                count,
                len: self.len,
            })?;
        let found = search::search_by(&self.as_slice()[index..end], item, compare);
        Ok(found.map(|k| k + index).map_err(|p| p + index))
    }

    fn grow_for_one(&mut self) {
        let required = self
            .len
            .checked_add(1)
            .unwrap_or_else(|| panic!("capacity overflow"));
        self.ensure_capacity(required);
    }

    fn ensure_capacity(&mut self, required: usize) {
        if self.capacity() >= required {
            return;
        }
        let capacity = growth::next_capacity(required);
        if let Err(err) = RawBuffer::<T>::check_capacity(capacity) {
            panic!("{err}");
        }
        self.reallocate(capacity);
    }

    /// Move the live region into a fresh buffer of exactly `capacity` slots.
    /// Requires `capacity >= len` and a capacity that passed `check_capacity`.
    fn reallocate(&mut self, capacity: usize) {
        let old_capacity = self.capacity();
        self.buf.resize(capacity, self.len);
        self.allocations
            .record_reallocation(capacity * mem::size_of::<T>());
        trace!(
            old_capacity,
            new_capacity = capacity,
            len = self.len,
            "list buffer reallocated"
        );
    }

    fn into_parts(mut self) -> (RawBuffer<T>, usize) {
        let len = mem::replace(&mut self.len, 0);
        let buf = mem::replace(&mut self.buf, RawBuffer::empty());
        (buf, len)
    }
}

/// Restores a consistent array if `remove_all` unwinds mid-pass.
struct Compaction<'a, T> {
    list: &'a mut DynamicArray<T>,
    free: usize,
    current: usize,
    len: usize,
}

impl<T> Drop for Compaction<'_, T> {
    fn drop(&mut self) {
        let unvisited = self.len - self.current;
        if unvisited > 0 && self.free != self.current {
            unsafe {
                // SAFETY: [current, len) is initialized and untouched; the
                // destination [free, free + unvisited) is vacant or overlaps
                // only the source, which `copy` handles.
                let base = self.list.buf.as_mut_ptr();
                ptr::copy(base.add(self.current), base.add(self.free), unvisited);
            }
        }
        self.list.len = self.free + unvisited;
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY: slots 0..len are initialized; the buffer frees memory
            // afterwards without touching them.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr(),
                self.len,
            ));
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
        let mut copy = Self::with_capacity(growth::next_capacity(self.len));
        for item in self.iter() {
            copy.push(item.clone());
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (buf, len) = self.into_parts();
        IntoIter::new(buf, len)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
