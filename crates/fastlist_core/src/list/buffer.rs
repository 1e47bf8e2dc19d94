use crate::error::ListError;
use std::{alloc::Layout, mem::MaybeUninit, ptr};

/// Fixed-size block of possibly uninitialized slots.
///
/// The buffer never tracks which slots hold values; `DynamicArray` owns that
/// bookkeeping and is responsible for dropping live elements. Dropping a
/// `RawBuffer` only frees memory.
pub(crate) struct RawBuffer<T> {
    buf: Box<[MaybeUninit<T>]>,
}

impl<T> RawBuffer<T> {
    /// Empty buffer; does not allocate.
    pub fn empty() -> Self {
        Self {
            buf: Box::new([]),
        }
    }

    /// Allocate exactly `slots` uninitialized slots.
    ///
    /// `slots` must already have passed [`RawBuffer::check_capacity`].
    pub fn with_capacity(slots: usize) -> Self {
        if slots == 0 {
            return Self::empty();
        }
        let mut vec: Vec<MaybeUninit<T>> = Vec::with_capacity(slots);
        unsafe {
            // SAFETY: `MaybeUninit<T>` has no validity requirement, so
            // exposing uninitialized slots is sound.
            vec.set_len(slots);
        }
        Self {
            buf: vec.into_boxed_slice(),
        }
    }

    /// Reject capacities whose byte size cannot be allocated.
    pub fn check_capacity(slots: usize) -> Result<(), ListError> {
        match Layout::array::<T>(slots) {
            Ok(_) => Ok(()),
            Err(_) => Err(ListError::CapacityOverflow { requested: slots }),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }

    /// Replace the storage with exactly `slots` slots, moving the first
    /// `live` values across.
    ///
    /// The caller must have dropped every value stored at or beyond `slots`,
    /// and `live` must not exceed either capacity.
    pub fn resize(&mut self, slots: usize, live: usize) {
        debug_assert!(live <= slots && live <= self.capacity());
        let mut next = Self::with_capacity(slots);
        unsafe {
            // SAFETY: both buffers hold at least `live` slots and are distinct
            // allocations. The old box is freed without running destructors,
            // so every moved value now has exactly one owner.
            ptr::copy_nonoverlapping(self.as_ptr(), next.as_mut_ptr(), live);
        }
        self.buf = next.buf;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_slots() {
        let buf = RawBuffer::<u64>::empty();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn resize_moves_live_prefix() {
        let mut buf = RawBuffer::<u32>::with_capacity(4);
        unsafe {
            for i in 0..3 {
                ptr::write(buf.as_mut_ptr().add(i), i as u32 * 10);
            }
        }
        buf.resize(8, 3);
        assert_eq!(buf.capacity(), 8);
        let moved = unsafe { std::slice::from_raw_parts(buf.as_ptr(), 3) };
        assert_eq!(moved, &[0, 10, 20]);
    }

    #[test]
    fn check_capacity_rejects_oversized_layouts() {
        assert!(RawBuffer::<u64>::check_capacity(1024).is_ok());
        assert_eq!(
            RawBuffer::<u64>::check_capacity(usize::MAX),
            Err(ListError::CapacityOverflow {
                requested: usize::MAX
            })
        );
        // Zero-sized elements never need memory.
        assert!(RawBuffer::<()>::check_capacity(usize::MAX).is_ok());
    }
}
