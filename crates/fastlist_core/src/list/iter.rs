use super::buffer::RawBuffer;
use std::{fmt, iter::FusedIterator, ptr, slice};

/// Owning iterator returned by `DynamicArray::into_iter`.
///
/// Elements not yielded before the iterator is dropped are dropped with it.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    /// Take ownership of a buffer whose slots `0..len` are initialized.
    pub(crate) fn new(buf: RawBuffer<T>, len: usize) -> Self {
        Self {
            buf,
            front: 0,
            back: len,
        }
    }

    /// Elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            // SAFETY: front..back is initialized and not yet moved out.
            slice::from_raw_parts(self.buf.as_ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = unsafe {
            // SAFETY: front < back, so the slot is initialized and read once.
            ptr::read(self.buf.as_ptr().add(self.front))
        };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(unsafe {
            // SAFETY: the slot at the new `back` is initialized and read once.
            ptr::read(self.buf.as_ptr().add(self.back))
        })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.back - self.front;
        let front = self.front;
        self.front = self.back;
        unsafe {
            // SAFETY: front..front+remaining were never yielded.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().add(front),
                remaining,
            ));
        }
    }
}
