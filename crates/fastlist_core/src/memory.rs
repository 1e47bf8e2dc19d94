//! Allocation tracking for list buffers
//!
//! Counts buffer replacements and the bytes they reserve.

/// Per-container record of buffer reallocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationTracker {
    reallocations: usize,
    reserved_bytes: usize,
    peak_reserved_bytes: usize,
}

impl AllocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the backing buffer was replaced by one of `bytes` bytes.
    pub fn record_reallocation(&mut self, bytes: usize) {
        self.reallocations += 1;
        self.reserved_bytes = bytes;
        self.peak_reserved_bytes = self.peak_reserved_bytes.max(bytes);
    }

    /// Number of times the backing buffer has been replaced.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Bytes held by the current backing buffer.
    pub fn reserved_bytes(&self) -> usize {
        self.reserved_bytes
    }

    pub fn peak_reserved_bytes(&self) -> usize {
        self.peak_reserved_bytes
    }
}
