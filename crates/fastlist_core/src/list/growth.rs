//! Capacity growth policy.
//!
//! Buffers grow to the smallest power of two that fits the required length,
//! which bounds the number of reallocations over `n` appends to `O(log n)`.

/// Smallest power of two `>= required`, or `0` when nothing is required.
///
/// # Panics
///
/// Panics with `"capacity overflow"` when no power of two `>= required`
/// fits in `usize`.
#[inline]
pub fn next_capacity(required: usize) -> usize {
    if required == 0 {
        return 0;
    }
    required
        .checked_next_power_of_two()
        .unwrap_or_else(|| panic!("capacity overflow"))
}
