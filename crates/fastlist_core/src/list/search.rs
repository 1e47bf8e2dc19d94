//! Binary search over sorted slices.
//!
//! Results follow the `Result<usize, usize>` convention: `Ok(k)` for an index
//! holding an equal element, `Err(p)` for the insertion point that keeps the
//! sequence sorted. Callers that need a single signed value use
//! [`encode_insertion_point`], which stores a miss as the bitwise complement
//! of `p` (always negative).

use std::cmp::Ordering;

/// Search `sorted` for `item`, comparing each probed element against `item`.
///
/// `sorted` must already be ordered by `compare`. This is not checked; an
/// unsorted slice yields an unspecified (but memory-safe) result. When
/// several elements compare equal, any one of their indices may be returned.
pub fn search_by<T, F>(sorted: &[T], item: &T, mut compare: F) -> Result<usize, usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = sorted.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match compare(&sorted[mid], item) {
            Ordering::Equal => return Ok(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    Err(lo)
}

/// Collapse a search result into one signed index: `k` when found, `!p` when
/// absent.
#[inline]
pub fn encode_insertion_point(result: Result<usize, usize>) -> isize {
    match result {
        Ok(found) => found as isize,
        Err(insert_at) => !(insert_at as isize),
    }
}

/// Inverse of [`encode_insertion_point`].
#[inline]
pub fn decode_insertion_point(encoded: isize) -> Result<usize, usize> {
    if encoded >= 0 {
        Ok(encoded as usize)
    } else {
        Err(!encoded as usize)
    }
}
