//! Capacity policy for [`IntVector`](crate::IntVector).
//!
//! Both rules are pure functions of `(len, capacity)` so they can be checked
//! without touching an allocation.

/// Capacity to grow to when a push finds the buffer full.
///
/// Starts at 1 and doubles afterwards. `None` means the doubled capacity
/// does not fit in `usize`.
pub const fn grown_capacity(capacity: usize) -> Option<usize> {
    if capacity == 0 {
        Some(1)
    } else {
        capacity.checked_mul(2)
    }
}

/// Capacity to shrink to after a pop left `len` live elements, or `None`
/// when the buffer is still at least half used.
///
/// The result is never 0: `len < capacity / 2` implies `capacity / 2 >= 1`.
pub const fn shrunk_capacity(len: usize, capacity: usize) -> Option<usize> {
    let half = capacity / 2;
    if len < half { Some(half) } else { None }
}
