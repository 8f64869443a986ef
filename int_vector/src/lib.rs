//! A growable array of `i32` that manages its own buffer.
//!
//! Pushing into a full [`IntVector`] doubles its capacity (starting from 1).
//! Popping below half the capacity halves it again. Every reallocation copies
//! the live elements into a fresh buffer and releases the old one, so the
//! vector never holds more than one allocation.
//!
//! ```
//! use int_vector::IntVector;
//!
//! let mut v = IntVector::new();
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! assert_eq!(v.capacity(), 4);
//! assert_eq!(v.at(2), Ok(3));
//! assert_eq!(v.pop(), Ok(3));
//! ```

use std::fmt;
use std::ops::Deref;

use log::trace;

mod error;
pub mod policy;
mod raw;

pub use error::IntVectorError;
use raw::{RawBuffer, capacity_overflow};

pub struct IntVector {
    buf: RawBuffer,
    len: usize,
}

impl IntVector {
    /// Creates an empty vector without allocating.
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::empty(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value`, growing the buffer first when it is full.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows. Allocation failure aborts through
    /// [`std::alloc::handle_alloc_error`].
    pub fn push(&mut self, value: i32) {
        if self.len == self.capacity() {
            let new_cap =
                policy::grown_capacity(self.capacity()).unwrap_or_else(|| capacity_overflow());
            self.adopt(RawBuffer::allocate(new_cap));
        }
        self.buf.write(self.len, value);
        self.len += 1;
    }

    /// Like [`push`](Self::push) but reports allocation problems instead of
    /// aborting. The vector is left untouched on error.
    pub fn try_push(&mut self, value: i32) -> Result<(), IntVectorError> {
        self.try_push_with(value, policy::grown_capacity)
    }

    /// `try_push` with the growth rule passed in. Nothing is modified until
    /// the new buffer exists.
    fn try_push_with(
        &mut self,
        value: i32,
        grow: impl FnOnce(usize) -> Option<usize>,
    ) -> Result<(), IntVectorError> {
        if self.len == self.capacity() {
            let new_cap = grow(self.capacity()).ok_or(IntVectorError::CapacityOverflow)?;
            self.adopt(RawBuffer::try_allocate(new_cap)?);
        }
        self.buf.write(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// Once fewer than half of the slots are in use the buffer is halved, see
    /// [`policy::shrunk_capacity`].
    pub fn pop(&mut self) -> Result<i32, IntVectorError> {
        let Some(&value) = self.as_slice().last() else {
            return Err(IntVectorError::Empty);
        };
        self.len -= 1;

        if let Some(new_cap) = policy::shrunk_capacity(self.len, self.capacity()) {
            self.adopt(RawBuffer::allocate(new_cap));
        }
        Ok(value)
    }

    /// Bounds-checked read.
    pub fn at(&self, index: usize) -> Result<i32, IntVectorError> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(IntVectorError::IndexOutOfRange { index, len: self.len })
    }

    /// Reads `index` without a bounds check.
    ///
    /// `v[i]` and [`at`](Self::at) are both checked; this is the only
    /// unchecked read path.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    pub unsafe fn get_unchecked(&self, index: usize) -> i32 {
        // SAFETY: upheld by the caller.
        unsafe { *self.as_slice().get_unchecked(index) }
    }

    /// Forgets every element but keeps the allocation for reuse.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn as_slice(&self) -> &[i32] {
        // SAFETY: slots `[0, len)` are written by `push` before `len` covers them
        // and carried over by every reallocation.
        unsafe { self.buf.prefix(self.len) }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    /// Moves the live elements into `fresh` and releases the old buffer.
    fn adopt(&mut self, mut fresh: RawBuffer) {
        trace!(
            "reallocating int vector: capacity {} -> {}, copying {} elements",
            self.capacity(),
            fresh.capacity(),
            self.len
        );
        fresh.copy_prefix_from(&self.buf, self.len);
        self.buf = fresh;
    }
}

impl Default for IntVector {
    fn default() -> Self {
        Self::new()
    }
}

/// The copy keeps the source's capacity and owns a separate buffer.
impl Clone for IntVector {
    fn clone(&self) -> Self {
        let mut buf = RawBuffer::allocate(self.capacity());
        buf.copy_prefix_from(&self.buf, self.len);
        Self { buf, len: self.len }
    }
}

impl Deref for IntVector {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl fmt::Debug for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for IntVector {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntVector {}

impl Extend<i32> for IntVector {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<i32> for IntVector {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<'a> IntoIterator for &'a IntVector {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
