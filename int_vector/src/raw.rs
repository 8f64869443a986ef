use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use crate::IntVectorError;

/// Uniquely owned block of `cap` integers.
///
/// Only the allocation is tracked here; which slots hold initialized values is
/// up to the owner. A zero capacity holds no allocation and a dangling pointer.
pub(crate) struct RawBuffer {
    ptr: NonNull<i32>,
    cap: usize,
}

// SAFETY: the buffer is plain integers behind a pointer nobody else holds.
unsafe impl Send for RawBuffer {}
// SAFETY: shared access only ever reads through `&self`.
unsafe impl Sync for RawBuffer {}

impl RawBuffer {
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    /// Allocates room for `cap` integers, aborting on allocator failure.
    pub(crate) fn allocate(cap: usize) -> Self {
        let layout = match Layout::array::<i32>(cap) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        };
        match Self::allocate_in(cap, layout) {
            Some(buf) => buf,
            None => handle_alloc_error(layout),
        }
    }

    pub(crate) fn try_allocate(cap: usize) -> Result<Self, IntVectorError> {
        let layout = Layout::array::<i32>(cap).map_err(|_| IntVectorError::CapacityOverflow)?;
        Self::allocate_in(cap, layout).ok_or(IntVectorError::AllocFailed { capacity: cap })
    }

    fn allocate_in(cap: usize, layout: Layout) -> Option<Self> {
        if cap == 0 {
            return Some(Self::empty());
        }
        // SAFETY: `cap > 0` and `i32` is not zero-sized, so the layout is non-empty.
        let ptr = unsafe { alloc(layout) };
        NonNull::new(ptr.cast::<i32>()).map(|ptr| Self { ptr, cap })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn write(&mut self, index: usize, value: i32) {
        assert!(index < self.cap, "write past the end of the buffer");
        // SAFETY: `index` is inside the allocation.
        unsafe { self.ptr.as_ptr().add(index).write(value) }
    }

    /// Copies the first `count` slots of `src` into the front of `self`.
    pub(crate) fn copy_prefix_from(&mut self, src: &RawBuffer, count: usize) {
        assert!(count <= self.cap && count <= src.cap);
        if count == 0 {
            return;
        }
        // SAFETY: both ranges are inside their allocations, and two distinct
        // owners never share an allocation.
        unsafe { ptr::copy_nonoverlapping(src.ptr.as_ptr(), self.ptr.as_ptr(), count) }
    }

    /// # Safety
    ///
    /// `len <= self.capacity()` and slots `[0, len)` must have been written.
    pub(crate) unsafe fn prefix(&self, len: usize) -> &[i32] {
        debug_assert!(len <= self.cap);
        // SAFETY: upheld by the caller; a dangling pointer is fine for `len == 0`.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), len) }
    }
}

impl Drop for RawBuffer {
    fn drop(&mut self) {
        if self.cap != 0 {
            // SAFETY: this exact layout was accepted by `Layout::array` when
            // the buffer was allocated.
            unsafe {
                let layout = Layout::from_size_align_unchecked(
                    self.cap * mem::size_of::<i32>(),
                    mem::align_of::<i32>(),
                );
                dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
            }
        }
    }
}

#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}
