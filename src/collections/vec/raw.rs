//! `RawStorage` — the storage manager behind [`GrowVec`](super::GrowVec).
//!
//! Owns one contiguous region of `cap` slots and nothing else: no length, no
//! element semantics. The sequence layer on top decides which slots are live
//! and asks this type to allocate, grow, write, destroy and release.
//!
//! Invariants maintained here:
//! - The region is exclusively owned; it is deallocated exactly once, on drop.
//! - Growth relocates the live prefix with a single `copy_nonoverlapping`.
//!   Rust moves are bitwise and cannot fail, so relocation is all-or-nothing:
//!   if the new region cannot be allocated, the old region is untouched.
//! - Zero-sized element types never allocate; their capacity is `usize::MAX`.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use crate::alloc::{AllocError, Global, RegionAlloc};

/// Smallest non-zero capacity handed out for small elements, so that the
/// first few pushes do not each trigger a reallocation.
const MIN_NON_ZERO_CAP: usize = 4;

/// An owned, uninitialized region of `cap` slots of `T`.
pub struct RawStorage<T, A: RegionAlloc = Global> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

// SAFETY: RawStorage owns its region exclusively; sending it transfers that
// ownership wholesale. The raw pointer is never shared.
unsafe impl<T: Send, A: RegionAlloc + Send> Send for RawStorage<T, A> {}
unsafe impl<T: Sync, A: RegionAlloc + Sync> Sync for RawStorage<T, A> {}

impl<T> RawStorage<T> {
    /// Creates an empty storage using the global allocator.
    pub fn new() -> Self {
        Self::new_in(Global)
    }
}

impl<T, A: RegionAlloc> RawStorage<T, A> {
    /// Creates an empty storage. Allocates nothing.
    pub fn new_in(alloc: A) -> Self {
        let cap = if mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            0
        };
        Self {
            ptr: NonNull::dangling(),
            cap,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Creates a storage with room for exactly `cap` slots.
    ///
    /// # Errors
    /// Returns `AllocError` if the region cannot be allocated or its byte
    /// size would overflow.
    pub fn with_capacity_in(cap: usize, alloc: A) -> Result<Self, AllocError> {
        let mut storage = Self::new_in(alloc);
        storage.grow_exact(0, cap)?;
        Ok(storage)
    }

    /// Number of slots in the owned region.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Base pointer of the region.
    ///
    /// Dangling (but well-aligned) while the capacity is zero or `T` is
    /// zero-sized.
    #[inline(always)]
    pub fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// The allocator this storage draws from.
    #[inline(always)]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Ensures room for `len + additional` slots, growing geometrically.
    ///
    /// Doubling (with a small floor) keeps repeated single-slot requests at
    /// amortized O(1). The first `len` slots are relocated; the caller's
    /// pointers into the region are invalidated whenever this reallocates.
    ///
    /// # Errors
    /// Returns `AllocError` on allocation failure or byte-size overflow; the
    /// existing region is left untouched in that case.
    pub fn grow_amortized(&mut self, len: usize, additional: usize) -> Result<(), AllocError> {
        debug_assert!(additional > 0, "grow_amortized called without need");
        let required = len.checked_add(additional).ok_or(AllocError)?;
        if required <= self.cap {
            return Ok(());
        }
        let new_cap = self.cap.saturating_mul(2).max(required).max(MIN_NON_ZERO_CAP);
        self.reallocate(len, new_cap)
    }

    /// Ensures room for at least `required` slots, without geometric padding.
    ///
    /// # Errors
    /// Same contract as [`RawStorage::grow_amortized`].
    pub fn grow_exact(&mut self, len: usize, required: usize) -> Result<(), AllocError> {
        if required <= self.cap {
            return Ok(());
        }
        self.reallocate(len, required)
    }

    fn reallocate(&mut self, len: usize, new_cap: usize) -> Result<(), AllocError> {
        debug_assert!(len <= new_cap);
        if mem::size_of::<T>() == 0 {
            // ZST capacity is already usize::MAX; nothing to do.
            return Ok(());
        }
        // Compute both layouts before touching the allocator so that every
        // fallible step happens while the old region is still intact.
        let new_layout = Layout::array::<T>(new_cap).map_err(|_| AllocError)?;
        let old_layout = if self.cap == 0 {
            None
        } else {
            Some(Layout::array::<T>(self.cap).map_err(|_| AllocError)?)
        };
        let new_ptr: NonNull<T> = self.alloc.allocate(new_layout)?.cast();
        // SAFETY: the regions are distinct allocations; the first `len` slots
        // of the old region are live and fit in the new region (len <= new_cap).
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
        }
        if let Some(old_layout) = old_layout {
            // SAFETY: `ptr` was allocated by `self.alloc` with `old_layout`,
            // and its live slots have just been relocated.
            unsafe { self.alloc.deallocate(self.ptr.cast(), old_layout) };
        }
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Constructs `value` in slot `idx`.
    ///
    /// # Safety
    /// `idx < self.capacity()` and the slot must not currently hold a live
    /// value (it would be overwritten without being dropped).
    #[inline(always)]
    pub unsafe fn write(&mut self, idx: usize, value: T) {
        self.ptr.as_ptr().add(idx).write(value);
    }

    /// Moves the value out of slot `idx`, leaving the slot non-live.
    ///
    /// # Safety
    /// `idx < self.capacity()` and the slot must hold a live value. The
    /// caller must not read the slot again.
    #[inline(always)]
    pub unsafe fn read(&self, idx: usize) -> T {
        self.ptr.as_ptr().add(idx).read()
    }

    /// Destroys the live values in slots `[first, last)` without releasing
    /// the region.
    ///
    /// # Safety
    /// `first <= last <= self.capacity()` and every slot in the range must
    /// hold a live value.
    pub unsafe fn destroy_range(&mut self, first: usize, last: usize) {
        debug_assert!(first <= last);
        let slots = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr().add(first), last - first);
        ptr::drop_in_place(slots);
    }
}

impl<T, A: RegionAlloc> Drop for RawStorage<T, A> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        // Live slots must already have been destroyed by the owner; this
        // releases the region only.
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            // SAFETY: the region was allocated by `self.alloc` with exactly
            // this layout, and is released exactly once.
            unsafe { self.alloc.deallocate(self.ptr.cast(), layout) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unallocated() {
        let storage: RawStorage<u32> = RawStorage::new();
        assert_eq!(storage.capacity(), 0);
    }

    #[test]
    fn zst_capacity_is_unbounded() {
        let storage: RawStorage<()> = RawStorage::new();
        assert_eq!(storage.capacity(), usize::MAX);
    }

    #[test]
    fn amortized_growth_doubles() {
        let mut storage: RawStorage<u64> = RawStorage::new();
        storage.grow_amortized(0, 1).unwrap();
        assert_eq!(storage.capacity(), MIN_NON_ZERO_CAP);
        let cap = storage.capacity();
        storage.grow_amortized(cap, 1).unwrap();
        assert_eq!(storage.capacity(), cap * 2);
    }

    #[test]
    fn exact_growth_is_exact() {
        let mut storage: RawStorage<u64> = RawStorage::new();
        storage.grow_exact(0, 37).unwrap();
        assert_eq!(storage.capacity(), 37);
        // No-op when already large enough.
        storage.grow_exact(0, 10).unwrap();
        assert_eq!(storage.capacity(), 37);
    }

    #[test]
    fn relocation_preserves_live_prefix() {
        let mut storage: RawStorage<u32> = RawStorage::new();
        storage.grow_exact(0, 4).unwrap();
        for i in 0..4 {
            unsafe { storage.write(i, i as u32 * 10) };
        }
        storage.grow_amortized(4, 1).unwrap();
        for i in 0..4 {
            assert_eq!(unsafe { storage.read(i) }, i as u32 * 10);
        }
    }

    #[test]
    fn overflowing_request_is_an_error() {
        let mut storage: RawStorage<u64> = RawStorage::new();
        assert_eq!(storage.grow_amortized(usize::MAX, 1), Err(AllocError));
        assert_eq!(storage.capacity(), 0);
    }
}
