use core::alloc::Layout;
use core::ptr::NonNull;

/// A minimal region allocator used by the raw storage layer.
///
/// This trait is deliberately narrow: the containers in this crate need to
/// acquire and release whole regions, nothing more. It is the single
/// configurable allocation seam; containers take it as a type parameter and
/// default to [`Global`].
pub trait RegionAlloc {
    /// Allocates a region of memory described by `layout`.
    ///
    /// `layout.size()` must be non-zero; the storage layer never issues
    /// zero-sized requests.
    ///
    /// # Errors
    /// Returns `AllocError` if the request cannot be satisfied.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Deallocates a region previously returned by [`RegionAlloc::allocate`].
    ///
    /// # Safety
    /// `ptr` must denote a region currently allocated by this allocator, and
    /// `layout` must be the layout that was used to allocate it.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

impl<A: RegionAlloc> RegionAlloc for &A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).deallocate(ptr, layout);
    }
}

/// The default allocator, backed by `std::alloc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Global;

impl RegionAlloc for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() != 0, "zero-sized region request");
        // SAFETY: layout has non-zero size, checked above in debug builds and
        // guaranteed by the storage layer in release builds.
        let ptr = unsafe { std::alloc::alloc(layout) };
        NonNull::new(ptr).ok_or(AllocError)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        std::alloc::dealloc(ptr.as_ptr(), layout);
    }
}

/// The error type for allocation failures.
///
/// Every growth path in the crate surfaces this to the public call that
/// triggered it; a failed mutating call leaves the container unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError;

impl core::fmt::Display for AllocError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("storage allocation failed")
    }
}

impl std::error::Error for AllocError {}
