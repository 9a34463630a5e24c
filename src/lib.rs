//! # `keel` - Growable Sequence Toolkit
//!
//! A toolkit built around a manually managed growable array, the restricted
//! adapters layered on top of it, and a small spreadsheet grid that exercises
//! the whole stack. Storage management is split from sequence semantics so
//! the growth, relocation, and release machinery can be audited in one place.
//!
//! ## Safety Guarantees
//!
//! ### Memory Safety
//! - **Audited unsafe foundations**: All raw-pointer work lives in the storage
//!   manager ([`collections::vec::RawStorage`]) and the cursor family; every
//!   `unsafe` block carries a safety argument, and the public API above them
//!   is safe.
//! - **Strong failure guarantee**: Growth paths compute layouts and stage
//!   incoming elements *before* touching the live region, so a failed
//!   [`push`](GrowVec::push), [`insert`](GrowVec::insert), or
//!   [`reserve`](GrowVec::reserve) leaves the sequence exactly as it was.
//! - **Borrow-checked cursors**: Shared and mutable cursors borrow the
//!   sequence, so any operation that could relocate or shrink the region is
//!   rejected at compile time while a cursor is live.
//!
//! ### Allocation Discipline
//! - **Explicit fallibility**: Every operation that can grow the region
//!   returns `Result<_, AllocError>` rather than aborting.
//! - **Pluggable allocation**: Containers are generic over
//!   [`RegionAlloc`], defaulting to [`Global`].
//!
//! ## Key Features
//!
//! - **[`GrowVec`]**: a contiguous growable sequence with amortized-O(1)
//!   append, checked and unchecked access, and four cursor flavors
//!   (forward/reverse × shared/mutable).
//! - **[`Stack`] and [`Queue`]**: restricted adapters over any backing that
//!   implements [`SequenceOps`].
//! - **[`Sheet`] and [`Cell`]**: a 2-D grid of tagged values with mirror,
//!   rotate, slice, and resize operations.
//!
//! ## Architecture
//!
//! 1. **Storage manager** (`collections::vec::raw`): owns the region —
//!    pointer, capacity, allocator handle. Knows nothing about which slots
//!    are live.
//! 2. **Sequence layer** (`collections::vec::grow_vec`): owns `len`, drives
//!    construction and destruction of elements, exposes the public API.
//! 3. **Cursor family** (`collections::vec::cursor`): index-based positions
//!    whose arithmetic never traps but whose dereference is range-checked.
//! 4. **Adapters and grids** (`collections::adapters`, `sheet`): safe code
//!    only, built entirely on the layers below.
//!
//! ## Example
//!
//! ```rust
//! use keel::GrowVec;
//!
//! # fn main() -> Result<(), keel::AllocError> {
//! let mut seq: GrowVec<i32> = GrowVec::new();
//! for v in [10, 20, 30] {
//!     seq.push(v)?;
//! }
//! seq.insert(1, 15)?;
//! assert_eq!(seq.as_slice(), &[10, 15, 20, 30]);
//!
//! let doubled: i32 = seq.cursor().map(|v| v * 2).sum();
//! assert_eq!(doubled, 150);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod alloc;
pub mod collections;
pub mod sheet;

pub use alloc::{AllocError, Global, RegionAlloc};
pub use collections::{
    Cursor, CursorMut, GrowVec, OutOfRange, Queue, RevCursor, RevCursorMut, SequenceOps, Stack,
};
pub use sheet::{Cell, Sheet};

// Compile-time assertions for memory layout.
const _: () = {
    use core::mem;

    // The sequence header is pointer + capacity + length, nothing more.
    assert!(mem::size_of::<GrowVec<u64>>() == mem::size_of::<usize>() * 3);

    // The region pointer is `NonNull`, so `Option<GrowVec<T>>` costs nothing.
    assert!(mem::size_of::<Option<GrowVec<u64>>>() == mem::size_of::<GrowVec<u64>>());

    // The global allocator handle is a ZST.
    assert!(mem::size_of::<Global>() == 0);

    // Errors stay word-sized or smaller.
    assert!(mem::size_of::<AllocError>() == 0);
    assert!(mem::size_of::<OutOfRange>() == mem::size_of::<usize>() * 2);
};
