//! Allocation seam for the container types.

mod allocator;

pub use allocator::{AllocError, Global, RegionAlloc};
