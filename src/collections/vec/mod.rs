//! The growable array and its supporting layers.
//!
//! - [`raw`]: the storage manager (regions and slots, no sequence semantics).
//! - [`grow_vec`]: the public sequence type, [`GrowVec`].
//! - [`cursor`]: the forward/reverse × shared/mutable cursor family.

pub mod cursor;
pub mod grow_vec;
pub mod raw;

pub use cursor::{Cursor, CursorMut, RevCursor, RevCursorMut};
pub use grow_vec::{GrowVec, IntoIter};
pub use raw::RawStorage;

/// The error type for checked element access.
///
/// Only [`GrowVec::at`] and [`GrowVec::at_mut`] produce this; unchecked
/// access (`Index`, `front`, `back`) panics instead of reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The requested index.
    pub index: usize,
    /// The sequence length at the time of the request.
    pub len: usize,
}

impl core::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "index {} out of range for sequence of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}
