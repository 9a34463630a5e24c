//! Sequence containers and their adapters.

pub mod adapters;
pub mod vec;

pub use adapters::{Queue, SequenceOps, Stack};
pub use vec::{Cursor, CursorMut, GrowVec, OutOfRange, RevCursor, RevCursorMut};
