//! Spreadsheet-style grids.
//!
//! - [`Cell`]: a tagged scalar or integer-list value with lenient coercions.
//! - [`Sheet`]: a 2-D board of cells with mirror, rotate, slice, and resize
//!   operations.

mod cell;
#[allow(clippy::module_inception)]
mod sheet;

pub use cell::Cell;
pub use sheet::Sheet;
