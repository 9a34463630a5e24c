//! `Sheet` — a 2-D grid of [`Cell`]s with shape-changing conveniences.
//!
//! The board is a [`GrowVec`] of rows, each row a [`GrowVec<Cell>`]; every
//! shape operation below is plain bookkeeping over that array-of-arrays.
//! Mirrors work in place; transposing operations rebuild the board and so
//! can fail with [`AllocError`] like every other growth path in the crate.

use core::fmt;
use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::Cell;
use crate::alloc::AllocError;
use crate::collections::GrowVec;

/// A `rows × cols` grid of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    board: GrowVec<GrowVec<Cell>>,
    cols: usize,
}

impl Sheet {
    /// Creates an empty `0 × 0` sheet. Allocates nothing.
    pub fn new() -> Self {
        Self {
            board: GrowVec::new(),
            cols: 0,
        }
    }

    /// Creates an `n × n` sheet of default cells.
    ///
    /// # Errors
    /// Returns `AllocError` if the board cannot be allocated.
    pub fn square(n: usize) -> Result<Self, AllocError> {
        Self::with_dims(n, n)
    }

    /// Creates a `rows × cols` sheet of default cells.
    ///
    /// # Errors
    /// Returns `AllocError` if the board cannot be allocated.
    pub fn with_dims(rows: usize, cols: usize) -> Result<Self, AllocError> {
        let mut board = GrowVec::with_capacity(rows)?;
        for _ in 0..rows {
            board.push(GrowVec::filled(cols, Cell::default())?)?;
        }
        Ok(Self { board, cols })
    }

    /// Number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.board.len()
    }

    /// Number of columns.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `(row, col)`, if in bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.board.get(row).and_then(|r| r.get(col))
    }

    /// The cell at `(row, col)` by mutable reference, if in bounds.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.board.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Row `r` as a slice, if in bounds.
    #[inline]
    pub fn row(&self, r: usize) -> Option<&[Cell]> {
        self.board.get(r).map(GrowVec::as_slice)
    }

    /// Releases the whole board, leaving a `0 × 0` sheet. Never fails.
    pub fn clear(&mut self) {
        self.board.clear();
        self.cols = 0;
    }

    /// Mirrors across the horizontal axis: row order is reversed.
    pub fn mirror_h(&mut self) {
        let rows = self.rows();
        for i in 0..rows / 2 {
            self.board.swap(i, rows - 1 - i);
        }
    }

    /// Mirrors across the vertical axis: each row is reversed.
    pub fn mirror_v(&mut self) {
        for row in self.board.iter_mut() {
            row.as_mut_slice().reverse();
        }
    }

    /// Mirrors across the main diagonal (transpose). Dimensions swap.
    ///
    /// # Errors
    /// Returns `AllocError` if the rebuilt board cannot be allocated; the
    /// sheet is unchanged in that case.
    pub fn mirror_d(&mut self) -> Result<(), AllocError> {
        let rows = self.rows();
        let cols = self.cols;
        let mut transposed: GrowVec<GrowVec<Cell>> = GrowVec::with_capacity(cols)?;
        for c in 0..cols {
            let mut new_row: GrowVec<Cell> = GrowVec::with_capacity(rows)?;
            for r in 0..rows {
                new_row.push(self.board[r][c].clone())?;
            }
            transposed.push(new_row)?;
        }
        self.board = transposed;
        self.cols = rows;
        Ok(())
    }

    /// Mirrors across the secondary diagonal. Dimensions swap.
    ///
    /// # Errors
    /// Returns `AllocError` if the rebuilt board cannot be allocated.
    pub fn mirror_sd(&mut self) -> Result<(), AllocError> {
        self.mirror_d()?;
        self.mirror_h();
        self.mirror_v();
        Ok(())
    }

    /// Rotates by `quarter_turns` × 90°; positive is clockwise, negative
    /// counter-clockwise, any magnitude.
    ///
    /// # Errors
    /// Returns `AllocError` if a transposing step cannot allocate.
    pub fn rotate(&mut self, quarter_turns: i32) -> Result<(), AllocError> {
        match quarter_turns.rem_euclid(4) {
            0 => {}
            1 => {
                self.mirror_d()?;
                self.mirror_v();
            }
            2 => {
                self.mirror_h();
                self.mirror_v();
            }
            3 => {
                self.mirror_d()?;
                self.mirror_h();
            }
            _ => unreachable!("rem_euclid(4) yields 0..=3"),
        }
        Ok(())
    }

    /// Removes row `r`, shifting later rows up.
    ///
    /// # Panics
    /// Panics if `r >= self.rows()`.
    pub fn remove_row(&mut self, r: usize) {
        self.board.erase(r);
    }

    /// Removes every listed row. Indices refer to the layout before the
    /// call; duplicates are ignored.
    ///
    /// # Panics
    /// Panics if any index is out of bounds.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        let mut sorted: GrowVec<usize> = rows.into();
        sorted.as_mut_slice().sort_unstable();
        let mut last = None;
        // Walk back-to-front so earlier indices stay valid.
        for &r in sorted.iter().rev() {
            if last != Some(r) {
                self.remove_row(r);
                last = Some(r);
            }
        }
    }

    /// Removes column `c` from every row.
    ///
    /// # Panics
    /// Panics if `c >= self.cols()`.
    pub fn remove_col(&mut self, c: usize) {
        assert!(
            c < self.cols,
            "column {c} out of bounds for sheet with {} columns",
            self.cols
        );
        for row in self.board.iter_mut() {
            row.erase(c);
        }
        self.cols -= 1;
    }

    /// Removes every listed column. Indices refer to the layout before the
    /// call; duplicates are ignored.
    ///
    /// # Panics
    /// Panics if any index is out of bounds.
    pub fn remove_cols(&mut self, cols: &[usize]) {
        let mut sorted: GrowVec<usize> = cols.into();
        sorted.as_mut_slice().sort_unstable();
        let mut last = None;
        for &c in sorted.iter().rev() {
            if last != Some(c) {
                self.remove_col(c);
                last = Some(c);
            }
        }
    }

    /// Grows or shrinks to `r` rows; new rows are filled with default cells.
    ///
    /// # Errors
    /// Returns `AllocError` if new rows cannot be allocated.
    pub fn resize_rows(&mut self, r: usize) -> Result<(), AllocError> {
        if r <= self.rows() {
            self.board.truncate(r);
            return Ok(());
        }
        self.board.reserve(r - self.rows())?;
        while self.rows() < r {
            self.board
                .push(GrowVec::filled(self.cols, Cell::default())?)?;
        }
        Ok(())
    }

    /// Grows or shrinks every row to `c` columns; new cells are default.
    ///
    /// # Errors
    /// Returns `AllocError` if a row cannot grow.
    pub fn resize_cols(&mut self, c: usize) -> Result<(), AllocError> {
        for row in self.board.iter_mut() {
            row.resize(c, Cell::default())?;
        }
        self.cols = c;
        Ok(())
    }

    /// Resizes to `r × c`.
    ///
    /// # Errors
    /// Returns `AllocError` if the board cannot grow.
    pub fn resize(&mut self, r: usize, c: usize) -> Result<(), AllocError> {
        self.resize_rows(r)?;
        self.resize_cols(c)
    }

    /// Builds a new sheet from the listed rows × columns, in the order given.
    ///
    /// # Errors
    /// Returns `AllocError` if the new board cannot be allocated.
    ///
    /// # Panics
    /// Panics if any index is out of bounds.
    pub fn slice(&self, rows: &[usize], cols: &[usize]) -> Result<Sheet, AllocError> {
        let mut board: GrowVec<GrowVec<Cell>> = GrowVec::with_capacity(rows.len())?;
        for &r in rows {
            let mut row = GrowVec::with_capacity(cols.len())?;
            for &c in cols {
                row.push(self.board[r][c].clone())?;
            }
            board.push(row)?;
        }
        Ok(Sheet {
            board,
            cols: cols.len(),
        })
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<(usize, usize)> for Sheet {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        &self.board[row][col]
    }
}

impl IndexMut<(usize, usize)> for Sheet {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Cell {
        &mut self.board[row][col]
    }
}

impl fmt::Display for Sheet {
    /// Renders the grid with every column padded to its widest entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: GrowVec<usize> =
            GrowVec::filled(self.cols, 0).map_err(|_| fmt::Error)?;
        for row in self.board.iter() {
            for (c, cell) in row.iter().enumerate() {
                let w = cell.to_string().chars().count();
                if w > widths[c] {
                    widths[c] = w;
                }
            }
        }
        for row in self.board.iter() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", cell.to_string(), width = widths[c])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
