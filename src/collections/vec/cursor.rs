//! Cursor family for [`GrowVec`](super::GrowVec).
//!
//! Four cooperating cursor types over one traversal contract, spanning two
//! axes: forward/reverse × shared/mutable.
//!
//! - [`Cursor`]: shared, front-to-back.
//! - [`CursorMut`]: exclusive, front-to-back.
//! - [`RevCursor`]: shared, back-to-front.
//! - [`RevCursorMut`]: exclusive, back-to-front.
//!
//! A cursor is a non-owning position inside the vector's live range at the
//! moment it was created. Positions are plain indices rather than bare
//! addresses: cursor arithmetic (`offset`, `+ n`, `- n`) is unchecked and may
//! move a cursor anywhere, but dereference is range-checked and simply yields
//! `None` off the ends. Invalidation is handled by the borrow checker — a
//! cursor borrows the vector, so any reallocating or shifting mutation while
//! a cursor is alive is a compile error, not silent corruption.
//!
//! Mutable cursors are a strict capability superset of their shared
//! counterparts: every shared operation is available, plus `get_mut`.
//! Reverse cursors traverse from the last live element toward one before the
//! first, over the same storage with an inverted step.

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// A shared forward cursor.
pub struct Cursor<'a, T> {
    slice: &'a [T],
    idx: usize,
}

/// An exclusive forward cursor.
///
/// Composes the shared contract with one extra accessor, [`CursorMut::get_mut`].
pub struct CursorMut<'a, T> {
    base: *mut T,
    len: usize,
    idx: usize,
    _marker: PhantomData<&'a mut T>,
}

/// A shared reverse cursor.
///
/// Position `0` is the last live element; advancing moves toward the front.
pub struct RevCursor<'a, T> {
    slice: &'a [T],
    idx: usize,
}

/// An exclusive reverse cursor.
pub struct RevCursorMut<'a, T> {
    base: *mut T,
    len: usize,
    idx: usize,
    _marker: PhantomData<&'a mut T>,
}

// SAFETY: the mutable cursors are semantically `&mut [T]` plus an index.
unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
unsafe impl<T: Send> Send for RevCursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for RevCursorMut<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn new(slice: &'a [T], idx: usize) -> Self {
        Self { slice, idx }
    }

    /// The cursor's position, counted from the front.
    ///
    /// Equal to the container length for an end cursor; may be far outside
    /// the live range after unchecked arithmetic.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.idx
    }

    /// Returns `true` if the cursor sits at or past the end of the live range.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.idx >= self.slice.len()
    }

    /// The referenced element, or `None` if the cursor is off the live range.
    #[inline(always)]
    pub fn get(&self) -> Option<&'a T> {
        self.slice.get(self.idx)
    }

    /// Steps one position toward the back.
    #[inline(always)]
    pub fn advance(&mut self) {
        self.idx = self.idx.wrapping_add(1);
    }

    /// Steps one position toward the front.
    ///
    /// Retreating from position 0 parks the cursor before the first element;
    /// `get` yields `None` there.
    #[inline(always)]
    pub fn retreat(&mut self) {
        self.idx = self.idx.wrapping_sub(1);
    }

    /// Returns a cursor `n` positions away. No bounds check is performed.
    #[inline]
    #[must_use]
    pub fn offset(&self, n: isize) -> Self {
        Self {
            slice: self.slice,
            idx: self.idx.wrapping_add_signed(n),
        }
    }
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(crate) fn new(slice: &'a mut [T], idx: usize) -> Self {
        Self {
            base: slice.as_mut_ptr(),
            len: slice.len(),
            idx,
            _marker: PhantomData,
        }
    }

    /// The cursor's position, counted from the front.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.idx
    }

    /// Returns `true` if the cursor sits at or past the end of the live range.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.idx >= self.len
    }

    /// The referenced element, or `None` if the cursor is off the live range.
    #[inline(always)]
    pub fn get(&self) -> Option<&T> {
        if self.idx < self.len {
            // SAFETY: base..base+len is the exclusively borrowed live range
            // and idx is in bounds.
            Some(unsafe { &*self.base.add(self.idx) })
        } else {
            None
        }
    }

    /// The referenced element by mutable reference, or `None` off the range.
    #[inline(always)]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.idx < self.len {
            // SAFETY: as for `get`; the returned borrow is tied to `&mut self`,
            // so no two live mutable references can reference the same slot.
            Some(unsafe { &mut *self.base.add(self.idx) })
        } else {
            None
        }
    }

    /// Steps one position toward the back.
    #[inline(always)]
    pub fn advance(&mut self) {
        self.idx = self.idx.wrapping_add(1);
    }

    /// Steps one position toward the front.
    #[inline(always)]
    pub fn retreat(&mut self) {
        self.idx = self.idx.wrapping_sub(1);
    }

    /// Moves the cursor `n` positions. No bounds check is performed.
    #[inline]
    pub fn offset(&mut self, n: isize) {
        self.idx = self.idx.wrapping_add_signed(n);
    }

    /// Reborrows this cursor as a shared cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        // SAFETY: shared reborrow of the exclusively borrowed live range.
        let slice = unsafe { core::slice::from_raw_parts(self.base, self.len) };
        Cursor {
            slice,
            idx: self.idx,
        }
    }
}

impl<'a, T> RevCursor<'a, T> {
    #[inline]
    pub(crate) fn new(slice: &'a [T], idx: usize) -> Self {
        Self { slice, idx }
    }

    /// The cursor's position, counted from the back.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.idx
    }

    /// Returns `true` once the cursor has passed the first live element.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.idx >= self.slice.len()
    }

    /// The referenced element, or `None` if the cursor is off the live range.
    #[inline(always)]
    pub fn get(&self) -> Option<&'a T> {
        let len = self.slice.len();
        if self.idx < len {
            self.slice.get(len - 1 - self.idx)
        } else {
            None
        }
    }

    /// Steps one position toward the front of the container.
    #[inline(always)]
    pub fn advance(&mut self) {
        self.idx = self.idx.wrapping_add(1);
    }

    /// Steps one position toward the back of the container.
    #[inline(always)]
    pub fn retreat(&mut self) {
        self.idx = self.idx.wrapping_sub(1);
    }

    /// Returns a cursor `n` positions away. No bounds check is performed.
    #[inline]
    #[must_use]
    pub fn offset(&self, n: isize) -> Self {
        Self {
            slice: self.slice,
            idx: self.idx.wrapping_add_signed(n),
        }
    }
}

impl<'a, T> RevCursorMut<'a, T> {
    #[inline]
    pub(crate) fn new(slice: &'a mut [T], idx: usize) -> Self {
        Self {
            base: slice.as_mut_ptr(),
            len: slice.len(),
            idx,
            _marker: PhantomData,
        }
    }

    /// The cursor's position, counted from the back.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.idx
    }

    /// Returns `true` once the cursor has passed the first live element.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.idx >= self.len
    }

    /// The referenced element, or `None` if the cursor is off the live range.
    #[inline(always)]
    pub fn get(&self) -> Option<&T> {
        if self.idx < self.len {
            // SAFETY: idx < len, so len - 1 - idx is in the borrowed range.
            Some(unsafe { &*self.base.add(self.len - 1 - self.idx) })
        } else {
            None
        }
    }

    /// The referenced element by mutable reference, or `None` off the range.
    #[inline(always)]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.idx < self.len {
            // SAFETY: as for `get`; tied to `&mut self`.
            Some(unsafe { &mut *self.base.add(self.len - 1 - self.idx) })
        } else {
            None
        }
    }

    /// Steps one position toward the front of the container.
    #[inline(always)]
    pub fn advance(&mut self) {
        self.idx = self.idx.wrapping_add(1);
    }

    /// Steps one position toward the back of the container.
    #[inline(always)]
    pub fn retreat(&mut self) {
        self.idx = self.idx.wrapping_sub(1);
    }

    /// Moves the cursor `n` positions. No bounds check is performed.
    #[inline]
    pub fn offset(&mut self, n: isize) {
        self.idx = self.idx.wrapping_add_signed(n);
    }
}

// --- shared-cursor trait plumbing -----------------------------------------

macro_rules! shared_cursor_impls {
    ($name:ident) => {
        impl<'a, T> Clone for $name<'a, T> {
            fn clone(&self) -> Self {
                Self {
                    slice: self.slice,
                    idx: self.idx,
                }
            }
        }

        impl<'a, T> Copy for $name<'a, T> {}

        impl<'a, T> PartialEq for $name<'a, T> {
            fn eq(&self, other: &Self) -> bool {
                self.slice.as_ptr() == other.slice.as_ptr() && self.idx == other.idx
            }
        }

        impl<'a, T> Eq for $name<'a, T> {}

        impl<'a, T> PartialOrd for $name<'a, T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<'a, T> Ord for $name<'a, T> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.idx.cmp(&other.idx)
            }
        }

        impl<'a, T> core::ops::Add<usize> for $name<'a, T> {
            type Output = Self;

            fn add(self, n: usize) -> Self {
                Self {
                    slice: self.slice,
                    idx: self.idx.wrapping_add(n),
                }
            }
        }

        impl<'a, T> core::ops::Sub<usize> for $name<'a, T> {
            type Output = Self;

            fn sub(self, n: usize) -> Self {
                Self {
                    slice: self.slice,
                    idx: self.idx.wrapping_sub(n),
                }
            }
        }

        impl<'a, T: fmt::Debug> fmt::Debug for $name<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("position", &self.idx)
                    .field("value", &self.get())
                    .finish()
            }
        }

        impl<'a, T> Iterator for $name<'a, T> {
            type Item = &'a T;

            fn next(&mut self) -> Option<&'a T> {
                let item = self.get()?;
                self.advance();
                Some(item)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let remaining = self.slice.len().saturating_sub(self.idx);
                (remaining, Some(remaining))
            }
        }

        impl<'a, T> ExactSizeIterator for $name<'a, T> {}
        impl<'a, T> FusedIterator for $name<'a, T> {}
    };
}

shared_cursor_impls!(Cursor);
shared_cursor_impls!(RevCursor);

macro_rules! mut_cursor_impls {
    ($name:ident) => {
        impl<'a, T> PartialEq for $name<'a, T> {
            fn eq(&self, other: &Self) -> bool {
                self.base == other.base && self.idx == other.idx
            }
        }

        impl<'a, T> Eq for $name<'a, T> {}

        impl<'a, T> PartialOrd for $name<'a, T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<'a, T> Ord for $name<'a, T> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.idx.cmp(&other.idx)
            }
        }

        impl<'a, T: fmt::Debug> fmt::Debug for $name<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("position", &self.idx)
                    .field("value", &self.get())
                    .finish()
            }
        }
    };
}

mut_cursor_impls!(CursorMut);
mut_cursor_impls!(RevCursorMut);
