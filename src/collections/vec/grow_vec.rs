//! `GrowVec` — a contiguous growable array over explicit raw storage.
//!
//! This is the crate's core sequence type: logical length and allocated
//! capacity are decoupled, element construction and destruction are explicit,
//! and every structure-changing operation upholds the strong error-safety
//! guarantee — a call that fails leaves the vector exactly as it was.
//!
//! Design:
//! - Storage lives in [`RawStorage`], which knows about regions and slots but
//!   not about sequences. `GrowVec` is the only layer that decides which
//!   slots are live.
//! - Growth is geometric (factor 2, small floor), so repeated pushes cost
//!   amortized O(1).
//! - Allocation failure is surfaced as [`AllocError`] from the public call
//!   that triggered growth; it is never swallowed.
//! - Traversal is exposed through the cursor family in
//!   [`cursor`](super::cursor) and through plain slice iterators.
//!
//! ```rust
//! use keel::GrowVec;
//!
//! let mut v: GrowVec<i32> = GrowVec::new();
//! v.push(1).unwrap();
//! v.push(2).unwrap();
//! v.insert(0, 0).unwrap();
//! assert_eq!(v.as_slice(), &[0, 1, 2]);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem::ManuallyDrop;
use core::ops::{Index, IndexMut};
use core::ptr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cursor::{Cursor, CursorMut, RevCursor, RevCursorMut};
use super::raw::RawStorage;
use super::OutOfRange;
use crate::alloc::{AllocError, Global, RegionAlloc};

/// A contiguous, growable sequence with decoupled length and capacity.
pub struct GrowVec<T, A: RegionAlloc = Global> {
    buf: RawStorage<T, A>,
    len: usize,
}

impl<T> GrowVec<T> {
    /// Creates an empty vector. Allocates nothing.
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates an empty vector with room for at least `capacity` elements.
    ///
    /// # Errors
    /// Returns `AllocError` if the region cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Self::with_capacity_in(capacity, Global)
    }

    /// Creates a vector holding `count` clones of `value`.
    ///
    /// # Errors
    /// Returns `AllocError` if the region cannot be allocated.
    pub fn filled(count: usize, value: T) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(count)?;
        v.resize(count, value)?;
        Ok(v)
    }

    /// Creates a vector by cloning the elements of `values`.
    ///
    /// # Errors
    /// Returns `AllocError` if the region cannot be allocated.
    pub fn from_slice(values: &[T]) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(values.len())?;
        for value in values {
            v.push(value.clone())?;
        }
        Ok(v)
    }
}

impl<T, A: RegionAlloc> GrowVec<T, A> {
    /// Creates an empty vector drawing from `alloc`. Allocates nothing.
    pub fn new_in(alloc: A) -> Self {
        Self {
            buf: RawStorage::new_in(alloc),
            len: 0,
        }
    }

    /// Creates an empty vector with room for at least `capacity` elements,
    /// drawing from `alloc`.
    ///
    /// # Errors
    /// Returns `AllocError` if the region cannot be allocated.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, AllocError> {
        Ok(Self {
            buf: RawStorage::with_capacity_in(capacity, alloc)?,
            len: 0,
        })
    }

    /// Number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots the owned region can hold without reallocating.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The allocator this vector draws from.
    #[inline(always)]
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// The live elements as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are live by invariant.
        unsafe { core::slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) are live and exclusively borrowed.
        unsafe { core::slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Bounds-checked element access.
    ///
    /// # Errors
    /// Returns `OutOfRange` when `pos >= self.len()`.
    #[inline]
    pub fn at(&self, pos: usize) -> Result<&T, OutOfRange> {
        self.get(pos).ok_or(OutOfRange {
            index: pos,
            len: self.len,
        })
    }

    /// Bounds-checked mutable element access.
    ///
    /// # Errors
    /// Returns `OutOfRange` when `pos >= self.len()`.
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.get_mut(pos).ok_or(OutOfRange { index: pos, len })
    }

    /// Returns a reference to element `pos`, if in bounds.
    #[inline(always)]
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.as_slice().get(pos)
    }

    /// Returns a mutable reference to element `pos`, if in bounds.
    #[inline(always)]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(pos)
    }

    /// Returns a reference to element `pos` without bounds checking.
    ///
    /// # Safety
    /// Caller must ensure `pos < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, pos: usize) -> &T {
        self.as_slice().get_unchecked(pos)
    }

    /// Returns a mutable reference to element `pos` without bounds checking.
    ///
    /// # Safety
    /// Caller must ensure `pos < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, pos: usize) -> &mut T {
        self.as_mut_slice().get_unchecked_mut(pos)
    }

    /// The first element, if any.
    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The first element by mutable reference, if any.
    #[inline(always)]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// The last element, if any.
    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// The last element by mutable reference, if any.
    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Appends an element. Amortized O(1).
    ///
    /// # Errors
    /// Returns `AllocError` if growth fails; the vector is unchanged.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        if self.len == self.buf.capacity() {
            self.buf.grow_amortized(self.len, 1)?;
        }
        // SAFETY: capacity > len after the growth check; slot `len` is free.
        unsafe { self.buf.write(self.len, value) };
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was the last live element; len now excludes it.
        Some(unsafe { self.buf.read(self.len) })
    }

    /// Inserts `value` at `pos`, shifting later elements one slot back.
    ///
    /// Returns a cursor to the inserted element. All previously issued
    /// cursors are borrow-checked out of existence by this call.
    ///
    /// # Errors
    /// Returns `AllocError` if growth fails; the vector is unchanged.
    ///
    /// # Panics
    /// Panics if `pos > self.len()`.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<CursorMut<'_, T>, AllocError> {
        assert!(
            pos <= self.len,
            "insert position {pos} out of bounds for length {}",
            self.len
        );
        if self.len == self.buf.capacity() {
            self.buf.grow_amortized(self.len, 1)?;
        }
        // SAFETY: one free slot exists past the live range; the shift stays
        // inside the region and the vacated slot is immediately rewritten.
        unsafe {
            let p = self.buf.ptr().add(pos);
            ptr::copy(p, p.add(1), self.len - pos);
            p.write(value);
        }
        self.len += 1;
        Ok(self.cursor_at_mut(pos))
    }

    /// Inserts `count` clones of `value` at `pos`.
    ///
    /// Returns a cursor to the first inserted element (or to `pos` when
    /// `count == 0`).
    ///
    /// # Errors
    /// Returns `AllocError` if growth fails; the vector is unchanged.
    ///
    /// # Panics
    /// Panics if `pos > self.len()`.
    pub fn insert_n(
        &mut self,
        pos: usize,
        count: usize,
        value: T,
    ) -> Result<CursorMut<'_, T>, AllocError>
    where
        T: Clone,
    {
        self.insert_from(pos, core::iter::repeat(value).take(count))
    }

    /// Inserts every element of `iter` at `pos`, in order.
    ///
    /// The elements are staged in a scratch buffer first, so a panicking
    /// iterator or clone cannot leave the vector half-mutated.
    ///
    /// # Errors
    /// Returns `AllocError` if staging or growth fails; the vector is
    /// unchanged.
    ///
    /// # Panics
    /// Panics if `pos > self.len()`.
    pub fn insert_from<I>(&mut self, pos: usize, iter: I) -> Result<CursorMut<'_, T>, AllocError>
    where
        I: IntoIterator<Item = T>,
    {
        assert!(
            pos <= self.len,
            "insert position {pos} out of bounds for length {}",
            self.len
        );
        let mut staged: GrowVec<T> = GrowVec::new();
        for item in iter {
            staged.push(item)?;
        }
        let count = staged.len;
        if count > 0 {
            if count > self.buf.capacity() - self.len {
                self.buf.grow_amortized(self.len, count)?;
            }
            // SAFETY: `count` free slots exist past the live range; the two
            // buffers are distinct allocations, so the bulk move does not
            // overlap. Staged slots are forgotten (len = 0) after the move.
            unsafe {
                let p = self.buf.ptr().add(pos);
                ptr::copy(p, p.add(count), self.len - pos);
                ptr::copy_nonoverlapping(staged.buf.ptr(), p, count);
            }
            staged.len = 0;
            self.len += count;
        }
        Ok(self.cursor_at_mut(pos))
    }

    /// Removes and returns the element at `pos`, shifting the tail left.
    ///
    /// # Panics
    /// Panics if `pos >= self.len()`.
    pub fn remove(&mut self, pos: usize) -> T {
        assert!(
            pos < self.len,
            "removal position {pos} out of bounds for length {}",
            self.len
        );
        // SAFETY: pos is in the live range; the shift closes the gap before
        // len is reduced, so no slot is ever counted live twice.
        unsafe {
            let p = self.buf.ptr().add(pos);
            let value = p.read();
            ptr::copy(p.add(1), p, self.len - pos - 1);
            self.len -= 1;
            value
        }
    }

    /// Destroys the element at `pos` and shifts the tail left.
    ///
    /// Returns a cursor to the element now occupying `pos`, which is the end
    /// cursor when the tail element was removed. Never reallocates.
    ///
    /// # Panics
    /// Panics if `pos >= self.len()`.
    pub fn erase(&mut self, pos: usize) -> CursorMut<'_, T> {
        drop(self.remove(pos));
        self.cursor_at_mut(pos)
    }

    /// Destroys the elements in `[first, last)` and shifts the tail left.
    ///
    /// Returns a cursor to the element now occupying `first` (the end cursor
    /// for tail removals). Never reallocates.
    ///
    /// # Panics
    /// Panics if `first > last` or `last > self.len()`.
    pub fn erase_range(&mut self, first: usize, last: usize) -> CursorMut<'_, T> {
        assert!(
            first <= last && last <= self.len,
            "erase range {first}..{last} out of bounds for length {}",
            self.len
        );
        if first < last {
            // SAFETY: [first, last) is live; after destruction the tail is
            // shifted down and len excludes the vacated slots.
            unsafe {
                self.buf.destroy_range(first, last);
                ptr::copy(
                    self.buf.ptr().add(last),
                    self.buf.ptr().add(first),
                    self.len - last,
                );
            }
            self.len -= last - first;
        }
        self.cursor_at_mut(first)
    }

    /// Ensures capacity for at least `additional` more elements, growing
    /// geometrically. No-op if the capacity already suffices.
    ///
    /// # Errors
    /// Returns `AllocError` if growth fails; the vector is unchanged.
    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        if additional == 0 {
            return Ok(());
        }
        self.buf.grow_amortized(self.len, additional)
    }

    /// Ensures capacity for exactly `self.len() + additional` elements.
    ///
    /// # Errors
    /// Returns `AllocError` if growth fails; the vector is unchanged.
    pub fn reserve_exact(&mut self, additional: usize) -> Result<(), AllocError> {
        let required = self.len.checked_add(additional).ok_or(AllocError)?;
        self.buf.grow_exact(self.len, required)
    }

    /// Grows or shrinks the vector to `new_len`, filling new slots with
    /// clones of `value`.
    ///
    /// # Errors
    /// Returns `AllocError` if growth fails; the vector is unchanged.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), AllocError>
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.reserve(new_len - self.len)?;
        let mut remaining = new_len - self.len;
        // len is bumped per slot so a panicking clone leaves only live slots
        // counted.
        while remaining > 1 {
            // SAFETY: capacity was reserved above; slot `len` is free.
            unsafe { self.buf.write(self.len, value.clone()) };
            self.len += 1;
            remaining -= 1;
        }
        // SAFETY: as above; the final slot takes the original value.
        unsafe { self.buf.write(self.len, value) };
        self.len += 1;
        Ok(())
    }

    /// Drops every element past `new_len`. No-op if `new_len >= self.len()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let old_len = self.len;
        // Reduce len first so a panicking Drop cannot double-drop.
        self.len = new_len;
        // SAFETY: [new_len, old_len) was live and is no longer counted.
        unsafe { self.buf.destroy_range(new_len, old_len) };
    }

    /// Destroys all elements. Capacity is retained; never fails.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    /// Iterates over the live elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates over the live elements by mutable reference.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// A shared forward cursor at the first element.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// A shared forward cursor at `pos` (`pos == len` is the end position).
    ///
    /// # Panics
    /// Panics if `pos > self.len()`.
    #[inline]
    pub fn cursor_at(&self, pos: usize) -> Cursor<'_, T> {
        assert!(
            pos <= self.len,
            "cursor position {pos} out of bounds for length {}",
            self.len
        );
        Cursor::new(self.as_slice(), pos)
    }

    /// An exclusive forward cursor at the first element.
    #[inline]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), 0)
    }

    /// An exclusive forward cursor at `pos` (`pos == len` is the end position).
    ///
    /// # Panics
    /// Panics if `pos > self.len()`.
    #[inline]
    pub fn cursor_at_mut(&mut self, pos: usize) -> CursorMut<'_, T> {
        assert!(
            pos <= self.len,
            "cursor position {pos} out of bounds for length {}",
            self.len
        );
        CursorMut::new(self.as_mut_slice(), pos)
    }

    /// A shared reverse cursor at the last element.
    #[inline]
    pub fn rev_cursor(&self) -> RevCursor<'_, T> {
        RevCursor::new(self.as_slice(), 0)
    }

    /// An exclusive reverse cursor at the last element.
    #[inline]
    pub fn rev_cursor_mut(&mut self) -> RevCursorMut<'_, T> {
        RevCursorMut::new(self.as_mut_slice(), 0)
    }
}

impl<T, A: RegionAlloc> Drop for GrowVec<T, A> {
    fn drop(&mut self) {
        // SAFETY: [0, len) is live; the region itself is released by RawStorage.
        unsafe { self.buf.destroy_range(0, self.len) };
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, A: RegionAlloc + Clone> Clone for GrowVec<T, A> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity_in(self.len, self.buf.allocator().clone())
            .expect("allocation failed while cloning GrowVec");
        for item in self.as_slice() {
            copy.push(item.clone())
                .expect("allocation failed while cloning GrowVec");
        }
        copy
    }
}

impl<T: fmt::Debug, A: RegionAlloc> fmt::Debug for GrowVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, A: RegionAlloc> Index<usize> for GrowVec<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index {index} out of bounds for GrowVec of length {}",
                self.len
            ),
        }
    }
}

impl<T, A: RegionAlloc> IndexMut<usize> for GrowVec<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index {index} out of bounds for GrowVec of length {len}"),
        }
    }
}

impl<T: PartialEq, A: RegionAlloc, B: RegionAlloc> PartialEq<GrowVec<T, B>> for GrowVec<T, A> {
    fn eq(&self, other: &GrowVec<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: RegionAlloc> Eq for GrowVec<T, A> {}

impl<T: PartialOrd, A: RegionAlloc, B: RegionAlloc> PartialOrd<GrowVec<T, B>> for GrowVec<T, A> {
    fn partial_cmp(&self, other: &GrowVec<T, B>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, A: RegionAlloc> Ord for GrowVec<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, A: RegionAlloc> Hash for GrowVec<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut v =
            GrowVec::with_capacity(lower).expect("allocation failed while collecting GrowVec");
        for item in iter {
            v.push(item)
                .expect("allocation failed while collecting GrowVec");
        }
        v
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values).expect("allocation failed while copying slice into GrowVec")
    }
}

impl<T, A: RegionAlloc> Extend<T> for GrowVec<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item)
                .expect("allocation failed while extending GrowVec");
        }
    }
}

impl<'a, T, A: RegionAlloc> IntoIterator for &'a GrowVec<T, A> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: RegionAlloc> IntoIterator for &'a mut GrowVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, A: RegionAlloc> IntoIterator for GrowVec<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped; ownership of the storage moves
        // into the iterator, which takes over element destruction.
        let buf = unsafe { ptr::read(&this.buf) };
        IntoIter {
            buf,
            front: 0,
            back: this.len,
        }
    }
}

impl<T: Serialize, A: RegionAlloc> Serialize for GrowVec<T, A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for GrowVec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

/// Owning iterator over a [`GrowVec`].
pub struct IntoIter<T, A: RegionAlloc = Global> {
    buf: RawStorage<T, A>,
    front: usize,
    back: usize,
}

impl<T, A: RegionAlloc> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: [front, back) slots are live; front is counted out before use.
        let value = unsafe { self.buf.read(self.front) };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T, A: RegionAlloc> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: slot `back` was the last live element of the range.
        Some(unsafe { self.buf.read(self.back) })
    }
}

impl<T, A: RegionAlloc> ExactSizeIterator for IntoIter<T, A> {}
impl<T, A: RegionAlloc> FusedIterator for IntoIter<T, A> {}

impl<T, A: RegionAlloc> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // SAFETY: the unconsumed range [front, back) is still live.
        unsafe { self.buf.destroy_range(self.front, self.back) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_insertion_order() {
        let mut v = GrowVec::new();
        for i in 0..100 {
            v.push(i).unwrap();
        }
        assert_eq!(v.len(), 100);
        for i in 0..100 {
            assert_eq!(v[i], i);
        }
    }

    #[test]
    fn at_reports_out_of_range() {
        let mut v = GrowVec::new();
        v.push(7).unwrap();
        assert_eq!(v.at(0), Ok(&7));
        let err = v.at(3).unwrap_err();
        assert_eq!(err, OutOfRange { index: 3, len: 1 });
        assert_eq!(
            err.to_string(),
            "index 3 out of range for sequence of length 1"
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_out_of_bounds() {
        let v: GrowVec<i32> = GrowVec::new();
        let _ = v[0];
    }

    #[test]
    fn reserve_pins_capacity_across_pushes() {
        let mut v: GrowVec<u64> = GrowVec::new();
        v.reserve(100).unwrap();
        let cap = v.capacity();
        assert!(cap >= 100);
        let base = v.as_slice().as_ptr();
        for i in 0..100 {
            v.push(i).unwrap();
        }
        assert_eq!(v.capacity(), cap);
        assert_eq!(v.as_slice().as_ptr(), base);
    }

    #[test]
    fn insert_then_erase_round_trips() {
        let mut v: GrowVec<i32> = [1, 2, 3, 4].into();
        let snapshot: Vec<i32> = v.iter().copied().collect();
        v.insert(2, 99).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 99, 3, 4]);
        v.erase(2);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), snapshot);
    }

    #[test]
    fn insert_returns_cursor_to_new_element() {
        let mut v: GrowVec<i32> = [1, 3].into();
        let cursor = v.insert(1, 2).unwrap();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.get(), Some(&2));
    }

    #[test]
    fn erase_of_tail_returns_end_cursor() {
        let mut v: GrowVec<i32> = [1, 2, 3].into();
        let cursor = v.erase(2);
        assert!(cursor.is_end());
    }

    #[test]
    fn erase_range_shifts_tail() {
        let mut v: GrowVec<i32> = [1, 2, 3, 4, 5].into();
        let cursor = v.erase_range(1, 3);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.get(), Some(&4));
        drop(cursor);
        assert_eq!(v.as_slice(), &[1, 4, 5]);
    }

    #[test]
    fn insert_n_and_insert_from() {
        let mut v: GrowVec<i32> = [1, 5].into();
        v.insert_n(1, 3, 0).unwrap();
        assert_eq!(v.as_slice(), &[1, 0, 0, 0, 5]);
        v.insert_from(5, [6, 7]).unwrap();
        assert_eq!(v.as_slice(), &[1, 0, 0, 0, 5, 6, 7]);
        // Empty insertion is a no-op that still yields a cursor at pos.
        let cursor = v.insert_from(0, core::iter::empty()).unwrap();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn lexicographic_comparisons() {
        let a: GrowVec<i32> = [1, 2, 3].into();
        let b: GrowVec<i32> = [1, 2, 4].into();
        let c: GrowVec<i32> = [1, 2].into();
        let d: GrowVec<i32> = [1, 2, 3].into();
        assert!(a < b);
        assert!(c < a);
        assert_eq!(a, d);
        assert!(b >= a);
        assert_ne!(a, c);
    }

    #[test]
    fn comparison_ignores_capacity() {
        let mut a: GrowVec<i32> = [1, 2, 3].into();
        a.reserve(100).unwrap();
        let b: GrowVec<i32> = [1, 2, 3].into();
        assert_eq!(a, b);
    }

    #[test]
    fn clone_is_deep() {
        let mut original: GrowVec<String> = GrowVec::new();
        original.push("a".to_string()).unwrap();
        let mut copy = original.clone();
        copy[0].push('b');
        assert_eq!(original[0], "a");
        assert_eq!(copy[0], "ab");
    }

    #[test]
    fn move_leaves_source_empty() {
        let mut v: GrowVec<i32> = [1, 2, 3].into();
        let moved = core::mem::take(&mut v);
        assert_eq!(v.len(), 0);
        assert_eq!(moved.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn resize_grows_and_shrinks() {
        let mut v: GrowVec<i32> = GrowVec::new();
        v.resize(3, 9).unwrap();
        assert_eq!(v.as_slice(), &[9, 9, 9]);
        v.resize(1, 0).unwrap();
        assert_eq!(v.as_slice(), &[9]);
        let cap = v.capacity();
        v.resize(0, 0).unwrap();
        assert_eq!(v.capacity(), cap);
    }

    #[test]
    fn clear_retains_capacity() {
        let mut v: GrowVec<i32> = [1, 2, 3].into();
        let cap = v.capacity();
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), cap);
    }

    #[test]
    fn filled_and_from_slice() {
        let v = GrowVec::filled(4, 7).unwrap();
        assert_eq!(v.as_slice(), &[7, 7, 7, 7]);
        let w = GrowVec::from_slice(&[1, 2]).unwrap();
        assert_eq!(w.as_slice(), &[1, 2]);
    }

    #[test]
    fn mixed_edit_sequence() {
        let mut v: GrowVec<i32> = (1..=5).collect();
        assert_eq!(v.len(), 5);
        assert_eq!(v.at(0), Ok(&1));
        assert_eq!(v.at(4), Ok(&5));
        v.erase(1);
        assert_eq!(v.as_slice(), &[1, 3, 4, 5]);
        v.insert(0, 0).unwrap();
        assert_eq!(v.as_slice(), &[0, 1, 3, 4, 5]);
        v.resize(3, 0).unwrap();
        assert_eq!(v.as_slice(), &[0, 1, 3]);
    }

    #[test]
    fn into_iter_front_and_back() {
        let v: GrowVec<i32> = [1, 2, 3, 4].into();
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.len(), 2);
        assert_eq!(it.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn drop_runs_once_per_element() {
        use core::sync::atomic::{AtomicUsize, Ordering};

        static DROPS: AtomicUsize = AtomicUsize::new(0);

        struct Counted;
        impl Drop for Counted {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::Relaxed);
            }
        }

        DROPS.store(0, Ordering::Relaxed);
        {
            let mut v = GrowVec::new();
            for _ in 0..10 {
                v.push(Counted).unwrap();
            }
            v.truncate(6);
            assert_eq!(DROPS.load(Ordering::Relaxed), 4);
            let mut it = v.into_iter();
            drop(it.next());
            assert_eq!(DROPS.load(Ordering::Relaxed), 5);
        }
        assert_eq!(DROPS.load(Ordering::Relaxed), 10);
    }

    #[test]
    fn zero_sized_elements_never_allocate() {
        let mut v: GrowVec<()> = GrowVec::new();
        assert_eq!(v.capacity(), usize::MAX);
        for _ in 0..1000 {
            v.push(()).unwrap();
        }
        assert_eq!(v.len(), 1000);
        assert_eq!(v.pop(), Some(()));
        assert_eq!(v.len(), 999);
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut v: GrowVec<i32> = GrowVec::new();
        assert_eq!(v.pop(), None);
    }
}
