//! `Queue` — first-in, first-out over any [`SequenceOps`] backing.
//!
//! Note that over a contiguous backing like [`GrowVec`], `pop` shifts the
//! remaining elements and costs O(n); choose a `VecDeque` backing when
//! front removal dominates.

use core::fmt;
use core::marker::PhantomData;

use super::SequenceOps;
use crate::alloc::AllocError;
use crate::collections::GrowVec;

/// A FIFO adapter. The backing container defaults to [`GrowVec`].
pub struct Queue<T, C = GrowVec<T>>
where
    C: SequenceOps<T>,
{
    seq: C,
    _marker: PhantomData<fn() -> T>,
}

impl<T, C: SequenceOps<T>> Queue<T, C> {
    /// Creates an empty queue over a default-constructed backing container.
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::from_seq(C::default())
    }

    /// Wraps an existing backing container; its front is the queue's front.
    pub fn from_seq(seq: C) -> Self {
        Self {
            seq,
            _marker: PhantomData,
        }
    }

    /// Consumes the queue, returning the backing container.
    pub fn into_seq(self) -> C {
        self.seq
    }

    /// Appends an element at the back.
    ///
    /// # Errors
    /// Returns `AllocError` if the backing sequence cannot grow; the queue is
    /// unchanged.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        self.seq.push_back(value)
    }

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.seq.pop_front()
    }

    /// The front element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.seq.front()
    }

    /// The front element by mutable reference, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.seq.front_mut()
    }

    /// The back element, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.seq.back()
    }

    /// The back element by mutable reference, if any.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.seq.back_mut()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

impl<T, C: SequenceOps<T> + Default> Default for Queue<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: SequenceOps<T> + Clone> Clone for Queue<T, C> {
    fn clone(&self) -> Self {
        Self::from_seq(self.seq.clone())
    }
}

impl<T, C: SequenceOps<T> + fmt::Debug> fmt::Debug for Queue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.seq).finish()
    }
}

impl<T, C: SequenceOps<T> + PartialEq> PartialEq for Queue<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T, C: SequenceOps<T> + Eq> Eq for Queue<T, C> {}

impl<T, C: SequenceOps<T> + PartialOrd> PartialOrd for Queue<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.seq.partial_cmp(&other.seq)
    }
}

impl<T, C: SequenceOps<T> + Ord> Ord for Queue<T, C> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.seq.cmp(&other.seq)
    }
}

impl<T, C: SequenceOps<T> + Default> FromIterator<T> for Queue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T, C: SequenceOps<T>> Extend<T> for Queue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item)
                .expect("allocation failed while extending Queue");
        }
    }
}
