//! Restricted-interface adapters over a backing sequence.
//!
//! [`Stack`] and [`Queue`] contribute no algorithmic content of their own;
//! they narrow a backing container down to push/pop/peek. The whole contract
//! they are allowed to consume is [`SequenceOps`], implemented here for
//! [`GrowVec`] and, for interop, `std::collections::VecDeque`.

mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;

use std::collections::VecDeque;

use crate::alloc::{AllocError, RegionAlloc};
use crate::collections::GrowVec;

/// The operations an adapter may demand from its backing sequence.
pub trait SequenceOps<T> {
    /// Appends an element at the back.
    ///
    /// # Errors
    /// Returns `AllocError` if the backing sequence cannot grow.
    fn push_back(&mut self, value: T) -> Result<(), AllocError>;

    /// Removes and returns the back element, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;

    /// Removes and returns the front element, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;

    /// The front element, if any.
    fn front(&self) -> Option<&T>;

    /// The front element by mutable reference, if any.
    fn front_mut(&mut self) -> Option<&mut T>;

    /// The back element, if any.
    fn back(&self) -> Option<&T>;

    /// The back element by mutable reference, if any.
    fn back_mut(&mut self) -> Option<&mut T>;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, A: RegionAlloc> SequenceOps<T> for GrowVec<T, A> {
    #[inline]
    fn push_back(&mut self, value: T) -> Result<(), AllocError> {
        self.push(value)
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.remove(0))
        }
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        GrowVec::front(self)
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        GrowVec::front_mut(self)
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        GrowVec::back(self)
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        GrowVec::back_mut(self)
    }

    #[inline]
    fn len(&self) -> usize {
        GrowVec::len(self)
    }
}

impl<T> SequenceOps<T> for VecDeque<T> {
    #[inline]
    fn push_back(&mut self, value: T) -> Result<(), AllocError> {
        VecDeque::push_back(self, value);
        Ok(())
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        VecDeque::front_mut(self)
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        VecDeque::back(self)
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        VecDeque::back_mut(self)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}
