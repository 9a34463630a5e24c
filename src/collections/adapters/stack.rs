//! `Stack` — last-in, first-out over any [`SequenceOps`] backing.

use core::fmt;
use core::marker::PhantomData;

use super::SequenceOps;
use crate::alloc::AllocError;
use crate::collections::GrowVec;

/// A LIFO adapter. The backing container defaults to [`GrowVec`].
pub struct Stack<T, C = GrowVec<T>>
where
    C: SequenceOps<T>,
{
    seq: C,
    _marker: PhantomData<fn() -> T>,
}

impl<T, C: SequenceOps<T>> Stack<T, C> {
    /// Creates an empty stack over a default-constructed backing container.
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::from_seq(C::default())
    }

    /// Wraps an existing backing container; its back is the top of the stack.
    pub fn from_seq(seq: C) -> Self {
        Self {
            seq,
            _marker: PhantomData,
        }
    }

    /// Consumes the stack, returning the backing container.
    pub fn into_seq(self) -> C {
        self.seq
    }

    /// Pushes an element onto the top.
    ///
    /// # Errors
    /// Returns `AllocError` if the backing sequence cannot grow; the stack is
    /// unchanged.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        self.seq.push_back(value)
    }

    /// Removes and returns the top element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.seq.pop_back()
    }

    /// The top element, if any.
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.seq.back()
    }

    /// The top element by mutable reference, if any.
    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.seq.back_mut()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

impl<T, C: SequenceOps<T> + Default> Default for Stack<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: SequenceOps<T> + Clone> Clone for Stack<T, C> {
    fn clone(&self) -> Self {
        Self::from_seq(self.seq.clone())
    }
}

impl<T, C: SequenceOps<T> + fmt::Debug> fmt::Debug for Stack<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.seq).finish()
    }
}

impl<T, C: SequenceOps<T> + PartialEq> PartialEq for Stack<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T, C: SequenceOps<T> + Eq> Eq for Stack<T, C> {}

impl<T, C: SequenceOps<T> + PartialOrd> PartialOrd for Stack<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.seq.partial_cmp(&other.seq)
    }
}

impl<T, C: SequenceOps<T> + Ord> Ord for Stack<T, C> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.seq.cmp(&other.seq)
    }
}

impl<T, C: SequenceOps<T> + Default> FromIterator<T> for Stack<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T, C: SequenceOps<T>> Extend<T> for Stack<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item)
                .expect("allocation failed while extending Stack");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn lifo_order() {
        let mut stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.top(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn top_mut_writes_through() {
        let mut stack: Stack<i32> = [1, 2].into_iter().collect();
        *stack.top_mut().unwrap() = 20;
        assert_eq!(stack.pop(), Some(20));
    }

    #[test]
    fn vec_deque_backing() {
        let mut stack: Stack<i32, VecDeque<i32>> = Stack::new();
        stack.push(5).unwrap();
        stack.push(6).unwrap();
        assert_eq!(stack.pop(), Some(6));
        assert_eq!(stack.top(), Some(&5));
    }

    #[test]
    fn comparisons_delegate_to_backing() {
        let a: Stack<i32> = [1, 2, 3].into_iter().collect();
        let b: Stack<i32> = [1, 2, 4].into_iter().collect();
        assert!(a < b);
        assert_eq!(a, a.clone());
    }
}
