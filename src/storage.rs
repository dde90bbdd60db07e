//! Pluggable storage backends for the heap sequence
//!
//! This module implements [`Sequence`] for the containers a binary heap can
//! live in:
//!
//! - `Vec<T>`: default, contiguous storage with amortized O(1) push
//! - `VecDeque<T>`: ring-buffer storage, useful when the caller already
//!   holds a deque
//! - `SmallVec<A>`: inline storage for queues that rarely outgrow a few
//!   elements (requires the `smallvec` feature)
//!
//! # Example
//!
//! ```rust
//! use std::collections::VecDeque;
//! use rust_priority_queue::compare::Less;
//! use rust_priority_queue::PriorityQueue;
//!
//! let deque: VecDeque<i32> = [4, 9, 1].into_iter().collect();
//! let mut queue = PriorityQueue::from_parts(Less, deque);
//! assert_eq!(queue.pop(), Ok(9));
//! ```
//!
//! The trait methods are `get_at` and `swap_at`, so `get` and `swap` on
//! these containers still resolve to the slice or inherent methods while
//! [`Sequence`] is in scope.

use std::collections::VecDeque;

#[cfg(feature = "smallvec")]
use smallvec::{Array, SmallVec};

use crate::traits::Sequence;

// ============================================================================
// Vec - default backend
// ============================================================================

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get_at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn push_back(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

// ============================================================================
// VecDeque
// ============================================================================

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get_at(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

// ============================================================================
// SmallVec - inline storage (feature = "smallvec")
// ============================================================================

#[cfg(feature = "smallvec")]
impl<A: Array> Sequence for SmallVec<A> {
    type Item = A::Item;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        SmallVec::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    #[inline]
    fn get_at(&self, index: usize) -> Option<&A::Item> {
        self.as_slice().get(index)
    }

    #[inline]
    fn push_back(&mut self, item: A::Item) {
        SmallVec::push(self, item);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<A::Item> {
        SmallVec::pop(self)
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn clear(&mut self) {
        SmallVec::clear(self);
    }
}
