//! Binary-heap priority queue adaptor
//!
//! [`PriorityQueue`] owns a [`Sequence`] and a [`Compare`] and keeps the
//! sequence arranged as a binary heap, so the highest ranked element is
//! always at the front.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `push` / `emplace` | O(log n)   |
//! | `pop`              | O(log n)   |
//! | `top` / `peek`     | O(1)       |
//! | `len` / `is_empty` | O(1)       |
//! | `swap`             | O(1)       |
//! | `from_parts`       | O(n)       |
//!
//! Elements that compare equal come out in no particular order; the queue
//! is not stable.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::compare::Greater;
//! use rust_priority_queue::PriorityQueue;
//!
//! // Max-heap by default
//! let mut queue = PriorityQueue::new();
//! queue.push(5);
//! queue.push(1);
//! queue.push(8);
//! assert_eq!(queue.top(), Ok(&8));
//!
//! // Min-heap with an inverted comparator
//! let mut queue = PriorityQueue::with_comparator(Greater);
//! queue.extend([5, 1, 8, 3]);
//! assert_eq!(queue.pop(), Ok(1));
//! assert_eq!(queue.pop(), Ok(3));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::mem;

use crate::compare::Less;
use crate::heap_ops;
use crate::traits::{Compare, QueueError, Sequence};

/// A priority queue backed by a binary heap stored in `S` and ordered by `C`
///
/// `C::compare(a, b)` returning true means `a` pops after `b`. With the
/// default [`Less`] the greatest element is on top.
///
/// It is a logic error to change an element's ranking, as seen by the
/// comparator, while it is in the queue (through `Cell`, `RefCell`, or
/// comparator state). The queue stays memory safe but the pop order becomes
/// unspecified.
pub struct PriorityQueue<T, S = Vec<T>, C = Less> {
    /// Elements in heap order
    sequence: S,
    compare: C,
    _phantom: PhantomData<T>,
}

impl<T: PartialOrd> PriorityQueue<T> {
    /// Creates an empty max-heap
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }

    /// Creates an empty max-heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Less)
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, Vec<T>, C> {
    /// Creates an empty queue ordered by `compare`
    pub fn with_comparator(compare: C) -> Self {
        Self {
            sequence: Vec::new(),
            compare,
            _phantom: PhantomData,
        }
    }

    /// Creates an empty queue ordered by `compare` with room for `capacity`
    /// elements
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        Self {
            sequence: Vec::with_capacity(capacity),
            compare,
            _phantom: PhantomData,
        }
    }
}

impl<T, S, C> PriorityQueue<T, S, C>
where
    S: Sequence<Item = T>,
    C: Compare<T>,
{
    /// Builds a queue from a comparator and a sequence in any order
    ///
    /// The sequence is heapified in O(n).
    pub fn from_parts(compare: C, mut sequence: S) -> Self {
        heap_ops::make_heap(&mut sequence, &compare);
        Self {
            sequence,
            compare,
            _phantom: PhantomData,
        }
    }

    /// Returns the highest ranked element
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyContainer`] if the queue is empty.
    pub fn top(&self) -> Result<&T, QueueError> {
        self.peek().ok_or_else(|| {
            log::debug!("top() called on an empty priority queue");
            QueueError::EmptyContainer
        })
    }

    /// Returns the highest ranked element, or `None` if the queue is empty
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.sequence.get_at(0)
    }

    /// Returns true if the queue holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Inserts an element
    ///
    /// To insert a copy, pass `value.clone()`.
    pub fn push(&mut self, value: T) {
        self.sequence.push_back(value);
        heap_ops::push_heap(&mut self.sequence, &self.compare);
    }

    /// Builds an element from `args` at the back of the storage and inserts it
    ///
    /// ```rust
    /// use rust_priority_queue::PriorityQueue;
    ///
    /// let mut queue: PriorityQueue<String> = PriorityQueue::new();
    /// queue.emplace("pear");
    /// queue.emplace('z');
    /// assert_eq!(queue.top().map(String::as_str), Ok("z"));
    /// ```
    pub fn emplace<A>(&mut self, args: A)
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args));
    }

    /// Inserts the element produced by `make`
    pub fn emplace_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        self.sequence.push_back(make());
        heap_ops::push_heap(&mut self.sequence, &self.compare);
    }

    /// Removes and returns the highest ranked element
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyContainer`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        if self.sequence.is_empty() {
            log::debug!("pop() called on an empty priority queue");
            return Err(QueueError::EmptyContainer);
        }
        heap_ops::pop_heap(&mut self.sequence, &self.compare);
        self.sequence.pop_back().ok_or(QueueError::EmptyContainer)
    }

    /// Exchanges contents and comparators with `other` without moving any
    /// element
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.sequence, &mut other.sequence);
        mem::swap(&mut self.compare, &mut other.compare);
    }

    /// Drops every element, keeping the comparator
    pub fn clear(&mut self) {
        self.sequence.clear();
    }

    /// Returns the comparator
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Returns the underlying storage, in heap order
    pub fn as_sequence(&self) -> &S {
        &self.sequence
    }

    /// Splits the queue into its comparator and storage (in heap order)
    pub fn into_inner(self) -> (C, S) {
        (self.compare, self.sequence)
    }

    /// Moves the contents out into a new queue, leaving `self` empty
    ///
    /// The comparator is cloned so `self` keeps its ordering.
    pub fn take(&mut self) -> Self
    where
        C: Clone,
    {
        log::trace!("moving {} elements out of priority queue", self.len());
        Self {
            sequence: mem::take(&mut self.sequence),
            compare: self.compare.clone(),
            _phantom: PhantomData,
        }
    }
}

/// Exchanges the contents of two queues
pub fn swap<T, S, C>(lhs: &mut PriorityQueue<T, S, C>, rhs: &mut PriorityQueue<T, S, C>)
where
    S: Sequence<Item = T>,
    C: Compare<T>,
{
    lhs.swap(rhs);
}

impl<T, S, C> Default for PriorityQueue<T, S, C>
where
    S: Sequence<Item = T>,
    C: Compare<T> + Default,
{
    fn default() -> Self {
        Self {
            sequence: S::default(),
            compare: C::default(),
            _phantom: PhantomData,
        }
    }
}

impl<T, S, C> Clone for PriorityQueue<T, S, C>
where
    S: Sequence<Item = T> + Clone,
    C: Compare<T> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence.clone(),
            compare: self.compare.clone(),
            _phantom: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.sequence.clone_from(&source.sequence);
        self.compare.clone_from(&source.compare);
    }
}

impl<T, C> From<Vec<T>> for PriorityQueue<T, Vec<T>, C>
where
    C: Compare<T> + Default,
{
    fn from(vec: Vec<T>) -> Self {
        Self::from_parts(C::default(), vec)
    }
}

impl<T, S, C> FromIterator<T> for PriorityQueue<T, S, C>
where
    S: Sequence<Item = T>,
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = S::default();
        for item in iter {
            sequence.push_back(item);
        }
        Self::from_parts(C::default(), sequence)
    }
}

impl<T, S, C> Extend<T> for PriorityQueue<T, S, C>
where
    S: Sequence<Item = T>,
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, S: fmt::Debug, C> fmt::Debug for PriorityQueue<T, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}
