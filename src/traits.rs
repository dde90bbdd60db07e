//! Capability traits for the priority queue adaptor
//!
//! The queue never touches a concrete container or ordering directly. It is
//! written against two small traits:
//!
//! - [`Sequence`]: an indexable, resizable container that only grows and
//!   shrinks at its back (`Vec`, `VecDeque`, `SmallVec`, ...)
//! - [`Compare`]: a strict weak ordering over two elements, where
//!   `compare(a, b)` means "`a` ranks below `b`" (so `a` pops after `b`)
//!
//! Swapping either implementation never requires touching the heap
//! algorithms in [`heap_ops`](crate::heap_ops).

use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `top` or `pop` was called on a queue with no elements
    EmptyContainer,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::EmptyContainer => {
                write!(f, "operation requires a non-empty priority queue")
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// Backing storage for a binary heap
///
/// A `Sequence` is an ordered, randomly indexable container that supports
/// insertion and removal at the back. Positions `0..len()` must all be valid
/// for [`get_at`](Sequence::get_at) and [`swap_at`](Sequence::swap_at).
///
/// # Example
///
/// ```rust
/// use rust_priority_queue::Sequence;
///
/// let mut seq: Vec<i32> = Sequence::with_capacity(4);
/// Sequence::push_back(&mut seq, 7);
/// Sequence::push_back(&mut seq, 9);
/// seq.swap_at(0, 1);
/// assert_eq!(seq.get_at(0), Some(&9));
/// assert_eq!(Sequence::pop_back(&mut seq), Some(7));
/// ```
pub trait Sequence: Default {
    /// The element type stored in the sequence
    type Item;

    /// Creates an empty sequence able to hold `capacity` elements without
    /// reallocating, where the backend supports it
    fn with_capacity(capacity: usize) -> Self;

    /// Returns the number of elements
    fn len(&self) -> usize;

    /// Returns true if the sequence holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds
    fn get_at(&self, index: usize) -> Option<&Self::Item>;

    /// Appends an element at the back
    fn push_back(&mut self, item: Self::Item);

    /// Removes and returns the element at the back
    fn pop_back(&mut self) -> Option<Self::Item>;

    /// Swaps the elements at positions `a` and `b`
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    fn swap_at(&mut self, a: usize, b: usize);

    /// Removes every element
    fn clear(&mut self);
}

/// A strict weak ordering over elements of type `T`
///
/// `compare(a, b)` returns true iff `a` ranks strictly below `b`, i.e. `b`
/// should leave the queue before `a`. With [`Less`](crate::compare::Less)
/// the queue is a max-heap; with [`Greater`](crate::compare::Greater) it is
/// a min-heap.
///
/// Implementations must be irreflexive and transitive, and incomparability
/// must be transitive. Breaking this contract leaves the ranking of popped
/// elements unspecified but never causes memory unsafety.
///
/// Any `Fn(&T, &T) -> bool` closure is a comparator:
///
/// ```rust
/// use rust_priority_queue::Compare;
///
/// let shorter = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(shorter.compare(&"ab", &"abc"));
/// assert!(!shorter.compare(&"abc", &"ab"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true iff `a` ranks strictly below `b`
    fn compare(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
