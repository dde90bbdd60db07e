//! Binary-Heap Priority Queue Adaptor for Rust
//!
//! This crate provides [`PriorityQueue`], a container adaptor that keeps the
//! element ranked highest by a caller-supplied ordering at the front of a
//! sequence laid out as a binary heap.
//!
//! # Features
//!
//! - **Pluggable storage**: any [`Sequence`] (`Vec`, `VecDeque`, or `SmallVec`
//!   with the `smallvec` feature) can back the heap
//! - **Pluggable ordering**: any [`Compare`], including plain closures;
//!   [`compare::Less`] (max-heap) is the default and [`compare::Greater`]
//!   gives a min-heap
//! - **Reusable algorithms**: the sift/heapify routines in [`heap_ops`] work
//!   on any `Sequence` directly
//! - **Explicit emptiness errors**: `top` and `pop` on an empty queue return
//!   [`QueueError::EmptyContainer`]
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::{PriorityQueue, QueueError};
//!
//! let mut queue = PriorityQueue::new();
//! queue.push(5);
//! queue.push(1);
//! queue.push(8);
//! queue.push(3);
//!
//! assert_eq!(queue.top(), Ok(&8));
//! assert_eq!(queue.pop(), Ok(8));
//! assert_eq!(queue.pop(), Ok(5));
//! assert_eq!(queue.len(), 2);
//!
//! queue.pop()?;
//! queue.pop()?;
//! assert_eq!(queue.pop(), Err(QueueError::EmptyContainer));
//! # Ok::<(), QueueError>(())
//! ```

pub mod compare;
pub mod heap_ops;
pub mod priority_queue;
pub mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use priority_queue::PriorityQueue;
pub use traits::{Compare, QueueError, Sequence};
