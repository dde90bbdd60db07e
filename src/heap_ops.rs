//! In-place binary heap algorithms
//!
//! These functions arrange the contents of any [`Sequence`] as an implicit
//! complete binary tree: the children of index `i` live at `2i + 1` and
//! `2i + 2`, and the parent of `i > 0` lives at `(i - 1) / 2`. A sequence is
//! a heap under a comparator `cmp` when no child outranks its parent, i.e.
//! `cmp.compare(parent, child)` is false for every parent/child pair.
//!
//! # Time Complexity
//!
//! | Function    | Complexity |
//! |-------------|------------|
//! | `make_heap` | O(n)       |
//! | `push_heap` | O(log n)   |
//! | `pop_heap`  | O(log n)   |
//! | `is_heap`   | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::compare::Less;
//! use rust_priority_queue::heap_ops::{is_heap, make_heap, pop_heap, push_heap};
//!
//! let mut data = vec![3, 1, 4, 1, 5];
//! make_heap(&mut data, &Less);
//! assert!(is_heap(&data, &Less));
//! assert_eq!(data[0], 5);
//!
//! data.push(9);
//! push_heap(&mut data, &Less);
//! assert_eq!(data[0], 9);
//!
//! pop_heap(&mut data, &Less);
//! assert_eq!(data.pop(), Some(9));
//! assert_eq!(data[0], 5);
//! ```

use crate::traits::{Compare, Sequence};

/// Index of the parent of a non-root node
///
/// # Panics
/// Panics in debug builds if `index` is 0; the root has no parent.
#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

/// Index of the left child; the right child is the next slot
#[inline]
pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// True when the element at `a` ranks strictly below the element at `b`.
/// Positions outside the sequence never rank below anything.
#[inline]
fn ranks_below<S, C>(seq: &S, cmp: &C, a: usize, b: usize) -> bool
where
    S: Sequence,
    C: Compare<S::Item> + ?Sized,
{
    match (seq.get_at(a), seq.get_at(b)) {
        (Some(x), Some(y)) => cmp.compare(x, y),
        _ => false,
    }
}

/// Moves the element at `index` toward the root until its parent no longer
/// ranks below it
pub fn sift_up<S, C>(seq: &mut S, cmp: &C, mut index: usize)
where
    S: Sequence,
    C: Compare<S::Item> + ?Sized,
{
    while index > 0 {
        let up = parent(index);
        if ranks_below(seq, cmp, up, index) {
            seq.swap_at(index, up);
            index = up;
        } else {
            break;
        }
    }
}

/// Moves the element at `index` toward the leaves of the heap prefix
/// `0..len` until no child outranks it
///
/// When both children exist, the right child is chosen only if the left
/// ranks below it, so ties go to the left child.
pub fn sift_down<S, C>(seq: &mut S, cmp: &C, mut index: usize, len: usize)
where
    S: Sequence,
    C: Compare<S::Item> + ?Sized,
{
    loop {
        let left = left_child(index);
        if left >= len {
            break;
        }
        let right = left + 1;

        let mut child = left;
        if right < len && ranks_below(seq, cmp, left, right) {
            child = right;
        }

        if ranks_below(seq, cmp, index, child) {
            seq.swap_at(index, child);
            index = child;
        } else {
            break;
        }
    }
}

/// Rearranges an arbitrary sequence into a heap
///
/// Sifts down every internal node, starting from the last one (`n/2 - 1`)
/// and ending at the root.
pub fn make_heap<S, C>(seq: &mut S, cmp: &C)
where
    S: Sequence,
    C: Compare<S::Item> + ?Sized,
{
    let len = seq.len();
    if len < 2 {
        return;
    }
    log::trace!("heapifying {} elements", len);
    for start in (0..len / 2).rev() {
        sift_down(seq, cmp, start, len);
    }
}

/// Restores the heap property after an element was appended at the back
///
/// Expects `0..len-1` to already be a heap.
pub fn push_heap<S, C>(seq: &mut S, cmp: &C)
where
    S: Sequence,
    C: Compare<S::Item> + ?Sized,
{
    let len = seq.len();
    if len > 1 {
        sift_up(seq, cmp, len - 1);
    }
}

/// Moves the top element to the back and re-heapifies `0..len-1`
///
/// The caller is expected to remove the back element afterwards. Does
/// nothing on sequences with fewer than two elements.
pub fn pop_heap<S, C>(seq: &mut S, cmp: &C)
where
    S: Sequence,
    C: Compare<S::Item> + ?Sized,
{
    let len = seq.len();
    if len < 2 {
        return;
    }
    let last = len - 1;
    seq.swap_at(0, last);
    sift_down(seq, cmp, 0, last);
}

/// Returns true if no element of `seq` outranks its parent
pub fn is_heap<S, C>(seq: &S, cmp: &C) -> bool
where
    S: Sequence,
    C: Compare<S::Item> + ?Sized,
{
    (1..seq.len()).all(|i| !ranks_below(seq, cmp, parent(i), i))
}
