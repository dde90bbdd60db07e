//! Stock comparators
//!
//! | Comparator      | Pops first            |
//! |-----------------|-----------------------|
//! | [`Less`]        | greatest element      |
//! | [`Greater`]     | smallest element      |
//! | [`ByKey`]       | greatest derived key  |
//! | [`Reversed`]    | opposite of the inner |
//!
//! Closures of type `Fn(&T, &T) -> bool` are comparators too, see
//! [`Compare`].
//!
//! The natural-order comparators use `PartialOrd`, so floating point
//! elements are accepted. NaN is not part of any strict weak ordering;
//! queues containing NaN pop in an unspecified order.

use crate::traits::Compare;

/// Ranks `a` below `b` when `a < b`, producing a max-heap
///
/// This is the default comparator of [`PriorityQueue`](crate::PriorityQueue).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<T: PartialOrd + ?Sized> Compare<T> for Less {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Ranks `a` below `b` when `a > b`, producing a min-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Compare<T> for Greater {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Orders elements by a key extracted with `F`, greatest key first
///
/// ```rust
/// use rust_priority_queue::compare::ByKey;
/// use rust_priority_queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::with_comparator(ByKey(|job: &(u8, char)| job.0));
/// queue.push((2, 'c'));
/// queue.push((9, 'd'));
/// queue.push((4, 't'));
/// assert_eq!(queue.top(), Ok(&(9, 'd')));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Compare<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}

/// Flips the ranking of the wrapped comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        self.0.compare(b, a)
    }
}
