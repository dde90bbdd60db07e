//! Stress tests that push the queue through large workloads
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use std::collections::VecDeque;

use rust_priority_queue::compare::Greater;
use rust_priority_queue::heap_ops::is_heap;
use rust_priority_queue::{PriorityQueue, Sequence};

/// Deterministic pseudo-random sequence (xorshift32)
fn scrambled(count: usize, mut state: u32) -> Vec<i32> {
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % 10_000) as i32
        })
        .collect()
}

/// Test massive numbers of pushes and pops
fn test_massive_operations<S: Sequence<Item = i32>>() {
    let mut queue: PriorityQueue<i32, S> = PriorityQueue::default();

    for i in 0..10_000 {
        queue.push(i);
    }
    assert_eq!(queue.len(), 10_000);

    for i in (0..10_000).rev() {
        assert_eq!(queue.pop(), Ok(i));
    }
    assert!(queue.is_empty());
}

/// Test alternating push and pop
fn test_alternating_ops<S: Sequence<Item = i32>>() {
    let mut queue: PriorityQueue<i32, S, Greater> = PriorityQueue::default();

    // Two in, one out: the smallest pending element always leaves first
    for i in 0..2_000 {
        queue.push(i * 2);
        queue.push(i * 2 + 1);
        assert_eq!(queue.pop(), Ok(i));
    }
    assert_eq!(queue.len(), 2_000);

    let mut last = i32::MIN;
    while let Ok(value) = queue.pop() {
        assert!(value >= last);
        last = value;
    }
}

/// Test bulk construction against a sorted reference
fn test_bulk_heapify<S: Sequence<Item = i32>>() {
    let values = scrambled(5_000, 0x9E37_79B9);

    let mut seq = S::with_capacity(values.len());
    for v in &values {
        seq.push_back(*v);
    }
    let mut queue = PriorityQueue::from_parts(Greater, seq);
    assert!(is_heap(queue.as_sequence(), &Greater));

    let mut expected = values;
    expected.sort_unstable();
    for value in expected {
        assert_eq!(queue.pop(), Ok(value));
    }
    assert!(queue.is_empty());
}

/// Test heavy duplication
fn test_many_duplicates<S: Sequence<Item = i32>>() {
    let mut queue: PriorityQueue<i32, S> = PriorityQueue::default();
    for i in 0..3_000 {
        queue.push(i % 3);
    }

    let mut counts = [0usize; 3];
    let mut last = i32::MAX;
    while let Ok(value) = queue.pop() {
        assert!(value <= last);
        last = value;
        counts[value as usize] += 1;
    }
    assert_eq!(counts, [1_000, 1_000, 1_000]);
}

/// Test random interleaving, checking the heap after every operation
fn test_random_interleaving<S: Sequence<Item = i32>>() {
    let mut queue: PriorityQueue<i32, S> = PriorityQueue::default();
    let mut reference: Vec<i32> = Vec::new();

    for (step, value) in scrambled(4_000, 12_345).into_iter().enumerate() {
        if value % 3 == 0 {
            let expected = reference.iter().max().copied();
            match expected {
                Some(max) => {
                    assert_eq!(queue.pop(), Ok(max));
                    if let Some(pos) = reference.iter().position(|&v| v == max) {
                        reference.swap_remove(pos);
                    }
                }
                None => assert!(queue.pop().is_err()),
            }
        } else {
            queue.push(value);
            reference.push(value);
        }

        if step % 97 == 0 {
            assert!(is_heap(queue.as_sequence(), queue.comparator()));
        }
        assert_eq!(queue.len(), reference.len());
    }
}

/// Test with extreme values
fn test_extreme_values<S: Sequence<Item = i64>>() {
    let mut queue: PriorityQueue<i64, S> = PriorityQueue::default();
    queue.push(0);
    queue.push(i64::MIN);
    queue.push(i64::MAX);
    queue.push(-1);

    assert_eq!(queue.pop(), Ok(i64::MAX));
    assert_eq!(queue.pop(), Ok(0));
    assert_eq!(queue.pop(), Ok(-1));
    assert_eq!(queue.pop(), Ok(i64::MIN));
}

#[test]
fn test_vec_massive() {
    test_massive_operations::<Vec<i32>>();
}

#[test]
fn test_vec_alternating() {
    test_alternating_ops::<Vec<i32>>();
}

#[test]
fn test_vec_bulk_heapify() {
    test_bulk_heapify::<Vec<i32>>();
}

#[test]
fn test_vec_many_duplicates() {
    test_many_duplicates::<Vec<i32>>();
}

#[test]
fn test_vec_random_interleaving() {
    test_random_interleaving::<Vec<i32>>();
}

#[test]
fn test_vec_extreme_values() {
    test_extreme_values::<Vec<i64>>();
}

#[test]
fn test_deque_massive() {
    test_massive_operations::<VecDeque<i32>>();
}

#[test]
fn test_deque_alternating() {
    test_alternating_ops::<VecDeque<i32>>();
}

#[test]
fn test_deque_bulk_heapify() {
    test_bulk_heapify::<VecDeque<i32>>();
}

#[test]
fn test_deque_many_duplicates() {
    test_many_duplicates::<VecDeque<i32>>();
}

#[test]
fn test_deque_random_interleaving() {
    test_random_interleaving::<VecDeque<i32>>();
}

#[test]
fn test_deque_extreme_values() {
    test_extreme_values::<VecDeque<i64>>();
}
