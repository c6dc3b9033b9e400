//! Property-based tests for windowed queues.
//!
//! - unbound queues behave exactly like a bounded `VecDeque`
//! - after every operation, each window holds the element it overlays, or nothing
//! - operations on bound queues never exceed capacity, and a rejected push
//!   changes neither queue nor any cell
//! - binding queues with different window counts rebinds nothing

use crate::*;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    Pop,
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u8>().prop_map(Op::Push),
        3 => Just(Op::Pop),
        1 => Just(Op::Clear),
    ]
}

/// A capacity and a window set valid for it.
fn arb_shape() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..10).prop_flat_map(|capacity| {
        prop::collection::vec(any::<bool>(), capacity).prop_map(move |mask| {
            let positions = mask
                .iter()
                .enumerate()
                .filter(|&(_, &on)| on)
                .map(|(p, _)| p)
                .collect();
            (capacity, positions)
        })
    })
}

fn apply(q: &mut WindowedQueue<u8>, op: &Op) -> Option<u8> {
    match *op {
        Op::Push(v) => {
            q.try_push(v);
            None
        }
        Op::Pop => q.try_pop(),
        Op::Clear => {
            q.clear();
            None
        }
    }
}

fn cells(q: &WindowedQueue<u8>) -> Vec<Option<u8>> {
    q.window_positions()
        .map(|p| q.window(p).and_then(Window::peek))
        .collect()
}

proptest! {
    #[test]
    fn unbound_queue_is_fifo((capacity, positions) in arb_shape(), ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut q = WindowedQueue::new(capacity, positions).unwrap();
        let mut model = VecDeque::new();

        for op in &ops {
            match *op {
                Op::Push(v) => {
                    let accepted = model.len() < capacity;
                    if accepted {
                        model.push_back(v);
                    }
                    prop_assert_eq!(q.try_push(v), accepted);
                }
                Op::Pop => prop_assert_eq!(q.try_pop(), model.pop_front()),
                Op::Clear => {
                    q.clear();
                    model.clear();
                }
            }
            prop_assert!(q.len() <= capacity);
            prop_assert!(q.iter().eq(model.iter()));
        }
    }

    #[test]
    fn windows_mirror_overlaid_elements((capacity, positions) in arb_shape(), ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut q = WindowedQueue::new(capacity, positions).unwrap();

        for op in &ops {
            apply(&mut q, op);

            let first = capacity - q.len();
            let stored: Vec<u8> = q.iter().copied().collect();
            for p in q.window_positions() {
                let expected = if p >= first { Some(stored[p - first]) } else { None };
                prop_assert_eq!(q.window(p).and_then(Window::peek), expected);
            }
        }
    }

    #[test]
    fn bound_queues_keep_capacity(
        capacity in 1usize..8,
        seed in prop::collection::vec(any::<bool>(), 8),
        ops in prop::collection::vec((any::<bool>(), arb_op()), 0..64),
    ) {
        // same window count on both sides, mirrored positions
        let first_positions: Vec<usize> = (0..capacity).filter(|&p| seed[p]).collect();
        let second_positions: Vec<usize> = first_positions.iter().map(|p| capacity - 1 - p).collect();

        let mut a = WindowedQueue::new(capacity, first_positions).unwrap();
        let mut b = WindowedQueue::new(capacity, second_positions).unwrap();
        b.bind_to(&a).unwrap();

        for (on_first, op) in &ops {
            let (target, peer) = if *on_first { (&mut a, &b) } else { (&mut b, &a) };

            if let Op::Push(v) = *op {
                if target.is_full() {
                    let before = (cells(target), cells(peer), target.iter().copied().collect::<Vec<_>>());
                    prop_assert!(!target.try_push(v));
                    let after = (cells(target), cells(peer), target.iter().copied().collect::<Vec<_>>());
                    prop_assert_eq!(before, after);
                    continue;
                }
            }

            apply(target, op);
            prop_assert!(target.len() <= capacity);
        }
    }

    #[test]
    fn mismatched_bind_rebinds_nothing(count in 1usize..6, extra in 1usize..4) {
        let a = WindowedQueue::<u8>::new(10, 0..count).unwrap();
        let mut b = WindowedQueue::<u8>::new(10, 0..count + extra).unwrap();

        let err = b.bind_to(&a).unwrap_err();
        prop_assert_eq!(err, Error::WindowCountMismatch { ours: count + extra, theirs: count });
        for p in 0..count {
            prop_assert!(!b.window(p).unwrap().shares_cell(a.window(p).unwrap()));
        }
    }
}
