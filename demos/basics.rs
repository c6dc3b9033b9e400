// An example of binding two windowed queues and watching values cross between them

use fuseq::{LogObserver, WindowedQueue};

fn main() {
    // Run with RUST_LOG=debug to see every queue operation narrated.
    env_logger::init();

    // Two queues of capacity 4.
    // `a` exposes its positions 1 and 3, `b` its positions 0 and 2.
    // Positions count from the head of a full queue, stored elements sit at the tail end.
    let mut a = WindowedQueue::new(4, [1, 3]).unwrap();
    let mut b = WindowedQueue::new(4, [0, 2]).unwrap();
    a.set_observer(LogObserver::new("a"));
    b.set_observer(LogObserver::new("b"));

    // Fuse the windows by rank: b's 0 shares a's 1, b's 2 shares a's 3.
    b.bind_to(&a).unwrap();

    for i in 0..4 {
        a.try_push(i);
        b.try_push(10 + i);
    }
    // Both queues are full now, further pushes are refused.
    assert!(!a.try_push(99));

    println!("a: {:?}", a.iter().collect::<Vec<_>>());
    println!("b: {:?}", b.iter().collect::<Vec<_>>());

    // Every pop first picks up whatever the peer left in the shared cells.
    while let Some(value) = b.try_pop() {
        println!("popped from b: {}", value);
    }
    while let Some(value) = a.try_pop() {
        println!("popped from a: {}", value);
    }
}
