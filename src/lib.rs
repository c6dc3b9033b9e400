//! Bounded FIFO queues that can be partially fused: selected positions of one
//! queue share their storage cell with the corresponding positions of another,
//! so a value written into a shared position becomes visible through either queue.
//!
//!```
//! // Two queues of three elements, fused at their last position.
//! let mut a = fuseq::WindowedQueue::new(3, [2]).unwrap();
//! let mut b = fuseq::WindowedQueue::new(3, [2]).unwrap();
//! b.bind_to(&a).unwrap();
//!
//! assert!(b.try_push(5));
//! assert!(a.try_push(1));
//!
//! // a published 1 into the shared cell, b picks it up on its next operation.
//! assert_eq!(b.try_pop(), Some(1));
//! assert!(b.is_empty());
//!```
//!
//! Positions are counted from the head of an imaginary full-length buffer, with the
//! stored elements always right-aligned in it: with `k` elements stored in a queue of
//! capacity `n`, they occupy positions `n - k .. n`.
//! A window position only overlays a real element while the queue is full enough
//! to reach it.
//!
//! Every `try_push`/`try_pop` first pulls values written into the shared cells by a
//! peer, mutates the queue, then publishes the queue's current values back into the
//! cells using the post-mutation offsets. A peer sees those values on its *next*
//! operation, there is no notification.
//!
//! Queues and windows are single-threaded (`!Send`); serialize access to a bound pair.

use thiserror::Error;

mod bind;
mod event;
mod pair;
mod queue;
mod window;

pub use bind::bind;
pub use event::{Event, LogObserver, Observer};
pub use pair::{Exchange, Pair, Side};
pub use queue::{Iter, WindowedQueue};
pub use window::Window;

/// Errors of queue construction and binding.
///
/// Full and empty queues are not errors: see [`WindowedQueue::try_push`]
/// and [`WindowedQueue::try_pop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested capacity was zero.
    #[error("capacity must be greater than zero")]
    InvalidCapacity,
    /// More distinct window positions than the queue has slots.
    #[error("{count} window positions requested for capacity {capacity}")]
    TooManyWindows { count: usize, capacity: usize },
    /// A window position beyond the last slot.
    #[error("window position {position} out of range for capacity {capacity}")]
    WindowOutOfRange { position: usize, capacity: usize },
    /// Binding queues that expose a different number of windows.
    #[error("window count mismatch: {ours} vs {theirs}")]
    WindowCountMismatch { ours: usize, theirs: usize },
}


#[cfg(test)]
mod tests_prop;
