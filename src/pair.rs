use std::fmt;

use crate::queue::WindowedQueue;
use crate::Error;

/// One of the two queues of a [`Pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The opposite side.
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Outcome of [`Pair::exchange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange<T> {
    /// The head was popped and the new value pushed in its place.
    Replaced(T),
    /// The queue was empty; the new value was pushed.
    Inserted,
    /// The queue was empty but refused the push; this value was popped back instead.
    Returned(T),
    /// The queue neither accepted the new value nor yielded one.
    Rejected,
}

impl<T> Exchange<T> {
    /// The value handed back to the caller, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Exchange::Replaced(value) | Exchange::Returned(value) => Some(value),
            Exchange::Inserted | Exchange::Rejected => None,
        }
    }
}

/// Two equally long queues fused at their windows.
///
/// Both queues start full of the same initial value; the second queue adopts the
/// window cells of the first.
#[derive(Debug)]
pub struct Pair<T> {
    queues: [WindowedQueue<T>; 2],
}

impl<T> Pair<T>
where
    T: Clone + fmt::Debug,
{
    /// Build both queues, fill each with `capacity` copies of `initial`, then bind them.
    ///
    /// # Errors
    ///
    /// Returns the construction error of either queue, or
    /// `Err(Error::WindowCountMismatch)` if the position sets differ in size.
    pub fn new(
        capacity: usize,
        initial: T,
        first: impl IntoIterator<Item = usize>,
        second: impl IntoIterator<Item = usize>,
    ) -> Result<Self, Error> {
        let mut queues = [
            WindowedQueue::new(capacity, first)?,
            WindowedQueue::new(capacity, second)?,
        ];

        for (queue, side) in queues.iter_mut().zip([Side::First, Side::Second]) {
            for _ in 0..capacity {
                let pushed = queue.try_push(initial.clone());
                log::debug!("{} - pushing initial value: {:?}, status: {}", side, initial, pushed);
            }
        }

        let [first, second] = &mut queues;
        second.bind_to(first)?;
        log::debug!("queues bound");

        Ok(Self { queues })
    }

    /// Pop the head of `side` and push `value` in its place.
    ///
    /// If the queue is empty, `value` is only pushed. If that push is refused as
    /// well, a value is popped back out of the queue.
    pub fn exchange(&mut self, side: Side, value: T) -> Exchange<T> {
        let queue = &mut self.queues[side.index()];

        if let Some(head) = queue.try_pop() {
            log::debug!("{} - popped contained value: {:?}", side, head);
            log::debug!("{} - pushing new value: {:?}", side, value);
            let pushed = queue.try_push(value);
            log::debug!("{} - push status: {}", side, pushed);
            return Exchange::Replaced(head);
        }

        log::debug!("{} - can't pop contained value, pushing new value: {:?}", side, value);
        if queue.try_push(value) {
            return Exchange::Inserted;
        }

        log::warn!("{} - empty queue refused a push, popping a value back", side);
        match queue.try_pop() {
            Some(value) => {
                log::debug!("{} - value popped back: {:?}", side, value);
                Exchange::Returned(value)
            }
            None => {
                log::warn!("{} - can't pop a value back", side);
                Exchange::Rejected
            }
        }
    }

    pub fn queue(&self, side: Side) -> &WindowedQueue<T> {
        &self.queues[side.index()]
    }

    /// Mutable access to one queue, e.g. to attach an observer.
    pub fn queue_mut(&mut self, side: Side) -> &mut WindowedQueue<T> {
        &mut self.queues[side.index()]
    }
}
