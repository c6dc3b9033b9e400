use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use crate::event::{Event, Observer};
use crate::window::Window;
use crate::Error;

/// Iterator over the stored elements of a [`WindowedQueue`], head to tail.
pub type Iter<'a, T> = std::collections::vec_deque::Iter<'a, T>;

/// A bounded FIFO queue exposing some of its positions as shareable windows.
///
/// See the crate documentation for the position layout.
pub struct WindowedQueue<T> {
    capacity: usize,
    contents: VecDeque<T>,
    // Keyed by position; the key set is fixed at construction.
    windows: BTreeMap<usize, Window<T>>,
    observer: Option<Box<dyn Observer<T>>>,
}

impl<T> WindowedQueue<T> {
    /// Create an empty queue of `capacity` elements with a window at each of `positions`.
    ///
    /// Repeated positions count once.
    ///
    /// # Errors
    ///
    /// Returns `Err(Error::InvalidCapacity)` if `capacity` is zero,
    /// `Err(Error::TooManyWindows)` if there are more positions than slots,
    /// `Err(Error::WindowOutOfRange)` if a position is not below `capacity`.
    pub fn new(capacity: usize, positions: impl IntoIterator<Item = usize>) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }

        let positions: BTreeSet<usize> = positions.into_iter().collect();
        if positions.len() > capacity {
            return Err(Error::TooManyWindows {
                count: positions.len(),
                capacity,
            });
        }
        if let Some(&position) = positions.last() {
            if position >= capacity {
                return Err(Error::WindowOutOfRange { position, capacity });
            }
        }

        Ok(Self {
            capacity,
            contents: VecDeque::with_capacity(capacity),
            windows: positions.into_iter().map(|p| (p, Window::new())).collect(),
            observer: None,
        })
    }

    /// Maximum number of elements the queue can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.contents.len() == self.capacity
    }

    /// Stored elements, oldest first.
    ///
    /// Values written into the windows by a bound peer are not reflected
    /// until the next `try_push` or `try_pop`.
    pub fn iter(&self) -> Iter<'_, T> {
        self.contents.iter()
    }

    /// Window positions in ascending order.
    pub fn window_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.windows.keys().copied()
    }

    /// Number of windows.
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// The window at `position`, if there is one.
    pub fn window(&self, position: usize) -> Option<&Window<T>> {
        self.windows.get(&position)
    }

    pub(crate) fn windows(&self) -> &BTreeMap<usize, Window<T>> {
        &self.windows
    }

    pub(crate) fn windows_mut(&mut self) -> &mut BTreeMap<usize, Window<T>> {
        &mut self.windows
    }

    /// Report every following operation outcome to `observer`, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl Observer<T> + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Remove every element and empty every window cell.
    ///
    /// Cells shared with a bound peer are emptied as well.
    pub fn clear(&mut self) {
        self.contents.clear();
        for window in self.windows.values() {
            window.drain();
        }
        notify(&mut self.observer, &Event::Clear);
    }

    /// Share the window cells of `other` by rank of position.
    ///
    /// The lowest window position of `self` adopts the cell of the lowest window
    /// position of `other`, the second lowest the second lowest, and so on.
    /// Positions are not required to be equal.
    ///
    /// # Errors
    ///
    /// Returns `Err(Error::WindowCountMismatch)` if the queues have a different
    /// number of windows. No window is rebound in that case.
    pub fn bind_to(&mut self, other: &WindowedQueue<T>) -> Result<(), Error> {
        let pairs = crate::bind::bind(self, other)?;
        notify(&mut self.observer, &Event::Bind { pairs: &pairs });
        Ok(())
    }

    /// Index of the first imaginary position holding a real element.
    #[inline]
    fn first_stored(&self) -> usize {
        self.capacity - self.contents.len()
    }
}

impl<T: Clone> WindowedQueue<T> {
    /// Append `value` to the tail, or return false if the queue is full.
    ///
    /// A rejected push leaves the queue and its windows untouched.
    pub fn try_push(&mut self, value: T) -> bool {
        if self.is_full() {
            notify(
                &mut self.observer,
                &Event::Push {
                    value: &value,
                    accepted: false,
                },
            );
            return false;
        }

        self.pull();
        self.contents.push_back(value);
        self.publish();

        if let Some(value) = self.contents.back() {
            notify(
                &mut self.observer,
                &Event::Push {
                    value,
                    accepted: true,
                },
            );
        }
        true
    }

    /// Remove and return the head, or `None` if the queue is empty.
    ///
    /// A pop on an empty queue leaves its windows untouched.
    pub fn try_pop(&mut self) -> Option<T> {
        if self.is_empty() {
            notify(&mut self.observer, &Event::Pop { value: None });
            return None;
        }

        self.pull();
        let head = self.contents.pop_front()?;
        self.publish();

        notify(&mut self.observer, &Event::Pop { value: Some(&head) });
        Some(head)
    }

    /// Overwrite overlaid elements with values a peer left in the window cells.
    fn pull(&mut self) {
        let first = self.first_stored();
        for (&position, window) in self.windows.range(first..) {
            if let Some(value) = window.drain() {
                log::trace!("pull: window {} -> element {}", position, position - first);
                self.contents[position - first] = value;
            }
        }
    }

    /// Write every overlaid element into its window cell.
    fn publish(&self) {
        let first = self.first_stored();
        for (&position, window) in self.windows.range(first..) {
            log::trace!("publish: element {} -> window {}", position - first, position);
            window.write(self.contents[position - first].clone());
        }
    }
}

fn notify<T>(observer: &mut Option<Box<dyn Observer<T>>>, event: &Event<'_, T>) {
    if let Some(observer) = observer {
        observer.observe(event);
    }
}

impl<'a, T> IntoIterator for &'a WindowedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for WindowedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowedQueue")
            .field("capacity", &self.capacity)
            .field("contents", &self.contents)
            .field("windows", &self.windows.keys().collect::<Vec<_>>())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}
