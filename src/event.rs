//! Structured outcome events reported by a [`WindowedQueue`](crate::WindowedQueue).

use std::fmt;

/// Outcome of a single queue operation.
#[derive(Debug, PartialEq, Eq)]
pub enum Event<'a, T> {
    /// `try_push` finished; `accepted` is false if the queue was full.
    Push { value: &'a T, accepted: bool },
    /// `try_pop` finished; `value` is `None` if the queue was empty.
    Pop { value: Option<&'a T> },
    /// `clear` emptied the queue and its windows.
    Clear,
    /// `bind_to` fused the listed `(own position, peer position)` pairs.
    Bind { pairs: &'a [(usize, usize)] },
}

/// Receiver of queue events.
///
/// Implemented for every `FnMut(&Event<T>)` closure.
pub trait Observer<T> {
    fn observe(&mut self, event: &Event<'_, T>);
}

impl<T, F> Observer<T> for F
where
    F: FnMut(&Event<'_, T>),
{
    fn observe(&mut self, event: &Event<'_, T>) {
        self(event)
    }
}

/// Narrates events through the `log` facade at debug level.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
}

impl LogObserver {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<T: fmt::Debug> Observer<T> for LogObserver {
    fn observe(&mut self, event: &Event<'_, T>) {
        match event {
            Event::Push { value, accepted } => {
                log::debug!("{} - pushing value: {:?}, status: {}", self.label, value, accepted)
            }
            Event::Pop { value: Some(value) } => {
                log::debug!("{} - popped value: {:?}", self.label, value)
            }
            Event::Pop { value: None } => log::debug!("{} - nothing to pop", self.label),
            Event::Clear => log::debug!("{} - cleared", self.label),
            Event::Bind { pairs } => log::debug!("{} - bound windows {:?}", self.label, pairs),
        }
    }
}
