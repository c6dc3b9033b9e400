use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Handle to a shared storage cell holding at most one value.
///
/// Several handles may reference the same cell; the cell lives as long as the
/// longest-lived handle. Rebinding a handle is how two queues fuse a position.
pub struct Window<T> {
    cell: Rc<Cell<Option<T>>>,
}

impl<T> Window<T> {
    /// Create a handle to a fresh, empty cell.
    pub fn new() -> Self {
        Self {
            cell: Rc::new(Cell::new(None)),
        }
    }

    /// Overwrite the content of the cell.
    #[inline]
    pub fn write(&self, value: T) {
        self.cell.set(Some(value));
    }

    /// Take the content of the cell, leaving it empty.
    #[inline]
    pub fn drain(&self) -> Option<T> {
        self.cell.take()
    }

    /// Reference the cell of `other` from now on.
    ///
    /// The previously referenced cell is released; its content is not carried over.
    pub fn rebind(&mut self, other: &Window<T>) {
        self.cell = Rc::clone(&other.cell);
    }

    /// Returns true, if `self` and `other` reference the same cell.
    #[inline]
    pub fn shares_cell(&self, other: &Window<T>) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }

    /// Returns true, if the cell holds no value.
    pub fn is_empty(&self) -> bool {
        let value = self.cell.take();
        let empty = value.is_none();
        self.cell.set(value);
        empty
    }
}

impl<T: Clone> Window<T> {
    /// Read the content of the cell without clearing it.
    pub fn peek(&self) -> Option<T> {
        let value = self.cell.take();
        self.cell.set(value.clone());
        value
    }
}

impl<T> Default for Window<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Window<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("cell", &Rc::as_ptr(&self.cell))
            .field("empty", &self.is_empty())
            .finish()
    }
}
