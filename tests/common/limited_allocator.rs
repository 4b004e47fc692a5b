use std::{cell::Cell, fmt, ptr::NonNull, rc::Rc};

use strong_vec::{
    Allocator, Standard,
    alloc::AllocError,
};

/// Fails every allocation that would take the number of live slots above `limit`.
pub(crate) struct Limited<T> {
    current: Rc<Cell<usize>>,
    limit: usize,
    inner: Standard<T>,
}

impl<T> Limited<T> {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            current: Rc::default(),
            limit,
            inner: Standard::new(),
        }
    }

    /// The number of slots currently handed out.
    pub(crate) fn current(&self) -> usize {
        self.current.get()
    }

    fn add(&self, count: usize) -> Result<usize, AllocError> {
        let Some(new) = self.current.get().checked_add(count) else {
            return Err(AllocError);
        };

        if new > self.limit {
            return Err(AllocError);
        }

        Ok(new)
    }
}

impl<T> Clone for Limited<T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            limit: self.limit,
            inner: self.inner,
        }
    }
}

impl<T> PartialEq for Limited<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.current, &other.current)
    }
}

impl<T> fmt::Debug for Limited<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Limited")
            .field("current", &self.current.get())
            .field("limit", &self.limit)
            .finish()
    }
}

unsafe impl<T> Allocator for Limited<T> {
    type Value = T;
    type Rebind<U> = Limited<U>;

    fn allocate(&self, count: usize) -> Result<NonNull<T>, AllocError> {
        let new = self.add(count)?;
        let block = self.inner.allocate(count)?;
        self.current.set(new);
        Ok(block)
    }

    unsafe fn deallocate(&self, block: NonNull<T>, count: usize) {
        self.current.set(self.current.get() - count);
        unsafe { self.inner.deallocate(block, count) }
    }

    fn rebind<U>(&self) -> Limited<U> {
        Limited {
            current: self.current.clone(),
            limit: self.limit,
            inner: Standard::new(),
        }
    }
}
