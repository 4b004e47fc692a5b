use std::{
    cell::{Cell, Ref, RefCell},
    collections::HashMap,
    fmt,
    marker::PhantomData,
    ptr::NonNull,
    rc::Rc,
};

use strong_vec::{
    Allocator, Propagation, Standard,
    alloc::AllocError,
};

#[derive(Default)]
pub(crate) struct Ledger {
    /// Live blocks by address, with the slot count they were allocated with.
    blocks: RefCell<HashMap<usize, usize>>,
    pub(crate) allocations: Cell<usize>,
    pub(crate) constructed: Cell<usize>,
    pub(crate) destroyed: Cell<usize>,
}

impl Ledger {
    pub(crate) fn leaks(&self) -> Ref<'_, HashMap<usize, usize>> {
        self.blocks.borrow()
    }

    pub(crate) fn live_values(&self) -> usize {
        self.constructed.get() - self.destroyed.get()
    }
}

/// Records every block and every construction that goes through it.
///
/// Clones and rebinds write into the same [`Ledger`] and compare equal.
/// Zero-sized blocks are not recorded.
pub(crate) struct InstrumentedAllocator<T> {
    ledger: Rc<Ledger>,
    marker: PhantomData<fn() -> T>,
}

impl<T> InstrumentedAllocator<T> {
    pub(crate) fn new() -> Self {
        Self {
            ledger: Rc::default(),
            marker: PhantomData,
        }
    }

    pub(crate) fn ledger(&self) -> Rc<Ledger> {
        self.ledger.clone()
    }
}

impl<T> Clone for InstrumentedAllocator<T> {
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger.clone(),
            marker: PhantomData,
        }
    }
}

impl<T> PartialEq for InstrumentedAllocator<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.ledger, &other.ledger)
    }
}

impl<T> fmt::Debug for InstrumentedAllocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentedAllocator").finish_non_exhaustive()
    }
}

unsafe impl<T> Allocator for InstrumentedAllocator<T> {
    type Value = T;
    type Rebind<U> = InstrumentedAllocator<U>;

    const PROPAGATION: Propagation = Propagation::NEVER;

    fn allocate(&self, count: usize) -> Result<NonNull<T>, AllocError> {
        let block = Standard::<T>::new().allocate(count)?;
        self.ledger.allocations.set(self.ledger.allocations.get() + 1);

        if count != 0 && size_of::<T>() != 0 {
            self.ledger.blocks.borrow_mut().insert(block.as_ptr().addr(), count);
        }

        Ok(block)
    }

    unsafe fn deallocate(&self, block: NonNull<T>, count: usize) {
        if count != 0 && size_of::<T>() != 0 {
            let found = self.ledger.blocks.borrow_mut().remove(&block.as_ptr().addr()).expect("foreign block");
            assert_eq!(found, count, "block released with a different count");
        }

        unsafe { Standard::<T>::new().deallocate(block, count) }
    }

    unsafe fn construct(&self, slot: NonNull<T>, value: T) {
        self.ledger.constructed.set(self.ledger.constructed.get() + 1);
        unsafe { slot.as_ptr().write(value) }
    }

    unsafe fn destroy(&self, slot: NonNull<T>) {
        self.ledger.destroyed.set(self.ledger.destroyed.get() + 1);
        unsafe { slot.as_ptr().drop_in_place() }
    }

    fn rebind<U>(&self) -> InstrumentedAllocator<U> {
        InstrumentedAllocator {
            ledger: self.ledger.clone(),
            marker: PhantomData,
        }
    }
}
