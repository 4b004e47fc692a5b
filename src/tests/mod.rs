#![cfg(feature = "panic-on-alloc")]

use core::{cell::Cell, fmt, marker::PhantomData, ptr::NonNull};
use std::rc::Rc;

use crate::{
    Allocator, Propagation, Standard,
    alloc::AllocError,
};

mod propagation;
mod reverse;

/// What a [`Tagged`] allocator and all of its clones and rebinds have done so far.
#[derive(Default, Debug)]
pub(crate) struct Counts {
    pub(crate) allocations: Cell<usize>,
    pub(crate) deallocations: Cell<usize>,
    pub(crate) constructed: Cell<usize>,
    pub(crate) destroyed: Cell<usize>,
}

impl Counts {
    pub(crate) fn live_blocks(&self) -> usize {
        self.allocations.get() - self.deallocations.get()
    }

    pub(crate) fn live_values(&self) -> usize {
        self.constructed.get() - self.destroyed.get()
    }
}

/// A stateful allocator. Instances compare equal when their ids match.
///
/// With `PROPAGATE` it travels along on copy assignment, move assignment and swap.
pub(crate) struct Tagged<T, const PROPAGATE: bool> {
    pub(crate) id: u32,
    pub(crate) counts: Rc<Counts>,
    marker: PhantomData<fn() -> T>,
}

/// A [`Tagged`] allocator that stays with its vector.
pub(crate) type Fixed<T> = Tagged<T, false>;

/// A [`Tagged`] allocator that travels along on assignment and swap.
pub(crate) type Travelling<T> = Tagged<T, true>;

impl<T, const PROPAGATE: bool> Tagged<T, PROPAGATE> {
    pub(crate) fn new(id: u32) -> Self {
        Self::with_counts(id, Rc::default())
    }

    pub(crate) fn with_counts(id: u32, counts: Rc<Counts>) -> Self {
        Self {
            id,
            counts,
            marker: PhantomData,
        }
    }
}

impl<T, const PROPAGATE: bool> Clone for Tagged<T, PROPAGATE> {
    fn clone(&self) -> Self {
        Self::with_counts(self.id, self.counts.clone())
    }
}

impl<T, const PROPAGATE: bool> PartialEq for Tagged<T, PROPAGATE> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T, const PROPAGATE: bool> fmt::Debug for Tagged<T, PROPAGATE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tagged").field(&self.id).finish()
    }
}

unsafe impl<T, const PROPAGATE: bool> Allocator for Tagged<T, PROPAGATE> {
    type Value = T;
    type Rebind<U> = Tagged<U, PROPAGATE>;

    const PROPAGATION: Propagation = if PROPAGATE {
        Propagation::ALWAYS.is_always_equal(false)
    } else {
        Propagation::NEVER
    };

    fn allocate(&self, count: usize) -> Result<NonNull<T>, AllocError> {
        let block = Standard::<T>::new().allocate(count)?;
        self.counts.allocations.set(self.counts.allocations.get() + 1);
        Ok(block)
    }

    unsafe fn deallocate(&self, block: NonNull<T>, count: usize) {
        self.counts.deallocations.set(self.counts.deallocations.get() + 1);
        unsafe { Standard::<T>::new().deallocate(block, count) }
    }

    unsafe fn construct(&self, slot: NonNull<T>, value: T) {
        self.counts.constructed.set(self.counts.constructed.get() + 1);
        unsafe { slot.as_ptr().write(value) }
    }

    unsafe fn destroy(&self, slot: NonNull<T>) {
        self.counts.destroyed.set(self.counts.destroyed.get() + 1);
        unsafe { slot.as_ptr().drop_in_place() }
    }

    fn rebind<U>(&self) -> Tagged<U, PROPAGATE> {
        Tagged::with_counts(self.id, self.counts.clone())
    }
}

#[test]
fn tagged_rebind_shares_state() {
    let ints = Fixed::<i32>::new(7);
    let strings: Fixed<String> = ints.rebind();

    assert_eq!(strings.id, 7);
    assert!(Rc::ptr_eq(&ints.counts, &strings.counts));
    assert!(!ints.equals(&Fixed::new(8)));
    assert!(ints.equals(&ints.clone()));
}

#[test]
fn standard_is_always_equal() {
    let a = Standard::<u8>::new();
    let b = Standard::<u8>::default();

    assert!(a.equals(&b));
    assert_eq!(Standard::<u8>::PROPAGATION, Propagation::ALWAYS);
    assert_eq!(a.max_size(), isize::MAX as usize);
    assert_eq!(Standard::<u64>::new().max_size(), isize::MAX as usize / 8);
    assert_eq!(Standard::<()>::new().max_size(), usize::MAX);
}

#[test]
fn standard_zero_count_is_dangling() {
    let alloc = Standard::<u32>::new();
    let block = alloc.allocate(0).unwrap();

    assert_eq!(block, NonNull::dangling());
    unsafe { alloc.deallocate(block, 0) };
}

#[test]
fn standard_rejects_oversized_requests() {
    assert_eq!(Standard::<u64>::new().allocate(usize::MAX), Err(AllocError));
}

#[test]
fn construct_with_leaves_slot_empty_on_panic() {
    let alloc = Fixed::<String>::new(0);
    let block = alloc.allocate(1).unwrap();

    unsafe {
        alloc.construct_with(block, || String::from("built"));
        assert_eq!(*block.as_ptr(), "built");
        alloc.destroy(block);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            alloc.construct_with(block, || panic!("no value"));
        }));
        assert!(result.is_err());

        alloc.deallocate(block, 1);
    }

    assert_eq!(alloc.counts.live_values(), 0);
    assert_eq!(alloc.counts.live_blocks(), 0);
}
