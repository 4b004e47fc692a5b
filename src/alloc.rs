//! The typed allocator capability used by [`Vector`](crate::Vector).
//!
//! An [`Allocator`] hands out raw blocks of uninitialized slots for one element type and
//! constructs and destroys individual elements inside them. It never tracks how many
//! elements are alive; that is the container's job.

mod standard;

use core::ptr::{self, NonNull};

pub use allocator_api2::alloc::{AllocError, Global};
pub use standard::Standard;

use crate::SizedTypeProperties;

/// Controls whether an allocator instance travels with the elements
/// when containers are copy-assigned, move-assigned or swapped.
///
/// # Examples
/// ```
/// use strong_vec::Propagation;
///
/// const ON_MOVE_ONLY: Propagation = Propagation::NEVER.on_move_assignment(true);
///
/// assert!(ON_MOVE_ONLY.on_move_assignment);
/// assert!(!ON_MOVE_ONLY.on_copy_assignment);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct Propagation {
    /// [`Clone::clone_from`] adopts the source's allocator.
    pub on_copy_assignment: bool,
    /// [`Vector::take_from`](crate::Vector::take_from) adopts the source's allocator.
    pub on_move_assignment: bool,
    /// [`Vector::swap_with`](crate::Vector::swap_with) exchanges the allocators.
    pub on_swap: bool,
    /// Any two instances of this allocator compare equal.
    pub is_always_equal: bool,
}

impl Propagation {
    /// Allocators never propagate and instances are compared with [`PartialEq`].
    pub const NEVER: Self = Self {
        on_copy_assignment: false,
        on_move_assignment: false,
        on_swap: false,
        is_always_equal: false,
    };

    /// Allocators always propagate and are interchangeable.
    pub const ALWAYS: Self = Self {
        on_copy_assignment: true,
        on_move_assignment: true,
        on_swap: true,
        is_always_equal: true,
    };

    /// Sets [`on_copy_assignment`](Self::on_copy_assignment).
    #[must_use]
    pub const fn on_copy_assignment(mut self, value: bool) -> Self {
        self.on_copy_assignment = value;
        self
    }

    /// Sets [`on_move_assignment`](Self::on_move_assignment).
    #[must_use]
    pub const fn on_move_assignment(mut self, value: bool) -> Self {
        self.on_move_assignment = value;
        self
    }

    /// Sets [`on_swap`](Self::on_swap).
    #[must_use]
    pub const fn on_swap(mut self, value: bool) -> Self {
        self.on_swap = value;
        self
    }

    /// Sets [`is_always_equal`](Self::is_always_equal).
    #[must_use]
    pub const fn is_always_equal(mut self, value: bool) -> Self {
        self.is_always_equal = value;
        self
    }
}

/// A typed allocator: raw blocks of `Value` slots plus in-place construction and destruction.
///
/// Two instances that compare equal (see [`equals`](Allocator::equals)) must be able to
/// deallocate each other's blocks.
///
/// # Safety
/// - `allocate(count)` must return a block that is valid for reads and writes of `count`
///   properly aligned `Value`s, and that stays valid until it is passed to `deallocate`.
/// - `deallocate` must accept any block returned by `allocate` on this instance or on an
///   instance that compares equal, together with the same `count`.
/// - `construct` must leave a valid `Value` in the slot, `destroy` must end its lifetime
///   without freeing memory.
pub unsafe trait Allocator: Clone + PartialEq {
    /// The element type this allocator constructs.
    type Value;

    /// The equivalent allocator for another element type.
    type Rebind<U>: Allocator<Value = U>;

    /// How instances propagate between containers.
    const PROPAGATION: Propagation = Propagation::NEVER;

    /// Allocates a block of `count` uninitialized slots.
    ///
    /// A `count` of zero may return a dangling pointer.
    ///
    /// # Errors
    /// Errors if the memory can not be obtained.
    fn allocate(&self, count: usize) -> Result<NonNull<Self::Value>, AllocError>;

    /// Releases a block of `count` slots. None of the slots may hold a live value.
    ///
    /// # Safety
    /// `block` must have been returned by `allocate(count)` of this allocator
    /// or of one that compares equal.
    unsafe fn deallocate(&self, block: NonNull<Self::Value>, count: usize);

    /// Moves `value` into the uninitialized `slot`.
    ///
    /// # Safety
    /// `slot` must be valid for writes and must not hold a live value.
    #[inline(always)]
    unsafe fn construct(&self, slot: NonNull<Self::Value>, value: Self::Value) {
        unsafe { slot.as_ptr().write(value) }
    }

    /// Constructs the value returned by `f` directly in the uninitialized `slot`.
    ///
    /// If `f` panics the slot stays uninitialized.
    ///
    /// # Safety
    /// `slot` must be valid for writes and must not hold a live value.
    #[inline(always)]
    unsafe fn construct_with(&self, slot: NonNull<Self::Value>, f: impl FnOnce() -> Self::Value) {
        unsafe { self.construct(slot, f()) }
    }

    /// Ends the lifetime of the value in `slot`. The memory stays allocated.
    ///
    /// # Safety
    /// `slot` must hold a live value which is not used afterwards.
    #[inline(always)]
    unsafe fn destroy(&self, slot: NonNull<Self::Value>) {
        unsafe { ptr::drop_in_place(slot.as_ptr()) }
    }

    /// The largest `count` that [`allocate`](Allocator::allocate) can possibly succeed with.
    #[inline]
    fn max_size(&self) -> usize {
        max_size_of::<Self::Value>()
    }

    /// Returns an equivalent allocator for element type `U`.
    fn rebind<U>(&self) -> Self::Rebind<U>;

    /// The allocator a copy of a container should use.
    #[inline]
    #[must_use]
    fn select_on_copy(&self) -> Self {
        self.clone()
    }

    /// Whether `self` can release blocks allocated by `other` and vice versa.
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        Self::PROPAGATION.is_always_equal || self == other
    }
}

/// The default [`Allocator::max_size`]: the largest slot count whose byte size fits in `isize`.
#[must_use]
pub const fn max_size_of<T>() -> usize {
    if T::IS_ZST { usize::MAX } else { isize::MAX as usize / T::SIZE }
}
