use core::alloc::Layout;
#[cfg(feature = "panic-on-alloc")]
use core::convert::Infallible;

#[cfg(feature = "panic-on-alloc")]
use crate::{alloc_crate::alloc::handle_alloc_error, capacity_overflow, length_exceeded};
use crate::TryReserveError;

/// How an allocating operation reports failure.
///
/// `Infallible` panics (or calls the allocation error handler),
/// [`TryReserveError`] turns the failure into a value.
pub(crate) trait ErrorBehavior: Sized {
    fn allocation(layout: Layout) -> Self;
    fn capacity_overflow() -> Self;
    fn length_exceeded(requested: usize, max: usize) -> Self;
}

#[cfg(feature = "panic-on-alloc")]
impl ErrorBehavior for Infallible {
    #[inline(always)]
    fn allocation(layout: Layout) -> Self {
        handle_alloc_error(layout)
    }

    #[inline(always)]
    fn capacity_overflow() -> Self {
        capacity_overflow()
    }

    #[inline(always)]
    fn length_exceeded(requested: usize, max: usize) -> Self {
        length_exceeded(requested, max)
    }
}

impl ErrorBehavior for TryReserveError {
    #[inline(always)]
    fn allocation(layout: Layout) -> Self {
        Self::AllocError { layout }
    }

    #[inline(always)]
    fn capacity_overflow() -> Self {
        Self::CapacityOverflow
    }

    #[inline(always)]
    fn length_exceeded(requested: usize, max: usize) -> Self {
        Self::LengthExceeded { requested, max }
    }
}
