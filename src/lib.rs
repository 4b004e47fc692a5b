// NB: We avoid using closures to map `Result` and `Option`s in various places because they result in less readable assembly output.
// When using closures, functions like `capacity_overflow` can get the name of some closure that invokes it instead.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]
#![allow(
    clippy::inline_always,
    clippy::module_name_repetitions,
    clippy::comparison_chain,
    clippy::partialeq_ne_impl,
    clippy::collapsible_else_if,
    clippy::items_after_statements,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    unknown_lints,
    rustdoc::redundant_explicit_links, // for cargo-rdme
)]
#![doc(test(attr(warn(dead_code))))]
//! A growable contiguous vector with a typed allocator capability and C++-style cursors.
//!
//! [`Vector<T, A>`](Vector) keeps the memory it owns (its *capacity*) strictly apart from the
//! objects it has constructed (its *length*). Every element is constructed and destroyed
//! through the vector's [`Allocator`], and raw blocks are requested from and returned to that
//! same allocator.
//!
//! # Strong guarantee on reallocation
//! Whenever an operation needs a bigger block, the new values are constructed into a freshly
//! allocated block first. Only when all of them have been constructed are the existing elements
//! relocated and the old block released. If allocation fails or an element's constructor panics,
//! the vector is left exactly as it was:
//!
//! ```
//! use std::panic::{catch_unwind, AssertUnwindSafe};
//! use strong_vec::Vector;
//!
//! #[derive(Debug, PartialEq)]
//! struct Fragile(i32);
//!
//! impl Clone for Fragile {
//!     fn clone(&self) -> Self {
//!         if self.0 < 0 {
//!             panic!("refusing to clone");
//!         }
//!         Fragile(self.0)
//!     }
//! }
//!
//! let mut vec: Vector<Fragile> = Vector::new();
//! vec.push(Fragile(1));
//! vec.push(Fragile(2));
//! let capacity = vec.capacity();
//!
//! let result = catch_unwind(AssertUnwindSafe(|| vec.resize(10, Fragile(-1))));
//! assert!(result.is_err());
//!
//! assert_eq!(vec, [Fragile(1), Fragile(2)]);
//! assert_eq!(vec.capacity(), capacity);
//! ```
//!
//! # Fallible allocation
//! Every method that may allocate comes in two flavors. The plain one panics when the
//! allocation fails and is only available with the `panic-on-alloc` feature. The `try_`
//! prefixed one returns a [`TryReserveError`] instead:
//!
//! ```
//! use strong_vec::{TryReserveError, Vector};
//!
//! let mut vec: Vector<u64> = Vector::new();
//! assert_eq!(
//!     vec.try_reserve(usize::MAX),
//!     Err(TryReserveError::LengthExceeded { requested: usize::MAX, max: vec.max_size() }),
//! );
//! assert_eq!(vec.capacity(), 0);
//! ```
//!
//! # Cursors
//! Positions inside a vector are [`Cursor`]s. They behave like the random-access iterators of
//! C++: they can be moved, compared and subtracted, and they are accepted by
//! [`insert`](Vector::insert) and [`erase`](Vector::erase):
//!
//! ```
//! use strong_vec::Vector;
//!
//! let mut vec = Vector::from([1, 3, -2, 8, 2, -12, 17, 5]);
//!
//! vec.insert(vec.cend(), 10);
//! vec.insert(vec.cbegin(), -7);
//! vec.insert(vec.cbegin() + 5, 1010);
//! assert_eq!(vec, [-7, 1, 3, -2, 8, 1010, 2, -12, 17, 5, 10]);
//!
//! vec.erase_range(vec.cbegin() + 4, vec.cend() - 4);
//! assert_eq!(vec, [-7, 1, 3, -2, -12, 17, 5, 10]);
//! ```
//!
//! # Feature Flags
//! - **`std`** *(enabled by default)*: Enables `std` support in `allocator-api2`.
//! - **`panic-on-alloc`** *(enabled by default)*: Adds functions and traits that will panic
//!   when allocations fail. Without this feature only the `try_` methods are available.
//! - **`serde`**: Adds `Serialize` and `Deserialize` implementations for [`Vector`].

extern crate alloc as alloc_crate;

pub mod alloc;
pub mod cursor;
mod error_behavior;
mod features;
mod out_of_range_error;
mod partial_eq;
mod reverse;
mod try_reserve_error;
pub mod vector;

pub use alloc::{Allocator, Propagation, Standard};
pub use cursor::{Bidirectional, ConstCursor, Cursor, MutCursor, Position, RandomAccess};
pub(crate) use error_behavior::ErrorBehavior;
pub use out_of_range_error::OutOfRangeError;
pub use reverse::Reverse;
pub use try_reserve_error::TryReserveError;
pub use vector::{BackInserter, IntoIter, Vector};

#[cfg(feature = "panic-on-alloc")]
use core::convert::Infallible;
use core::mem;

#[cfg(test)]
mod tests;

#[cold]
#[inline(never)]
#[cfg(feature = "panic-on-alloc")]
const fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

#[cold]
#[inline(never)]
#[cfg(feature = "panic-on-alloc")]
fn length_exceeded(requested: usize, max: usize) -> ! {
    panic!("requested capacity of {requested} exceeds the maximum of {max}");
}

#[cold]
#[inline(never)]
fn exact_size_iterator_bad_len() -> ! {
    panic!("ExactSizeIterator did not return as many items as promised")
}

// this is just `Result::into_ok` but with a name to match our use case
#[inline(always)]
#[cfg(feature = "panic-on-alloc")]
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
    }
}

trait SizedTypeProperties: Sized {
    const SIZE: usize = mem::size_of::<Self>();

    const IS_ZST: bool = mem::size_of::<Self>() == 0;

    /// The distance in bytes between two neighboring cursor positions.
    /// Zero-sized types still advance by one byte so that positions stay distinguishable.
    const STRIDE: usize = if Self::IS_ZST { 1 } else { Self::SIZE };
}

impl<T> SizedTypeProperties for T {}

macro_rules! wrap_result {
    ($ok:ty, $err:ty) => { Result<$ok, $err> };
    (, $err:ty) => { Result<(), $err> };
}

pub(crate) use wrap_result;

/// Writes a method once as `generic_*<B: ErrorBehavior>` and exposes it twice:
/// a panicking version behind `panic-on-alloc` and a `try_` version returning [`TryReserveError`].
macro_rules! error_behavior_generic_methods {
    (
        $(
            $(#[$attr:meta])*
            impl
            $(#[$attr_infallible:meta])*
            for fn $infallible:ident
            $(#[$attr_fallible:meta])*
            for fn $fallible:ident
            use fn $generic:ident
            $(<{$($generic_params:tt)*}>)?
            (&mut $self:ident $(, $arg_pat:ident: $arg_ty:ty)* $(,)?)
            $(-> $return_ty:ty)?
            $(where { $($where:tt)* })?
            $body:block
        )*
    ) => {
        $(
            $(#[$attr])*
            $(#[$attr_infallible])*
            ///
            /// # Panics
            /// Panics if the allocation fails.
            #[cfg(feature = "panic-on-alloc")]
            #[inline(always)]
            pub fn $infallible
            $(<$($generic_params)*>)?
            (&mut $self $(, $arg_pat: $arg_ty)*)
            $(-> $return_ty)?
            $(where $($where)*)?
            {
                $crate::infallible($self.$generic($($arg_pat),*))
            }

            $(#[$attr])*
            $(#[$attr_fallible])*
            ///
            /// # Errors
            /// Errors if the allocation fails.
            #[inline(always)]
            pub fn $fallible
            $(<$($generic_params)*>)?
            (&mut $self $(, $arg_pat: $arg_ty)*)
            -> $crate::wrap_result!($($return_ty)?, $crate::TryReserveError)
            $(where $($where)*)?
            {
                $self.$generic($($arg_pat),*)
            }

            #[inline]
            pub(crate) fn $generic
            <B: $crate::ErrorBehavior $(, $($generic_params)*)?>
            (&mut $self $(, $arg_pat: $arg_ty)*)
            -> $crate::wrap_result!($($return_ty)?, B)
            $(where $($where)*)?
            $body
        )*
    };
}

pub(crate) use error_behavior_generic_methods;
