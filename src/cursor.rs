//! Random-access positions into a [`Vector`](crate::Vector)'s storage.
//!
//! A [`Cursor`] is a raw slot pointer that knows its element type and whether it may be
//! used for mutation. It carries no lifetime, so it stays usable while the vector is
//! mutated. It is only *valid* until the vector reallocates or shifts the slot it points
//! to, which is why dereferencing it is `unsafe`.
//!
//! ```
//! use strong_vec::Vector;
//!
//! let mut vec = Vector::from([10, 20, 30, 40]);
//!
//! let mut cursor = vec.begin() + 1;
//! unsafe { *cursor.get_mut() += 5 };
//! cursor += 2;
//!
//! assert_eq!(unsafe { *cursor.get() }, 40);
//! assert_eq!(vec.cend().offset_from(cursor), 1);
//! assert!(vec.cbegin() < cursor);
//! assert_eq!(vec, [10, 25, 30, 40]);
//! ```
//!
//! A [`MutCursor`] widens into a [`ConstCursor`], but not the other way around:
//!
//! ```compile_fail
//! use strong_vec::{MutCursor, Vector};
//!
//! let vec = Vector::from([1, 2, 3]);
//! let cursor: MutCursor<i32> = vec.cbegin().into();
//! ```

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr::NonNull,
};

use crate::SizedTypeProperties;

/// A position in a contiguous block of `T` slots.
///
/// `MUTABLE` selects whether the cursor can hand out `&mut T`.
/// Use the [`MutCursor`] and [`ConstCursor`] aliases.
///
/// Cursors of zero-sized types still advance by one byte per position
/// so that distinct positions compare unequal.
#[repr(transparent)]
pub struct Cursor<T, const MUTABLE: bool> {
    ptr: NonNull<T>,
}

/// A cursor that allows mutating the element it points to.
pub type MutCursor<T> = Cursor<T, true>;

/// A cursor that only allows reading the element it points to.
pub type ConstCursor<T> = Cursor<T, false>;

impl<T, const MUTABLE: bool> Cursor<T, MUTABLE> {
    /// Creates a cursor pointing at `ptr`.
    #[must_use]
    #[inline(always)]
    pub const fn new(ptr: NonNull<T>) -> Self {
        Self { ptr }
    }

    /// Returns the slot pointer.
    #[must_use]
    #[inline(always)]
    pub const fn as_non_null(self) -> NonNull<T> {
        self.ptr
    }

    /// Returns the slot pointer.
    #[must_use]
    #[inline(always)]
    pub const fn as_ptr(self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a shared reference to the element at this position.
    ///
    /// # Safety
    /// The cursor must point at a live element of a vector that has not been
    /// reallocated or shifted since the cursor was obtained, and no mutable reference
    /// to that element may exist for `'a`.
    #[must_use]
    #[inline(always)]
    pub unsafe fn get<'a>(self) -> &'a T {
        if T::IS_ZST {
            unsafe { NonNull::<T>::dangling().as_ref() }
        } else {
            unsafe { self.ptr.as_ref() }
        }
    }

    /// Returns the number of positions from `origin` to `self`.
    ///
    /// Both cursors must point into the same block.
    ///
    /// ```
    /// use strong_vec::Vector;
    ///
    /// let vec = Vector::from(['a', 'b', 'c']);
    /// assert_eq!(vec.cend().offset_from(vec.cbegin()), 3);
    /// assert_eq!(vec.cbegin().offset_from(vec.cend()), -3);
    /// ```
    #[must_use]
    #[inline]
    pub fn offset_from<const M: bool>(self, origin: Cursor<T, M>) -> isize {
        let bytes = self.addr().wrapping_sub(origin.addr()) as isize;
        bytes / T::STRIDE as isize
    }

    /// Returns a cursor `count` positions away.
    ///
    /// # Panics
    /// Panics if the resulting position would be the null address.
    #[must_use]
    #[inline]
    pub fn offset(self, count: isize) -> Self {
        let bytes = count.wrapping_mul(T::STRIDE as isize);

        match NonNull::new(self.ptr.as_ptr().wrapping_byte_offset(bytes)) {
            Some(ptr) => Self { ptr },
            None => cursor_out_of_address_space(),
        }
    }

    #[inline(always)]
    pub(crate) fn addr(self) -> usize {
        self.ptr.as_ptr().addr()
    }
}

impl<T> Cursor<T, true> {
    /// Returns the mutable slot pointer.
    #[must_use]
    #[inline(always)]
    pub const fn as_mut_ptr(self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a mutable reference to the element at this position.
    ///
    /// # Safety
    /// The cursor must point at a live element of a vector that has not been
    /// reallocated or shifted since the cursor was obtained, and no other reference
    /// to that element may exist for `'a`.
    #[must_use]
    #[inline(always)]
    pub unsafe fn get_mut<'a>(self) -> &'a mut T {
        if T::IS_ZST {
            unsafe { NonNull::<T>::dangling().as_mut() }
        } else {
            let mut ptr = self.ptr;
            unsafe { ptr.as_mut() }
        }
    }
}

#[cold]
#[inline(never)]
fn cursor_out_of_address_space() -> ! {
    panic!("cursor moved to the null address")
}

impl<T, const MUTABLE: bool> Clone for Cursor<T, MUTABLE> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const MUTABLE: bool> Copy for Cursor<T, MUTABLE> {}

impl<T, const MUTABLE: bool> fmt::Debug for Cursor<T, MUTABLE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(if MUTABLE { "MutCursor" } else { "ConstCursor" }).field(&self.ptr).finish()
    }
}

impl<T> From<MutCursor<T>> for ConstCursor<T> {
    #[inline(always)]
    fn from(cursor: MutCursor<T>) -> Self {
        Self { ptr: cursor.ptr }
    }
}

impl<T, const A: bool, const B: bool> PartialEq<Cursor<T, B>> for Cursor<T, A> {
    #[inline(always)]
    fn eq(&self, other: &Cursor<T, B>) -> bool {
        self.addr() == other.addr()
    }
}

impl<T, const MUTABLE: bool> Eq for Cursor<T, MUTABLE> {}

impl<T, const A: bool, const B: bool> PartialOrd<Cursor<T, B>> for Cursor<T, A> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Cursor<T, B>) -> Option<Ordering> {
        Some(self.addr().cmp(&other.addr()))
    }
}

impl<T, const MUTABLE: bool> Ord for Cursor<T, MUTABLE> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.addr().cmp(&other.addr())
    }
}

impl<T, const MUTABLE: bool> Hash for Cursor<T, MUTABLE> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl<T, const MUTABLE: bool> Add<isize> for Cursor<T, MUTABLE> {
    type Output = Self;

    #[inline(always)]
    fn add(self, count: isize) -> Self {
        self.offset(count)
    }
}

impl<T, const MUTABLE: bool> Sub<isize> for Cursor<T, MUTABLE> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, count: isize) -> Self {
        self.offset(count.wrapping_neg())
    }
}

impl<T, const MUTABLE: bool> AddAssign<isize> for Cursor<T, MUTABLE> {
    #[inline(always)]
    fn add_assign(&mut self, count: isize) {
        *self = self.offset(count);
    }
}

impl<T, const MUTABLE: bool> SubAssign<isize> for Cursor<T, MUTABLE> {
    #[inline(always)]
    fn sub_assign(&mut self, count: isize) {
        *self = self.offset(count.wrapping_neg());
    }
}

/// A position that can be read from and moved one step in either direction.
pub trait Bidirectional: Copy + PartialEq {
    /// The element type.
    type Item;

    /// Returns a reference to the element at this position.
    ///
    /// # Safety
    /// The position must denote a live element for `'a` with no mutable reference to it.
    unsafe fn get<'a>(self) -> &'a Self::Item
    where
        Self::Item: 'a;

    /// Moves one position forward.
    fn increment(&mut self);

    /// Moves one position backward.
    fn decrement(&mut self);
}

/// A [`Bidirectional`] position that can jump by any distance in constant time.
pub trait RandomAccess: Bidirectional + PartialOrd {
    /// Moves `count` positions forward, or backward when `count` is negative.
    fn advance(&mut self, count: isize);

    /// Returns the number of [`increment`](Bidirectional::increment)s needed to get from `origin` to `self`.
    fn distance_from(&self, origin: &Self) -> isize;
}

impl<T, const MUTABLE: bool> Bidirectional for Cursor<T, MUTABLE> {
    type Item = T;

    #[inline(always)]
    unsafe fn get<'a>(self) -> &'a T
    where
        T: 'a,
    {
        unsafe { Cursor::get(self) }
    }

    #[inline(always)]
    fn increment(&mut self) {
        *self += 1;
    }

    #[inline(always)]
    fn decrement(&mut self) {
        *self -= 1;
    }
}

impl<T, const MUTABLE: bool> RandomAccess for Cursor<T, MUTABLE> {
    #[inline(always)]
    fn advance(&mut self, count: isize) {
        *self += count;
    }

    #[inline(always)]
    fn distance_from(&self, origin: &Self) -> isize {
        self.offset_from(*origin)
    }
}

/// Anything that names a position in a vector: an index or a cursor.
///
/// Methods like [`Vector::insert`](crate::Vector::insert) and
/// [`Vector::erase`](crate::Vector::erase) accept either.
pub trait Position<T>: Copy {
    /// Converts this position into an index relative to `begin`.
    ///
    /// Returns `None` if the position does not name a slot in `[begin, begin + len]`.
    fn to_index(self, begin: ConstCursor<T>, len: usize) -> Option<usize>;
}

impl<T> Position<T> for usize {
    #[inline(always)]
    fn to_index(self, _: ConstCursor<T>, len: usize) -> Option<usize> {
        if self <= len { Some(self) } else { None }
    }
}

impl<T, const MUTABLE: bool> Position<T> for Cursor<T, MUTABLE> {
    #[inline]
    fn to_index(self, begin: ConstCursor<T>, len: usize) -> Option<usize> {
        let bytes = self.addr().wrapping_sub(begin.addr());

        if bytes % T::STRIDE != 0 {
            return None;
        }

        let index = bytes / T::STRIDE;
        if index <= len { Some(index) } else { None }
    }
}
