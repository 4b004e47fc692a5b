use core::{
    cmp::Ordering,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::cursor::{Bidirectional, ConstCursor, MutCursor, RandomAccess};

/// A position adapter that walks the underlying position backwards.
///
/// `Reverse` wraps a position `current` and denotes the element just before it.
/// Incrementing it decrements `current` and the other way around, so the reverse
/// range `[Reverse::new(end), Reverse::new(begin))` visits the elements last to first.
///
/// # Examples
/// ```
/// use strong_vec::{Bidirectional, Vector};
///
/// let vec = Vector::from([1, 2, 3]);
///
/// let mut values = Vec::new();
/// let mut cursor = vec.crbegin();
/// while cursor != vec.crend() {
///     values.push(unsafe { *cursor.get() });
///     cursor.increment();
/// }
///
/// assert_eq!(values, [3, 2, 1]);
/// assert_eq!(vec.crend().base(), vec.cbegin());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reverse<I> {
    current: I,
}

impl<I> Reverse<I> {
    /// Wraps `current`. The new position denotes the element before `current`.
    #[must_use]
    #[inline(always)]
    pub const fn new(current: I) -> Self {
        Self { current }
    }

    /// Returns the underlying position, which is one past the element this position denotes.
    #[must_use]
    #[inline(always)]
    pub fn base(self) -> I {
        self.current
    }
}

impl<I: Bidirectional> Reverse<I> {
    /// Returns a reference to the element before [`base`](Self::base).
    ///
    /// # Safety
    /// The element before the base position must be live for `'a` with no mutable reference to it.
    #[must_use]
    #[inline(always)]
    pub unsafe fn get<'a>(self) -> &'a I::Item
    where
        I::Item: 'a,
    {
        let mut current = self.current;
        current.decrement();
        unsafe { current.get() }
    }
}

impl<T> Reverse<MutCursor<T>> {
    /// Returns a mutable reference to the element before [`base`](Self::base).
    ///
    /// # Safety
    /// The element before the base position must be live for `'a` with no other reference to it.
    #[must_use]
    #[inline(always)]
    pub unsafe fn get_mut<'a>(self) -> &'a mut T {
        unsafe { (self.current - 1).get_mut() }
    }
}

impl<T> From<Reverse<MutCursor<T>>> for Reverse<ConstCursor<T>> {
    #[inline(always)]
    fn from(reverse: Reverse<MutCursor<T>>) -> Self {
        Self::new(reverse.current.into())
    }
}

impl<I: PartialOrd> PartialOrd for Reverse<I> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.current.partial_cmp(&self.current)
    }
}

impl<I: Ord> Ord for Reverse<I> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.current.cmp(&self.current)
    }
}

impl<I: Bidirectional> Bidirectional for Reverse<I> {
    type Item = I::Item;

    #[inline(always)]
    unsafe fn get<'a>(self) -> &'a I::Item
    where
        I::Item: 'a,
    {
        unsafe { Reverse::get(self) }
    }

    #[inline(always)]
    fn increment(&mut self) {
        self.current.decrement();
    }

    #[inline(always)]
    fn decrement(&mut self) {
        self.current.increment();
    }
}

impl<I: RandomAccess> RandomAccess for Reverse<I> {
    #[inline(always)]
    fn advance(&mut self, count: isize) {
        self.current.advance(count.wrapping_neg());
    }

    #[inline(always)]
    fn distance_from(&self, origin: &Self) -> isize {
        origin.current.distance_from(&self.current)
    }
}

impl<I: RandomAccess> Add<isize> for Reverse<I> {
    type Output = Self;

    #[inline(always)]
    fn add(mut self, count: isize) -> Self {
        self.advance(count);
        self
    }
}

impl<I: RandomAccess> Sub<isize> for Reverse<I> {
    type Output = Self;

    #[inline(always)]
    fn sub(mut self, count: isize) -> Self {
        self.advance(count.wrapping_neg());
        self
    }
}

impl<I: RandomAccess> AddAssign<isize> for Reverse<I> {
    #[inline(always)]
    fn add_assign(&mut self, count: isize) {
        self.advance(count);
    }
}

impl<I: RandomAccess> SubAssign<isize> for Reverse<I> {
    #[inline(always)]
    fn sub_assign(&mut self, count: isize) {
        self.advance(count.wrapping_neg());
    }
}
