use crate::{Allocator, Standard, TryReserveError, Vector};

/// An output sink that appends everything written to it to the back of a vector.
///
/// This `struct` is created by [`Vector::back_inserter`].
///
/// # Examples
/// ```
/// use strong_vec::Vector;
///
/// let mut vec = Vector::from([1, 2]);
///
/// let mut sink = vec.back_inserter();
/// sink.put(3).put(4);
/// sink.extend([5, 6]);
///
/// assert_eq!(vec, [1, 2, 3, 4, 5, 6]);
/// ```
#[derive(Debug)]
pub struct BackInserter<'a, T, A: Allocator<Value = T> = Standard<T>> {
    vec: &'a mut Vector<T, A>,
}

impl<'a, T, A: Allocator<Value = T>> BackInserter<'a, T, A> {
    #[inline(always)]
    pub(super) fn new(vec: &'a mut Vector<T, A>) -> Self {
        Self { vec }
    }

    /// Appends `value` to the vector.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[cfg(feature = "panic-on-alloc")]
    #[inline]
    pub fn put(&mut self, value: T) -> &mut Self {
        self.vec.push(value);
        self
    }

    /// Appends `value` to the vector.
    ///
    /// # Errors
    /// Errors if the allocation fails. The vector is left unchanged.
    #[inline]
    pub fn try_put(&mut self, value: T) -> Result<&mut Self, TryReserveError> {
        self.vec.try_push(value)?;
        Ok(self)
    }

    /// Returns the vector this sink appends to.
    #[must_use]
    #[inline(always)]
    pub fn into_inner(self) -> &'a mut Vector<T, A> {
        self.vec
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<T, A: Allocator<Value = T>> Extend<T> for BackInserter<'_, T, A> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.vec.extend(iter);
    }
}
