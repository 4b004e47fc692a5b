use core::{
    fmt,
    iter::FusedIterator,
    marker::PhantomData,
    mem::ManuallyDrop,
    ptr::{self, NonNull},
    slice,
};

use crate::{Allocator, Standard, Vector};

/// An iterator that moves out of a vector.
///
/// This `struct` is created by the `into_iter` method on [`Vector`]
/// (provided by the [`IntoIterator`] trait).
///
/// Elements that are not yielded are destroyed through the vector's allocator
/// when the iterator is dropped, and the block is returned to it.
///
/// # Examples
/// ```
/// use strong_vec::Vector;
///
/// let vec = Vector::from([1, 2, 3, 4]);
/// let mut iter = vec.into_iter();
///
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next_back(), Some(4));
/// assert_eq!(iter.as_slice(), [2, 3]);
/// assert_eq!(iter.len(), 2);
/// ```
pub struct IntoIter<T, A: Allocator<Value = T> = Standard<T>> {
    buf: NonNull<T>,
    cap: usize,
    alloc: A,

    start: usize,
    end: usize,

    /// Marks ownership over T. (<https://doc.rust-lang.org/nomicon/phantom-data.html#generic-parameters-and-drop-checking>)
    marker: PhantomData<T>,
}

unsafe impl<T: Send, A: Allocator<Value = T> + Send> Send for IntoIter<T, A> {}
unsafe impl<T: Sync, A: Allocator<Value = T> + Sync> Sync for IntoIter<T, A> {}

impl<T, A: Allocator<Value = T>> IntoIter<T, A> {
    pub(super) fn new(vec: Vector<T, A>) -> Self {
        let vec = ManuallyDrop::new(vec);

        Self {
            buf: vec.ptr,
            cap: vec.cap,
            // the vector is never dropped, so the allocator is moved out exactly once
            alloc: unsafe { ptr::read(&vec.alloc) },
            start: 0,
            end: vec.len,
            marker: PhantomData,
        }
    }

    /// Returns the remaining items of this iterator as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start) }
    }

    /// Returns the remaining items of this iterator as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr().add(self.start), self.end - self.start) }
    }

    /// Returns a reference to the allocator.
    #[must_use]
    #[inline(always)]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }
}

impl<T: fmt::Debug, A: Allocator<Value = T>> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator<Value = T>> AsRef<[T]> for IntoIter<T, A> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator<Value = T>> Iterator for IntoIter<T, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        let value = unsafe { self.buf.add(self.start).read() };
        self.start += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.end - self.start;
        (exact, Some(exact))
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }
}

impl<T, A: Allocator<Value = T>> DoubleEndedIterator for IntoIter<T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        Some(unsafe { self.buf.add(self.end).read() })
    }
}

impl<T, A: Allocator<Value = T>> ExactSizeIterator for IntoIter<T, A> {}
impl<T, A: Allocator<Value = T>> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator<Value = T>> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        struct DropGuard<'i, T, A: Allocator<Value = T>>(&'i mut IntoIter<T, A>);

        impl<T, A: Allocator<Value = T>> Drop for DropGuard<'_, T, A> {
            fn drop(&mut self) {
                if self.0.cap != 0 {
                    unsafe { self.0.alloc.deallocate(self.0.buf, self.0.cap) }
                }
            }
        }

        let guard = DropGuard(self);

        // destroy the remaining elements
        while guard.0.start != guard.0.end {
            let slot = unsafe { guard.0.buf.add(guard.0.start) };
            guard.0.start += 1;
            unsafe { guard.0.alloc.destroy(slot) }
        }

        // now `guard` will be dropped and deallocate the memory
    }
}
