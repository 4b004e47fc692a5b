use core::{
    mem::{self, ManuallyDrop},
    ptr::{self, NonNull},
};

use crate::{Allocator, Vector};

/// A freshly allocated block that is being populated before it replaces the vector's block.
///
/// Until [`into_raw`](Self::into_raw) is called, dropping it destroys the values
/// constructed so far and returns the block to the allocator.
pub(super) struct NewBlock<'a, A: Allocator> {
    alloc: &'a A,
    ptr: NonNull<A::Value>,
    cap: usize,
    start: usize,
    constructed: usize,
}

impl<'a, A: Allocator> NewBlock<'a, A> {
    /// Values will be constructed into the slots starting at `start`.
    #[inline(always)]
    pub(super) fn new(alloc: &'a A, ptr: NonNull<A::Value>, cap: usize, start: usize) -> Self {
        Self {
            alloc,
            ptr,
            cap,
            start,
            constructed: 0,
        }
    }

    #[inline(always)]
    pub(super) fn constructed(&self) -> usize {
        self.constructed
    }

    /// # Safety
    /// There must be an unconstructed slot left at `start + constructed`.
    #[inline(always)]
    pub(super) unsafe fn construct_next(&mut self, value: A::Value) {
        unsafe {
            let slot = self.ptr.add(self.start + self.constructed);
            self.alloc.construct(slot, value);
        }
        self.constructed += 1;
    }

    /// Gives up ownership of the block and the values in it.
    #[inline(always)]
    pub(super) fn into_raw(self) -> NonNull<A::Value> {
        ManuallyDrop::new(self).ptr
    }
}

impl<A: Allocator> Drop for NewBlock<'_, A> {
    fn drop(&mut self) {
        unsafe {
            for offset in 0..self.constructed {
                self.alloc.destroy(self.ptr.add(self.start + offset));
            }

            self.alloc.deallocate(self.ptr, self.cap);
        }
    }
}

/// An opened gap of `count` unconstructed slots at `index`.
///
/// While the gap exists the vector's length only covers the elements before it.
/// Dropping a full gap reattaches the shifted tail behind the filled slots.
/// Dropping a partially filled gap destroys the filled slots and moves the tail back,
/// so that the vector is left as it was.
pub(super) struct Gap<'a, T, A: Allocator<Value = T>> {
    vec: &'a mut Vector<T, A>,
    index: usize,
    count: usize,
    filled: usize,
    tail: usize,
}

impl<'a, T, A: Allocator<Value = T>> Gap<'a, T, A> {
    /// # Safety
    /// `index <= vec.len()` and `vec.len() + count <= vec.capacity()`.
    pub(super) unsafe fn open(vec: &'a mut Vector<T, A>, index: usize, count: usize) -> Self {
        let tail = vec.len - index;

        unsafe {
            let src = vec.ptr.as_ptr().add(index);
            ptr::copy(src, src.add(count), tail);
        }

        vec.len = index;

        Self {
            vec,
            index,
            count,
            filled: 0,
            tail,
        }
    }

    #[inline(always)]
    pub(super) fn filled(&self) -> usize {
        self.filled
    }

    /// # Safety
    /// The gap must not be full yet.
    #[inline(always)]
    pub(super) unsafe fn fill(&mut self, value: T) {
        unsafe {
            let slot = self.vec.ptr.add(self.index + self.filled);
            self.vec.alloc.construct(slot, value);
        }
        self.filled += 1;
    }
}

impl<T, A: Allocator<Value = T>> Drop for Gap<'_, T, A> {
    fn drop(&mut self) {
        unsafe {
            let start = self.vec.ptr.add(self.index);

            if self.filled != self.count {
                let filled = mem::take(&mut self.filled);
                destroy_each(&self.vec.alloc, start, filled);
                ptr::copy(start.as_ptr().add(self.count), start.as_ptr(), self.tail);
            }
        }

        self.vec.len = self.index + self.filled + self.tail;
    }
}

/// Closes the hole left by erased elements in `[start, end)` when dropped.
pub(super) struct CloseGap<'a, T, A: Allocator<Value = T>> {
    pub(super) vec: &'a mut Vector<T, A>,
    start: usize,
    end: usize,
    tail: usize,
}

impl<'a, T, A: Allocator<Value = T>> CloseGap<'a, T, A> {
    /// Cuts the vector's length down to `start`. The caller destroys `[start, end)`.
    ///
    /// # Safety
    /// `start <= end <= vec.len()`.
    pub(super) unsafe fn new(vec: &'a mut Vector<T, A>, start: usize, end: usize) -> Self {
        let tail = vec.len - end;
        vec.len = start;
        Self { vec, start, end, tail }
    }
}

impl<T, A: Allocator<Value = T>> Drop for CloseGap<'_, T, A> {
    fn drop(&mut self) {
        unsafe {
            let base = self.vec.ptr.as_ptr();
            ptr::copy(base.add(self.end), base.add(self.start), self.tail);
        }

        self.vec.len = self.start + self.tail;
    }
}

/// Destroys `count` values starting at `start`.
///
/// If a destructor panics the values after it are still destroyed.
///
/// # Safety
/// The slots must hold live values that nothing else owns.
pub(super) unsafe fn destroy_each<A: Allocator>(alloc: &A, start: NonNull<A::Value>, count: usize) {
    struct Rest<'a, A: Allocator> {
        alloc: &'a A,
        start: NonNull<A::Value>,
        next: usize,
        count: usize,
    }

    impl<A: Allocator> Rest<'_, A> {
        fn destroy_rest(&mut self) {
            while self.next < self.count {
                let index = self.next;
                self.next += 1;
                unsafe { self.alloc.destroy(self.start.add(index)) }
            }
        }
    }

    impl<A: Allocator> Drop for Rest<'_, A> {
        fn drop(&mut self) {
            self.destroy_rest();
        }
    }

    let mut rest = Rest {
        alloc,
        start,
        next: 0,
        count,
    };

    rest.destroy_rest();
}
