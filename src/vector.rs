//! The [`Vector`] container and its companion types.

mod back_inserter;
mod guards;
mod into_iter;

use core::{
    alloc::Layout,
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    iter,
    marker::PhantomData,
    mem,
    ops::{Bound, Deref, DerefMut, Index, IndexMut, Range, RangeBounds},
    ptr::{self, NonNull},
    slice::{self, SliceIndex},
};

pub use back_inserter::BackInserter;
pub use into_iter::IntoIter;

use guards::{CloseGap, Gap, NewBlock, destroy_each};

#[cfg(feature = "panic-on-alloc")]
use crate::infallible;
use crate::{
    Allocator, ConstCursor, Cursor, ErrorBehavior, MutCursor, OutOfRangeError, Position, Reverse, SizedTypeProperties,
    Standard, TryReserveError, error_behavior_generic_methods, exact_size_iterator_bad_len,
};

/// A growable contiguous vector whose elements are constructed and destroyed through a
/// typed [`Allocator`].
///
/// Slots `[0, len)` of the block always hold live elements, slots `[len, capacity)` are
/// raw memory. An empty vector that never allocated owns no block.
///
/// Every operation that has to move to a bigger block constructs the new values into that
/// block first and only then relocates the existing elements and releases the old block.
/// A failing allocation or a panicking constructor leaves the vector unchanged.
///
/// # Examples
/// ```
/// use strong_vec::Vector;
///
/// let mut vec = Vector::new();
/// let mut capacities = Vec::new();
///
/// for value in [1, 3, -2, 8, 2, -12, 17, 5] {
///     vec.push(value);
///     capacities.push(vec.capacity());
/// }
///
/// assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8]);
/// assert_eq!(vec, [1, 3, -2, 8, 2, -12, 17, 5]);
/// ```
pub struct Vector<T, A: Allocator<Value = T> = Standard<T>> {
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
    alloc: A,

    /// Marks ownership over T. (<https://doc.rust-lang.org/nomicon/phantom-data.html#generic-parameters-and-drop-checking>)
    marker: PhantomData<T>,
}

unsafe impl<T: Send, A: Allocator<Value = T> + Send> Send for Vector<T, A> {}
unsafe impl<T: Sync, A: Allocator<Value = T> + Sync> Sync for Vector<T, A> {}

impl<T> Vector<T> {
    /// Constructs a new empty vector that uses the [`Standard`] allocator.
    ///
    /// No memory is allocated until elements are added.
    #[must_use]
    #[inline(always)]
    pub const fn new() -> Self {
        Self::new_in(Standard::new())
    }

    /// Constructs a new empty vector with a block of exactly `capacity` slots.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[must_use]
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Standard::new())
    }

    /// Constructs a new empty vector with a block of exactly `capacity` slots.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    #[inline(always)]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        Self::try_with_capacity_in(capacity, Standard::new())
    }
}

impl<T, A: Allocator<Value = T>> Vector<T, A> {
    /// Constructs a new empty vector that uses `alloc`.
    ///
    /// No memory is allocated until elements are added.
    #[must_use]
    #[inline(always)]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            alloc,
            marker: PhantomData,
        }
    }

    /// Constructs a new empty vector with a block of exactly `capacity` slots from `alloc`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[must_use]
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        infallible(Self::generic_with_capacity_in(capacity, alloc))
    }

    /// Constructs a new empty vector with a block of exactly `capacity` slots from `alloc`.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    #[inline(always)]
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, TryReserveError> {
        Self::generic_with_capacity_in(capacity, alloc)
    }

    pub(crate) fn generic_with_capacity_in<B: ErrorBehavior>(capacity: usize, alloc: A) -> Result<Self, B> {
        let mut vec = Self::new_in(alloc);
        vec.generic_reserve(capacity)?;
        Ok(vec)
    }

    /// Constructs a vector from the items of `iter`, allocating from `alloc`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[must_use]
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn from_iter_in<I: IntoIterator<Item = T>>(iter: I, alloc: A) -> Self {
        infallible(Self::generic_from_iter_in(iter, alloc))
    }

    /// Constructs a vector from the items of `iter`, allocating from `alloc`.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    #[inline(always)]
    pub fn try_from_iter_in<I: IntoIterator<Item = T>>(iter: I, alloc: A) -> Result<Self, TryReserveError> {
        Self::generic_from_iter_in(iter, alloc)
    }

    pub(crate) fn generic_from_iter_in<B: ErrorBehavior, I: IntoIterator<Item = T>>(iter: I, alloc: A) -> Result<Self, B> {
        let iter = iter.into_iter();
        let mut vec = Self::generic_with_capacity_in(iter.size_hint().0, alloc)?;

        for value in iter {
            vec.generic_push(value)?;
        }

        Ok(vec)
    }

    /// Returns the number of live elements.
    #[must_use]
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[must_use]
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the vector's block.
    #[must_use]
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the largest capacity the allocator could ever provide.
    #[must_use]
    #[inline]
    pub fn max_size(&self) -> usize {
        self.alloc.max_size()
    }

    /// Returns a reference to the allocator.
    #[must_use]
    #[inline(always)]
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// The pointer is dangling if the vector owns no block.
    #[must_use]
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a raw mutable pointer to the first slot.
    ///
    /// The pointer is dangling if the vector owns no block.
    #[must_use]
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a `NonNull` pointer to the first slot.
    #[must_use]
    #[inline(always)]
    pub const fn as_non_null(&self) -> NonNull<T> {
        self.ptr
    }

    /// Extracts a slice containing the entire vector.
    #[must_use]
    #[inline(always)]
    pub const fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice containing the entire vector.
    #[must_use]
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Returns the element at `index`, or an error if `index` is not less than the length.
    ///
    /// # Errors
    /// Errors if `index >= self.len()`.
    ///
    /// # Examples
    /// ```
    /// use strong_vec::{OutOfRangeError, Vector};
    ///
    /// let vec = Vector::from(['a', 'b']);
    /// assert_eq!(vec.at(1), Ok(&'b'));
    /// assert_eq!(vec.at(2), Err(OutOfRangeError { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRangeError> {
        match self.as_slice().get(index) {
            Some(element) => Ok(element),
            None => Err(OutOfRangeError { index, len: self.len }),
        }
    }

    /// Returns the element at `index` mutably, or an error if `index` is not less than the length.
    ///
    /// # Errors
    /// Errors if `index >= self.len()`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRangeError> {
        let len = self.len;

        match self.as_mut_slice().get_mut(index) {
            Some(element) => Ok(element),
            None => Err(OutOfRangeError { index, len }),
        }
    }

    /// Returns the first element.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[must_use]
    #[inline]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(element) => element,
            None => empty_vector("front"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[must_use]
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(element) => element,
            None => empty_vector("front_mut"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[must_use]
    #[inline]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(element) => element,
            None => empty_vector("back"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[must_use]
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(element) => element,
            None => empty_vector("back_mut"),
        }
    }

    /// Returns a cursor to the first element.
    #[must_use]
    #[inline(always)]
    pub fn begin(&mut self) -> MutCursor<T> {
        Cursor::new(self.ptr)
    }

    /// Returns a cursor one past the last element.
    #[must_use]
    #[inline(always)]
    pub fn end(&mut self) -> MutCursor<T> {
        self.cursor_at(self.len)
    }

    /// Returns a read-only cursor to the first element.
    #[must_use]
    #[inline(always)]
    pub fn cbegin(&self) -> ConstCursor<T> {
        Cursor::new(self.ptr)
    }

    /// Returns a read-only cursor one past the last element.
    #[must_use]
    #[inline(always)]
    pub fn cend(&self) -> ConstCursor<T> {
        self.cursor_at(self.len)
    }

    /// Returns a reverse cursor to the last element.
    #[must_use]
    #[inline(always)]
    pub fn rbegin(&mut self) -> Reverse<MutCursor<T>> {
        Reverse::new(self.end())
    }

    /// Returns a reverse cursor one before the first element.
    #[must_use]
    #[inline(always)]
    pub fn rend(&mut self) -> Reverse<MutCursor<T>> {
        Reverse::new(self.begin())
    }

    /// Returns a read-only reverse cursor to the last element.
    #[must_use]
    #[inline(always)]
    pub fn crbegin(&self) -> Reverse<ConstCursor<T>> {
        Reverse::new(self.cend())
    }

    /// Returns a read-only reverse cursor one before the first element.
    #[must_use]
    #[inline(always)]
    pub fn crend(&self) -> Reverse<ConstCursor<T>> {
        Reverse::new(self.cbegin())
    }

    /// Returns a sink that appends to this vector.
    #[must_use]
    #[inline(always)]
    pub fn back_inserter(&mut self) -> BackInserter<'_, T, A> {
        BackInserter::new(self)
    }

    /// Removes the last element and returns it, or `None` if the vector is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        Some(unsafe { self.ptr.add(self.len).read() })
    }

    /// Destroys the elements from `len` onwards. Does nothing if `len >= self.len()`.
    ///
    /// The capacity is not affected.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let old_len = self.len;
        self.len = len;

        unsafe { destroy_each(&self.alloc, self.ptr.add(len), old_len - len) }
    }

    /// Destroys all elements. The capacity is not affected.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Removes the element at `position` and returns a cursor to the element that followed it.
    ///
    /// # Panics
    /// Panics if `position` does not denote an element of this vector.
    ///
    /// # Examples
    /// ```
    /// use strong_vec::Vector;
    ///
    /// let mut vec = Vector::from([1, 2, 3]);
    /// let next = vec.erase(0);
    ///
    /// assert_eq!(unsafe { *next.get() }, 2);
    /// assert_eq!(vec, [2, 3]);
    /// ```
    pub fn erase<P: Position<T>>(&mut self, position: P) -> MutCursor<T> {
        let index = self.index_of(position);

        if index == self.len {
            position_out_of_bounds(self.len);
        }

        self.erase_indices(index, index + 1)
    }

    /// Removes the elements in `[first, last)` and returns a cursor to the element that followed them.
    ///
    /// Erasing an empty range does nothing and returns `first`.
    ///
    /// # Panics
    /// Panics if either position does not lie within this vector or if `first` comes after `last`.
    pub fn erase_range<P: Position<T>, Q: Position<T>>(&mut self, first: P, last: Q) -> MutCursor<T> {
        let start = self.index_of(first);
        let end = self.index_of(last);

        if start > end {
            range_out_of_bounds(start, end, self.len);
        }

        self.erase_indices(start, end)
    }

    fn erase_indices(&mut self, start: usize, end: usize) -> MutCursor<T> {
        if start != end {
            let gap = unsafe { CloseGap::new(self, start, end) };
            unsafe { destroy_each(&gap.vec.alloc, gap.vec.ptr.add(start), end - start) }
        }

        self.cursor_at(start)
    }

    /// Exchanges the contents of two vectors.
    ///
    /// The allocators are exchanged too if the allocator propagates on swap.
    ///
    /// # Panics
    /// Panics if the allocator does not propagate on swap and the two allocators are not equal.
    /// Neither vector is changed in that case.
    pub fn swap_with(&mut self, other: &mut Self) {
        if A::PROPAGATION.on_swap {
            mem::swap(&mut self.alloc, &mut other.alloc);
        } else if !self.alloc.equals(&other.alloc) {
            unequal_allocators_on_swap();
        }

        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.len, &mut other.len);
        mem::swap(&mut self.cap, &mut other.cap);
    }

    error_behavior_generic_methods! {
        /// Makes sure the capacity is at least `capacity`.
        ///
        /// Unlike `Vec::reserve` the argument is the requested *total* capacity.
        /// Nothing happens if the capacity is already large enough, otherwise the elements are
        /// relocated into a block of exactly `capacity` slots.
        ///
        /// # Examples
        /// ```
        /// use strong_vec::Vector;
        ///
        /// let mut vec = Vector::from([1]);
        /// vec.reserve(10);
        /// assert_eq!(vec.capacity(), 10);
        ///
        /// let ptr = vec.as_ptr();
        /// vec.extend(2..=10);
        /// assert_eq!(vec.as_ptr(), ptr);
        /// ```
        ///
        /// A `capacity` above [`max_size`](Self::max_size) is reported like a failed allocation.
        impl
        for fn reserve
        for fn try_reserve
        use fn generic_reserve(&mut self, capacity: usize) {
            if capacity <= self.cap {
                return Ok(());
            }

            let max = self.alloc.max_size();

            if capacity > max {
                return Err(B::length_exceeded(capacity, max));
            }

            let len = self.len;
            unsafe { self.generic_reallocate(capacity, len, 0, iter::empty()) }
        }

        /// Shrinks the block to exactly fit the elements.
        ///
        /// An empty vector releases its block entirely.
        impl
        for fn shrink_to_fit
        for fn try_shrink_to_fit
        use fn generic_shrink_to_fit(&mut self) {
            if self.len == self.cap {
                return Ok(());
            }

            if self.len == 0 {
                unsafe { self.release_block() };
                return Ok(());
            }

            let len = self.len;
            unsafe { self.generic_reallocate(len, len, 0, iter::empty()) }
        }

        /// Appends `value` to the back of the vector.
        ///
        /// When the vector is full its capacity doubles (or becomes 1).
        impl
        for fn push
        for fn try_push
        use fn generic_push(&mut self, value: T) {
            let len = self.len;
            unsafe { self.generic_insert_exact(len, 1, iter::once(value)) }
        }

        /// Appends the value returned by `f` to the back of the vector.
        ///
        /// If `f` panics the vector is left unchanged.
        impl
        for fn push_with
        for fn try_push_with
        use fn generic_push_with<{F: FnOnce() -> T}>(&mut self, f: F) {
            let len = self.len;
            unsafe { self.generic_insert_exact(len, 1, iter::once_with(f)) }
        }

        /// Resizes the vector to `new_len`, filling new slots with the values returned by `f`.
        ///
        /// If `f` panics the vector is left unchanged.
        impl
        for fn resize_with
        for fn try_resize_with
        use fn generic_resize_with<{F: FnMut() -> T}>(&mut self, new_len: usize, f: F) {
            if new_len <= self.len {
                self.truncate(new_len);
                return Ok(());
            }

            let len = self.len;
            let extra = new_len - len;
            unsafe { self.generic_insert_exact(len, extra, iter::repeat_with(f)) }
        }

        /// Inserts `value` at `position` and returns a cursor to it.
        ///
        /// `position` may be an index or a cursor into this vector and must not be past the end.
        ///
        /// # Examples
        /// ```
        /// use strong_vec::Vector;
        ///
        /// let mut vec = Vector::from([1, 3]);
        /// let inserted = vec.insert(1, 2);
        ///
        /// assert_eq!(inserted.offset_from(vec.cbegin()), 1);
        /// assert_eq!(vec, [1, 2, 3]);
        /// ```
        impl
        for fn insert
        for fn try_insert
        use fn generic_insert<{P: Position<T>}>(&mut self, position: P, value: T) -> MutCursor<T> {
            let index = self.index_of(position);
            unsafe { self.generic_insert_exact(index, 1, iter::once(value))? };
            Ok(self.cursor_at(index))
        }

        /// Inserts the value returned by `f` at `position` and returns a cursor to it.
        ///
        /// If `f` panics the vector is left unchanged.
        impl
        for fn insert_with
        for fn try_insert_with
        use fn generic_insert_with<{P: Position<T>, F: FnOnce() -> T}>(&mut self, position: P, f: F) -> MutCursor<T> {
            let index = self.index_of(position);
            unsafe { self.generic_insert_exact(index, 1, iter::once_with(f))? };
            Ok(self.cursor_at(index))
        }

        /// Inserts the items of `iter` at `position` and returns a cursor to the first of them.
        ///
        /// The items are collected into a temporary vector first.
        impl
        for fn insert_iter
        for fn try_insert_iter
        use fn generic_insert_iter<{P: Position<T>, I: IntoIterator<Item = T>}>(&mut self, position: P, iter: I) -> MutCursor<T> {
            let index = self.index_of(position);
            let values = Self::generic_from_iter_in(iter, self.alloc.clone())?;
            let count = values.len;
            unsafe { self.generic_insert_exact(index, count, values.into_iter())? };
            Ok(self.cursor_at(index))
        }

        /// Replaces the contents with the items of `iter`.
        ///
        /// The items are collected into a temporary vector first. If they fit into the current
        /// capacity they are moved over the existing elements, otherwise the temporary takes the
        /// place of the old block.
        impl
        for fn assign_iter
        for fn try_assign_iter
        use fn generic_assign_iter<{I: IntoIterator<Item = T>}>(&mut self, iter: I) {
            let values = Self::generic_from_iter_in(iter, self.alloc.clone())?;
            self.assign_moved(values);
            Ok(())
        }

        /// Moves the elements of `source` into this vector, leaving `source` empty.
        ///
        /// If the allocator propagates on move assignment or the allocators are equal, the block
        /// of `source` is taken over without touching the elements. Otherwise each element is
        /// relocated into storage owned by this vector's allocator and the block of `source`
        /// is released.
        ///
        /// Allocation can only fail when relocating. Neither vector is changed in that case.
        impl
        for fn take_from
        for fn try_take_from
        use fn generic_take_from(&mut self, source: &mut Self) {
            let propagate = A::PROPAGATION.on_move_assignment;

            if propagate || self.alloc.equals(&source.alloc) {
                self.clear();
                unsafe { self.release_block() };

                self.ptr = mem::replace(&mut source.ptr, NonNull::dangling());
                self.len = mem::take(&mut source.len);
                self.cap = mem::take(&mut source.cap);

                if propagate {
                    self.alloc = source.alloc.clone();
                }

                return Ok(());
            }

            let count = source.len;

            if count > self.cap {
                let block = self.allocate_block(count)?;
                self.clear();
                unsafe { self.release_block() };
                self.ptr = block;
                self.cap = count;
            } else {
                self.clear();
            }

            unsafe {
                ptr::copy_nonoverlapping(source.ptr.as_ptr(), self.ptr.as_ptr(), count);
                source.len = 0;
                self.len = count;
                source.release_block();
            }

            Ok(())
        }
    }

    /// Assigns the elements of `values`, which was allocated from an allocator equal to ours.
    fn assign_moved(&mut self, mut values: Self) {
        if values.len > self.cap {
            *self = values;
            return;
        }

        let count = values.len;
        let overlap = count.min(self.len);

        // we own the values now, `values` only releases its block
        values.len = 0;

        unsafe {
            for index in 0..overlap {
                *self.ptr.add(index).as_ptr() = values.ptr.add(index).read();
            }

            if count < self.len {
                self.truncate(count);
            } else {
                for index in overlap..count {
                    self.alloc.construct(self.ptr.add(index), values.ptr.add(index).read());
                    self.len += 1;
                }
            }
        }
    }

    /// Constructs `count` values taken from `values` at `index`, moving the elements
    /// from `index` onwards back to make room.
    ///
    /// If the block is too small, a grown block is allocated and populated with the new values
    /// before anything else is touched, so that failures leave the vector unchanged.
    ///
    /// # Safety
    /// `index <= self.len`
    unsafe fn generic_insert_exact<B: ErrorBehavior, I: Iterator<Item = T>>(
        &mut self,
        index: usize,
        count: usize,
        mut values: I,
    ) -> Result<(), B> {
        if count == 0 {
            return Ok(());
        }

        let Some(required) = self.len.checked_add(count) else {
            return Err(B::capacity_overflow());
        };

        if required > self.cap {
            let new_cap = self.grown_capacity(required)?;
            return unsafe { self.generic_reallocate(new_cap, index, count, values) };
        }

        let mut gap = unsafe { Gap::open(self, index, count) };

        while gap.filled() < count {
            let Some(value) = values.next() else {
                exact_size_iterator_bad_len()
            };

            unsafe { gap.fill(value) };
        }

        Ok(())
    }

    /// Moves all elements into a new block of `new_cap` slots, leaving room for `count`
    /// values from `values` at `index`.
    ///
    /// # Safety
    /// `index <= self.len` and `self.len + count <= new_cap`
    unsafe fn generic_reallocate<B: ErrorBehavior, I: Iterator<Item = T>>(
        &mut self,
        new_cap: usize,
        index: usize,
        count: usize,
        mut values: I,
    ) -> Result<(), B> {
        let block = self.allocate_block(new_cap)?;
        let mut new = NewBlock::new(&self.alloc, block, new_cap, index);

        while new.constructed() < count {
            let Some(value) = values.next() else {
                exact_size_iterator_bad_len()
            };

            unsafe { new.construct_next(value) };
        }

        let block = new.into_raw();

        unsafe {
            let src = self.ptr.as_ptr();
            let dst = block.as_ptr();

            ptr::copy_nonoverlapping(src, dst, index);
            ptr::copy_nonoverlapping(src.add(index), dst.add(index + count), self.len - index);

            self.release_block();
        }

        self.ptr = block;
        self.cap = new_cap;
        self.len += count;

        Ok(())
    }

    /// Makes room for `additional` more elements, growing the same way [`push`](Self::push) does.
    fn generic_grow_for<B: ErrorBehavior>(&mut self, additional: usize) -> Result<(), B> {
        let Some(required) = self.len.checked_add(additional) else {
            return Err(B::capacity_overflow());
        };

        if required <= self.cap {
            return Ok(());
        }

        let new_cap = self.grown_capacity(required)?;
        let len = self.len;
        unsafe { self.generic_reallocate(new_cap, len, 0, iter::empty()) }
    }

    fn allocate_block<B: ErrorBehavior>(&self, count: usize) -> Result<NonNull<T>, B> {
        let Ok(layout) = Layout::array::<T>(count) else {
            return Err(B::capacity_overflow());
        };

        match self.alloc.allocate(count) {
            Ok(block) => Ok(block),
            Err(_) => Err(B::allocation(layout)),
        }
    }

    /// Returns the block back to the allocator without destroying anything.
    ///
    /// The length is left alone.
    ///
    /// # Safety
    /// The live elements must have been destroyed or relocated.
    unsafe fn release_block(&mut self) {
        if self.cap != 0 {
            unsafe { self.alloc.deallocate(self.ptr, self.cap) }
        }

        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    fn grown_capacity<B: ErrorBehavior>(&self, required: usize) -> Result<usize, B> {
        let max = self.alloc.max_size();

        if required > max {
            return Err(B::length_exceeded(required, max));
        }

        Ok(self.cap.saturating_mul(2).max(required).max(1).min(max))
    }

    #[inline]
    fn cursor_at<const MUTABLE: bool>(&self, index: usize) -> Cursor<T, MUTABLE> {
        Cursor::new(self.ptr).offset(index as isize)
    }

    #[inline]
    fn index_of<P: Position<T>>(&self, position: P) -> usize {
        match position.to_index(self.cbegin(), self.len) {
            Some(index) => index,
            None => position_out_of_bounds(self.len),
        }
    }

    fn index_range<R: RangeBounds<usize>>(&self, range: R) -> Range<usize> {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };

        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };

        if start > end || end > self.len {
            range_out_of_bounds(start, end, self.len);
        }

        start..end
    }

    /// Whether `count` slots starting at `first` overlap this vector's block.
    fn overlaps_block<const M: bool>(&self, first: Cursor<T, M>, count: usize) -> bool {
        let start = first.addr();
        let end = start.saturating_add(count.saturating_mul(T::STRIDE));

        let own_start = self.ptr.as_ptr().addr();
        let own_end = own_start.saturating_add(self.cap.saturating_mul(T::STRIDE));

        start < own_end && own_start < end
    }
}

impl<T: Clone, A: Allocator<Value = T>> Vector<T, A> {
    /// Constructs a vector of `count` copies of `value`, allocating from `alloc`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[must_use]
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn from_elem_in(value: T, count: usize, alloc: A) -> Self {
        infallible(Self::generic_from_elem_in(value, count, alloc))
    }

    /// Constructs a vector of `count` copies of `value`, allocating from `alloc`.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    #[inline(always)]
    pub fn try_from_elem_in(value: T, count: usize, alloc: A) -> Result<Self, TryReserveError> {
        Self::generic_from_elem_in(value, count, alloc)
    }

    pub(crate) fn generic_from_elem_in<B: ErrorBehavior>(value: T, count: usize, alloc: A) -> Result<Self, B> {
        let mut vec = Self::generic_with_capacity_in(count, alloc)?;
        unsafe { vec.generic_insert_exact(0, count, iter::repeat_n(value, count))? };
        Ok(vec)
    }

    /// Constructs a vector with clones of the elements of `slice`, allocating from `alloc`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    #[must_use]
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub fn from_slice_in(slice: &[T], alloc: A) -> Self {
        infallible(Self::generic_from_slice_in(slice, alloc))
    }

    /// Constructs a vector with clones of the elements of `slice`, allocating from `alloc`.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    #[inline(always)]
    pub fn try_from_slice_in(slice: &[T], alloc: A) -> Result<Self, TryReserveError> {
        Self::generic_from_slice_in(slice, alloc)
    }

    pub(crate) fn generic_from_slice_in<B: ErrorBehavior>(slice: &[T], alloc: A) -> Result<Self, B> {
        let mut vec = Self::generic_with_capacity_in(slice.len(), alloc)?;
        unsafe { vec.generic_insert_exact(0, slice.len(), slice.iter().cloned())? };
        Ok(vec)
    }

    /// Constructs a vector with clones of the elements in `[first, last)`, allocating from `alloc`.
    ///
    /// # Panics
    /// Panics if the allocation fails or if `first` comes after `last`.
    ///
    /// # Safety
    /// `[first, last)` must be a range of live elements of a single block.
    ///
    /// # Examples
    /// ```
    /// use strong_vec::{Standard, Vector};
    ///
    /// let vec = Vector::from([1, 2, 3, 4]);
    /// let copy = unsafe { Vector::from_range_in(vec.cbegin(), vec.cend(), Standard::new()) };
    ///
    /// assert_eq!(copy, vec);
    /// ```
    #[must_use]
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub unsafe fn from_range_in<const M: bool>(first: Cursor<T, M>, last: Cursor<T, M>, alloc: A) -> Self {
        infallible(unsafe { Self::generic_from_range_in(first, last, alloc) })
    }

    /// Constructs a vector with clones of the elements in `[first, last)`, allocating from `alloc`.
    ///
    /// # Panics
    /// Panics if `first` comes after `last`.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    ///
    /// # Safety
    /// `[first, last)` must be a range of live elements of a single block.
    #[inline(always)]
    pub unsafe fn try_from_range_in<const M: bool>(
        first: Cursor<T, M>,
        last: Cursor<T, M>,
        alloc: A,
    ) -> Result<Self, TryReserveError> {
        unsafe { Self::generic_from_range_in(first, last, alloc) }
    }

    unsafe fn generic_from_range_in<B: ErrorBehavior, const M: bool>(
        first: Cursor<T, M>,
        last: Cursor<T, M>,
        alloc: A,
    ) -> Result<Self, B> {
        let source = unsafe { cursor_range_as_slice(first, last) };
        Self::generic_from_slice_in(source, alloc)
    }

    /// Returns a clone of this vector.
    ///
    /// The clone uses the allocator returned by [`Allocator::select_on_copy`].
    ///
    /// # Errors
    /// Errors if the allocation fails.
    #[inline(always)]
    pub fn try_clone(&self) -> Result<Self, TryReserveError> {
        self.generic_clone()
    }

    pub(crate) fn generic_clone<B: ErrorBehavior>(&self) -> Result<Self, B> {
        Self::generic_from_slice_in(self, self.alloc.select_on_copy())
    }

    /// Makes this vector a copy of `source`.
    ///
    /// If the allocator propagates on copy assignment, this vector adopts the allocator of
    /// `source`. When the two allocators differ, the copy is built in a new block of the adopted
    /// allocator and the old elements and block are only released once it is complete.
    ///
    /// # Errors
    /// Errors if the allocation fails. The vector is left unchanged in that case.
    #[inline(always)]
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), TryReserveError> {
        self.generic_clone_from(source)
    }

    pub(crate) fn generic_clone_from<B: ErrorBehavior>(&mut self, source: &Self) -> Result<(), B> {
        if A::PROPAGATION.on_copy_assignment {
            if !self.alloc.equals(&source.alloc) {
                *self = Self::generic_from_slice_in(source, source.alloc.clone())?;
                return Ok(());
            }

            self.alloc = source.alloc.clone();
        }

        self.generic_assign_slice(source)
    }

    error_behavior_generic_methods! {
        /// Resizes the vector to `new_len`, filling new slots with clones of `value`.
        ///
        /// If cloning panics the vector is left unchanged.
        ///
        /// # Examples
        /// ```
        /// use strong_vec::Vector;
        ///
        /// let mut vec = Vector::from(["a"]);
        /// vec.resize(3, "b");
        /// assert_eq!(vec, ["a", "b", "b"]);
        ///
        /// vec.resize(1, "c");
        /// assert_eq!(vec, ["a"]);
        /// ```
        impl
        for fn resize
        for fn try_resize
        use fn generic_resize(&mut self, new_len: usize, value: T) {
            if new_len <= self.len {
                self.truncate(new_len);
                return Ok(());
            }

            let len = self.len;
            let extra = new_len - len;
            unsafe { self.generic_insert_exact(len, extra, iter::repeat_n(value, extra)) }
        }

        /// Inserts `count` clones of `value` at `position` and returns a cursor to the first of them.
        impl
        for fn insert_n
        for fn try_insert_n
        use fn generic_insert_n<{P: Position<T>}>(&mut self, position: P, count: usize, value: T) -> MutCursor<T> {
            let index = self.index_of(position);
            unsafe { self.generic_insert_exact(index, count, iter::repeat_n(value, count))? };
            Ok(self.cursor_at(index))
        }

        /// Inserts clones of the elements of `slice` at `position` and returns a cursor to the first of them.
        impl
        for fn insert_slice
        for fn try_insert_slice
        use fn generic_insert_slice<{P: Position<T>}>(&mut self, position: P, slice: &[T]) -> MutCursor<T> {
            let index = self.index_of(position);
            unsafe { self.generic_insert_exact(index, slice.len(), slice.iter().cloned())? };
            Ok(self.cursor_at(index))
        }

        /// Inserts clones of the elements in `range` of this same vector at `position`.
        ///
        /// The source elements are cloned into a temporary vector before anything is moved.
        ///
        /// # Examples
        /// ```
        /// use strong_vec::Vector;
        ///
        /// let mut vec = Vector::from([1, 2, 3]);
        /// vec.insert_from_within(0, 1..);
        /// assert_eq!(vec, [2, 3, 1, 2, 3]);
        /// ```
        impl
        for fn insert_from_within
        for fn try_insert_from_within
        use fn generic_insert_from_within<{P: Position<T>, R: RangeBounds<usize>}>(&mut self, position: P, range: R) -> MutCursor<T> {
            let index = self.index_of(position);
            let range = self.index_range(range);
            let values = Self::generic_from_slice_in(&self.as_slice()[range], self.alloc.clone())?;
            let count = values.len;
            unsafe { self.generic_insert_exact(index, count, values.into_iter())? };
            Ok(self.cursor_at(index))
        }

        /// Replaces the contents with `count` clones of `value`.
        ///
        /// If `count` fits into the current capacity, existing elements are overwritten with
        /// [`Clone::clone_from`], missing ones are constructed and surplus ones destroyed.
        /// Otherwise a new vector is built and takes the place of the old one.
        impl
        for fn assign_n
        for fn try_assign_n
        use fn generic_assign_n(&mut self, count: usize, value: T) {
            if count > self.cap {
                *self = Self::generic_from_elem_in(value, count, self.alloc.clone())?;
                return Ok(());
            }

            let overlap = count.min(self.len);

            for element in &mut self.as_mut_slice()[..overlap] {
                element.clone_from(&value);
            }

            if count <= self.len {
                self.truncate(count);
                return Ok(());
            }

            let len = self.len;
            let extra = count - len;
            unsafe { self.generic_insert_exact(len, extra, iter::repeat_n(value, extra)) }
        }

        /// Replaces the contents with clones of the elements of `slice`.
        ///
        /// Follows the same strategy as [`assign_n`](Self::assign_n).
        impl
        for fn assign_slice
        for fn try_assign_slice
        use fn generic_assign_slice(&mut self, slice: &[T]) {
            if slice.len() > self.cap {
                *self = Self::generic_from_slice_in(slice, self.alloc.clone())?;
                return Ok(());
            }

            let overlap = slice.len().min(self.len);
            self.as_mut_slice()[..overlap].clone_from_slice(&slice[..overlap]);

            if slice.len() <= self.len {
                self.truncate(slice.len());
                return Ok(());
            }

            let len = self.len;
            let rest = &slice[len..];
            unsafe { self.generic_insert_exact(len, rest.len(), rest.iter().cloned()) }
        }

        /// Replaces the contents with clones of the elements in `range` of this same vector.
        ///
        /// # Examples
        /// ```
        /// use strong_vec::Vector;
        ///
        /// let mut vec = Vector::from([1, 2, 3, 4]);
        /// vec.assign_from_within(1..3);
        /// assert_eq!(vec, [2, 3]);
        /// ```
        impl
        for fn assign_from_within
        for fn try_assign_from_within
        use fn generic_assign_from_within<{R: RangeBounds<usize>}>(&mut self, range: R) {
            let range = self.index_range(range);
            let values = Self::generic_from_slice_in(&self.as_slice()[range], self.alloc.clone())?;
            self.assign_moved(values);
            Ok(())
        }
    }

    /// Inserts clones of the elements in `[first, last)` at `position` and returns a cursor
    /// to the first of them.
    ///
    /// The source range may lie inside this vector. In that case it is cloned into a
    /// temporary vector before any element is moved.
    ///
    /// # Panics
    /// Panics if the allocation fails, if `position` is not within this vector or if `first`
    /// comes after `last`.
    ///
    /// # Safety
    /// `[first, last)` must be a range of live elements of a single block.
    ///
    /// # Examples
    /// ```
    /// use strong_vec::Vector;
    ///
    /// let mut vec = Vector::from([1, 2, 3]);
    /// let (first, last) = (vec.cbegin(), vec.cend());
    /// unsafe { vec.insert_range(1, first, last) };
    ///
    /// assert_eq!(vec, [1, 1, 2, 3, 2, 3]);
    /// ```
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub unsafe fn insert_range<P: Position<T>, const M: bool>(
        &mut self,
        position: P,
        first: Cursor<T, M>,
        last: Cursor<T, M>,
    ) -> MutCursor<T> {
        infallible(unsafe { self.generic_insert_range(position, first, last) })
    }

    /// Inserts clones of the elements in `[first, last)` at `position` and returns a cursor
    /// to the first of them.
    ///
    /// The source range may lie inside this vector. In that case it is cloned into a
    /// temporary vector before any element is moved.
    ///
    /// # Panics
    /// Panics if `position` is not within this vector or if `first` comes after `last`.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    ///
    /// # Safety
    /// `[first, last)` must be a range of live elements of a single block.
    #[inline(always)]
    pub unsafe fn try_insert_range<P: Position<T>, const M: bool>(
        &mut self,
        position: P,
        first: Cursor<T, M>,
        last: Cursor<T, M>,
    ) -> Result<MutCursor<T>, TryReserveError> {
        unsafe { self.generic_insert_range(position, first, last) }
    }

    unsafe fn generic_insert_range<B: ErrorBehavior, P: Position<T>, const M: bool>(
        &mut self,
        position: P,
        first: Cursor<T, M>,
        last: Cursor<T, M>,
    ) -> Result<MutCursor<T>, B> {
        let index = self.index_of(position);
        let source = unsafe { cursor_range_as_slice(first, last) };

        if self.overlaps_block(first, source.len()) {
            let values = Self::generic_from_slice_in(source, self.alloc.clone())?;
            let count = values.len;
            unsafe { self.generic_insert_exact(index, count, values.into_iter())? };
        } else {
            unsafe { self.generic_insert_exact(index, source.len(), source.iter().cloned())? };
        }

        Ok(self.cursor_at(index))
    }

    /// Replaces the contents with clones of the elements in `[first, last)`.
    ///
    /// The source range may lie inside this vector.
    ///
    /// # Panics
    /// Panics if the allocation fails or if `first` comes after `last`.
    ///
    /// # Safety
    /// `[first, last)` must be a range of live elements of a single block.
    #[inline(always)]
    #[cfg(feature = "panic-on-alloc")]
    pub unsafe fn assign_range<const M: bool>(&mut self, first: Cursor<T, M>, last: Cursor<T, M>) {
        infallible(unsafe { self.generic_assign_range(first, last) });
    }

    /// Replaces the contents with clones of the elements in `[first, last)`.
    ///
    /// The source range may lie inside this vector.
    ///
    /// # Panics
    /// Panics if `first` comes after `last`.
    ///
    /// # Errors
    /// Errors if the allocation fails.
    ///
    /// # Safety
    /// `[first, last)` must be a range of live elements of a single block.
    #[inline(always)]
    pub unsafe fn try_assign_range<const M: bool>(
        &mut self,
        first: Cursor<T, M>,
        last: Cursor<T, M>,
    ) -> Result<(), TryReserveError> {
        unsafe { self.generic_assign_range(first, last) }
    }

    unsafe fn generic_assign_range<B: ErrorBehavior, const M: bool>(
        &mut self,
        first: Cursor<T, M>,
        last: Cursor<T, M>,
    ) -> Result<(), B> {
        let source = unsafe { cursor_range_as_slice(first, last) };

        if self.overlaps_block(first, source.len()) {
            let values = Self::generic_from_slice_in(source, self.alloc.clone())?;
            self.assign_moved(values);
            Ok(())
        } else {
            self.generic_assign_slice(source)
        }
    }
}

/// # Safety
/// `[first, last)` must be a range of live elements of a single block.
unsafe fn cursor_range_as_slice<'a, T, const M: bool>(first: Cursor<T, M>, last: Cursor<T, M>) -> &'a [T] {
    let Ok(len) = usize::try_from(last.offset_from(first)) else {
        cursor_range_reversed()
    };

    let ptr = if T::IS_ZST { NonNull::dangling() } else { first.as_non_null() };
    unsafe { slice::from_raw_parts(ptr.as_ptr(), len) }
}

#[cold]
#[inline(never)]
#[track_caller]
fn position_out_of_bounds(len: usize) -> ! {
    panic!("position does not denote a slot of this vector (len is {len})")
}

#[cold]
#[inline(never)]
#[track_caller]
fn range_out_of_bounds(start: usize, end: usize, len: usize) -> ! {
    panic!("range {start}..{end} is out of bounds for a vector of length {len}")
}

#[cold]
#[inline(never)]
#[track_caller]
fn cursor_range_reversed() -> ! {
    panic!("the first cursor of a range comes after the last one")
}

#[cold]
#[inline(never)]
#[track_caller]
fn empty_vector(method: &str) -> ! {
    panic!("`{method}` called on an empty vector")
}

#[cold]
#[inline(never)]
#[track_caller]
fn unequal_allocators_on_swap() -> ! {
    panic!("swapped vectors with unequal allocators that do not propagate on swap")
}

impl<T, A: Allocator<Value = T>> Drop for Vector<T, A> {
    fn drop(&mut self) {
        struct DropGuard<'a, T, A: Allocator<Value = T>>(&'a mut Vector<T, A>);

        impl<T, A: Allocator<Value = T>> Drop for DropGuard<'_, T, A> {
            fn drop(&mut self) {
                unsafe { self.0.release_block() }
            }
        }

        let guard = DropGuard(self);

        // destroy the remaining elements
        guard.0.clear();

        // now `guard` will be dropped and deallocate the memory
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<T: Clone, A: Allocator<Value = T>> Clone for Vector<T, A> {
    fn clone(&self) -> Self {
        infallible(self.generic_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        infallible(self.generic_clone_from(source));
    }
}

impl<T, A: Allocator<Value = T> + Default> Default for Vector<T, A> {
    #[inline(always)]
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, A: Allocator<Value = T>> Deref for Vector<T, A> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator<Value = T>> DerefMut for Vector<T, A> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator<Value = T>, I: SliceIndex<[T]>> Index<I> for Vector<T, A> {
    type Output = I::Output;

    #[inline(always)]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, A: Allocator<Value = T>, I: SliceIndex<[T]>> IndexMut<I> for Vector<T, A> {
    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: fmt::Debug, A: Allocator<Value = T>> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: Eq, A: Allocator<Value = T>> Eq for Vector<T, A> {}

impl<T: PartialOrd, A1: Allocator<Value = T>, A2: Allocator<Value = T>> PartialOrd<Vector<T, A2>> for Vector<T, A1> {
    #[inline]
    fn partial_cmp(&self, other: &Vector<T, A2>) -> Option<core::cmp::Ordering> {
        PartialOrd::partial_cmp(self.as_slice(), other.as_slice())
    }
}

impl<T: Ord, A: Allocator<Value = T>> Ord for Vector<T, A> {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        Ord::cmp(self.as_slice(), other.as_slice())
    }
}

impl<T: Hash, A: Allocator<Value = T>> Hash for Vector<T, A> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, A: Allocator<Value = T>> AsRef<[T]> for Vector<T, A> {
    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, A: Allocator<Value = T>> AsMut<[T]> for Vector<T, A> {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, A: Allocator<Value = T>> Borrow<[T]> for Vector<T, A> {
    #[inline(always)]
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, A: Allocator<Value = T>> BorrowMut<[T]> for Vector<T, A> {
    #[inline(always)]
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<T, A: Allocator<Value = T>> Extend<T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        infallible(self.generic_grow_for(iter.size_hint().0));

        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<'t, T: Copy + 't, A: Allocator<Value = T>> Extend<&'t T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = &'t T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<T> FromIterator<T> for Vector<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_in(iter, Standard::new())
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<T, const N: usize> From<[T; N]> for Vector<T> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        Self::from_iter_in(array, Standard::new())
    }
}

#[cfg(feature = "panic-on-alloc")]
impl<T: Clone> From<&[T]> for Vector<T> {
    #[inline]
    fn from(slice: &[T]) -> Self {
        Self::from_slice_in(slice, Standard::new())
    }
}

impl<T, A: Allocator<Value = T>> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'v, T, A: Allocator<Value = T>> IntoIterator for &'v Vector<T, A> {
    type Item = &'v T;
    type IntoIter = slice::Iter<'v, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'v, T, A: Allocator<Value = T>> IntoIterator for &'v mut Vector<T, A> {
    type Item = &'v mut T;
    type IntoIter = slice::IterMut<'v, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
