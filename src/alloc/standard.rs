use core::{alloc::Layout, fmt, marker::PhantomData, ptr::NonNull};

use allocator_api2::alloc::{AllocError, Allocator as _, Global};

use super::{Allocator, Propagation};

/// The default typed allocator, backed by the global memory allocator.
///
/// It is stateless, so every instance compares equal and it always propagates.
///
/// # Examples
/// ```
/// use strong_vec::{Allocator, Standard};
///
/// let ints = Standard::<i32>::new();
/// let block = ints.allocate(4).unwrap();
///
/// unsafe {
///     for i in 0..4 {
///         ints.construct(block.add(i), i as i32 * 10);
///     }
///     assert_eq!(*block.add(3).as_ptr(), 30);
///     for i in 0..4 {
///         ints.destroy(block.add(i));
///     }
///     ints.deallocate(block, 4);
/// }
///
/// let strings: Standard<String> = ints.rebind();
/// assert_eq!(strings, Standard::new());
/// ```
pub struct Standard<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Standard<T> {
    /// Creates the allocator.
    #[must_use]
    #[inline(always)]
    pub const fn new() -> Self {
        Self { marker: PhantomData }
    }
}

impl<T> Default for Standard<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Standard<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Standard<T> {}

impl<T> PartialEq for Standard<T> {
    #[inline(always)]
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> Eq for Standard<T> {}

impl<T> fmt::Debug for Standard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Standard")
    }
}

unsafe impl<T> Allocator for Standard<T> {
    type Value = T;
    type Rebind<U> = Standard<U>;

    const PROPAGATION: Propagation = Propagation::ALWAYS;

    fn allocate(&self, count: usize) -> Result<NonNull<T>, AllocError> {
        let Ok(layout) = Layout::array::<T>(count) else {
            return Err(AllocError);
        };

        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        match Global.allocate(layout) {
            Ok(block) => Ok(block.cast()),
            Err(error) => Err(error),
        }
    }

    unsafe fn deallocate(&self, block: NonNull<T>, count: usize) {
        // `allocate` succeeded with this `count`, so the layout is valid
        let layout = unsafe { Layout::from_size_align_unchecked(count * size_of::<T>(), align_of::<T>()) };

        if layout.size() != 0 {
            unsafe { Global.deallocate(block.cast(), layout) }
        }
    }

    #[inline(always)]
    fn rebind<U>(&self) -> Standard<U> {
        Standard::new()
    }
}
