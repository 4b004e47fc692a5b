use core::{alloc::Layout, error::Error, fmt};

/// The error type for the `try_` methods of [`Vector`](crate::Vector).
///
/// The vector is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryReserveError {
    /// Computing the required capacity overflowed `usize`.
    CapacityOverflow,
    /// The requested capacity is larger than the allocator's [`max_size`](crate::Allocator::max_size).
    LengthExceeded {
        /// The capacity that was asked for.
        requested: usize,
        /// The largest capacity the allocator can provide.
        max: usize,
    },
    /// The allocator could not provide a block of memory.
    AllocError {
        /// The layout of the block that could not be allocated.
        layout: Layout,
    },
}

impl fmt::Display for TryReserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::LengthExceeded { requested, max } => {
                write!(f, "requested capacity of {requested} exceeds the maximum of {max}")
            }
            Self::AllocError { layout } => write!(f, "memory allocation of {} bytes failed", layout.size()),
        }
    }
}

impl Error for TryReserveError {}
