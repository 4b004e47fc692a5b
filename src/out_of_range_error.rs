use core::{error::Error, fmt};

/// The error returned by [`Vector::at`](crate::Vector::at) and [`Vector::at_mut`](crate::Vector::at_mut).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeError {
    /// The index that was accessed.
    pub index: usize,
    /// The length of the vector at the time of the access.
    pub len: usize,
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { index, len } = self;
        write!(f, "index out of range: the len is {len} but the index is {index}")
    }
}

impl Error for OutOfRangeError {}
