use arraypool::PoolError;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, ListPoolError>;

/// Error types for `ListPool` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ListPoolError {
    /// An index argument is outside the valid range for the current length
    #[error("Index out of range: {param} = {index} for list of length {length}")]
    IndexOutOfRange {
        /// Name of the offending parameter
        param: &'static str,
        /// Value that was passed
        index: usize,
        /// Length the value was checked against
        length: usize,
    },
    /// Target slice cannot hold all elements
    #[error("Destination too small: {required} slots required, {available} available")]
    DestinationTooSmall {
        /// Number of slots the copy needs
        required: usize,
        /// Number of slots left in the target
        available: usize,
    },
    /// The pool could not provide a buffer
    #[error(transparent)]
    Pool(#[from] PoolError),
}

impl ListPoolError {
    pub(crate) fn out_of_range(param: &'static str, index: usize, length: usize) -> Self {
        ListPoolError::IndexOutOfRange {
            param,
            index,
            length,
        }
    }
}
