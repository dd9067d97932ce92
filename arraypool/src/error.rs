use thiserror::Error;

/// Error types for array pool operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PoolError {
    /// The allocator could not provide a buffer of the requested length
    #[error("Allocation failed: could not allocate a buffer of {requested} elements")]
    AllocationFailed {
        /// Number of elements requested
        requested: usize,
    },
    /// The requested length does not fit in `usize`
    #[error("Capacity overflow: requested length exceeds usize::MAX")]
    CapacityOverflow,
    /// Invalid configuration parameter
    #[error("Invalid pool configuration: {parameter} = {value}")]
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}
