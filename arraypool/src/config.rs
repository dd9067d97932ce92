use crate::error::PoolError;

/// Smallest buffer length handed out by a bucket.
pub const MIN_ARRAY_LENGTH: usize = 16;

/// Largest `max_array_length` a pool accepts.
pub const MAX_ARRAY_LENGTH: usize = 1 << 30;

const DEFAULT_MAX_ARRAY_LENGTH: usize = 1024 * 1024;
const DEFAULT_MAX_ARRAYS_PER_BUCKET: usize = 50;

/// Sizing parameters of a [`SharedArrayPool`](crate::SharedArrayPool).
///
/// Requests longer than `max_array_length` are served by a plain allocation
/// and are dropped on release instead of being cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayPoolConfig {
    /// Longest buffer (in elements) the pool caches.
    pub max_array_length: usize,
    /// How many released buffers each size bucket keeps.
    pub max_arrays_per_bucket: usize,
}

impl Default for ArrayPoolConfig {
    fn default() -> Self {
        Self {
            max_array_length: DEFAULT_MAX_ARRAY_LENGTH,
            max_arrays_per_bucket: DEFAULT_MAX_ARRAYS_PER_BUCKET,
        }
    }
}

impl ArrayPoolConfig {
    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::InvalidConfiguration` if:
    /// - `max_array_length` is 0 or larger than [`MAX_ARRAY_LENGTH`]
    /// - `max_arrays_per_bucket` is 0
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.max_array_length == 0 || self.max_array_length > MAX_ARRAY_LENGTH {
            return Err(PoolError::InvalidConfiguration {
                parameter: "max_array_length",
                value: self.max_array_length,
            });
        }
        if self.max_arrays_per_bucket == 0 {
            return Err(PoolError::InvalidConfiguration {
                parameter: "max_arrays_per_bucket",
                value: self.max_arrays_per_bucket,
            });
        }
        Ok(())
    }

    /// Number of size buckets: one per power of two from
    /// [`MIN_ARRAY_LENGTH`] up to the bucket that holds `max_array_length`.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        bucket_index(self.max_array_length) + 1
    }
}

/// Bucket that serves a request of `length` elements.
///
/// `length` must not exceed [`MAX_ARRAY_LENGTH`].
pub(crate) fn bucket_index(length: usize) -> usize {
    let rounded = length.max(MIN_ARRAY_LENGTH).next_power_of_two();
    (rounded.trailing_zeros() - MIN_ARRAY_LENGTH.trailing_zeros()) as usize
}

pub(crate) fn bucket_length(index: usize) -> usize {
    MIN_ARRAY_LENGTH << index
}
