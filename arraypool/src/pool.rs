use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::error::PoolError;

/// A source of reusable buffers.
///
/// A rented buffer is an empty `Vec<T>` whose capacity is at least the
/// requested length. Its spare capacity is the storage; the pool may hand out
/// more than was asked for. Ownership goes back with [`ArrayPool::release`],
/// after which the caller no longer has the buffer.
pub trait ArrayPool<T> {
    /// Rents an empty buffer with `capacity() >= min_length`.
    ///
    /// A `min_length` of 0 returns an unallocated `Vec` and does not touch
    /// the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::AllocationFailed` if a fresh buffer is needed and the
    /// allocator cannot provide it.
    fn rent(&self, min_length: usize) -> Result<Vec<T>, PoolError>;

    /// Gives a buffer back. Elements still in it are dropped.
    fn release(&self, buffer: Vec<T>);
}

impl<T, P: ArrayPool<T> + ?Sized> ArrayPool<T> for &P {
    fn rent(&self, min_length: usize) -> Result<Vec<T>, PoolError> {
        (**self).rent(min_length)
    }

    fn release(&self, buffer: Vec<T>) {
        (**self).release(buffer);
    }
}

impl<T, P: ArrayPool<T> + ?Sized> ArrayPool<T> for Arc<P> {
    fn rent(&self, min_length: usize) -> Result<Vec<T>, PoolError> {
        (**self).rent(min_length)
    }

    fn release(&self, buffer: Vec<T>) {
        (**self).release(buffer);
    }
}
