use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::sync::atomic::{AtomicUsize, Ordering};

use spin::Mutex;

use crate::config::{bucket_index, bucket_length, ArrayPoolConfig, MIN_ARRAY_LENGTH};
use crate::error::PoolError;
use crate::pool::ArrayPool;

/// Bucketed pool of `Vec<T>` buffers, shared through cheap clones.
///
/// Buffers are cached by power-of-two capacity, from
/// [`MIN_ARRAY_LENGTH`] up to the bucket holding
/// [`ArrayPoolConfig::max_array_length`]. A rent is rounded up to its
/// bucket's length, so a caller may receive more capacity than requested.
///
/// Buffers that do not match a bucket (oversized requests, vectors that were
/// allocated elsewhere, zero-sized element types) are dropped on release.
pub struct SharedArrayPool<T> {
    inner: Arc<PoolInner<T>>,
}

struct PoolInner<T> {
    config: ArrayPoolConfig,
    buckets: Box<[Mutex<Vec<Vec<T>>>]>,
    counters: PoolCounters,
}

#[derive(Default)]
struct PoolCounters {
    rented: AtomicUsize,
    returned: AtomicUsize,
    allocated: AtomicUsize,
    discarded: AtomicUsize,
}

/// Point-in-time view of a pool's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Non-empty buffers handed out by `rent`
    pub rented: usize,
    /// Non-empty buffers given back through `release`
    pub returned: usize,
    /// Buffers that had to be freshly allocated
    pub allocated: usize,
    /// Released buffers that were dropped instead of cached
    pub discarded: usize,
    /// Buffers currently cached
    pub pooled: usize,
}

impl<T> SharedArrayPool<T> {
    /// Creates a pool with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(ArrayPoolConfig::default())
    }

    /// Creates a pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::InvalidConfiguration` if the configuration is rejected
    /// by [`ArrayPoolConfig::validate`].
    pub fn with_config(config: ArrayPoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ArrayPoolConfig) -> Self {
        let buckets = (0..config.bucket_count())
            .map(|_| Mutex::new(Vec::new()))
            .collect();
        Self {
            inner: Arc::new(PoolInner {
                config,
                buckets,
                counters: PoolCounters::default(),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ArrayPoolConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn stats(&self) -> PoolStats {
        let counters = &self.inner.counters;
        PoolStats {
            rented: counters.rented.load(Ordering::Relaxed),
            returned: counters.returned.load(Ordering::Relaxed),
            allocated: counters.allocated.load(Ordering::Relaxed),
            discarded: counters.discarded.load(Ordering::Relaxed),
            pooled: self.inner.buckets.iter().map(|b| b.lock().len()).sum(),
        }
    }

    /// Drops every cached buffer. Returns how many were dropped.
    pub fn trim(&self) -> usize {
        let mut dropped = 0;
        for bucket in self.inner.buckets.iter() {
            let drained = mem::take(&mut *bucket.lock());
            dropped += drained.len();
        }
        tracing::debug!(dropped, "array pool trimmed");
        dropped
    }

    fn allocate(&self, length: usize) -> Result<Vec<T>, PoolError> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(length)
            .map_err(|_| PoolError::AllocationFailed { requested: length })?;
        self.inner.counters.allocated.fetch_add(1, Ordering::Relaxed);
        Ok(buffer)
    }

    /// Bucket a released buffer of `capacity` belongs to, if any.
    fn home_bucket(&self, capacity: usize) -> Option<usize> {
        if mem::size_of::<T>() == 0
            || capacity < MIN_ARRAY_LENGTH
            || !capacity.is_power_of_two()
        {
            return None;
        }
        let index = bucket_index(capacity);
        (index < self.inner.buckets.len()).then_some(index)
    }

    fn discard(&self, capacity: usize) {
        self.inner.counters.discarded.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(capacity, "released buffer discarded");
    }
}

impl<T> ArrayPool<T> for SharedArrayPool<T> {
    fn rent(&self, min_length: usize) -> Result<Vec<T>, PoolError> {
        if min_length == 0 {
            return Ok(Vec::new());
        }

        let buffer = if min_length > self.inner.config.max_array_length {
            tracing::trace!(min_length, "oversized rent served without pooling");
            self.allocate(min_length)?
        } else {
            let index = bucket_index(min_length);
            let reused = self.inner.buckets[index].lock().pop();
            match reused {
                Some(buffer) => {
                    tracing::trace!(min_length, capacity = buffer.capacity(), "buffer reused");
                    buffer
                }
                None => self.allocate(bucket_length(index))?,
            }
        };

        self.inner.counters.rented.fetch_add(1, Ordering::Relaxed);
        Ok(buffer)
    }

    fn release(&self, mut buffer: Vec<T>) {
        let capacity = buffer.capacity();
        if capacity == 0 {
            return;
        }
        buffer.clear();
        self.inner.counters.returned.fetch_add(1, Ordering::Relaxed);

        let Some(index) = self.home_bucket(capacity) else {
            self.discard(capacity);
            return;
        };

        let mut bucket = self.inner.buckets[index].lock();
        if bucket.len() < self.inner.config.max_arrays_per_bucket {
            bucket.push(buffer);
            tracing::trace!(capacity, "buffer returned to pool");
        } else {
            drop(bucket);
            self.discard(capacity);
        }
    }
}

impl<T> Clone for SharedArrayPool<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedArrayPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SharedArrayPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedArrayPool")
            .field("config", &self.inner.config)
            .field("stats", &self.stats())
            .finish()
    }
}
