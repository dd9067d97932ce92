#![no_std]

//! `arraypool`: reusable `Vec<T>` buffers handed out by size.
//!
//! An [`ArrayPool`] rents empty buffers with at least the requested capacity
//! and takes them back when the renter is done. [`SharedArrayPool`] is the
//! stock implementation: buffers are cached in power-of-two buckets, and the
//! pool handle is cheap to clone so several owners can share one cache.
//!
//! ```
//! use arraypool::{ArrayPool, SharedArrayPool};
//!
//! let pool = SharedArrayPool::<u32>::new();
//!
//! let mut buffer = pool.rent(100).unwrap();
//! assert!(buffer.capacity() >= 100);
//! buffer.extend([1, 2, 3]);
//!
//! // Contents are dropped, capacity is kept for the next renter
//! pool.release(buffer);
//! assert_eq!(pool.stats().pooled, 1);
//!
//! // 100 was rounded up to 128, so any request from 65 to 128 reuses it
//! let again = pool.rent(120).unwrap();
//! assert!(again.is_empty());
//! assert_eq!(pool.stats().allocated, 1);
//! ```
//!
//! ## `no_std` Compatibility
//!
//! The crate needs only `core` and `alloc`. Enable the `std` feature to get
//! `std::error::Error`-aware dependencies:
//! ```toml
//! [dependencies]
//! arraypool = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod config;
mod error;
mod pool;
mod shared;

pub use config::{ArrayPoolConfig, MAX_ARRAY_LENGTH, MIN_ARRAY_LENGTH};
pub use error::PoolError;
pub use pool::ArrayPool;
pub use shared::{PoolStats, SharedArrayPool};
