#![no_std]

//! `ListPool`: a growable list that rents its backing buffer from an array pool.
//!
//! A `Vec` reallocates every time it outgrows its buffer and frees the old one.
//! `ListPool` instead rents buffers from an [`ArrayPool`] and hands them back,
//! so a program that builds many short-lived lists recycles the same few
//! buffers instead of churning the allocator.
//!
//! ```
//! use listpool::{ListPool, SharedArrayPool};
//!
//! let pool = SharedArrayPool::<u32>::new();
//!
//! {
//!     let mut list = ListPool::with_capacity_in(3, &pool).unwrap();
//!     list.add(65).unwrap();
//!     list.add(12).unwrap();
//!     list.add(99).unwrap();
//!
//!     list.insert(1, 7).unwrap();
//!     assert_eq!(list.as_slice(), [65, 7, 12, 99]);
//!
//!     list.remove_at(0).unwrap();
//!     assert_eq!(list.as_slice(), [7, 12, 99]);
//! } // the buffer goes back to the pool here
//!
//! assert_eq!(pool.stats().pooled, 1);
//! ```
//!
//! # Buffer Lifecycle
//!
//! - Construction rents nothing unless a capacity is given.
//! - When an addition finds the buffer full, a buffer of at least twice the
//!   capacity is rented ([`DEFAULT_CAPACITY`] for the first one), the
//!   elements are moved over and the old buffer is released.
//! - A failed rent leaves the list exactly as it was.
//! - [`ListPool::clear`] keeps the buffer; [`ListPool::dispose`] and `Drop`
//!   return it. Disposing twice is harmless.
//!
//! ## Time Complexity
//! - `add()`: amortized O(1)
//! - `get()`, `set()`: O(1)
//! - `insert()`, `remove_at()`: O(n) - one block move of the tail
//! - `contains()`, `index_of()`, `remove()`: O(n) - linear scan
//! - `clear()`: O(n) for types with drop glue, O(1) otherwise
//!
//! # Errors
//!
//! Index arguments are never clamped. An out-of-range index produces
//! [`ListPoolError::IndexOutOfRange`] carrying the parameter name, the value
//! and the length it was checked against:
//!
//! ```
//! # use listpool::{ListPool, ListPoolError};
//! let mut list: ListPool<i32> = [1].into_iter().collect();
//!
//! assert_eq!(
//!     list.insert(2, 5),
//!     Err(ListPoolError::IndexOutOfRange { param: "index", index: 2, length: 1 })
//! );
//! ```
//!
//! # Views
//!
//! [`ListPool::as_slice`] and [`ListPool::as_memory`] borrow the live region.
//! Growth needs `&mut self`, so the borrow checker rules out a view that
//! outlives the buffer it points into.
//!
//! ```compile_fail
//! # use listpool::ListPool;
//! let mut list: ListPool<i32> = [1, 2].into_iter().collect();
//! let view = list.as_memory();
//! list.add(3).unwrap(); // may replace the buffer
//! assert_eq!(view.len(), 2);
//! ```
//!
//! # Enumeration
//!
//! [`ListPool::iter`] returns a [`ValueEnumerator`], a plain value over the
//! elements present when it was created. It can be driven as an iterator or
//! through an explicit cursor:
//!
//! ```
//! # use listpool::ListPool;
//! let list: ListPool<i32> = [1, 2, 3].into_iter().collect();
//!
//! let mut cursor = list.iter();
//! let mut sum = 0;
//! while cursor.move_next() {
//!     sum += *cursor.current();
//! }
//! assert_eq!(sum, 6);
//!
//! cursor.reset();
//! assert_eq!(cursor.count(), 3);
//! ```
//!
//! # Untyped Access
//!
//! [`ListPool::as_untyped`] exposes the list through [`UntypedList`], which
//! takes `&dyn Any` values and checks them against the element type:
//!
//! ```
//! # use listpool::{ListPool, UntypedList, UntypedListError};
//! let mut list = ListPool::<i32>::new();
//! let mut untyped = list.as_untyped();
//!
//! untyped.add(Box::new(5)).unwrap();
//! assert!(matches!(
//!     untyped.add(Box::new("five")),
//!     Err(UntypedListError::TypeMismatch { param: "item", .. })
//! ));
//! assert_eq!(untyped.index_of(Some(&5)), Ok(0));
//! assert_eq!(untyped.index_of(None), Ok(-1));
//! ```
//!
//! ## `no_std` Compatibility
//!
//! The crate needs only `core` and `alloc`. Enable the optional `std` feature
//! in std environments:
//! ```toml
//! [dependencies]
//! listpool = { version = "0.1", features = ["std"] }
//! ```
//!
//! The list is meant for a single owner. It does no locking of its own; the
//! pool it rents from may be shared across threads.

extern crate alloc;

mod core;
mod error;
mod iter;
mod mutation;
mod untyped;
mod view;

// Re-export public types and traits
pub use crate::core::{ListPool, DEFAULT_CAPACITY};
pub use arraypool::{ArrayPool, ArrayPoolConfig, PoolError, PoolStats, SharedArrayPool};
pub use error::{ListPoolError, Result};
pub use iter::ValueEnumerator;
pub use untyped::{SyncRoot, UntypedList, UntypedListError, UntypedListPool};
pub use view::Memory;
