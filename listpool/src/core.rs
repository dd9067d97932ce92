use alloc::vec::Vec;
use core::fmt;
use core::mem;

use arraypool::{ArrayPool, PoolError, SharedArrayPool};

use crate::error::Result;

/// Capacity rented on the first growth of an empty list.
pub const DEFAULT_CAPACITY: usize = 16;

/// A growable list whose backing buffer is rented from an [`ArrayPool`].
///
/// The buffer is a `Vec<T>` obtained from the pool. Its length is the number
/// of live elements and its capacity is whatever the pool handed out. When
/// the list outgrows the buffer, a larger one is rented, the elements are
/// moved over and the old buffer goes back to the pool. Dropping the list (or
/// calling [`ListPool::dispose`]) returns the current buffer.
pub struct ListPool<T, P: ArrayPool<T> = SharedArrayPool<T>> {
    pub(crate) buffer: Vec<T>,
    pool: P,
}

impl<T> ListPool<T> {
    /// Creates an empty list backed by a new private [`SharedArrayPool`].
    ///
    /// Nothing is rented until the first element is added. To share buffers
    /// between lists, pass one pool to [`ListPool::new_in`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::new_in(SharedArrayPool::new())
    }

    /// Creates an empty list with room for at least `capacity` elements,
    /// backed by a new private [`SharedArrayPool`].
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::Pool` if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_in(capacity, SharedArrayPool::new())
    }
}

impl<T, P: ArrayPool<T>> ListPool<T, P> {
    /// Creates an empty list that will rent from `pool`. Nothing is rented yet.
    #[must_use]
    pub fn new_in(pool: P) -> Self {
        Self {
            buffer: Vec::new(),
            pool,
        }
    }

    /// Creates an empty list with room for at least `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::Pool` if the pool cannot provide the buffer.
    pub fn with_capacity_in(capacity: usize, pool: P) -> Result<Self> {
        // zero-sized elements never occupy a pooled buffer
        let buffer = if mem::size_of::<T>() == 0 {
            Vec::new()
        } else {
            pool.rent(capacity)?
        };
        Ok(Self { buffer, pool })
    }

    /// Adopts `items` as the backing buffer without copying.
    ///
    /// The vector is handed to `pool` on release like a rented buffer; a pool
    /// that does not recognise its capacity simply drops it.
    #[must_use]
    pub fn from_vec_in(items: Vec<T>, pool: P) -> Self {
        Self {
            buffer: items,
            pool,
        }
    }

    /// Builds a list by copying `items`. The buffer is rented once.
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::Pool` if the pool cannot provide the buffer.
    pub fn from_slice_in(items: &[T], pool: P) -> Result<Self>
    where
        T: Clone,
    {
        let mut list = Self::with_capacity_in(items.len(), pool)?;
        list.extend_from_slice(items)?;
        Ok(list)
    }

    /// Builds a list from an iterator.
    ///
    /// If the iterator reports an exact length the buffer is rented once,
    /// otherwise it grows as items arrive.
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::Pool` if a growth step fails.
    pub fn from_iter_in<I: IntoIterator<Item = T>>(items: I, pool: P) -> Result<Self> {
        let mut list = Self::new_in(pool);
        list.add_range(items)?;
        Ok(list)
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Length of the current buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn pool(&self) -> &P {
        &self.pool
    }

    /// Makes sure the buffer can hold `required` elements.
    ///
    /// When it cannot, a buffer of at least `max(required, 2 * capacity)` is
    /// rented ([`DEFAULT_CAPACITY`] stands in for `2 * capacity` when the list
    /// has no buffer yet), the elements are moved into it and the old buffer
    /// is released.
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::Pool` if the pool cannot provide the new buffer.
    /// The list is left exactly as it was.
    pub fn ensure_capacity(&mut self, required: usize) -> Result<()> {
        let capacity = self.capacity();
        if capacity >= required {
            return Ok(());
        }
        let doubled = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity.saturating_mul(2)
        };
        self.grow_to(required.max(doubled))
    }

    /// Makes room for `additional` more elements using the doubling policy of
    /// [`ListPool::ensure_capacity`].
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::Pool` if the length overflows or the pool
    /// cannot provide the new buffer.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self.required_for(additional)?;
        self.ensure_capacity(required)
    }

    /// Makes room for exactly `additional` more elements, without doubling.
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::Pool` if the length overflows or the pool
    /// cannot provide the new buffer.
    pub fn reserve_exact(&mut self, additional: usize) -> Result<()> {
        let required = self.required_for(additional)?;
        if self.capacity() >= required {
            return Ok(());
        }
        self.grow_to(required)
    }

    fn required_for(&self, additional: usize) -> Result<usize> {
        Ok(self
            .len()
            .checked_add(additional)
            .ok_or(PoolError::CapacityOverflow)?)
    }

    /// Copy-then-swap: nothing is touched until the new buffer is in hand.
    fn grow_to(&mut self, new_capacity: usize) -> Result<()> {
        let mut replacement = self.pool.rent(new_capacity)?;
        debug_assert!(replacement.capacity() >= new_capacity);
        replacement.clear();
        replacement.append(&mut self.buffer);

        let previous = mem::replace(&mut self.buffer, replacement);
        tracing::debug!(
            from = previous.capacity(),
            to = self.buffer.capacity(),
            len = self.buffer.len(),
            "list buffer grown"
        );
        self.pool.release(previous);
        Ok(())
    }

    /// Drops every element and returns the buffer to the pool.
    ///
    /// Calling it again is a no-op. The list stays usable: it is empty with
    /// no buffer, and the next addition rents a fresh one.
    pub fn dispose(&mut self) {
        if mem::size_of::<T>() == 0 {
            self.buffer.clear();
            return;
        }
        if self.buffer.capacity() == 0 {
            return;
        }
        let buffer = mem::take(&mut self.buffer);
        tracing::debug!(
            capacity = buffer.capacity(),
            len = buffer.len(),
            "list disposed"
        );
        self.pool.release(buffer);
    }
}

impl<T, P: ArrayPool<T>> Drop for ListPool<T, P> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T, P: ArrayPool<T> + Default> Default for ListPool<T, P> {
    fn default() -> Self {
        Self::new_in(P::default())
    }
}

impl<T, P: ArrayPool<T> + Default> From<Vec<T>> for ListPool<T, P> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec_in(items, P::default())
    }
}

impl<T: fmt::Debug, P: ArrayPool<T>> fmt::Debug for ListPool<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buffer.iter()).finish()
    }
}

impl<T, P, Q> PartialEq<ListPool<T, Q>> for ListPool<T, P>
where
    T: PartialEq,
    P: ArrayPool<T>,
    Q: ArrayPool<T>,
{
    fn eq(&self, other: &ListPool<T, Q>) -> bool {
        self.buffer == other.buffer
    }
}
