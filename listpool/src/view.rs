use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut};

use arraypool::ArrayPool;

use crate::core::ListPool;
use crate::error::{ListPoolError, Result};

impl<T, P: ArrayPool<T>> ListPool<T, P> {
    /// The live elements. Empty when nothing was added, whatever the capacity.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer
    }

    /// A copyable view over the live elements.
    ///
    /// The view borrows the list, so the list cannot grow, shrink or be
    /// disposed while any copy of it is alive.
    #[must_use]
    pub fn as_memory(&self) -> Memory<'_, T> {
        Memory {
            items: &self.buffer,
        }
    }
}

impl<T, P: ArrayPool<T>> Deref for ListPool<T, P> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P: ArrayPool<T>> DerefMut for ListPool<T, P> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, P: ArrayPool<T>> AsRef<[T]> for ListPool<T, P> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P: ArrayPool<T>> AsMut<[T]> for ListPool<T, P> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Read-only window over the live region of a [`ListPool`].
///
/// `Memory` is `Copy`, so it can be passed around and narrowed with
/// [`Memory::slice`] without touching the list. It is `Send` when `T` is
/// `Sync`.
pub struct Memory<'a, T> {
    items: &'a [T],
}

impl<'a, T> Memory<'a, T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn span(&self) -> &'a [T] {
        self.items
    }

    /// A narrower view of `length` elements starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::IndexOutOfRange` naming `start` if it is past
    /// the end, or naming `length` if the range runs past the end.
    pub fn slice(&self, start: usize, length: usize) -> Result<Memory<'a, T>> {
        if start > self.items.len() {
            return Err(ListPoolError::out_of_range("start", start, self.items.len()));
        }
        let remaining = self.items.len() - start;
        if length > remaining {
            return Err(ListPoolError::out_of_range("length", length, remaining));
        }
        Ok(Memory {
            items: &self.items[start..start + length],
        })
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }
}

impl<T> Clone for Memory<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Memory<'_, T> {}

impl<T> Deref for Memory<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for Memory<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
