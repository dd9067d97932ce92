use core::ops::{Index, IndexMut};

use arraypool::ArrayPool;

use crate::core::ListPool;
use crate::error::{ListPoolError, Result};

impl<T, P: ArrayPool<T>> ListPool<T, P> {
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(ListPoolError::out_of_range("index", index, self.len()));
        }
        Ok(())
    }

    /// Appends an element, growing the buffer if it is full.
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::Pool` if the buffer must grow and the pool
    /// cannot provide a larger one.
    pub fn add(&mut self, item: T) -> Result<()> {
        self.ensure_capacity(self.len() + 1)?;
        self.buffer.push(item);
        Ok(())
    }

    /// Inserts an element at `index`, shifting the tail right by one.
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::IndexOutOfRange` if `index > len()`, or
    /// `ListPoolError::Pool` if the buffer cannot grow.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        let length = self.len();
        if index > length {
            return Err(ListPoolError::out_of_range("index", index, length));
        }
        self.ensure_capacity(length + 1)?;
        // capacity is already there, so this is a single block move
        self.buffer.insert(index, item);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::IndexOutOfRange` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.buffer.remove(index))
    }

    /// Removes the first element equal to `item`. Returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => {
                self.buffer.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.buffer.pop()
    }

    /// # Errors
    ///
    /// Returns `ListPoolError::IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.buffer
            .get(index)
            .ok_or_else(|| ListPoolError::out_of_range("index", index, self.len()))
    }

    /// # Errors
    ///
    /// Returns `ListPoolError::IndexOutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let length = self.len();
        self.buffer
            .get_mut(index)
            .ok_or(ListPoolError::out_of_range("index", index, length))
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::IndexOutOfRange` if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.buffer.last()
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.buffer.contains(item)
    }

    /// Position of the first element equal to `item`.
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.buffer.iter().position(|candidate| candidate == item)
    }

    /// Drops all elements. The buffer is kept for reuse.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Appends every item of `items`.
    ///
    /// An iterator that reports an exact length grows the buffer at most once
    /// up front; any other iterator grows it as items are consumed. Both use
    /// the doubling policy, so repeated small ranges stay amortized O(1).
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::Pool` if a growth step fails. Items consumed
    /// before the failure stay in the list.
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) -> Result<()> {
        let items = items.into_iter();
        let (lower, upper) = items.size_hint();
        if upper == Some(lower) {
            self.reserve(lower)?;
        }
        for item in items {
            self.add(item)?;
        }
        Ok(())
    }

    /// Appends clones of `items`, growing at most once.
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::Pool` if the buffer cannot grow. Nothing is
    /// appended in that case.
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<()>
    where
        T: Clone,
    {
        self.reserve(items.len())?;
        self.buffer.extend_from_slice(items);
        Ok(())
    }

    /// Clones all elements into `target` starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns `ListPoolError::IndexOutOfRange` if `start > target.len()`, or
    /// `ListPoolError::DestinationTooSmall` if the elements do not fit.
    pub fn copy_to(&self, target: &mut [T], start: usize) -> Result<()>
    where
        T: Clone,
    {
        if start > target.len() {
            return Err(ListPoolError::out_of_range("start", start, target.len()));
        }
        let available = target.len() - start;
        if available < self.len() {
            return Err(ListPoolError::DestinationTooSmall {
                required: self.len(),
                available,
            });
        }
        target[start..start + self.len()].clone_from_slice(&self.buffer);
        Ok(())
    }
}

impl<T, P: ArrayPool<T>> Index<usize> for ListPool<T, P> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T, P: ArrayPool<T>> IndexMut<usize> for ListPool<T, P> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T, P: ArrayPool<T>> Extend<T> for ListPool<T, P> {
    /// # Panics
    ///
    /// Panics if the pool cannot provide a large enough buffer.
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        if let Err(error) = self.add_range(items) {
            panic!("{error}");
        }
    }
}

impl<'a, T: Copy + 'a, P: ArrayPool<T>> Extend<&'a T> for ListPool<T, P> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, items: I) {
        self.extend(items.into_iter().copied());
    }
}

impl<T, P: ArrayPool<T> + Default> FromIterator<T> for ListPool<T, P> {
    /// # Panics
    ///
    /// Panics if the pool cannot provide a large enough buffer.
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        match Self::from_iter_in(items, P::default()) {
            Ok(list) => list,
            Err(error) => panic!("{error}"),
        }
    }
}
