use core::iter::FusedIterator;
use core::slice;

use arraypool::ArrayPool;

use crate::core::ListPool;

/// Forward cursor over the elements a list held when the cursor was made.
///
/// The cursor starts before the first element. [`ValueEnumerator::move_next`]
/// steps forward and reports whether an element is now current; once it
/// returns `false` the cursor stays past the end until
/// [`ValueEnumerator::reset`]. A reset rewinds over the same captured
/// elements, never over a later state of the list, and a clone carries its
/// own position over those elements.
pub struct ValueEnumerator<'a, T> {
    source: &'a [T],
    // 0 is before the first element, items_count + 1 is past the end
    position: usize,
}

impl<'a, T> ValueEnumerator<'a, T> {
    pub(crate) fn new(source: &'a [T]) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Number of elements captured at construction.
    #[must_use]
    pub fn items_count(&self) -> usize {
        self.source.len()
    }

    /// Advances the cursor. Returns `true` if it now rests on an element.
    pub fn move_next(&mut self) -> bool {
        if self.position <= self.items_count() {
            self.position += 1;
        }
        self.position <= self.items_count()
    }

    /// The element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics before the first `move_next` and after the cursor ran off the end.
    #[must_use]
    pub fn current(&self) -> &'a T {
        match self.try_current() {
            Some(item) => item,
            None => panic!("enumerator is not positioned on an element"),
        }
    }

    #[must_use]
    pub fn try_current(&self) -> Option<&'a T> {
        let index = self.position.checked_sub(1)?;
        self.source.get(index)
    }

    /// Puts the cursor back before the first element.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl<T> Clone for ValueEnumerator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            position: self.position,
        }
    }
}

impl<'a, T> Iterator for ValueEnumerator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.try_current()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items_count().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ValueEnumerator<'_, T> {}

impl<T> FusedIterator for ValueEnumerator<'_, T> {}

impl<T, P: ArrayPool<T>> ListPool<T, P> {
    /// Returns a snapshot enumerator over the live elements.
    #[must_use]
    pub fn iter(&self) -> ValueEnumerator<'_, T> {
        ValueEnumerator::new(self.as_slice())
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<'a, T, P: ArrayPool<T>> IntoIterator for &'a ListPool<T, P> {
    type Item = &'a T;
    type IntoIter = ValueEnumerator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, P: ArrayPool<T>> IntoIterator for &'a mut ListPool<T, P> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
