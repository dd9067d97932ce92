//! Loosely-typed access to a [`ListPool`].
//!
//! [`UntypedList`] speaks in `&dyn Any` values and signed indices, for callers
//! that do not know the element type statically. Every inbound value is
//! checked against the element type once, at this boundary, and then handed
//! to the typed list. A `None` argument plays the part of a null reference:
//! it is never present in the list.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{type_name, Any};

use arraypool::{ArrayPool, PoolError};
use thiserror::Error;

use crate::core::ListPool;
use crate::error::ListPoolError;

/// Error types for [`UntypedList`] operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum UntypedListError {
    /// An index argument is outside the valid range for the current length
    #[error("Index out of range: {param} = {index} for list of length {length}")]
    IndexOutOfRange {
        /// Name of the offending parameter
        param: &'static str,
        /// Value that was passed
        index: isize,
        /// Length the value was checked against
        length: usize,
    },
    /// A value is not of the list's element type
    #[error("Type mismatch: {param} is not of type {expected}")]
    TypeMismatch {
        /// Name of the offending parameter
        param: &'static str,
        /// Type the list expects
        expected: &'static str,
    },
    /// Target cannot hold all elements
    #[error("Destination too small: {required} slots required, {available} available")]
    DestinationTooSmall {
        /// Number of slots the copy needs
        required: usize,
        /// Number of slots left in the target
        available: usize,
    },
    /// The pool could not provide a buffer
    #[error(transparent)]
    Pool(#[from] PoolError),
}

impl From<ListPoolError> for UntypedListError {
    fn from(error: ListPoolError) -> Self {
        match error {
            ListPoolError::IndexOutOfRange {
                param,
                index,
                length,
            } => UntypedListError::IndexOutOfRange {
                param,
                index: isize::try_from(index).unwrap_or(isize::MAX),
                length,
            },
            ListPoolError::DestinationTooSmall {
                required,
                available,
            } => UntypedListError::DestinationTooSmall {
                required,
                available,
            },
            ListPoolError::Pool(error) => UntypedListError::Pool(error),
        }
    }
}

/// Object-safe list contract over dynamically typed values.
pub trait UntypedList {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// # Errors
    ///
    /// `IndexOutOfRange` naming `index` unless `0 <= index < len()`.
    fn get(&self, index: isize) -> Result<&dyn Any, UntypedListError>;

    /// # Errors
    ///
    /// `TypeMismatch` naming `value` if it is not of the element type, then
    /// `IndexOutOfRange` naming `index` unless `0 <= index < len()`.
    fn set(&mut self, index: isize, value: Box<dyn Any>) -> Result<(), UntypedListError>;

    /// Appends `item` and returns its index.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` naming `item`, or `Pool` if the list cannot grow.
    fn add(&mut self, item: Box<dyn Any>) -> Result<usize, UntypedListError>;

    /// # Errors
    ///
    /// `TypeMismatch` naming `item`, `IndexOutOfRange` naming `index` unless
    /// `0 <= index <= len()`, or `Pool` if the list cannot grow.
    fn insert(&mut self, index: isize, item: Box<dyn Any>) -> Result<(), UntypedListError>;

    /// # Errors
    ///
    /// `IndexOutOfRange` naming `index` unless `0 <= index < len()`.
    fn remove_at(&mut self, index: isize) -> Result<(), UntypedListError>;

    /// Removes the first element equal to `item`. Returns whether one was found.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` naming `item`.
    fn remove(&mut self, item: Option<&dyn Any>) -> Result<bool, UntypedListError>;

    /// # Errors
    ///
    /// `TypeMismatch` naming `item`.
    fn contains(&self, item: Option<&dyn Any>) -> Result<bool, UntypedListError>;

    /// Index of the first element equal to `item`, or -1.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` naming `item`.
    fn index_of(&self, item: Option<&dyn Any>) -> Result<isize, UntypedListError>;

    fn clear(&mut self);

    /// Copies every element into `target` starting at `start`. The list's
    /// length bounds the copy.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` naming `array` if `target` is not a `Vec` of the
    /// element type, `IndexOutOfRange` naming `start`, or
    /// `DestinationTooSmall`.
    fn copy_to(&self, target: &mut dyn Any, start: usize) -> Result<(), UntypedListError>;

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Any> + '_>;

    fn is_fixed_size(&self) -> bool;

    fn is_read_only(&self) -> bool;

    fn is_synchronized(&self) -> bool;

    /// Placeholder lock object. No locking is performed through it.
    fn sync_root(&self) -> &dyn Any;
}

/// Marker returned by [`UntypedList::sync_root`].
#[derive(Debug)]
pub struct SyncRoot;

static SYNC_ROOT: SyncRoot = SyncRoot;

/// [`UntypedList`] view of a borrowed [`ListPool`].
pub struct UntypedListPool<'a, T, P: ArrayPool<T>> {
    list: &'a mut ListPool<T, P>,
}

impl<'a, T, P: ArrayPool<T>> UntypedListPool<'a, T, P> {
    #[must_use]
    pub fn new(list: &'a mut ListPool<T, P>) -> Self {
        Self { list }
    }

    /// The typed list underneath.
    #[must_use]
    pub fn list(&self) -> &ListPool<T, P> {
        self.list
    }
}

impl<T, P: ArrayPool<T>> ListPool<T, P> {
    /// Borrows the list through the [`UntypedList`] contract.
    #[must_use]
    pub fn as_untyped(&mut self) -> UntypedListPool<'_, T, P> {
        UntypedListPool::new(self)
    }
}

fn downcast_owned<T: Any>(value: Box<dyn Any>, param: &'static str) -> Result<T, UntypedListError> {
    match value.downcast::<T>() {
        Ok(value) => Ok(*value),
        Err(_) => Err(mismatch::<T>(param)),
    }
}

/// `Ok(None)` for a null argument.
fn downcast_ref<'v, T: Any>(
    item: Option<&'v dyn Any>,
    param: &'static str,
) -> Result<Option<&'v T>, UntypedListError> {
    match item {
        None => Ok(None),
        Some(item) => item
            .downcast_ref::<T>()
            .map(Some)
            .ok_or_else(|| mismatch::<T>(param)),
    }
}

fn mismatch<T>(param: &'static str) -> UntypedListError {
    UntypedListError::TypeMismatch {
        param,
        expected: type_name::<T>(),
    }
}

fn checked_index(index: isize, bound: usize, length: usize) -> Result<usize, UntypedListError> {
    match usize::try_from(index) {
        Ok(index) if index < bound => Ok(index),
        _ => Err(UntypedListError::IndexOutOfRange {
            param: "index",
            index,
            length,
        }),
    }
}

impl<T, P> UntypedList for UntypedListPool<'_, T, P>
where
    T: Any + PartialEq + Clone,
    P: ArrayPool<T>,
{
    fn len(&self) -> usize {
        self.list.len()
    }

    fn get(&self, index: isize) -> Result<&dyn Any, UntypedListError> {
        let index = checked_index(index, self.list.len(), self.list.len())?;
        let item: &dyn Any = self.list.get(index)?;
        Ok(item)
    }

    fn set(&mut self, index: isize, value: Box<dyn Any>) -> Result<(), UntypedListError> {
        let value = downcast_owned::<T>(value, "value")?;
        let index = checked_index(index, self.list.len(), self.list.len())?;
        Ok(self.list.set(index, value)?)
    }

    fn add(&mut self, item: Box<dyn Any>) -> Result<usize, UntypedListError> {
        let item = downcast_owned::<T>(item, "item")?;
        let index = self.list.len();
        self.list.add(item)?;
        Ok(index)
    }

    fn insert(&mut self, index: isize, item: Box<dyn Any>) -> Result<(), UntypedListError> {
        let item = downcast_owned::<T>(item, "item")?;
        let index = checked_index(index, self.list.len() + 1, self.list.len())?;
        Ok(self.list.insert(index, item)?)
    }

    fn remove_at(&mut self, index: isize) -> Result<(), UntypedListError> {
        let index = checked_index(index, self.list.len(), self.list.len())?;
        self.list.remove_at(index)?;
        Ok(())
    }

    fn remove(&mut self, item: Option<&dyn Any>) -> Result<bool, UntypedListError> {
        Ok(match downcast_ref::<T>(item, "item")? {
            Some(item) => self.list.remove(item),
            None => false,
        })
    }

    fn contains(&self, item: Option<&dyn Any>) -> Result<bool, UntypedListError> {
        Ok(downcast_ref::<T>(item, "item")?.is_some_and(|item| self.list.contains(item)))
    }

    fn index_of(&self, item: Option<&dyn Any>) -> Result<isize, UntypedListError> {
        let found = downcast_ref::<T>(item, "item")?.and_then(|item| self.list.index_of(item));
        Ok(found.map_or(-1, |index| isize::try_from(index).unwrap_or(isize::MAX)))
    }

    fn clear(&mut self) {
        self.list.clear();
    }

    fn copy_to(&self, target: &mut dyn Any, start: usize) -> Result<(), UntypedListError> {
        let target = target
            .downcast_mut::<Vec<T>>()
            .ok_or_else(|| mismatch::<Vec<T>>("array"))?;
        Ok(self.list.copy_to(target, start)?)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Any> + '_> {
        Box::new(self.list.iter().map(|item| item as &dyn Any))
    }

    fn is_fixed_size(&self) -> bool {
        false
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn is_synchronized(&self) -> bool {
        false
    }

    fn sync_root(&self) -> &dyn Any {
        &SYNC_ROOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn test_checked_index_bounds() {
        assert_eq!(checked_index(0, 1, 1), Ok(0));
        assert_eq!(
            checked_index(-1, 1, 1),
            Err(UntypedListError::IndexOutOfRange {
                param: "index",
                index: -1,
                length: 1
            })
        );
        assert!(checked_index(1, 1, 1).is_err());
        // insert bound is one past the length
        assert_eq!(checked_index(1, 2, 1), Ok(1));
    }

    #[test]
    fn test_type_name_in_mismatch() {
        let mut list = ListPool::<i32>::new();
        let mut untyped = list.as_untyped();
        let error = untyped.add(Box::new(String::from("x"))).unwrap_err();
        assert_eq!(
            error,
            UntypedListError::TypeMismatch {
                param: "item",
                expected: "i32"
            }
        );
    }

    #[test]
    fn test_list_error_conversion() {
        let error: UntypedListError = ListPoolError::IndexOutOfRange {
            param: "index",
            index: 4,
            length: 2,
        }
        .into();
        assert_eq!(
            error,
            UntypedListError::IndexOutOfRange {
                param: "index",
                index: 4,
                length: 2
            }
        );
    }

    #[test]
    fn test_copy_to_vec() {
        let mut list: ListPool<u8> = [1, 2, 3].into_iter().collect();
        let untyped = list.as_untyped();
        let mut target = vec![0u8; 3];
        untyped.copy_to(&mut target, 0).unwrap();
        assert_eq!(target, [1, 2, 3]);
    }
}
