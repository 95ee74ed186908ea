//! Storage capability traits
//!
//! A column type participates in reads and writes by implementing the two
//! traits below. The host layer never needs to know which driver sits
//! underneath; driver specific glue lives in [`crate::postgres`].

use crate::errors::TypeError;
use crate::types::StorageValue;

/// Produce the value written to a query parameter
pub trait ToStorage {
    fn to_storage(&self) -> Result<StorageValue, TypeError>;
}

/// Consume a value read out of a row
///
/// Implementations must leave `self` untouched when they return an error.
pub trait FromStorage {
    fn from_storage(&mut self, raw: &StorageValue) -> Result<(), TypeError>;

    /// Variant of [`FromStorage::from_storage`] that tolerates malformed stored data
    /// where the type has a sensible degenerate value. Defaults to the strict path.
    fn from_storage_lenient(&mut self, raw: &StorageValue) -> Result<(), TypeError> {
        self.from_storage(raw)
    }
}

impl<T: ToStorage> ToStorage for Option<T> {
    fn to_storage(&self) -> Result<StorageValue, TypeError> {
        match self {
            Some(value) => value.to_storage(),
            None => Ok(StorageValue::Null),
        }
    }
}

impl<T: FromStorage + Default> FromStorage for Option<T> {
    fn from_storage(&mut self, raw: &StorageValue) -> Result<(), TypeError> {
        if raw.is_null() {
            *self = None;
            return Ok(());
        }

        let mut value = T::default();
        value.from_storage(raw)?;
        *self = Some(value);
        Ok(())
    }

    fn from_storage_lenient(&mut self, raw: &StorageValue) -> Result<(), TypeError> {
        if raw.is_null() {
            *self = None;
            return Ok(());
        }

        let mut value = T::default();
        value.from_storage_lenient(raw)?;
        *self = Some(value);
        Ok(())
    }
}

impl<T: ToStorage + ?Sized> ToStorage for &T {
    fn to_storage(&self) -> Result<StorageValue, TypeError> {
        (**self).to_storage()
    }
}
