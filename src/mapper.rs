//! Config-driven access to the storage contract
//!
//! [`Mapper`] is what a host layer holds on to when it moves column values in and
//! out of rows by hand. It applies the configured read policy and logs every
//! conversion under the `debug-logging` feature.

use std::fmt::Debug;

use config::MappingConfig;
use type_mapping::{FromStorage, StorageValue, ToStorage};

use crate::errors::PgScalarError;

/// Converts values through [`ToStorage`] / [`FromStorage`] under a [`MappingConfig`]
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: MappingConfig,
}

impl Mapper {
    pub fn new(config: MappingConfig) -> Self {
        Self { config }
    }

    /// Create a mapper from the configuration file, see [`MappingConfig::load`]
    pub fn load() -> Result<Self, PgScalarError> {
        Ok(Self::new(MappingConfig::load()?))
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Produce the storage value for a query parameter
    pub fn write<T>(&self, value: &T) -> Result<StorageValue, PgScalarError>
    where
        T: ToStorage + Debug,
    {
        let raw = value.to_storage()?;

        if self.config.log_values {
            debug_log!("[WRITE] {:?} -> {:?}", value, raw);
        } else {
            debug_log!("[WRITE] {} -> {}", std::any::type_name::<T>(), raw.kind());
        }

        Ok(raw)
    }

    /// Read a storage value into `target`, which is left untouched on error
    pub fn read<T>(&self, target: &mut T, raw: &StorageValue) -> Result<(), PgScalarError>
    where
        T: FromStorage + Debug,
    {
        if self.config.lenient_inet() {
            target.from_storage_lenient(raw)?;
        } else {
            target.from_storage(raw)?;
        }

        if self.config.log_values {
            debug_log!("[READ] {:?} -> {:?}", raw, target);
        } else {
            debug_log!("[READ] {} -> {}", raw.kind(), std::any::type_name::<T>());
        }

        Ok(())
    }

    /// Read a storage value into a fresh `T`
    pub fn read_new<T>(&self, raw: &StorageValue) -> Result<T, PgScalarError>
    where
        T: FromStorage + Default + Debug,
    {
        trace_log!("[READ_NEW] {}", std::any::type_name::<T>());
        let mut target = T::default();
        self.read(&mut target, raw)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{InetConfig, InvalidAddressPolicy};
    use type_mapping::{Hstore, Inet, TypeError};

    fn lenient() -> Mapper {
        Mapper::new(MappingConfig::new(
            InetConfig::new(InvalidAddressPolicy::Unspecified),
            true,
        ))
    }

    #[test]
    fn test_write_delegates_to_adapter() {
        let mapper = Mapper::default();
        let raw = mapper.write(&Inet(vec![127, 0, 0, 1])).unwrap();
        assert_eq!(raw, StorageValue::Text("127.0.0.1".to_string()));

        let err = mapper.write(&Inet(vec![1])).unwrap_err();
        assert!(matches!(
            err,
            PgScalarError::Type(TypeError::Marshal { .. })
        ));
    }

    #[test]
    fn test_strict_read_rejects_bad_address() {
        let mapper = Mapper::default();
        let err = mapper
            .read_new::<Inet>(&StorageValue::Text("nope".to_string()))
            .unwrap_err();
        assert!(matches!(err, PgScalarError::Type(TypeError::Decode { .. })));
    }

    #[test]
    fn test_lenient_read_yields_unspecified() {
        let inet: Inet = lenient()
            .read_new(&StorageValue::Text("nope".to_string()))
            .unwrap();
        assert!(inet.is_unspecified());
    }

    #[test]
    fn test_lenient_policy_does_not_hide_type_mismatch() {
        let err = lenient()
            .read_new::<Inet>(&StorageValue::Bytes(b"10.0.0.1".to_vec()))
            .unwrap_err();
        assert!(matches!(
            err,
            PgScalarError::Type(TypeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_lenient_policy_leaves_other_types_strict() {
        let err = lenient()
            .read_new::<Hstore>(&StorageValue::Text("\"a\"=>".to_string()))
            .unwrap_err();
        assert!(matches!(err, PgScalarError::Type(TypeError::Decode { .. })));
    }
}
