//! PostgreSQL `jsonb` adapter
//!
//! [`Jsonb`] carries the raw JSON text untouched. It is validated on the way in
//! and on the way out, but never re-ordered or reformatted, so a payload read back
//! from the database is byte-for-byte what the server returned.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::value::RawValue;

use crate::errors::TypeError;
use crate::sql::ColumnType;
use crate::traits::{FromStorage, ToStorage};
use crate::types::StorageValue;

const TARGET: &str = "Jsonb";

/// Raw JSON payload stored in a `jsonb` column
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Jsonb(pub Vec<u8>);

impl Jsonb {
    /// Wrap raw JSON text without validating it
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Jsonb(raw.into())
    }

    pub fn from_value(value: &serde_json::Value) -> Self {
        // Value always serializes
        Jsonb(value.to_string().into_bytes())
    }

    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, TypeError> {
        serde_json::to_vec(value)
            .map(Jsonb)
            .map_err(|e| TypeError::encode(TARGET, e))
    }

    pub fn to_value(&self) -> Result<serde_json::Value, TypeError> {
        self.deserialize()
    }

    /// Deserialize the payload into a typed value
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, TypeError> {
        serde_json::from_slice(&self.0).map_err(|e| TypeError::decode(TARGET, e))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

/// Validate `bytes` as a single JSON document and return it without surrounding whitespace
fn validated(bytes: &[u8]) -> Result<&[u8], serde_json::Error> {
    let raw: &RawValue = serde_json::from_slice(bytes)?;
    Ok(raw.get().as_bytes())
}

impl ToStorage for Jsonb {
    fn to_storage(&self) -> Result<StorageValue, TypeError> {
        if self.0.is_empty() {
            return Ok(StorageValue::Null);
        }

        let payload = validated(&self.0).map_err(|e| TypeError::encode(TARGET, e))?;
        Ok(StorageValue::Bytes(payload.to_vec()))
    }
}

impl FromStorage for Jsonb {
    fn from_storage(&mut self, raw: &StorageValue) -> Result<(), TypeError> {
        let StorageValue::Bytes(bytes) = raw else {
            return Err(TypeError::TypeMismatch {
                target: TARGET,
                found: raw.kind(),
            });
        };

        let payload = validated(bytes).map_err(|e| TypeError::decode(TARGET, e))?;
        self.0 = payload.to_vec();
        Ok(())
    }
}

impl ColumnType for Jsonb {
    const SQL_TYPE: &'static str = "JSONB";
}

impl From<serde_json::Value> for Jsonb {
    fn from(value: serde_json::Value) -> Self {
        Jsonb::from_value(&value)
    }
}
