//! PostgreSQL `hstore` adapter

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crate::errors::TypeError;
use crate::hstore_codec::{self, HstorePair};
use crate::sql::ColumnType;
use crate::traits::{FromStorage, ToStorage};
use crate::types::StorageValue;

const TARGET: &str = "Hstore";

/// Key-value map stored in an `hstore` column
///
/// An empty map is written as SQL `NULL`. Reading a value with zero entries
/// (including `NULL`) replaces the receiver with an empty map; entries from a
/// previous read are not kept. Wrap the field in `Option` when the column is
/// nullable and the difference between `NULL` and "no entries" matters on read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hstore(pub HashMap<String, Option<String>>);

impl Hstore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> HashMap<String, Option<String>> {
        self.0
    }

    fn pairs(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Replace the contents with decoded pairs, later duplicates win
    fn fill(&mut self, pairs: Vec<HstorePair>) {
        if pairs.is_empty() {
            *self = Hstore::default();
            return;
        }
        *self = pairs.into_iter().collect();
    }
}

impl ToStorage for Hstore {
    fn to_storage(&self) -> Result<StorageValue, TypeError> {
        if self.0.is_empty() {
            return Ok(StorageValue::Null);
        }
        Ok(StorageValue::Text(hstore_codec::encode_text(self.pairs())))
    }
}

impl FromStorage for Hstore {
    fn from_storage(&mut self, raw: &StorageValue) -> Result<(), TypeError> {
        let pairs = match raw {
            StorageValue::Null => Vec::new(),
            StorageValue::Text(text) => hstore_codec::decode_text(text)?,
            StorageValue::Bytes(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(|e| TypeError::decode(TARGET, e))?;
                hstore_codec::decode_text(text)?
            }
            other => {
                return Err(TypeError::TypeMismatch {
                    target: TARGET,
                    found: other.kind(),
                })
            }
        };

        self.fill(pairs);
        Ok(())
    }
}

impl ColumnType for Hstore {
    const SQL_TYPE: &'static str = "HSTORE";
}

impl Deref for Hstore {
    type Target = HashMap<String, Option<String>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Hstore {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<HashMap<String, Option<String>>> for Hstore {
    fn from(map: HashMap<String, Option<String>>) -> Self {
        Hstore(map)
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for Hstore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Hstore(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        )
    }
}
