//! `sqlx` bindings for the scalar adapters
//!
//! Every binding goes through the adapter's [`ToStorage`]/[`FromStorage`]
//! implementation, so the driver sees exactly the same validation and
//! empty-value rules as any other host layer.

use sqlx::decode::Decode;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::postgres::types::PgHstore;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueFormat, PgValueRef, Postgres};
use sqlx::types::ipnetwork::IpNetwork;
use sqlx::types::JsonValue;
use sqlx::Type;

use crate::hstore::Hstore;
use crate::inet::Inet;
use crate::jsonb::Jsonb;
use crate::traits::{FromStorage, ToStorage};
use crate::types::StorageValue;

// https://github.com/postgres/postgres/blob/master/src/backend/utils/adt/jsonb.c (jsonb_send)
const JSONB_VERSION: u8 = 1;

// hstore is an extension type, its OID differs between databases
impl Type<Postgres> for Hstore {
    fn type_info() -> PgTypeInfo {
        <PgHstore as Type<Postgres>>::type_info()
    }
}

impl From<&Hstore> for PgHstore {
    fn from(hstore: &Hstore) -> Self {
        hstore.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl From<PgHstore> for Hstore {
    fn from(hstore: PgHstore) -> Self {
        Hstore(hstore.0.into_iter().collect())
    }
}

impl Encode<'_, Postgres> for Hstore {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        if self.is_empty() {
            return Ok(IsNull::Yes);
        }

        <PgHstore as Encode<'_, Postgres>>::encode_by_ref(&PgHstore::from(self), buf)
    }
}

impl<'r> Decode<'r, Postgres> for Hstore {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        match value.format() {
            PgValueFormat::Binary => Ok(<PgHstore as Decode<'r, Postgres>>::decode(value)?.into()),
            PgValueFormat::Text => {
                let mut hstore = Hstore::default();
                hstore.from_storage(&StorageValue::Text(value.as_str()?.to_owned()))?;
                Ok(hstore)
            }
        }
    }
}

impl Type<Postgres> for Jsonb {
    fn type_info() -> PgTypeInfo {
        <JsonValue as Type<Postgres>>::type_info()
    }
}

impl Encode<'_, Postgres> for Jsonb {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        match self.to_storage()? {
            StorageValue::Bytes(payload) => {
                buf.push(JSONB_VERSION);
                buf.extend_from_slice(&payload);
                Ok(IsNull::No)
            }
            _ => Ok(IsNull::Yes),
        }
    }
}

/// Strip the leading format version byte of a binary `jsonb` value
fn strip_jsonb_version(buf: &[u8]) -> Result<&[u8], BoxDynError> {
    match buf.split_first() {
        Some((&JSONB_VERSION, rest)) => Ok(rest),
        Some((version, _)) => Err(format!("unsupported JSONB format version {}", version).into()),
        None => Err("empty JSONB value".into()),
    }
}

impl<'r> Decode<'r, Postgres> for Jsonb {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let mut buf = value.as_bytes()?;

        if value.format() == PgValueFormat::Binary {
            buf = strip_jsonb_version(buf)?;
        }

        let mut jsonb = Jsonb::default();
        jsonb.from_storage(&StorageValue::Bytes(buf.to_vec()))?;
        Ok(jsonb)
    }
}

impl Type<Postgres> for Inet {
    fn type_info() -> PgTypeInfo {
        <IpNetwork as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <IpNetwork as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for Inet {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        // validates the byte length
        self.to_storage()?;

        match self.ip() {
            Some(addr) => <IpNetwork as Encode<'_, Postgres>>::encode_by_ref(&IpNetwork::from(addr), buf),
            None => Err("inet value has no address".into()),
        }
    }

    fn size_hint(&self) -> usize {
        // family, bits, is_cidr, length, address
        4 + self.0.len()
    }
}

impl<'r> Decode<'r, Postgres> for Inet {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let literal = match value.format() {
            PgValueFormat::Text => value.as_str()?.to_owned(),
            PgValueFormat::Binary => <IpNetwork as Decode<'r, Postgres>>::decode(value)?
                .ip()
                .to_string(),
        };

        let mut inet = Inet::default();
        inet.from_storage(&StorageValue::Text(literal))?;
        Ok(inet)
    }
}
