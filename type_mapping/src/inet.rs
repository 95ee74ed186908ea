//! PostgreSQL `inet` adapter
//!
//! This module provides the address adapter and the literal parser used when
//! reading textual `inet` values.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::errors::TypeError;
use crate::sql::ColumnType;
use crate::traits::{FromStorage, ToStorage};
use crate::types::StorageValue;

const TARGET: &str = "Inet";

/// IP address stored in an `inet` column, as 4 (IPv4) or 16 (IPv6) bytes
///
/// An empty byte sequence is the unspecified address produced by lenient reads
/// of malformed data; it cannot be written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Inet(pub Vec<u8>);

impl Inet {
    /// The unspecified address
    pub fn unspecified() -> Self {
        Inet(Vec::new())
    }

    pub fn is_unspecified(&self) -> bool {
        self.0.is_empty()
    }

    /// The address, if the byte length is valid
    pub fn ip(&self) -> Option<IpAddr> {
        if let Ok(octets) = <[u8; 4]>::try_from(self.0.as_slice()) {
            return Some(IpAddr::V4(Ipv4Addr::from(octets)));
        }
        if let Ok(octets) = <[u8; 16]>::try_from(self.0.as_slice()) {
            return Some(IpAddr::V6(Ipv6Addr::from(octets)));
        }
        None
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Canonical textual form; IPv4-mapped IPv6 addresses print as dotted quads
    fn canonical(&self) -> Option<String> {
        match self.ip()? {
            IpAddr::V4(v4) => Some(v4.to_string()),
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => Some(v4.to_string()),
                None => Some(v6.to_string()),
            },
        }
    }
}

/// Parse an address literal as PostgreSQL prints it
///
/// Surrounding whitespace is ignored and a `/prefix` suffix is accepted when it
/// fits the address family; the prefix itself is dropped.
pub fn parse_address(literal: &str) -> Option<IpAddr> {
    let literal = literal.trim();
    let (addr, prefix) = match literal.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (literal, None),
    };

    let addr: IpAddr = addr.parse().ok()?;
    if let Some(prefix) = prefix {
        let bits: u8 = prefix.parse().ok()?;
        let max = if addr.is_ipv4() { 32 } else { 128 };
        if bits > max {
            return None;
        }
    }
    Some(addr)
}

impl Inet {
    fn scan(&mut self, raw: &StorageValue, lenient: bool) -> Result<(), TypeError> {
        let StorageValue::Text(literal) = raw else {
            return Err(TypeError::TypeMismatch {
                target: TARGET,
                found: raw.kind(),
            });
        };

        match parse_address(literal) {
            Some(addr) => *self = Inet::from(addr),
            None if lenient => {
                tracing::warn!(literal = %literal, "unparseable inet value read as unspecified address");
                *self = Inet::unspecified();
            }
            None => {
                return Err(TypeError::decode(
                    TARGET,
                    format!("invalid address literal {:?}", literal),
                ))
            }
        }
        Ok(())
    }
}

impl ToStorage for Inet {
    fn to_storage(&self) -> Result<StorageValue, TypeError> {
        match self.canonical() {
            Some(text) => Ok(StorageValue::Text(text)),
            None => Err(TypeError::Marshal {
                target: TARGET,
                value: format!("{:?}", self.0),
            }),
        }
    }
}

impl FromStorage for Inet {
    fn from_storage(&mut self, raw: &StorageValue) -> Result<(), TypeError> {
        self.scan(raw, false)
    }

    fn from_storage_lenient(&mut self, raw: &StorageValue) -> Result<(), TypeError> {
        self.scan(raw, true)
    }
}

impl ColumnType for Inet {
    const SQL_TYPE: &'static str = "INET";
}

impl From<IpAddr> for Inet {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Ipv4Addr> for Inet {
    fn from(addr: Ipv4Addr) -> Self {
        Inet(addr.octets().to_vec())
    }
}

impl From<Ipv6Addr> for Inet {
    fn from(addr: Ipv6Addr) -> Self {
        Inet(addr.octets().to_vec())
    }
}
