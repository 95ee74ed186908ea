//! Convenience re-exports for common pgscalar usage
//!
//! This prelude module re-exports the most commonly used items,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use pgscalar::prelude::*;
//!
//! // Now you have access to the adapters, the storage contract and the mapper
//! let value = Jsonb::new(r#"{"x":1}"#);
//! assert!(!value.is_empty());
//! ```

// Core pgscalar components
pub use crate::errors::PgScalarError;
pub use crate::mapper::Mapper;

// Re-export centralized config
pub use config::{InetConfig, InvalidAddressPolicy, MappingConfig};

// Adapters and the storage contract
pub use type_mapping::{ColumnType, FromStorage, Hstore, Inet, Jsonb, StorageValue, ToStorage, TypeError};

// Common external dependencies
pub use sqlx;

// Commonly used sqlx types
pub use sqlx::{Decode, Encode, PgPool, Postgres, Row, Type};
