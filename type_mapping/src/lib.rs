//! Unified type mapping between Rust types and PostgreSQL
//!
//! This crate provides the storage contract (`ToStorage` / `FromStorage`) and the
//! custom scalar adapters for `hstore`, `jsonb` and `inet` columns, together with
//! their `sqlx` bindings.

pub mod errors;
pub mod hstore;
pub mod hstore_codec;
pub mod inet;
pub mod jsonb;
pub mod postgres;
pub mod sql;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use errors::TypeError;
pub use hstore::Hstore;
pub use inet::Inet;
pub use jsonb::Jsonb;
pub use sql::{is_optional_type, rust_type_to_pg_type, ColumnType};
pub use traits::{FromStorage, ToStorage};
pub use types::StorageValue;
