//! # pgscalar
//!
//! Custom scalar types for PostgreSQL `hstore`, `jsonb` and `inet` columns.
//!
//! Each type implements the storage contract ([`ToStorage`] / [`FromStorage`]) and
//! the `sqlx` `Type`/`Encode`/`Decode` traits, so it can be bound and fetched like
//! any built-in column type.
//!
//! ## Quick Start
//!
//! ```rust
//! use pgscalar::prelude::*;
//!
//! let mapper = Mapper::default();
//!
//! let tags = Hstore::from_iter([("color", Some("red")), ("size", None::<&str>)]);
//! let raw = mapper.write(&tags)?;
//!
//! let decoded: Hstore = mapper.read_new(&raw)?;
//! assert_eq!(decoded, tags);
//!
//! let addr = mapper.write(&Inet::from(std::net::Ipv4Addr::LOCALHOST))?;
//! assert_eq!(addr, StorageValue::Text("127.0.0.1".to_string()));
//! # Ok::<(), pgscalar::PgScalarError>(())
//! ```
//!
//! With `sqlx`:
//!
//! ```rust,no_run
//! use pgscalar::prelude::*;
//!
//! # async fn demo(pool: PgPool) -> Result<(), sqlx::Error> {
//! let (attrs, payload, addr): (Option<Hstore>, Jsonb, Inet) =
//!     sqlx::query_as("SELECT attrs, payload, addr FROM devices LIMIT 1")
//!         .fetch_one(&pool)
//!         .await?;
//! # Ok(())
//! # }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod mapper;
pub mod prelude;

// Re-export the main public types for convenience
pub use errors::PgScalarError;
pub use mapper::Mapper;

// Re-export centralized config
pub use config::{InetConfig, InvalidAddressPolicy, MappingConfig};

// Re-export the adapters and the storage contract
pub use type_mapping::{
    is_optional_type, rust_type_to_pg_type, ColumnType, FromStorage, Hstore, Inet, Jsonb,
    StorageValue, ToStorage, TypeError,
};

// Re-export internal crates used by the public API
pub use config;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use sqlx;
