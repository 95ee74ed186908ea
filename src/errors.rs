//! Error types for the pgscalar crate
//!
//! This module contains all error types that can be returned by pgscalar operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PgScalarError {
    #[error("Type conversion error: {0}")]
    Type(#[from] type_mapping::TypeError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
