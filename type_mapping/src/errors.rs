//! Error types for storage conversions
//!
//! Every adapter reports failures through [`TypeError`]. The `target` field always
//! names the adapter (`"Hstore"`, `"Jsonb"`, `"Inet"`) so the host layer can tell
//! which column failed without extra context.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypeError {
    #[error("Cannot scan {found} value into {target}")]
    TypeMismatch {
        target: &'static str,
        found: &'static str,
    },

    #[error("Failed to encode {target} value: {message}")]
    Encode {
        target: &'static str,
        message: String,
    },

    #[error("Failed to marshal {target} value: {value}")]
    Marshal { target: &'static str, value: String },

    #[error("Failed to decode {target} value: {message}")]
    Decode {
        target: &'static str,
        message: String,
    },
}

impl TypeError {
    pub(crate) fn encode(target: &'static str, message: impl ToString) -> Self {
        TypeError::Encode {
            target,
            message: message.to_string(),
        }
    }

    pub(crate) fn decode(target: &'static str, message: impl ToString) -> Self {
        TypeError::Decode {
            target,
            message: message.to_string(),
        }
    }

    /// Whether the error came from malformed stored data
    pub fn is_decode(&self) -> bool {
        matches!(self, TypeError::Decode { .. })
    }
}
