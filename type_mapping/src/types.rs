//! Storage value definitions
//!
//! This module provides the opaque value exchanged between the scalar
//! adapters and the database access layer.

/// A single column value as handed over by (or to) the driver layer
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StorageValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl StorageValue {
    /// Name of the variant, used in type mismatch errors
    pub fn kind(&self) -> &'static str {
        match self {
            StorageValue::Null => "NULL",
            StorageValue::Bool(_) => "bool",
            StorageValue::Int(_) => "int",
            StorageValue::Float(_) => "float",
            StorageValue::Text(_) => "text",
            StorageValue::Bytes(_) => "bytes",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, StorageValue::Null)
    }

    /// Borrow the textual payload, if this is a `Text` value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StorageValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the raw payload, if this is a `Bytes` value
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            StorageValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<String> for StorageValue {
    fn from(val: String) -> Self {
        StorageValue::Text(val)
    }
}

impl From<&str> for StorageValue {
    fn from(val: &str) -> Self {
        StorageValue::Text(val.to_string())
    }
}

impl From<Vec<u8>> for StorageValue {
    fn from(val: Vec<u8>) -> Self {
        StorageValue::Bytes(val)
    }
}

impl From<&[u8]> for StorageValue {
    fn from(val: &[u8]) -> Self {
        StorageValue::Bytes(val.to_vec())
    }
}

impl From<i64> for StorageValue {
    fn from(val: i64) -> Self {
        StorageValue::Int(val)
    }
}

impl From<i32> for StorageValue {
    fn from(val: i32) -> Self {
        StorageValue::Int(i64::from(val))
    }
}

impl From<f64> for StorageValue {
    fn from(val: f64) -> Self {
        StorageValue::Float(val)
    }
}

impl From<bool> for StorageValue {
    fn from(val: bool) -> Self {
        StorageValue::Bool(val)
    }
}

impl<T> From<Option<T>> for StorageValue
where
    T: Into<StorageValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => StorageValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(StorageValue::Null.kind(), "NULL");
        assert_eq!(StorageValue::from("x").kind(), "text");
        assert_eq!(StorageValue::from(vec![1u8]).kind(), "bytes");
        assert_eq!(StorageValue::from(7i32).kind(), "int");
        assert_eq!(StorageValue::from(1.5).kind(), "float");
        assert_eq!(StorageValue::from(true).kind(), "bool");
    }

    #[test]
    fn test_option_conversion() {
        let none: Option<String> = None;
        assert!(StorageValue::from(none).is_null());
        assert_eq!(
            StorageValue::from(Some("abc")),
            StorageValue::Text("abc".to_string())
        );
    }

    #[test]
    fn test_accessors() {
        let text = StorageValue::from("hello");
        assert_eq!(text.as_text(), Some("hello"));
        assert_eq!(text.as_bytes(), None);

        let bytes = StorageValue::from(&b"{}"[..]);
        assert_eq!(bytes.as_bytes(), Some(&b"{}"[..]));
        assert_eq!(bytes.as_text(), None);
    }
}
