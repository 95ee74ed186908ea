//! SQL type conversion utilities
//!
//! This module handles conversion between Rust types
//! and their PostgreSQL column types for DDL generation.

/// Column type a Rust value is stored in
pub trait ColumnType {
    const SQL_TYPE: &'static str;
}

/// Map Rust type names to PostgreSQL types for DDL generation
///
/// `Option<T>` maps to the column type of `T`; nullability is expressed by the
/// absence of `NOT NULL`, see [`is_optional_type`].
pub fn rust_type_to_pg_type(rust_type: &str) -> &'static str {
    // Normalize type string by removing all whitespace for consistent matching
    let normalized: String = rust_type.chars().filter(|c| !c.is_whitespace()).collect();
    let inner = normalized
        .strip_prefix("Option<")
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(normalized.as_str());

    match inner {
        "Hstore" | "type_mapping::Hstore" | "HashMap<String,Option<String>>" => "HSTORE",
        "Jsonb" | "type_mapping::Jsonb" | "serde_json::Value" | "Value" => "JSONB",
        "Inet" | "type_mapping::Inet" | "IpAddr" | "std::net::IpAddr" => "INET",
        "String" => "VARCHAR",
        "i8" | "i16" => "SMALLINT",
        "i32" | "u16" => "INTEGER",
        "i64" | "u32" => "BIGINT",
        "u64" => "NUMERIC(20,0)", // PostgreSQL doesn't have native u64
        "f32" => "REAL",
        "f64" => "DOUBLE PRECISION",
        "bool" => "BOOLEAN",
        "Vec<u8>" => "BYTEA",
        "chrono::DateTime<chrono::Utc>" | "DateTime<Utc>" => "TIMESTAMP WITH TIME ZONE",
        "Vec<String>" => "TEXT[]",
        _ => "VARCHAR", // default fallback
    }
}

/// Check if a Rust type is Optional (nullable in SQL)
pub fn is_optional_type(rust_type: &str) -> bool {
    rust_type.trim().starts_with("Option")
}
