//! Error types for schema construction and lookup.

use crate::datatype::TimeUnit;

/// Error raised by descriptor constructors, alias resolution and schema
/// lookups. All variants are raised synchronously at the violating call;
/// no operation leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A temporal constructor was given a unit outside its allowed set
    /// (e.g. `time32` only accepts seconds and milliseconds).
    #[error("invalid unit '{unit}' for {type_name}: expected one of {allowed}")]
    InvalidTimeUnit {
        type_name: &'static str,
        unit: TimeUnit,
        allowed: &'static str,
    },

    /// A string did not name a time unit (`s`, `ms`, `us`, `ns`).
    #[error("unknown time unit '{unit}'")]
    UnknownTimeUnit { unit: String },

    /// Decimal precision must be a positive integer.
    #[error("decimal precision must be positive, got {precision}")]
    InvalidDecimalPrecision { precision: u32 },

    /// Fixed-width binary was given a negative byte width.
    #[error("fixed-size binary width must be non-negative, got {width}")]
    InvalidBinaryWidth { width: i32 },

    /// Dictionary index types are restricted to the integer primitives.
    #[error("dictionary index type must be an integer type, got {index_type}")]
    NonIntegerDictionaryIndex { index_type: String },

    /// The alias table has no entry for the given spelling.
    #[error("no type alias registered for '{alias}'")]
    UnknownAlias { alias: String },

    /// Positional schema access outside `[-len, len - 1]`.
    #[error("schema index {index} out of bounds for schema of length {len}")]
    IndexOutOfBounds { index: isize, len: usize },
}
