//! Closed data type model for columnar schema metadata.
//!
//! [`DataType`] is a plain sum type: equality and rendering are exhaustive
//! matches, and every parametric variant is validated by its constructor
//! rather than at use sites.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{alias::type_for_alias, error::SchemaError, field::Field};

/// Granularity of the temporal types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Microsecond => "us",
            TimeUnit::Nanosecond => "ns",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(TimeUnit::Second),
            "ms" => Ok(TimeUnit::Millisecond),
            "us" => Ok(TimeUnit::Microsecond),
            "ns" => Ok(TimeUnit::Nanosecond),
            other => Err(SchemaError::UnknownTimeUnit {
                unit: other.to_string(),
            }),
        }
    }
}

/// Immutable description of a column's value type.
///
/// Variants carry their parameters inline; nested variants reference
/// [`Field`] so element names and nullability survive in the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataType {
    Null,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
    String,
    /// Variable-width byte strings.
    Binary,
    /// Byte strings of exactly the given width.
    FixedSizeBinary(i32),
    Date32,
    Date64,
    /// Time of day; seconds or milliseconds only.
    Time32(TimeUnit),
    /// Time of day; microseconds or nanoseconds only.
    Time64(TimeUnit),
    Timestamp {
        unit: TimeUnit,
        timezone: Option<String>,
    },
    Decimal {
        precision: u32,
        scale: i32,
    },
    List(Box<Field>),
    Struct(Vec<Field>),
    Dictionary(Box<DictionaryType>),
}

/// Parameters of a dictionary-encoded type.
///
/// `values` holds the materialized dictionary entries; they exist for
/// multi-line schema rendering only, but are part of the constructed
/// value and therefore participate in equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryType {
    pub index_type: DataType,
    pub value_type: DataType,
    pub ordered: bool,
    pub values: Vec<String>,
}

impl DataType {
    /// Time-of-day type with second or millisecond granularity.
    pub fn time32(unit: TimeUnit) -> Result<Self, SchemaError> {
        match unit {
            TimeUnit::Second | TimeUnit::Millisecond => Ok(DataType::Time32(unit)),
            _ => Err(SchemaError::InvalidTimeUnit {
                type_name: "time32",
                unit,
                allowed: "s, ms",
            }),
        }
    }

    /// Time-of-day type with microsecond or nanosecond granularity.
    pub fn time64(unit: TimeUnit) -> Result<Self, SchemaError> {
        match unit {
            TimeUnit::Microsecond | TimeUnit::Nanosecond => Ok(DataType::Time64(unit)),
            _ => Err(SchemaError::InvalidTimeUnit {
                type_name: "time64",
                unit,
                allowed: "us, ns",
            }),
        }
    }

    /// Timestamp without a timezone; all four units are allowed.
    pub fn timestamp(unit: TimeUnit) -> Self {
        DataType::Timestamp {
            unit,
            timezone: None,
        }
    }

    /// Timestamp carrying a timezone name. The timezone is an attribute of
    /// the descriptor, not part of its canonical string.
    pub fn timestamp_tz(unit: TimeUnit, timezone: impl Into<String>) -> Self {
        DataType::Timestamp {
            unit,
            timezone: Some(timezone.into()),
        }
    }

    pub fn decimal(precision: u32, scale: i32) -> Result<Self, SchemaError> {
        if precision == 0 {
            return Err(SchemaError::InvalidDecimalPrecision { precision });
        }
        Ok(DataType::Decimal { precision, scale })
    }

    pub fn fixed_size_binary(width: i32) -> Result<Self, SchemaError> {
        if width < 0 {
            return Err(SchemaError::InvalidBinaryWidth { width });
        }
        Ok(DataType::FixedSizeBinary(width))
    }

    /// List of a bare element type, wrapped in the implicit nullable
    /// `"item"` field.
    pub fn list(item: DataType) -> Self {
        DataType::List(Box::new(Field::nullable("item", item)))
    }

    /// List with an explicitly named element field.
    pub fn list_of(item: Field) -> Self {
        DataType::List(Box::new(item))
    }

    /// Dictionary-encoded type over an integer index type.
    ///
    /// `values` are the materialized dictionary entries used when the type
    /// is rendered inside a schema.
    pub fn dictionary(
        index_type: DataType,
        value_type: DataType,
        values: Vec<String>,
        ordered: bool,
    ) -> Result<Self, SchemaError> {
        if !index_type.is_integer() {
            return Err(SchemaError::NonIntegerDictionaryIndex {
                index_type: index_type.to_string(),
            });
        }
        Ok(DataType::Dictionary(Box::new(DictionaryType {
            index_type,
            value_type,
            ordered,
            values,
        })))
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
        )
    }

    pub fn is_nested(&self) -> bool {
        matches!(
            self,
            DataType::List(_) | DataType::Struct(_) | DataType::Dictionary(_)
        )
    }

    pub fn is_primitive(&self) -> bool {
        !self.is_nested()
    }
}

/// Alias comparison: the string is resolved through the alias table and
/// compared structurally. A spelling the table does not know compares
/// unequal.
impl PartialEq<str> for DataType {
    fn eq(&self, other: &str) -> bool {
        type_for_alias(other).is_ok_and(|resolved| resolved == *self)
    }
}

impl PartialEq<&str> for DataType {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<DataType> for str {
    fn eq(&self, other: &DataType) -> bool {
        *other == *self
    }
}

impl PartialEq<DataType> for &str {
    fn eq(&self, other: &DataType) -> bool {
        *other == **self
    }
}
