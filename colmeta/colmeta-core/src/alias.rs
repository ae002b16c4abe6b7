//! Static alias table mapping string spellings to data types.

use crate::{datatype::DataType, error::SchemaError};

/// Resolve a short or long type spelling to its [`DataType`].
///
/// The table is closed and case-sensitive: every primitive has a short
/// (`"i4"`) and long (`"int32"`) spelling, and the parametric temporal
/// types are spelled with their unit in brackets (`"time32[ms]"`,
/// `"timestamp[ns]"`). Anything else is [`SchemaError::UnknownAlias`].
pub fn type_for_alias(alias: &str) -> Result<DataType, SchemaError> {
    let data_type = match alias {
        "i1" | "int8" => DataType::Int8,
        "i2" | "int16" => DataType::Int16,
        "i4" | "int32" => DataType::Int32,
        "i8" | "int64" => DataType::Int64,
        "u1" | "uint8" => DataType::UInt8,
        "u2" | "uint16" => DataType::UInt16,
        "u4" | "uint32" => DataType::UInt32,
        "u8" | "uint64" => DataType::UInt64,
        "f4" | "float32" => DataType::Float32,
        "f8" | "float64" => DataType::Float64,
        "date32" => DataType::Date32,
        "date64" => DataType::Date64,
        "string" | "str" => DataType::String,
        "binary" => DataType::Binary,
        other => return parametric_for_alias(other),
    };
    Ok(data_type)
}

/// Handle the bracketed temporal spellings. The unit goes through the
/// normal constructors, so `"time32[ns]"` fails unit validation rather
/// than alias lookup.
fn parametric_for_alias(alias: &str) -> Result<DataType, SchemaError> {
    if let Some(unit) = bracketed_unit(alias, "time32") {
        return DataType::time32(unit.parse()?);
    }
    if let Some(unit) = bracketed_unit(alias, "time64") {
        return DataType::time64(unit.parse()?);
    }
    if let Some(unit) = bracketed_unit(alias, "timestamp") {
        return Ok(DataType::timestamp(unit.parse()?));
    }
    Err(SchemaError::UnknownAlias {
        alias: alias.to_string(),
    })
}

fn bracketed_unit<'a>(alias: &'a str, name: &str) -> Option<&'a str> {
    alias
        .strip_prefix(name)?
        .strip_prefix('[')?
        .strip_suffix(']')
}
