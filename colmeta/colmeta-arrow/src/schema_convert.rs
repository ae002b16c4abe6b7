use std::{collections::HashMap, sync::Arc};

use arrow::datatypes::{
    DataType as ArrowDataType, Field as ArrowField, Schema as ArrowSchema,
    TimeUnit as ArrowTimeUnit,
};
use colmeta_core::{DataType, Field, KeyValueMetadata, Schema, TimeUnit};

use crate::error::ArrowConvertError;

// ---------------------------------------------------------------------------
// colmeta descriptors -> Arrow schema
// ---------------------------------------------------------------------------

/// Converts a `colmeta-core` [`Schema`] into an Arrow `Schema`.
///
/// Byte-string metadata is carried over when every key and value is valid
/// UTF-8; duplicate keys collapse to their first pair, matching
/// [`KeyValueMetadata::get`]. Dictionary descriptors map to Arrow's
/// index/value type pair; the display-only materialized values and the
/// ordered flag have no Arrow representation and are dropped.
pub fn to_arrow_schema(schema: &Schema) -> Result<ArrowSchema, ArrowConvertError> {
    let fields = schema
        .fields
        .iter()
        .map(to_arrow_field)
        .collect::<Result<Vec<_>, _>>()?;
    let metadata = match &schema.metadata {
        Some(metadata) => utf8_metadata(metadata)?,
        None => HashMap::new(),
    };
    Ok(ArrowSchema::new_with_metadata(fields, metadata))
}

pub fn to_arrow_field(field: &Field) -> Result<ArrowField, ArrowConvertError> {
    let converted = ArrowField::new(
        field.name.as_str(),
        to_arrow_datatype(&field.data_type)?,
        field.nullable,
    );
    match &field.metadata {
        Some(metadata) => Ok(converted.with_metadata(utf8_metadata(metadata)?)),
        None => Ok(converted),
    }
}

pub fn to_arrow_datatype(data_type: &DataType) -> Result<ArrowDataType, ArrowConvertError> {
    let converted = match data_type {
        DataType::Null => ArrowDataType::Null,
        DataType::Bool => ArrowDataType::Boolean,
        DataType::Int8 => ArrowDataType::Int8,
        DataType::Int16 => ArrowDataType::Int16,
        DataType::Int32 => ArrowDataType::Int32,
        DataType::Int64 => ArrowDataType::Int64,
        DataType::UInt8 => ArrowDataType::UInt8,
        DataType::UInt16 => ArrowDataType::UInt16,
        DataType::UInt32 => ArrowDataType::UInt32,
        DataType::UInt64 => ArrowDataType::UInt64,
        DataType::Float16 => ArrowDataType::Float16,
        DataType::Float32 => ArrowDataType::Float32,
        DataType::Float64 => ArrowDataType::Float64,
        DataType::String => ArrowDataType::Utf8,
        DataType::Binary => ArrowDataType::Binary,
        DataType::FixedSizeBinary(width) => ArrowDataType::FixedSizeBinary(*width),
        DataType::Date32 => ArrowDataType::Date32,
        DataType::Date64 => ArrowDataType::Date64,
        DataType::Time32(unit) => ArrowDataType::Time32(to_arrow_unit(*unit)),
        DataType::Time64(unit) => ArrowDataType::Time64(to_arrow_unit(*unit)),
        DataType::Timestamp { unit, timezone } => ArrowDataType::Timestamp(
            to_arrow_unit(*unit),
            timezone.as_deref().map(Arc::from),
        ),
        DataType::Decimal { precision, scale } => {
            // Decimal128 caps precision at 38 and scale at the i8 range;
            // wider core descriptors have no Arrow counterpart.
            let arrow_precision = u8::try_from(*precision)
                .ok()
                .filter(|p| *p <= 38)
                .ok_or_else(|| {
                    ArrowConvertError::Unsupported(format!(
                        "decimal precision {precision} out of Decimal128 range"
                    ))
                })?;
            let arrow_scale = i8::try_from(*scale).map_err(|_| {
                ArrowConvertError::Unsupported(format!(
                    "decimal scale {scale} out of Decimal128 range"
                ))
            })?;
            ArrowDataType::Decimal128(arrow_precision, arrow_scale)
        }
        DataType::List(item) => ArrowDataType::List(Arc::new(to_arrow_field(item)?)),
        DataType::Struct(fields) => {
            let children = fields
                .iter()
                .map(to_arrow_field)
                .collect::<Result<Vec<_>, _>>()?;
            ArrowDataType::Struct(children.into())
        }
        DataType::Dictionary(dict) => ArrowDataType::Dictionary(
            Box::new(to_arrow_datatype(&dict.index_type)?),
            Box::new(to_arrow_datatype(&dict.value_type)?),
        ),
    };
    Ok(converted)
}

fn to_arrow_unit(unit: TimeUnit) -> ArrowTimeUnit {
    match unit {
        TimeUnit::Second => ArrowTimeUnit::Second,
        TimeUnit::Millisecond => ArrowTimeUnit::Millisecond,
        TimeUnit::Microsecond => ArrowTimeUnit::Microsecond,
        TimeUnit::Nanosecond => ArrowTimeUnit::Nanosecond,
    }
}

fn utf8_metadata(metadata: &KeyValueMetadata) -> Result<HashMap<String, String>, ArrowConvertError> {
    let mut out = HashMap::with_capacity(metadata.len());
    for (key, value) in metadata.iter() {
        let key = std::str::from_utf8(key).map_err(|_| ArrowConvertError::NonUtf8Metadata)?;
        let value = std::str::from_utf8(value).map_err(|_| ArrowConvertError::NonUtf8Metadata)?;
        // Arrow metadata is a map; duplicate keys collapse to the first
        // pair, matching KeyValueMetadata::get.
        out.entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Arrow schema -> colmeta descriptors
// ---------------------------------------------------------------------------

/// Converts an Arrow `Schema` into `colmeta-core` descriptors.
///
/// Dictionary types come back with an empty materialized-value list and
/// `ordered = false` (Arrow does not carry either). Arrow types outside
/// the descriptor model are [`ArrowConvertError::Unsupported`].
pub fn from_arrow_schema(schema: &ArrowSchema) -> Result<Schema, ArrowConvertError> {
    let fields = schema
        .fields()
        .iter()
        .map(|f| from_arrow_field(f.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    if schema.metadata().is_empty() {
        Ok(Schema::new(fields))
    } else {
        Ok(Schema::new_with_metadata(
            fields,
            byte_metadata(schema.metadata()),
        ))
    }
}

pub fn from_arrow_field(field: &ArrowField) -> Result<Field, ArrowConvertError> {
    let converted = Field::new(
        field.name().as_str(),
        from_arrow_datatype(field.data_type())?,
        field.is_nullable(),
    );
    if field.metadata().is_empty() {
        Ok(converted)
    } else {
        Ok(converted.with_metadata(byte_metadata(field.metadata())))
    }
}

pub fn from_arrow_datatype(data_type: &ArrowDataType) -> Result<DataType, ArrowConvertError> {
    let converted = match data_type {
        ArrowDataType::Null => DataType::Null,
        ArrowDataType::Boolean => DataType::Bool,
        ArrowDataType::Int8 => DataType::Int8,
        ArrowDataType::Int16 => DataType::Int16,
        ArrowDataType::Int32 => DataType::Int32,
        ArrowDataType::Int64 => DataType::Int64,
        ArrowDataType::UInt8 => DataType::UInt8,
        ArrowDataType::UInt16 => DataType::UInt16,
        ArrowDataType::UInt32 => DataType::UInt32,
        ArrowDataType::UInt64 => DataType::UInt64,
        ArrowDataType::Float16 => DataType::Float16,
        ArrowDataType::Float32 => DataType::Float32,
        ArrowDataType::Float64 => DataType::Float64,
        ArrowDataType::Utf8 => DataType::String,
        ArrowDataType::Binary => DataType::Binary,
        ArrowDataType::FixedSizeBinary(width) => DataType::FixedSizeBinary(*width),
        ArrowDataType::Date32 => DataType::Date32,
        ArrowDataType::Date64 => DataType::Date64,
        ArrowDataType::Time32(unit) => DataType::time32(from_arrow_unit(*unit))?,
        ArrowDataType::Time64(unit) => DataType::time64(from_arrow_unit(*unit))?,
        ArrowDataType::Timestamp(unit, timezone) => match timezone {
            Some(tz) => DataType::timestamp_tz(from_arrow_unit(*unit), tz.as_ref()),
            None => DataType::timestamp(from_arrow_unit(*unit)),
        },
        ArrowDataType::Decimal128(precision, scale) => {
            DataType::decimal(*precision as u32, *scale as i32)?
        }
        ArrowDataType::List(item) => DataType::list_of(from_arrow_field(item.as_ref())?),
        ArrowDataType::Struct(fields) => {
            let children = fields
                .iter()
                .map(|f| from_arrow_field(f.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;
            DataType::Struct(children)
        }
        ArrowDataType::Dictionary(index, value) => DataType::dictionary(
            from_arrow_datatype(index)?,
            from_arrow_datatype(value)?,
            Vec::new(),
            false,
        )?,
        other => return Err(ArrowConvertError::Unsupported(other.to_string())),
    };
    Ok(converted)
}

fn from_arrow_unit(unit: ArrowTimeUnit) -> TimeUnit {
    match unit {
        ArrowTimeUnit::Second => TimeUnit::Second,
        ArrowTimeUnit::Millisecond => TimeUnit::Millisecond,
        ArrowTimeUnit::Microsecond => TimeUnit::Microsecond,
        ArrowTimeUnit::Nanosecond => TimeUnit::Nanosecond,
    }
}

fn byte_metadata(metadata: &HashMap<String, String>) -> KeyValueMetadata {
    metadata
        .iter()
        .map(|(k, v)| (k.as_bytes().to_vec(), v.as_bytes().to_vec()))
        .collect()
}
