//! Canonical string rendering for types, fields and schemas.
//!
//! These strings are contractual: tests and callers compare them verbatim,
//! so every arm here is an exact format, not a debug aid.

use std::fmt::{Display, Formatter, Result};

use crate::{
    datatype::DataType,
    field::Field,
    schema::Schema,
};

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DataType::Null => f.write_str("null"),
            DataType::Bool => f.write_str("bool"),
            DataType::Int8 => f.write_str("int8"),
            DataType::Int16 => f.write_str("int16"),
            DataType::Int32 => f.write_str("int32"),
            DataType::Int64 => f.write_str("int64"),
            DataType::UInt8 => f.write_str("uint8"),
            DataType::UInt16 => f.write_str("uint16"),
            DataType::UInt32 => f.write_str("uint32"),
            DataType::UInt64 => f.write_str("uint64"),
            DataType::Float16 => f.write_str("float16"),
            DataType::Float32 => f.write_str("float32"),
            DataType::Float64 => f.write_str("float64"),
            DataType::String => f.write_str("string"),
            DataType::Binary => f.write_str("binary"),
            DataType::FixedSizeBinary(width) => write!(f, "fixed_size_binary[{width}]"),
            DataType::Date32 => f.write_str("date32"),
            DataType::Date64 => f.write_str("date64"),
            DataType::Time32(unit) => write!(f, "time32[{unit}]"),
            DataType::Time64(unit) => write!(f, "time64[{unit}]"),
            // The timezone is an attribute, not part of the canonical string.
            DataType::Timestamp { unit, .. } => write!(f, "timestamp[{unit}]"),
            DataType::Decimal { precision, scale } => write!(f, "decimal({precision}, {scale})"),
            DataType::List(item) => write!(f, "list<{}: {}>", item.name, item.data_type),
            DataType::Struct(fields) => {
                f.write_str("struct<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.data_type)?;
                }
                f.write_str(">")
            }
            DataType::Dictionary(dict) => write!(
                f,
                "dictionary<values={}, indices={}, ordered={}>",
                dict.value_type, dict.index_type, dict.ordered as u8
            ),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "colmeta.Field<{}: {}>", self.name, self.data_type)
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&format_schema(self))
    }
}

/// Multi-line schema rendering, no trailing newline.
///
/// Each top-level field renders as `name: type`; nested types additionally
/// list their children on indented lines, two spaces per nesting level.
pub fn format_schema(schema: &Schema) -> String {
    let mut lines = Vec::new();
    for field in &schema.fields {
        push_field_lines(field, 0, &mut lines);
    }
    lines.join("\n")
}

fn push_field_lines(field: &Field, indent: usize, lines: &mut Vec<String>) {
    let pad = " ".repeat(indent);
    lines.push(format!("{pad}{}: {}", field.name, field.data_type));
    push_child_lines(&field.data_type, indent + 2, lines);
}

fn push_child_lines(data_type: &DataType, indent: usize, lines: &mut Vec<String>) {
    let pad = " ".repeat(indent);
    match data_type {
        DataType::List(item) => {
            lines.push(format!("{pad}child 0, {}: {}", item.name, item.data_type));
            push_child_lines(&item.data_type, indent + 2, lines);
        }
        DataType::Struct(fields) => {
            for (i, child) in fields.iter().enumerate() {
                lines.push(format!("{pad}child {i}, {}: {}", child.name, child.data_type));
                push_child_lines(&child.data_type, indent + 2, lines);
            }
        }
        DataType::Dictionary(dict) => {
            let values: Vec<String> = dict.values.iter().map(|v| format!("\"{v}\"")).collect();
            lines.push(format!("{pad}dictionary: [{}]", values.join(", ")));
        }
        _ => {}
    }
}
