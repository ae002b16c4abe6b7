//! Columnar schema metadata core for `colmeta`.
//!
//! This crate provides the closed type-descriptor model ([`DataType`]),
//! named fields with byte-string metadata ([`Field`] / [`KeyValueMetadata`]),
//! ordered field collections ([`Schema`]), static alias resolution
//! ([`type_for_alias`]) and canonical string rendering. All values are
//! immutable; "update" operations return new values.

mod alias;
mod datatype;
mod error;
mod field;
mod format;
mod metadata;
mod schema;

pub use alias::type_for_alias;
pub use datatype::{DataType, DictionaryType, TimeUnit};
pub use error::SchemaError;
pub use field::Field;
pub use format::format_schema;
pub use metadata::KeyValueMetadata;
pub use schema::Schema;
