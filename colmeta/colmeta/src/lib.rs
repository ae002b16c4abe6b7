//! Columnar schema metadata library.
//!
//! Re-exports the descriptor core and the Arrow conversion layer, and adds
//! a byte [`codec`] for persisting descriptors.

mod codec;

pub use codec::{CodecError, decode, encode};
pub use colmeta_arrow as arrow;
pub use colmeta_core as core;
pub use colmeta_core::{
    DataType, DictionaryType, Field, KeyValueMetadata, Schema, SchemaError, TimeUnit,
    format_schema, type_for_alias,
};
