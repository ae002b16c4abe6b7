//! Arrow schema conversion for `colmeta` descriptors.

mod error;
mod schema_convert;

pub use error::ArrowConvertError;
pub use schema_convert::{
    from_arrow_datatype, from_arrow_field, from_arrow_schema, to_arrow_datatype, to_arrow_field,
    to_arrow_schema,
};
