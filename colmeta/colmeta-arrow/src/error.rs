use colmeta_core::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrowConvertError {
    /// Arrow metadata is string-keyed; byte-string metadata that is not
    /// valid UTF-8 cannot be carried over.
    #[error("metadata pair is not valid UTF-8 and cannot be represented in Arrow")]
    NonUtf8Metadata,

    /// The Arrow type has no counterpart in the colmeta descriptor model.
    #[error("unsupported Arrow data type: {0}")]
    Unsupported(String),

    #[error("descriptor construction failed: {0}")]
    Schema(#[from] SchemaError),
}
