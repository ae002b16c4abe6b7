//! Opaque byte codec for schema metadata values.
//!
//! Any serializable descriptor (`DataType`, `Field`, `Schema`) round-trips
//! through [`encode`]/[`decode`] preserving its defined equality. The byte
//! layout is an implementation detail: it is not promised to be stable
//! across library versions, only to round-trip within one.

use serde::{Serialize, de::DeserializeOwned};

/// Error produced by [`encode`] and [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(value)?)
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}
