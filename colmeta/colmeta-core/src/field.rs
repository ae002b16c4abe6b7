//! Named, typed, nullable schema slot.

use serde::{Deserialize, Serialize};

use crate::{datatype::DataType, metadata::KeyValueMetadata};

/// A named slot with a [`DataType`], a nullability flag and optional
/// byte-string metadata.
///
/// Fields are immutable values: the metadata operations return new fields
/// and never touch the receiver. Equality covers name, type, nullability
/// and metadata (as a set of pairs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
    pub metadata: Option<KeyValueMetadata>,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
            metadata: None,
        }
    }

    /// Nullable field without metadata, the common case.
    pub fn nullable(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(name, data_type, true)
    }

    /// Consuming builder attaching metadata at construction time.
    pub fn with_metadata(mut self, metadata: KeyValueMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Copy of this field with its metadata *replaced* by `metadata`.
    /// Existing metadata is discarded, never merged.
    pub fn add_metadata(&self, metadata: KeyValueMetadata) -> Self {
        Self {
            metadata: Some(metadata),
            ..self.clone()
        }
    }

    /// Copy of this field without metadata. Idempotent: calling it on a
    /// field that has none returns an equal field.
    pub fn remove_metadata(&self) -> Self {
        Self {
            metadata: None,
            ..self.clone()
        }
    }
}
