//! Ordered field collections describing tabular data.

use serde::{Deserialize, Serialize};

use crate::{error::SchemaError, field::Field, metadata::KeyValueMetadata};

/// Ordered sequence of [`Field`]s plus optional schema-level metadata.
///
/// Field names need not be unique; name lookup returns the first match.
/// Equality compares the field sequences only — schema metadata does not
/// participate, matching the asymmetry with [`Field`] equality observed
/// in the columnar format this models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    pub fields: Vec<Field>,
    pub metadata: Option<KeyValueMetadata>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            metadata: None,
        }
    }

    pub fn new_with_metadata(fields: Vec<Field>, metadata: KeyValueMetadata) -> Self {
        Self {
            fields,
            metadata: Some(metadata),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Positional access. Negative indices count from the end, so the
    /// valid range is `[-len, len - 1]`; anything outside it is
    /// [`SchemaError::IndexOutOfBounds`].
    pub fn field(&self, index: isize) -> Result<&Field, SchemaError> {
        let len = self.fields.len();
        let resolved = if index < 0 {
            index.checked_add(len as isize)
        } else {
            Some(index)
        };
        resolved
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| self.fields.get(i))
            .ok_or(SchemaError::IndexOutOfBounds { index, len })
    }

    /// First field with the given name, if any.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Copy of this schema with its metadata *replaced* by `metadata`.
    pub fn add_metadata(&self, metadata: KeyValueMetadata) -> Self {
        Self {
            fields: self.fields.clone(),
            metadata: Some(metadata),
        }
    }

    /// Copy of this schema without metadata; idempotent.
    pub fn remove_metadata(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            metadata: None,
        }
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}
