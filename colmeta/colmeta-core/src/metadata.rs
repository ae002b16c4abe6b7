//! Byte-string key/value metadata attached to fields and schemas.

use serde::{Deserialize, Serialize};

/// Ordered collection of byte-string key/value pairs.
///
/// Storage preserves insertion order so a round-tripped value reproduces
/// its source exactly, but equality is defined over the *set* of pairs:
/// two collections holding the same pairs in different order are equal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyValueMetadata {
    pairs: Vec<(Vec<u8>, Vec<u8>)>,
}

impl KeyValueMetadata {
    pub fn new(pairs: Vec<(Vec<u8>, Vec<u8>)>) -> Self {
        Self { pairs }
    }

    /// Value stored under `key`, or `None`. First match wins if a key was
    /// inserted more than once.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.pairs
            .iter()
            .find(|(k, _)| k.as_slice() == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.pairs.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl PartialEq for KeyValueMetadata {
    fn eq(&self, other: &Self) -> bool {
        if self.pairs.len() != other.pairs.len() {
            return false;
        }
        let mut lhs: Vec<_> = self.pairs.iter().collect();
        let mut rhs: Vec<_> = other.pairs.iter().collect();
        lhs.sort();
        rhs.sort();
        lhs == rhs
    }
}

impl Eq for KeyValueMetadata {}

impl<K, V> FromIterator<(K, V)> for KeyValueMetadata
where
    K: Into<Vec<u8>>,
    V: Into<Vec<u8>>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
