//! Size-driven documents: indexable fields plus filler.
//!
//! Field `i` is `"field{i}-"` followed by a 10-character window of the key
//! starting at offset `i`. The last field pads the document so the field
//! values add up to the configured size.

use super::DocumentGenerator;
use crate::keys::KeyFormat;
use workload_core::{Document, FieldValue};

/// Characters of the key copied into each indexable field.
pub const KEY_WINDOW: usize = 10;

/// Generator for size-driven documents keyed by MD5 digests.
///
/// `value_size` bounds the field values only: the filler is
/// `value_size` minus the bytes of the indexable values. Field names and
/// serialization overhead come on top, so a serialized document is larger
/// than `value_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizedGenerator {
    indexable_fields: usize,
    value_size: usize,
}

impl SizedGenerator {
    pub fn new(indexable_fields: usize, value_size: usize) -> Self {
        Self {
            indexable_fields,
            value_size,
        }
    }

    pub fn indexable_fields(&self) -> usize {
        self.indexable_fields
    }

    /// Name of indexable field `index`.
    pub fn field_name(index: usize) -> String {
        format!("field{index}")
    }

    /// Value of indexable field `index` for `key`.
    ///
    /// Queries rebuild this from an existing key to get a matching lookup.
    pub fn field_value(key: &str, index: usize) -> String {
        format!("{}-{}", Self::field_name(index), key_window(key, index))
    }
}

impl DocumentGenerator for SizedGenerator {
    fn key_format(&self) -> KeyFormat {
        KeyFormat::Hashed
    }

    fn generate(&self, key: &str) -> Document {
        let mut document = Document::new();
        let mut used = 0;

        for index in 0..self.indexable_fields {
            let value = Self::field_value(key, index);
            used += value.len();
            document.insert(Self::field_name(index), FieldValue::Text(value));
        }

        let filler_len = self.value_size.saturating_sub(used);
        document.insert(
            Self::field_name(self.indexable_fields),
            FieldValue::Text(filler(key, filler_len)),
        );

        document
    }
}

/// `key[offset..offset + KEY_WINDOW]`, wrapping around short keys.
fn key_window(key: &str, offset: usize) -> String {
    key.chars().cycle().skip(offset).take(KEY_WINDOW).collect()
}

/// The key repeated until it is exactly `len` characters long.
pub fn filler(key: &str, len: usize) -> String {
    key.chars().cycle().take(len).collect()
}
