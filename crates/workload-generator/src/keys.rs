//! Record key encodings.

use crate::hash::hash;

/// Width of zero-padded decimal keys (supports 10^12 distinct records).
pub const PADDED_KEY_WIDTH: usize = 12;

/// How a record index is turned into a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    /// MD5 hex digest of the decimal index (32 characters).
    Hashed,
    /// Zero-padded 12-digit decimal index.
    Padded,
}

impl KeyFormat {
    /// Encode a record index. Pure: same index, same key.
    pub fn encode(&self, index: u64) -> String {
        match self {
            KeyFormat::Hashed => hash(&index.to_string()),
            KeyFormat::Padded => format!("{index:0width$}", width = PADDED_KEY_WIDTH),
        }
    }
}
