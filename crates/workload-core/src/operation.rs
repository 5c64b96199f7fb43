//! Operation tokens.

use serde::{Deserialize, Serialize};

/// One operation a worker can issue against the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Create,
    Read,
    Update,
    Delete,
    Query,
}

impl OperationKind {
    /// All kinds, in mix order.
    pub const ALL: [OperationKind; 5] = [
        OperationKind::Create,
        OperationKind::Read,
        OperationKind::Update,
        OperationKind::Delete,
        OperationKind::Query,
    ];

    /// Whether the operation targets a record that must already exist.
    ///
    /// Deletes count too: removing from an empty key space would push the
    /// deleted counter past the created counter.
    pub fn needs_live_record(&self) -> bool {
        !matches!(self, OperationKind::Create)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Create => "create",
            OperationKind::Read => "read",
            OperationKind::Update => "update",
            OperationKind::Delete => "delete",
            OperationKind::Query => "query",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
