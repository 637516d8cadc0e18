use super::{ItemPosition, NodeId};
use thiserror::Error;

/// Why a single BOM row could not become a node.
///
/// These are row-scoped: the tree builder records them and moves on to the
/// next row. They never abort the processing of a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// Item position or quantity is not a (non-negative) integer
    #[error("malformed {field}: '{value}'")]
    Format { field: &'static str, value: String },

    /// Part number matches one of the disallowed patterns
    #[error("part number '{part_number}' matches invalid pattern '{pattern}'")]
    InvalidPartNumber { part_number: String, pattern: String },

    /// No node with the parent position exists (yet) in the tree
    #[error("no parent at position '{parent}' for item '{position}'")]
    ParentNotFound {
        position: ItemPosition,
        parent: ItemPosition,
    },
}

impl RowError {
    pub(crate) fn format(field: &'static str, value: &str) -> Self {
        RowError::Format {
            field,
            value: value.to_string(),
        }
    }

    /// Short, stable label used when summarizing drops
    pub fn kind(&self) -> &'static str {
        match self {
            RowError::Format { .. } => "malformed",
            RowError::InvalidPartNumber { .. } => "invalid part number",
            RowError::ParentNotFound { .. } => "parent not found",
        }
    }
}

/// Result of feeding one row to the tree builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Row became a node
    Attached(NodeId),
    /// Part number is on the ignore list
    Ignored,
    /// Row was dropped for the given reason
    Dropped(RowError),
}

impl RowOutcome {
    pub fn is_attached(&self) -> bool {
        matches!(self, RowOutcome::Attached(_))
    }
}
