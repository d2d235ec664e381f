//! Engine-level error types.

use nodes::NodeError;
use thiserror::Error;

/// Errors that abort a whole batch.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No node is registered under the requested type name.
    #[error("no implementation registered for node type '{0}'")]
    UnknownNodeType(String),

    /// An item failed while the batch was not in continue-on-fail mode.
    #[error("item {item_index} failed: {source}")]
    ItemFailed {
        item_index: usize,
        #[source]
        source: NodeError,
    },
}

impl EngineError {
    /// Index of the item that aborted the batch, if one did.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            EngineError::ItemFailed { item_index, .. } => Some(*item_index),
            EngineError::UnknownNodeType(_) => None,
        }
    }
}
