//! The `ExecutableNode` trait — the contract every node must fulfil.

use async_trait::async_trait;
use serde_json::Value;

use crate::{NodeDescription, NodeError};

/// Per-item context passed to a node during execution.
///
/// Defined here (in the nodes crate) so both the engine and individual node
/// implementations can import it without a circular dependency.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// ID of the current batch run.
    pub execution_id: uuid::Uuid,
    /// Position of the item being processed within the batch.
    pub item_index: usize,
}

/// The core node trait.
#[async_trait]
pub trait ExecutableNode: Send + Sync {
    /// Static metadata the host registers the node under.
    fn description(&self) -> &NodeDescription;

    /// Execute the node for a single input item.
    ///
    /// `parameters` is the item's option object as supplied by the host; the
    /// node validates it. The returned value becomes the item's output payload.
    async fn execute(
        &self,
        parameters: Value,
        ctx: &ExecutionContext,
    ) -> Result<Value, NodeError>;
}
