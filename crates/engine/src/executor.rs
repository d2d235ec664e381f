//! Batch execution.
//!
//! `BatchExecutor` is the host side of a node invocation:
//! 1. Resolves the node implementation from the registry.
//! 2. Iterates through the input items in order, one at a time.
//! 3. Wraps each item's payload in an [`OutputRecord`].
//! 4. On an item failure, either records it and moves on
//!    (`continue_on_fail`) or aborts the batch with the item's index.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use nodes::{ExecutableNode, ExecutionContext};

use crate::{EngineError, ExecutionResult, OutputRecord};

// ---------------------------------------------------------------------------
// Node registry
// ---------------------------------------------------------------------------

/// Maps node type names to shared `ExecutableNode` implementations.
pub type NodeRegistry = HashMap<String, Arc<dyn ExecutableNode>>;

/// Insert `node` under the name from its description.
pub fn register(registry: &mut NodeRegistry, node: Arc<dyn ExecutableNode>) {
    let name = node.description().name.to_owned();
    registry.insert(name, node);
}

// ---------------------------------------------------------------------------
// BatchExecutor
// ---------------------------------------------------------------------------

/// Stateless runner for node batches.
///
/// Construct one executor per process and call [`BatchExecutor::run`] for
/// every batch.
pub struct BatchExecutor {
    registry: NodeRegistry,
}

impl BatchExecutor {
    pub fn new(registry: NodeRegistry) -> Self {
        Self { registry }
    }

    /// Run `items` through the node registered as `node_type`.
    ///
    /// Items are processed strictly in order; each one completes before the
    /// next starts.
    ///
    /// # Errors
    /// - [`EngineError::UnknownNodeType`] before any item runs.
    /// - [`EngineError::ItemFailed`] for the first failing item when
    ///   `continue_on_fail` is off. Later items are not executed.
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub async fn run(
        &self,
        node_type: &str,
        items: Vec<Value>,
        continue_on_fail: bool,
    ) -> Result<ExecutionResult, EngineError> {
        let node = self
            .registry
            .get(node_type)
            .ok_or_else(|| EngineError::UnknownNodeType(node_type.to_owned()))?;

        let execution_id = Uuid::new_v4();
        info!(%execution_id, "starting batch of {} items", items.len());

        let mut records = Vec::with_capacity(items.len());

        for (item_index, parameters) in items.into_iter().enumerate() {
            let ctx = ExecutionContext { execution_id, item_index };

            match node.execute(parameters, &ctx).await {
                Ok(data) => {
                    info!("item {} succeeded", item_index);
                    records.push(OutputRecord::Data { data });
                }

                Err(err) if continue_on_fail => {
                    warn!("item {} failed, continuing: {}", item_index, err);
                    records.push(OutputRecord::Error {
                        error: err.message().to_owned(),
                        item_index,
                    });
                }

                Err(err) => {
                    error!("item {} failed, aborting batch: {}", item_index, err);
                    return Err(EngineError::ItemFailed { item_index, source: err });
                }
            }
        }

        info!(
            %execution_id,
            "batch finished: {} records, {} errors",
            records.len(),
            records.iter().filter(|r| r.is_error()).count()
        );

        Ok(ExecutionResult { execution_id, records })
    }
}
