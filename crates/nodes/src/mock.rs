//! `MockNode` — a test double for `ExecutableNode`.
//!
//! Useful in unit and integration tests where the real HTTP-backed node is
//! either unavailable or irrelevant.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{ExecutableNode, ExecutionContext, NodeDescription, NodeError};

static MOCK_DESCRIPTION: NodeDescription = NodeDescription {
    name: "mock",
    display_name: "Mock",
    description: "Echoes its parameters back",
    group: "transform",
    version: 1,
    credentials: &[],
};

/// A mock node that records every call it receives. It echoes its input back
/// unless a failure was scripted for the current item index.
pub struct MockNode {
    /// Label used in test assertions.
    pub name: String,
    failures: HashMap<usize, NodeError>,
    /// All `(item_index, parameters)` pairs seen by this node, in call order.
    pub calls: Arc<Mutex<Vec<(usize, Value)>>>,
}

impl MockNode {
    /// Create a mock that always succeeds.
    pub fn echoing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failures: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make the item at `item_index` fail with `err`.
    pub fn failing_at(mut self, item_index: usize, err: NodeError) -> Self {
        self.failures.insert(item_index, err);
        self
    }

    /// Number of times this node has been executed.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Item indexes this node was executed for, in call order.
    pub fn seen_indexes(&self) -> Vec<usize> {
        self.calls.lock().unwrap().iter().map(|(i, _)| *i).collect()
    }
}

#[async_trait]
impl ExecutableNode for MockNode {
    fn description(&self) -> &NodeDescription {
        &MOCK_DESCRIPTION
    }

    async fn execute(&self, parameters: Value, ctx: &ExecutionContext) -> Result<Value, NodeError> {
        self.calls.lock().unwrap().push((ctx.item_index, parameters.clone()));

        match self.failures.get(&ctx.item_index) {
            Some(err) => Err(err.clone()),
            None => Ok(json!({ "node": self.name, "item": ctx.item_index, "echo": parameters })),
        }
    }
}
