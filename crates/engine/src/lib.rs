//! `engine` crate — runs input batches through registered nodes.

pub mod error;
pub mod executor;
pub mod models;

pub use error::EngineError;
pub use executor::{register, BatchExecutor, NodeRegistry};
pub use models::{ExecutionResult, OutputRecord};
