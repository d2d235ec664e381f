//! `nodes` crate — the `ExecutableNode` trait and built-in node implementations.
//!
//! Every node must implement [`ExecutableNode`]. The engine crate dispatches
//! execution through this trait object.

pub mod description;
pub mod error;
pub mod joke;
pub mod mock;
pub mod traits;

pub use description::{CredentialType, NodeDescription};
pub use error::NodeError;
pub use traits::{ExecutableNode, ExecutionContext};
