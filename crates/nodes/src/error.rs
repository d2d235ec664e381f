//! Node-level error type.

use std::error::Error as StdError;

use thiserror::Error;

/// Errors returned by a node's `execute` method.
///
/// The host decides what to do with the variant based on its per-batch
/// failure mode: record it against the item and move on, or abort the batch.
/// - `Transport` — network failure, timeout, or a non-success HTTP status.
/// - `Decode`    — the response body was not the JSON we asked for.
/// - `Input`     — the item's parameters are invalid; no request was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("invalid input: {0}")]
    Input(String),
}

impl NodeError {
    /// The underlying cause without the variant prefix.
    ///
    /// This is what ends up in an error record's `error` field.
    pub fn message(&self) -> &str {
        match self {
            NodeError::Transport(msg) | NodeError::Decode(msg) | NodeError::Input(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for NodeError {
    fn from(err: reqwest::Error) -> Self {
        NodeError::Transport(error_chain(&err))
    }
}

/// `err` followed by each of its sources, joined with `": "`.
pub(crate) fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
