//! The JokeAPI node.
//!
//! - [`options`] — the item parameters and their closed value sets.
//! - [`request`] — mapping options onto the request path and query.
//! - [`node`]    — the HTTP call and the `ExecutableNode` impl.

pub mod node;
pub mod options;
pub mod request;

pub use node::{JokeClientConfig, JokeNode, DEFAULT_BASE_URL};
pub use options::{BlacklistFlag, Category, JokeRequestOptions, JokeType, Language};
pub use request::JokeRequest;

use crate::description::{CredentialType, NodeDescription};

pub static DESCRIPTION: NodeDescription = NodeDescription {
    name: "jokeNode",
    display_name: "Joke Node",
    description: "Gets a Joke from the JokeAPI",
    group: "transform",
    version: 1,
    credentials: &["jokeCredentialsApi"],
};

/// JokeAPI is public; this credential exists so workflows can reference one
/// but it has nothing to fill in.
pub static CREDENTIALS: CredentialType = CredentialType {
    name: "jokeCredentialsApi",
    display_name: "Joke Credentials API",
    properties: &[],
};
