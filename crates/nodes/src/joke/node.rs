//! `JokeNode` — fetches one joke per input item from JokeAPI.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use super::options::JokeRequestOptions;
use super::request::JokeRequest;
use super::DESCRIPTION;
use crate::traits::ExecutionContext;
use crate::{ExecutableNode, NodeDescription, NodeError};

/// Public JokeAPI service root.
pub const DEFAULT_BASE_URL: &str = "https://v2.jokeapi.dev";

/// Transport settings for [`JokeNode`].
#[derive(Debug, Clone)]
pub struct JokeClientConfig {
    /// Service root the `/joke/...` path is appended to.
    pub base_url: String,
    /// Whole-request timeout; `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl Default for JokeClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
        }
    }
}

/// The joke node. Holds one HTTP client that all items share.
#[derive(Debug, Clone)]
pub struct JokeNode {
    http: reqwest::Client,
    base_url: Url,
}

impl JokeNode {
    /// Build a node from transport settings.
    ///
    /// # Errors
    /// [`NodeError::Input`] if `base_url` does not parse, or
    /// [`NodeError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: JokeClientConfig) -> Result<Self, NodeError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            NodeError::Input(format!("invalid base URL '{}': {e}", config.base_url))
        })?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("joke-node/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self { http: builder.build()?, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue the GET for an already derived request and return the body as-is.
    pub async fn fetch(&self, request: &JokeRequest) -> Result<Value, NodeError> {
        let url = request.to_url(&self.base_url)?;
        debug!(%url, "requesting joke");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NodeError::Transport(format!(
                "request failed with status {status}"
            )));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| NodeError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ExecutableNode for JokeNode {
    fn description(&self) -> &NodeDescription {
        &DESCRIPTION
    }

    #[instrument(skip(self, parameters, ctx), fields(item_index = ctx.item_index))]
    async fn execute(&self, parameters: Value, ctx: &ExecutionContext) -> Result<Value, NodeError> {
        let options = JokeRequestOptions::from_parameters(parameters)?;
        let request = JokeRequest::from_options(&options);
        self.fetch(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_public_endpoint() {
        let node = JokeNode::new(JokeClientConfig::default()).expect("client builds");
        assert_eq!(node.base_url().as_str(), "https://v2.jokeapi.dev/");
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let err = JokeNode::new(JokeClientConfig {
            base_url: "not a url".into(),
            timeout: None,
        })
        .unwrap_err();
        assert!(matches!(err, NodeError::Input(msg) if msg.contains("not a url")));
    }

    #[test]
    fn description_names_the_node() {
        let node = JokeNode::new(JokeClientConfig::default()).unwrap();
        let desc = node.description();
        assert_eq!(desc.name, "jokeNode");
        assert_eq!(desc.credentials, &["jokeCredentialsApi"]);
    }
}
