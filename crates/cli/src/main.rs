//! `joke-node` CLI entry-point.
//!
//! Available sub-commands:
//! - `fetch`    — fetch one joke from options given as flags.
//! - `batch`    — run a JSON array of option objects as one batch.
//! - `describe` — print the node and credential descriptors.
//!
//! Output records go to stdout as JSON; logs go to stderr.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Map, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine::{register, BatchExecutor, NodeRegistry};
use nodes::joke::{self, JokeClientConfig, JokeNode, DEFAULT_BASE_URL};

#[derive(Parser)]
#[command(name = "joke-node", about = "Fetch jokes from JokeAPI as workflow items", version)]
struct Cli {
    #[command(flatten)]
    transport: TransportArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct TransportArgs {
    /// JokeAPI service root.
    #[arg(long, global = true, env = "JOKE_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds; unset leaves it to the HTTP client.
    #[arg(long, global = true, env = "JOKE_API_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

impl TransportArgs {
    fn client_config(&self) -> JokeClientConfig {
        JokeClientConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Args, Debug, Default)]
struct FetchArgs {
    /// Joke category; repeat for several. Defaults to Any.
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Joke language (cs, en, fr, de, pt, es).
    #[arg(long)]
    language: Option<String>,

    /// Joke type (Any, single, twopart).
    #[arg(long = "type")]
    joke_type: Option<String>,

    /// Content flag to exclude; repeat for several.
    #[arg(long = "blacklist-flag")]
    blacklist_flags: Vec<String>,

    /// Only return jokes that are safe for everyone.
    #[arg(long)]
    safe_mode: bool,

    /// Only return jokes containing this string.
    #[arg(long)]
    contains: Option<String>,
}

impl FetchArgs {
    /// Build the item parameter object, leaving out anything not given.
    fn to_parameters(&self) -> Value {
        let mut params = Map::new();
        if !self.categories.is_empty() {
            params.insert("categories".into(), json!(self.categories));
        }
        if let Some(language) = &self.language {
            params.insert("language".into(), json!(language));
        }
        if let Some(joke_type) = &self.joke_type {
            params.insert("jokeType".into(), json!(joke_type));
        }
        if !self.blacklist_flags.is_empty() {
            params.insert("blacklistFlags".into(), json!(self.blacklist_flags));
        }
        if self.safe_mode {
            params.insert("safeMode".into(), json!(true));
        }
        if let Some(contains) = &self.contains {
            params.insert("searchString".into(), json!(contains));
        }
        Value::Object(params)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a single joke.
    Fetch {
        #[command(flatten)]
        options: FetchArgs,

        /// Emit an error record instead of exiting non-zero.
        #[arg(long)]
        continue_on_fail: bool,
    },
    /// Run a batch of option objects read from a JSON file.
    Batch {
        /// Path to a JSON array (or single object) of options; `-` for stdin.
        path: PathBuf,

        /// Record failing items and keep going instead of aborting.
        #[arg(long)]
        continue_on_fail: bool,
    },
    /// Print the node and credential descriptors as JSON.
    Describe,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (items, continue_on_fail) = match cli.command {
        Command::Describe => {
            let out = json!({
                "node": &joke::DESCRIPTION,
                "credentials": [&joke::CREDENTIALS],
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }
        Command::Fetch { options, continue_on_fail } => {
            (vec![options.to_parameters()], continue_on_fail)
        }
        Command::Batch { path, continue_on_fail } => (read_items(&path)?, continue_on_fail),
    };

    let node = JokeNode::new(cli.transport.client_config()).context("invalid transport settings")?;
    info!("using JokeAPI at {}", node.base_url());

    let mut registry = NodeRegistry::new();
    register(&mut registry, Arc::new(node));
    let executor = BatchExecutor::new(registry);

    let result = executor
        .run(joke::DESCRIPTION.name, items, continue_on_fail)
        .await
        .context("batch aborted")?;

    println!("{}", serde_json::to_string_pretty(&result.records)?);
    Ok(())
}

/// Load batch items from `path`, or stdin when `path` is `-`.
fn read_items(path: &Path) -> Result<Vec<Value>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("cannot read items from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("cannot read file {}", path.display()))?
    };

    parse_items(&content)
}

fn parse_items(content: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(content).context("invalid JSON")?;
    match value {
        Value::Array(items) => Ok(items),
        obj @ Value::Object(_) => Ok(vec![obj]),
        other => bail!("expected an array or object of options, got {other}"),
    }
}
