//! Configuration management for friendgraph.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (FRIENDGRAPH__ prefix, `__` between keys)
//! 2. Config file (`friendgraph.toml` by default, optional)
//! 3. Defaults
//!
//! Command-line flags are applied on top by the binary.

use serde::Deserialize;

use crate::error::CoreError;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "FRIENDGRAPH";

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub neo4j: Neo4jSettings,

    #[serde(default)]
    pub scenario: ScenarioSettings,
}

/// `[neo4j]` section: where and how to connect.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Neo4jSettings {
    /// Bolt URI (default: "bolt://localhost:7687").
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Upper bound on pooled connections held by the driver.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Rows pulled per round trip while streaming results.
    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

/// `[scenario]` section: knobs for the end-to-end run.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioSettings {
    /// Message stored on the greeting node.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Optional JSON file with a custom sample graph.
    #[serde(default)]
    pub sample_path: Option<String>,
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "testpassword".to_string()
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

fn default_greeting() -> String {
    "Привет, Neo4j!".to_string()
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

impl Default for ScenarioSettings {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            sample_path: None,
        }
    }
}

impl Settings {
    /// Load settings from `<file_prefix>.{toml,yaml,json}` (if present) and
    /// `FRIENDGRAPH__*` environment variables.
    pub fn load(file_prefix: &str) -> Result<Self, CoreError> {
        Self::load_with_env(file_prefix, environment())
    }

    fn load_with_env(
        file_prefix: &str,
        env: config::Environment,
    ) -> Result<Self, CoreError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(env)
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        tracing::debug!(
            uri = %settings.neo4j.uri,
            user = %settings.neo4j.user,
            "Settings loaded"
        );
        Ok(settings)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
