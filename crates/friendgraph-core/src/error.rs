use thiserror::Error;

/// Errors raised by friendgraph-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid sample graph: friendship {from} -> {to} refers to a missing person (have {people})")]
    DanglingFriendship {
        from: usize,
        to: usize,
        people: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
