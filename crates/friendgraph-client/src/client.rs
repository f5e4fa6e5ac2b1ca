//! Neo4j connection management and the session-scoped graph client.

use neo4rs::{query, ConfigBuilder, Graph};

use friendgraph_core::config::Neo4jSettings;

use crate::session::{AccessMode, Session};

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Invalid statement: {0}")]
    InvalidStatement(String),

    #[error("Statement returned no rows: {statement}")]
    EmptyResult { statement: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Connection is closed")]
    Closed,
}

impl GraphError {
    /// Unreachable endpoint or rejected credentials.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Anything that went wrong with a statement or its result.
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            Self::Query(_)
                | Self::InvalidStatement(_)
                | Self::EmptyResult { .. }
                | Self::Serialization(_)
        )
    }

    /// Operation attempted after [`GraphSessionClient::close`].
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub fetch_size: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Neo4jSettings::default().into()
    }
}

impl From<Neo4jSettings> for GraphConfig {
    fn from(s: Neo4jSettings) -> Self {
        Self {
            uri: s.uri,
            user: s.user,
            password: s.password,
            max_connections: s.max_connections,
            fetch_size: s.fetch_size,
        }
    }
}

/// Neo4j client that runs each operation in its own short-lived session.
///
/// The client moves through Connected → Closed exactly once. After
/// [`close`](Self::close) every operation fails with [`GraphError::Closed`].
pub struct GraphSessionClient {
    graph: Option<Graph>,
    uri: String,
}

impl GraphSessionClient {
    /// Connect to Neo4j and verify the endpoint answers a trivial query.
    ///
    /// Fails with [`GraphError::Connection`] when the endpoint is unreachable
    /// or rejects the credentials. No retry.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let mut ping = graph
            .execute(query("RETURN 1 AS ok"))
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;
        ping.next()
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self {
            graph: Some(graph),
            uri: config.uri.clone(),
        })
    }

    /// Borrow a session for one unit of work.
    ///
    /// The session must be finished with [`Session::close`]; dropping it
    /// instead discards its transaction and returns the connection to the pool.
    pub async fn session(&self, mode: AccessMode) -> Result<Session, GraphError> {
        let txn = self
            .graph()?
            .start_txn()
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;
        tracing::debug!(?mode, "Session opened");
        Ok(Session::new(txn, mode))
    }

    /// Release the connection. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.graph.take().is_some() {
            tracing::info!(uri = %self.uri, "Neo4j connection closed");
        } else {
            tracing::debug!(uri = %self.uri, "close() on an already closed client");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.graph.is_none()
    }

    fn graph(&self) -> Result<&Graph, GraphError> {
        self.graph.as_ref().ok_or(GraphError::Closed)
    }

    #[cfg(test)]
    pub(crate) fn closed(uri: &str) -> Self {
        Self {
            graph: None,
            uri: uri.to_string(),
        }
    }
}
