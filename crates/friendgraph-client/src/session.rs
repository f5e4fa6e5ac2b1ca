//! Scoped units of work borrowed from the connection.

use neo4rs::{Row, RowStream, Txn};

use crate::client::GraphError;
use crate::statement::Statement;

/// Whether a session writes or only reads.
///
/// A write session commits on [`Session::close`]; a read session rolls
/// back, so nothing a read statement does can persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

/// A transaction held for the duration of one operation.
///
/// Dropping a session that was not closed (an early `?` return, a panic)
/// releases the underlying connection and discards the transaction.
pub struct Session {
    txn: Option<Txn>,
    mode: AccessMode,
}

impl Session {
    pub(crate) fn new(txn: Txn, mode: AccessMode) -> Self {
        Self {
            txn: Some(txn),
            mode,
        }
    }

    /// Run a statement and discard its result.
    pub async fn run(&mut self, statement: Statement) -> Result<(), GraphError> {
        let q = statement.into_query()?;
        self.txn()?.run(q).await?;
        Ok(())
    }

    /// Run a statement and collect every row.
    pub async fn rows(&mut self, statement: Statement) -> Result<Vec<Row>, GraphError> {
        let mut stream = self.execute(statement).await?;
        let mut rows = Vec::new();
        while let Some(row) = self.next_row(&mut stream).await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Run a statement and return its first row; no rows is an error.
    pub async fn single(&mut self, statement: Statement) -> Result<Row, GraphError> {
        let text = statement.text().to_string();
        let mut stream = self.execute(statement).await?;
        self.next_row(&mut stream)
            .await?
            .ok_or(GraphError::EmptyResult { statement: text })
    }

    /// Start a statement and hand back its stream for row-by-row reads.
    pub(crate) async fn execute(&mut self, statement: Statement) -> Result<RowStream, GraphError> {
        let q = statement.into_query()?;
        Ok(self.txn()?.execute(q).await?)
    }

    pub(crate) async fn next_row(
        &mut self,
        stream: &mut RowStream,
    ) -> Result<Option<Row>, GraphError> {
        let txn = self.txn()?;
        Ok(stream.next(txn.handle()).await?)
    }

    /// Finish the unit of work: commit for writes, roll back for reads.
    pub async fn close(mut self) -> Result<(), GraphError> {
        if let Some(txn) = self.txn.take() {
            match self.mode {
                AccessMode::Write => txn.commit().await?,
                AccessMode::Read => txn.rollback().await?,
            }
            tracing::debug!(mode = ?self.mode, "Session closed");
        }
        Ok(())
    }

    fn txn(&mut self) -> Result<&mut Txn, GraphError> {
        self.txn.as_mut().ok_or(GraphError::Closed)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.txn.is_some() {
            tracing::warn!(mode = ?self.mode, "Session released without close; transaction discarded");
        }
    }
}
