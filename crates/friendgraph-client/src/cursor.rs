//! Single-pass cursor over people rows.

use neo4rs::{Row, RowStream};

use friendgraph_core::Person;

use crate::client::GraphError;
use crate::session::Session;

/// Lazily pulls `(name, age)` rows from an open read session.
///
/// The cursor owns its session until the stream is exhausted, an error
/// occurs, or the cursor is dropped. It cannot be rewound; re-issue the
/// query for a second pass.
///
/// A cursor opened before [`GraphSessionClient::close`](crate::GraphSessionClient::close)
/// keeps streaming afterwards: its session holds its own pooled connection,
/// and that connection is released only when the cursor finishes or drops.
pub struct PeopleCursor {
    session: Option<Session>,
    stream: RowStream,
}

impl PeopleCursor {
    pub(crate) fn new(session: Session, stream: RowStream) -> Self {
        Self {
            session: Some(session),
            stream,
        }
    }

    /// Next person, or `None` once the result is exhausted.
    pub async fn next(&mut self) -> Result<Option<Person>, GraphError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };

        match session.next_row(&mut self.stream).await {
            Ok(Some(row)) => person_from_row(&row).map(Some),
            Ok(None) => {
                if let Some(session) = self.session.take() {
                    session.close().await?;
                }
                Ok(None)
            }
            Err(e) => {
                self.session = None;
                Err(e)
            }
        }
    }

    /// Drain the remaining rows.
    pub async fn collect_all(mut self) -> Result<Vec<Person>, GraphError> {
        let mut people = Vec::new();
        while let Some(person) = self.next().await? {
            people.push(person);
        }
        Ok(people)
    }

    pub fn is_exhausted(&self) -> bool {
        self.session.is_none()
    }
}

pub(crate) fn person_from_row(row: &Row) -> Result<Person, GraphError> {
    let name: String = row
        .get("name")
        .map_err(|e| GraphError::Serialization(format!("Failed to read person name: {e}")))?;
    let age: i64 = row
        .get("age")
        .map_err(|e| GraphError::Serialization(format!("Failed to read age of {name}: {e}")))?;
    Ok(Person { name, age })
}
