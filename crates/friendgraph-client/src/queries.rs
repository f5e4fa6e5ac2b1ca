//! Read operations against the social graph.

use crate::client::{GraphError, GraphSessionClient};
use crate::cursor::PeopleCursor;
use crate::session::AccessMode;
use crate::statement::Statement;

impl GraphSessionClient {
    /// Names of everyone a person named `name` points at via FRIEND_OF.
    ///
    /// Order is whatever the engine returns. Every person carrying the name
    /// contributes, since names are not unique. No match yields an empty list.
    pub async fn friends_of(&self, name: &str) -> Result<Vec<String>, GraphError> {
        let mut session = self.session(AccessMode::Read).await?;
        let rows = session.rows(friends_of_statement(name)).await?;
        session.close().await?;

        let mut friends = Vec::with_capacity(rows.len());
        for row in rows {
            let friend: String = row.get("name").map_err(|e| {
                GraphError::Serialization(format!("Failed to read friend name: {e}"))
            })?;
            friends.push(friend);
        }

        tracing::debug!(name, count = friends.len(), "Fetched friends");
        Ok(friends)
    }

    /// Every person as `(name, age)`, oldest first.
    ///
    /// The returned cursor streams rows and keeps its read session open
    /// until it is exhausted or dropped.
    pub async fn people_by_age_desc(&self) -> Result<PeopleCursor, GraphError> {
        let mut session = self.session(AccessMode::Read).await?;
        let stream = session.execute(people_by_age_statement()).await?;
        Ok(PeopleCursor::new(session, stream))
    }
}

pub(crate) fn friends_of_statement(name: &str) -> Statement {
    Statement::new(
        "MATCH (p:Person)-[:FRIEND_OF]->(friend)
         WHERE p.name = $name
         RETURN friend.name AS name",
    )
    .param("name", name)
}

pub(crate) fn people_by_age_statement() -> Statement {
    Statement::new(
        "MATCH (p:Person)
         RETURN p.name AS name, p.age AS age
         ORDER BY age DESC",
    )
}
