//! Write operations for the social graph.
//!
//! None of these are idempotent: every call creates fresh nodes, and
//! `delete_all` wipes the whole database, not just what we created.

use std::fmt::Write as _;

use chrono::Utc;
use neo4rs::Row;

use friendgraph_core::types::{FRIEND_OF, GREETING_LABEL, PERSON_LABEL};
use friendgraph_core::SampleGraph;

use crate::client::{GraphError, GraphSessionClient};
use crate::session::AccessMode;
use crate::statement::Statement;

impl GraphSessionClient {
    /// Create a Greeting node carrying `message` and return
    /// `"<message>, от узла <node id>"`.
    pub async fn run_greeting_write(&self, message: &str) -> Result<String, GraphError> {
        let mut session = self.session(AccessMode::Write).await?;
        let row = session
            .single(greeting_statement(message, &Utc::now().to_rfc3339()))
            .await?;
        session.close().await?;

        let (greeting, node_id) = greeting_from_row(&row)?;
        tracing::info!(node_id, "Greeting node created");
        Ok(greeting)
    }

    /// Create every person and FRIEND_OF edge of `sample` in one batch.
    pub async fn seed_sample_graph(&self, sample: &SampleGraph) -> Result<(), GraphError> {
        let statement = seed_statement(sample)?;
        let mut session = self.session(AccessMode::Write).await?;
        if let Some(statement) = statement {
            session.run(statement).await?;
        }
        session.close().await?;

        tracing::info!(
            people = sample.people.len(),
            friendships = sample.friendships.len(),
            "Sample graph seeded"
        );
        Ok(())
    }

    /// Detach and delete every node in the database. Returns how many went.
    pub async fn delete_all(&self) -> Result<i64, GraphError> {
        let mut session = self.session(AccessMode::Write).await?;
        let row = session.single(delete_all_statement()).await?;
        session.close().await?;

        let deleted: i64 = row
            .get("deleted")
            .map_err(|e| GraphError::Serialization(format!("Failed to read delete count: {e}")))?;

        tracing::info!(deleted, "Graph wiped");
        Ok(deleted)
    }
}

pub(crate) fn greeting_statement(message: &str, now: &str) -> Statement {
    Statement::new(format!(
        "CREATE (a:{GREETING_LABEL})
         SET a.message = $message, a.created_at = $now
         RETURN a.message + ', от узла ' + id(a) AS greeting, id(a) AS node_id"
    ))
    .param("message", message)
    .param("now", now)
}

/// The returned greeting text and the engine id of the node behind it.
pub(crate) fn greeting_from_row(row: &Row) -> Result<(String, i64), GraphError> {
    let greeting: String = row
        .get("greeting")
        .map_err(|e| GraphError::Serialization(format!("Failed to read greeting: {e}")))?;
    let node_id: i64 = row
        .get("node_id")
        .map_err(|e| GraphError::Serialization(format!("Failed to read greeting node id: {e}")))?;
    Ok((greeting, node_id))
}

/// One statement creating all people, then all edges between them.
///
/// Edges bind to the node variables created in the same statement, never
/// to pre-existing nodes that happen to share a name. `None` for a sample
/// with no people.
pub(crate) fn seed_statement(sample: &SampleGraph) -> Result<Option<Statement>, GraphError> {
    sample
        .validate()
        .map_err(|e| GraphError::InvalidStatement(e.to_string()))?;
    if sample.people.is_empty() {
        return Ok(None);
    }

    let mut text = String::new();
    for i in 0..sample.people.len() {
        let _ = writeln!(
            text,
            "CREATE (p{i}:{PERSON_LABEL} {{name: $p{i}_name, age: $p{i}_age}})"
        );
    }
    for f in &sample.friendships {
        let _ = writeln!(text, "CREATE (p{})-[:{FRIEND_OF}]->(p{})", f.from, f.to);
    }

    let statement = sample
        .people
        .iter()
        .enumerate()
        .fold(Statement::new(text), |s, (i, person)| {
            s.param(format!("p{i}_name"), person.name.as_str())
                .param(format!("p{i}_age"), person.age)
        });
    Ok(Some(statement))
}

pub(crate) fn delete_all_statement() -> Statement {
    Statement::new(
        "MATCH (n)
         DETACH DELETE n
         RETURN count(n) AS deleted",
    )
}

#[cfg(test)]
mod tests {
    use friendgraph_core::{Friendship, Person};
    use neo4rs::{BoltList, BoltType};

    use super::*;
    use crate::statement::ParamValue;

    #[test]
    fn test_greeting_statement() {
        let s = greeting_statement("Привет, Neo4j!", "2026-01-01T00:00:00+00:00");
        assert!(s.text().contains("CREATE (a:Greeting)"));
        assert!(s.text().contains("', от узла ' + id(a)"));
        assert!(s.missing_params().is_empty());
        assert_eq!(
            s.params().get("message"),
            Some(&ParamValue::String("Привет, Neo4j!".into()))
        );
    }

    fn row(fields: &[&str], values: Vec<BoltType>) -> Row {
        let fields: Vec<BoltType> = fields.iter().map(|f| BoltType::from(*f)).collect();
        Row::new(BoltList::from(fields), BoltList::from(values))
    }

    #[test]
    fn test_greeting_from_row() {
        let r = row(
            &["greeting", "node_id"],
            vec![BoltType::from("hi, от узла 7"), BoltType::from(7_i64)],
        );
        let (greeting, node_id) = greeting_from_row(&r).unwrap();
        assert_eq!(greeting, "hi, от узла 7");
        assert_eq!(node_id, 7);
    }

    #[test]
    fn test_greeting_from_row_requires_node_id() {
        let missing = row(&["greeting"], vec![BoltType::from("hi, от узла 7")]);
        assert!(matches!(
            greeting_from_row(&missing),
            Err(GraphError::Serialization(_))
        ));

        let mistyped = row(
            &["greeting", "node_id"],
            vec![BoltType::from("hi"), BoltType::from("seven")],
        );
        assert!(matches!(
            greeting_from_row(&mistyped),
            Err(GraphError::Serialization(_))
        ));
    }

    #[test]
    fn test_seed_statement_default_sample() {
        let s = seed_statement(&SampleGraph::default()).unwrap().unwrap();
        assert_eq!(s.text().matches(":Person {").count(), 4);
        assert_eq!(s.text().matches("-[:FRIEND_OF]->").count(), 2);
        assert!(s.text().contains("CREATE (p0)-[:FRIEND_OF]->(p1)"));
        assert!(s.text().contains("CREATE (p0)-[:FRIEND_OF]->(p2)"));
        assert!(s.missing_params().is_empty());
        assert_eq!(s.params().len(), 8);
        assert_eq!(
            s.params().get("p3_name"),
            Some(&ParamValue::String("Чебурашка".into()))
        );
        assert_eq!(s.params().get("p3_age"), Some(&ParamValue::Integer(99)));
    }

    #[test]
    fn test_seed_statement_duplicate_names_stay_distinct() {
        let sample = SampleGraph {
            people: vec![Person::new("twin", 1), Person::new("twin", 2)],
            friendships: vec![Friendship::new(1, 0)],
        };
        let s = seed_statement(&sample).unwrap().unwrap();
        assert!(s.text().contains("CREATE (p1)-[:FRIEND_OF]->(p0)"));
        assert_eq!(s.params().get("p1_age"), Some(&ParamValue::Integer(2)));
    }

    #[test]
    fn test_seed_statement_rejects_dangling_edge() {
        let sample = SampleGraph {
            people: vec![Person::new("a", 1)],
            friendships: vec![Friendship::new(0, 5)],
        };
        let err = seed_statement(&sample).unwrap_err();
        assert!(matches!(err, GraphError::InvalidStatement(_)));
    }

    #[test]
    fn test_seed_statement_empty_sample() {
        let sample = SampleGraph {
            people: Vec::new(),
            friendships: Vec::new(),
        };
        assert!(seed_statement(&sample).unwrap().is_none());
    }

    #[test]
    fn test_delete_all_counts() {
        let s = delete_all_statement();
        assert!(s.text().contains("DETACH DELETE n"));
        assert!(s.text().contains("count(n) AS deleted"));
    }
}
