//! Domain records stored in the graph.
//!
//! These are plain values: the database enforces no uniqueness on them and
//! neither do we. Two `Person` records with the same name are two nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node label for people.
pub const PERSON_LABEL: &str = "Person";

/// Node label for greeting nodes written by the connectivity check.
pub const GREETING_LABEL: &str = "Greeting";

/// Relationship type connecting one person to another.
pub const FRIEND_OF: &str = "FRIEND_OF";

/// A person node: a name used as lookup key and an age.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
    pub age: i64,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} лет", self.name, self.age)
    }
}

/// A directed FRIEND_OF edge between two people of a sample graph.
///
/// Endpoints are indices into the owning [`SampleGraph`](crate::SampleGraph)'s
/// people list, so an edge always binds to the node created in the same batch
/// even when other nodes share the name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Friendship {
    pub from: usize,
    pub to: usize,
}

impl Friendship {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}
