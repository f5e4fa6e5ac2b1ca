//! friendgraph-core: Shared types, sample data, and configuration for friendgraph.
//!
//! This crate holds everything that does not talk to the database:
//! - Domain records (Person, Friendship) stored in the graph
//! - The sample social graph seeded by the scenario
//! - Settings loading (file + environment)
//! - Common error types

pub mod config;
pub mod error;
pub mod sample;
pub mod types;

pub use error::CoreError;
pub use sample::SampleGraph;
pub use types::{Friendship, Person};
