//! friendgraph-client — Neo4j client for the friendgraph social graph.
//!
//! Every operation borrows a session from the connection, runs one
//! statement, and releases the session before returning, on success and on
//! error alike.

pub mod client;
pub mod cursor;
pub mod mutations;
pub mod queries;
pub mod session;
pub mod statement;

pub use client::{GraphConfig, GraphError, GraphSessionClient};
pub use cursor::PeopleCursor;
pub use session::{AccessMode, Session};
pub use statement::{ParamValue, Statement};
