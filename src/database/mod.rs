//! Database module
//!
//! Handles the SQLite connection pool and schema bootstrap.

pub mod connection;
pub mod schema;

pub use connection::create_pool;
