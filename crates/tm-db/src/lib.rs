//! tm-db - Database abstraction layer for Tidemark
//!
//! This crate provides the `Database` trait and the DuckDB implementation.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use traits::{Database, QueryOutput, SqlValue};
