//! # Posts Infrastructure
//!
//! Concrete implementations of the ports defined in `posts-core`.
//!
//! - `PostgrestPostRepository` - the hosted database, reached over its REST API
//! - `InMemoryPostRepository` - process-local table backing the handler tests

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository, PostgrestPostRepository};
