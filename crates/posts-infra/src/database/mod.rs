//! Post storage backends.

mod config;
mod memory;
mod postgrest;

pub use config::{DEFAULT_TABLE, DatabaseConfig};
pub use memory::InMemoryPostRepository;
pub use postgrest::PostgrestPostRepository;
