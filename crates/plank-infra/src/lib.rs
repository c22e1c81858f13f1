//! # Plank Infrastructure
//!
//! Concrete implementations of the ports defined in `plank-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//!
//! Without `postgres` the crate still builds and provides the in-memory
//! repository only.

pub mod database;

pub use database::MemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
