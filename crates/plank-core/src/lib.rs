//! # Plank Core
//!
//! The domain layer of the Plank bulletin board.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod listing;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use listing::{Listing, LoadStrategy};
pub use service::PostService;
