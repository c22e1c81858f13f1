//! Request/response middleware.

pub mod error;
