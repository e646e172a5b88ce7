//! Aviary domain core.
//!
//! Shared primitives for the rest of the workspace: the [`CoreError`]
//! taxonomy and common type aliases. This crate is deliberately free of
//! web and database dependencies.

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::DbId;
