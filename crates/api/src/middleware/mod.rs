//! HTTP middleware.

pub mod cache;
