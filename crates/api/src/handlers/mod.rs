//! Request handlers.

pub mod birds;
pub mod site;
