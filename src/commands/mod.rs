//! CLI command implementations.

pub mod aggregate;
pub mod sources;
