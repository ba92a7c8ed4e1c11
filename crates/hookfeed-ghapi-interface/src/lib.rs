//! GitHub webhook payload types.

pub mod types;
