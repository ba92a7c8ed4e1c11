//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod errors;
mod event_type;
mod feed;
mod health;
mod metrics;
pub mod server;
mod viewer;
mod webhook;


pub use errors::{Result, ServerError};
