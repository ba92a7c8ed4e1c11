mod common;
mod event;
mod generic;
mod pulls;
mod push;

pub use common::*;
pub use event::GhEvent;
pub use generic::*;
pub use pulls::*;
pub use push::*;
