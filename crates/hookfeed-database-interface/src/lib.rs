mod errors;
mod interface;

pub use errors::{DatabaseError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockDbService;
pub use interface::DbService;
