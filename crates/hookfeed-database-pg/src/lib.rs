//! PostgreSQL event store.

mod fields;
mod postgres;
mod row;
mod utils;

pub use postgres::PostgresDb;
pub use utils::TestDatabase;
