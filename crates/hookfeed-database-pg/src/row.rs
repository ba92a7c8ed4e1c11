use hookfeed_models::Event;
use sqlx::{postgres::PgRow, FromRow, Row};

use crate::fields::EventTypeDecode;

pub(crate) struct EventRow(Event);

impl From<EventRow> for Event {
    fn from(r: EventRow) -> Self {
        r.0
    }
}

impl<'r> FromRow<'r, PgRow> for EventRow {
    fn from_row(row: &'r PgRow) -> core::result::Result<Self, sqlx::Error> {
        Ok(Self(Event {
            id: row.try_get::<i64, _>("id")? as u64,
            event_type: row.try_get::<EventTypeDecode, _>("event_type")?.into(),
            author: row.try_get("author")?,
            from_branch: row.try_get("from_branch")?,
            to_branch: row.try_get("to_branch")?,
            repository: row.try_get("repository")?,
            commit_id: row.try_get("commit_id")?,
            timestamp: row.try_get("timestamp")?,
        }))
    }
}
