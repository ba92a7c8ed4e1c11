use std::time::Duration;

use async_trait::async_trait;
use hookfeed_config::Config;
use hookfeed_database_interface::{DatabaseError, DbService, Result};
use hookfeed_models::Event;
use sqlx::{migrate::Migrator, postgres::PgPoolOptions, PgPool, Row};
use time::OffsetDateTime;
use tracing::info;

use crate::row::EventRow;

pub(crate) static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Event store backed by the `event` table.
pub struct PostgresDb {
    pool: PgPool,
}

impl PostgresDb {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool on the configured database and apply pending migrations.
    pub async fn connect(config: &Config) -> Result<Self> {
        let pg = &config.database.pg;
        info!(
            pool_size = pg.pool_size,
            connection_timeout = pg.connection_timeout,
            message = "Connecting to event store"
        );

        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(pg.connection_timeout.into()))
            .max_connections(pg.pool_size)
            .connect(&pg.url)
            .await
            .map_err(|e| DatabaseError::ImplementationError { source: e.into() })?;

        let db = Self::new(pool);
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        info!(
            migrations = MIGRATOR.iter().count(),
            message = "Applying event store migrations"
        );

        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| DatabaseError::ImplementationError { source: e.into() })
    }
}

#[async_trait]
impl DbService for PostgresDb {
    #[tracing::instrument(skip(self))]
    async fn events_create(&self, instance: Event) -> Result<Event> {
        let new_id: i64 = sqlx::query(
            r#"
            INSERT INTO event
            (
                event_type,
                author,
                from_branch,
                to_branch,
                repository,
                commit_id,
                timestamp
            )
            VALUES
            (
                $1,
                $2,
                $3,
                $4,
                $5,
                $6,
                $7
            )
            RETURNING id
            ;
        "#,
        )
        .bind(instance.event_type.to_string())
        .bind(instance.author)
        .bind(instance.from_branch)
        .bind(instance.to_branch)
        .bind(instance.repository)
        .bind(instance.commit_id)
        .bind(instance.timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::ImplementationError { source: e.into() })?
        .get(0);

        self.events_get_expect(new_id as u64).await
    }

    #[tracing::instrument(skip(self))]
    async fn events_get(&self, id: u64) -> Result<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
                SELECT *
                FROM event
                WHERE id = $1
            "#,
        )
        .bind(id as i64)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::ImplementationError { source: e.into() })?;

        Ok(row.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn events_list_recent(&self, limit: u64) -> Result<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
                SELECT *
                FROM event
                ORDER BY timestamp DESC, id DESC
                LIMIT $1
            "#,
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::ImplementationError { source: e.into() })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn events_count(&self) -> Result<u64> {
        let count: i64 = sqlx::query(
            r#"
                SELECT COUNT(*)
                FROM event
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::ImplementationError { source: e.into() })?
        .get(0);

        Ok(count as u64)
    }

    #[tracing::instrument(skip(self))]
    async fn events_delete_before(&self, timestamp: OffsetDateTime) -> Result<u64> {
        sqlx::query(
            r#"
            DELETE FROM event
            WHERE timestamp < $1
        "#,
        )
        .bind(timestamp)
        .execute(&self.pool)
        .await
        .map(|x| x.rows_affected())
        .map_err(|e| DatabaseError::ImplementationError { source: e.into() })
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1;")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::ImplementationError { source: e.into() })?;

        Ok(())
    }
}
