use futures::Future;
use hookfeed_config::Config;
use hookfeed_database_interface::DbService;
use hookfeed_database_memory::MemoryDb;
use hookfeed_database_pg::{PostgresDb, TestDatabase};
use tracing::info;

/// Run a store test against every available driver.
///
/// The memory driver always runs; Postgres runs when `HOOKFEED_DATABASE_PG_URL` is set.
pub async fn db_test_case<F, Fut>(test_name: &str, block: F)
where
    F: Fn(Box<dyn DbService>) -> Fut,
    Fut: Future<Output = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>>,
{
    let mut config = Config::for_tests();
    let full_name = format!("test-hookfeed-{test_name}");

    {
        // In memory
        let mem_db = Box::new(MemoryDb::new());
        info!("running memory test {full_name} ...");
        block(mem_db).await.unwrap();
    }

    if config.database.pg.url.is_empty() {
        return;
    }

    {
        // Postgres
        let test_db = TestDatabase::new(&config.database.pg.url, &full_name);
        config.database.pg.url = test_db.url();
        test_db.create().await.unwrap();

        let pg_db = Box::new(PostgresDb::connect(&config).await.unwrap());
        info!("running postgres test {full_name} ...");
        block(pg_db).await.unwrap();

        test_db.destroy().await.unwrap();
    }
}
