/// Database test utilities with singleton pattern
///
/// Provides thread-safe access to the Postgres test database. Tests using it
/// are `#[ignore]`d and need TEST_DATABASE_URL.
use burger_api::shared::Database;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, Pool};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

type PgPool = Pool<ConnectionManager<PgConnection>>;

static DB: OnceLock<Arc<Database>> = OnceLock::new();

/// Get or create the migrated singleton database for tests
pub fn get_test_database() -> Arc<Database> {
    DB.get_or_init(|| {
        dotenvy::dotenv().ok();
        let test_db_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set in .env for tests");

        let manager = ConnectionManager::<PgConnection>::new(test_db_url);
        let pool: PgPool = r2d2::Pool::builder()
            .max_size(10)
            .build(manager)
            .expect("Failed to create test database pool");

        let database = Database::from_pool(pool);
        database
            .run_migrations()
            .expect("Failed to migrate test database");
        Arc::new(database)
    })
    .clone()
}

/// Clean all test tables - use at the start of each test
pub fn clean_test_db() {
    let database = get_test_database();
    let mut conn = database.get_connection().expect("Failed to get DB connection");

    diesel::sql_query("TRUNCATE TABLE burger_toppings, burgers, toppings RESTART IDENTITY CASCADE")
        .execute(&mut conn)
        .expect("Failed to clean tables");
}

/// Number of relation rows for one burger, read straight from the table
pub fn relation_count(burger_id: i32) -> i64 {
    let database = get_test_database();
    let mut conn = database.get_connection().expect("Failed to get DB connection");

    #[derive(QueryableByName)]
    struct Count {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        count: i64,
    }

    diesel::sql_query("SELECT COUNT(*) AS count FROM burger_toppings WHERE burger_id = $1")
        .bind::<diesel::sql_types::Integer, _>(burger_id)
        .get_result::<Count>(&mut conn)
        .expect("Failed to count relations")
        .count
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
/// Returns a guard that releases the lock when dropped
pub fn acquire_test_lock() -> MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
