use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::{log_info, log_warn};
use diesel::pg::PgConnection;
use diesel::Connection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Upper bound for the startup backoff between connection attempts.
const MAX_BACKOFF_SECS: u64 = 30;

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Build the pool and verify one connection can be checked out.
    pub fn connect(database_url: &str, max_size: u32) -> AppResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);

        let pool = r2d2::Pool::builder()
            .max_size(max_size)
            .min_idle(Some(std::cmp::min(2, max_size)))
            // Connection timeouts
            .connection_timeout(Duration::from_secs(10))
            .idle_timeout(Some(Duration::from_secs(300)))
            .max_lifetime(Some(Duration::from_secs(1800)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized with max_size: {} ({})",
            pool.max_size(),
            database_url.split('@').last().unwrap_or("unknown_host")
        );

        Ok(Self { pool })
    }

    /// Connect and migrate, retrying with exponential backoff. This is the only
    /// retry loop in the application; request handling never retries.
    pub async fn connect_with_retry(
        database_url: &str,
        max_size: u32,
        attempts: u32,
    ) -> AppResult<Self> {
        let attempts = attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            let url = database_url.to_string();
            let result = tokio::task::spawn_blocking(move || -> AppResult<Database> {
                let database = Database::connect(&url, max_size)?;
                database.run_migrations()?;
                Ok(database)
            })
            .await?;

            match result {
                Ok(database) => return Ok(database),
                Err(e) => {
                    log_warn!(
                        "Database setup attempt {}/{} failed: {}",
                        attempt,
                        attempts,
                        e
                    );
                    last_error = Some(e);
                }
            }

            if attempt < attempts {
                let backoff = Duration::from_secs(std::cmp::min(
                    2_u64.pow(attempt - 1),
                    MAX_BACKOFF_SECS,
                ));
                tokio::time::sleep(backoff).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            AppError::ServiceUnavailable("Database setup was never attempted".to_string())
        }))
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn run_migrations(&self) -> AppResult<()> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

        log_info!(
            "Database migrations completed successfully ({} applied)",
            applied.len()
        );
        Ok(())
    }

    /// Run `f` inside one database transaction on the blocking pool. Any error
    /// returned by `f` rolls the whole unit of work back.
    pub async fn transaction<T, F>(&self, f: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> AppResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || -> AppResult<T> {
            let mut pooled = Self::checkout(&pool)?;
            let conn: &mut PgConnection = &mut pooled;
            conn.transaction(f)
        })
        .await?
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        Self::checkout(&self.pool)
    }

    fn checkout(pool: &DbPool) -> AppResult<DbConnection> {
        let start = std::time::Instant::now();

        match pool.get() {
            Ok(conn) => {
                let duration = start.elapsed().as_millis() as u64;
                if duration > 100 {
                    LogContext::performance_metric("db_connection_acquire", duration, Some("slow"));
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }
}
