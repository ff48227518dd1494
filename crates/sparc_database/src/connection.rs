//! Connection pool setup.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use sparc_error::{SparcResult, StoreError, StoreErrorKind};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Pooled SQLite connections.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Per-connection pragmas. SQLite leaves foreign keys off unless asked.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Open (creating if needed) the database at `path` and apply pending migrations.
#[instrument(skip(path), fields(path = %path.as_ref().display(), pool_size))]
pub fn establish_pool(path: impl AsRef<Path>, pool_size: u32) -> SparcResult<SqlitePool> {
    let url = path.as_ref().to_string_lossy().into_owned();
    debug!("Creating SQLite connection pool");

    let manager = ConnectionManager::<SqliteConnection>::new(url);
    let pool = Pool::builder()
        .max_size(pool_size.max(1))
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
        .map_err(|e| {
            StoreError::new(StoreErrorKind::Connection(format!(
                "Failed to create connection pool: {}",
                e
            )))
        })?;

    let mut conn = pool.get().map_err(|e| {
        StoreError::new(StoreErrorKind::Connection(format!(
            "Failed to get connection from pool: {}",
            e
        )))
    })?;
    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
        StoreError::new(StoreErrorKind::Migration(format!(
            "Failed to run migrations: {}",
            e
        )))
    })?;
    info!(applied = applied.len(), "Database ready");

    Ok(pool)
}
