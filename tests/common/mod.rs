use std::path::PathBuf;

use customer_service::db::{DbPool, establish_connection_pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite database in a temporary directory with every migration applied.
///
/// The directory and database files are removed when the value is dropped.
pub struct TestDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("Temp path is not valid UTF-8").to_string();

        let pool = establish_connection_pool(&url).expect("Failed to create pool");
        let mut conn = pool.get().expect("Failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
