//! Temporary SQLite database shared by the integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_shelf::db::{DbPool, establish_connection_pool};
use pushkind_shelf::repository::DieselRepository;
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// A migrated database file removed when the value is dropped.
pub struct TestDb {
    _file: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let file = NamedTempFile::new().expect("temp file should be created");
        let path = file.path().to_str().expect("temp path should be UTF-8");
        let pool = establish_connection_pool(path).expect("pool should open");
        pool.get()
            .expect("connection should be available")
            .run_pending_migrations(MIGRATIONS)
            .expect("migrations should apply");
        Self { _file: file, pool }
    }

    #[allow(dead_code)]
    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}
