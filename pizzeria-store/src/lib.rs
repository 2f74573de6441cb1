use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{debug, info};

pub mod error;
pub mod models;
pub mod repository;
pub mod schema;
pub mod seed;
pub mod validation;

pub use diesel::SqliteConnection;
pub use error::StoreError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub const DEFAULT_DATABASE_URL: &str = "app.db";

/// Handle to the relational store.
///
/// Cloning is cheap. Every unit of work opens its own connection, so a handle
/// can be shared freely between requests.
#[derive(Debug, Clone)]
pub struct Database {
    url: String,
}

impl Database {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn establish_connection(&self) -> Result<SqliteConnection, StoreError> {
        let mut conn = SqliteConnection::establish(&self.url)?;
        // sqlite leaves foreign keys (and with them ON DELETE CASCADE) off per connection
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")?;
        debug!(url = %self.url, "opened store connection");
        Ok(conn)
    }

    /// Runs `f` inside a single transaction on a fresh connection.
    ///
    /// The transaction commits when `f` returns `Ok` and rolls back otherwise,
    /// so a failed operation leaves no partial state behind.
    pub fn transaction<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError>,
    {
        let conn = &mut self.establish_connection()?;
        conn.transaction(f)
    }

    pub fn run_pending_migrations(&self) -> Result<usize, StoreError> {
        let conn = &mut self.establish_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        for version in &applied {
            info!(%version, "applied migration");
        }
        Ok(applied.len())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use tempfile::TempDir;

    use super::Database;

    /// A migrated database in a temporary directory, removed on drop.
    pub struct TestDatabase {
        pub db: Database,
        _dir: TempDir,
    }

    pub fn test_database() -> TestDatabase {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        let db = Database::new(path.to_str().unwrap());
        db.run_pending_migrations().unwrap();
        TestDatabase { db, _dir: dir }
    }
}
