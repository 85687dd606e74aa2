//! SQLite user store (embedded, no external dependencies)

use async_trait::async_trait;
use roster_core::{normalize_name, Result, RosterError, User, UserId, UserStore};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

const EMPTY_NAME: &str = "name must be non-empty";

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// Open (creating if missing) the database file and make sure the users
    /// table exists.
    pub async fn new(database_path: &str) -> Result<Self> {
        info!("Opening SQLite database at: {}", database_path);

        if let Some(parent) = Path::new(database_path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                RosterError::Storage(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(storage_error)?;

        let db = Self {
            pool: Arc::new(pool),
        };
        db.initialize().await?;

        info!("Database initialization complete");
        Ok(db)
    }

    /// Wait for pooled connections to finish and close them.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserStore for Database {
    async fn initialize(&self) -> Result<()> {
        // AUTOINCREMENT keeps ids from being handed out twice, even after the
        // highest row is gone.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(&*self.pool)
        .await
        .map_err(storage_error)?;

        Ok(())
    }

    async fn add_user(&self, name: &str) -> Result<UserId> {
        let name = normalize_name(name).ok_or_else(|| RosterError::validation(EMPTY_NAME))?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (name) VALUES (?1)
            "#,
        )
        .bind(name)
        .execute(&*self.pool)
        .await
        .map_err(storage_error)?;

        let id = result.last_insert_rowid();
        debug!("Added user {} ({})", id, name);
        Ok(id)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let row: Option<(i64, String)> = sqlx::query_as(
            r#"
            SELECT id, name FROM users WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(|(id, name)| User::new(id, name)))
    }
}

fn storage_error(e: sqlx::Error) -> RosterError {
    RosterError::Storage(e.to_string())
}

#[cfg(test)]
impl Database {
    /// Remove the users table from under the store, through its own pool.
    pub(crate) async fn drop_users_table(&self) {
        sqlx::query("DROP TABLE users")
            .execute(&*self.pool)
            .await
            .unwrap();
    }
}
