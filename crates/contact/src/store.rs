use std::{str::FromStr, time::Duration};

use contact_desk_shared::Result;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS contact_messages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NULL,
    message TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const INSERT: &str =
    "INSERT INTO contact_messages (name, email, phone, message) VALUES (?, ?, ?, ?)";

/// Row values for one insert, in column order.
#[derive(Debug, Clone, Copy)]
pub struct NewContact<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub message: &'a str,
}

/// Durable storage for contact submissions.
///
/// Wraps a pool capped at one connection that is never recycled, so every
/// request shares the same long-lived handle.
#[derive(Clone, Debug)]
pub struct ContactStore {
    pool: SqlitePool,
}

impl ContactStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Build the store without touching the database.
    ///
    /// Only a malformed url fails here. An unreachable database is reported
    /// by the first query instead.
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_lazy_with(options);

        Ok(Self::new(pool))
    }

    /// Create `contact_messages` when it is missing.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;

        Ok(())
    }

    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }

    /// Insert one row and return the id assigned by the database.
    pub async fn insert(&self, contact: NewContact<'_>) -> Result<i64> {
        let result = sqlx::query(INSERT)
            .bind(contact.name)
            .bind(contact.email)
            .bind(contact.phone)
            .bind(contact.message)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    #[doc(hidden)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
