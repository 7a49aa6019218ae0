//! Database Connection and Setup
//!
//! Manages the SQLite database connection and migrations.

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    conn: Arc<Mutex<Connection>>,
}

impl DbState {
    /// Shared handle to the underlying connection
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }
}

/// Open the database at `db_path` (`:memory:` for tests) and run migrations
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| DomainError::Internal("Invalid DB path".to_string()))?;

    let conn = Connection::open(db_path_str)
        .map_err(|e| DomainError::Internal(format!("Failed to open db: {}", e)))?;

    run_migrations(&conn)?;

    tracing::info!(path = %db_path.display(), "database initialized");

    Ok(DbState {
        conn: Arc::new(Mutex::new(conn)),
    })
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let names = stmt.query_map([], |row| row.get::<_, String>(1));
    if let Ok(names) = names {
        for name in names.flatten() {
            if name == column {
                return true;
            }
        }
    }
    false
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            is_important INTEGER NOT NULL DEFAULT 0,
            is_done INTEGER NOT NULL DEFAULT 0
        )",
        [],
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    // Timestamp columns were added after the initial schema
    if !column_exists(conn, "todos", "created_at") {
        conn.execute("ALTER TABLE todos ADD COLUMN created_at INTEGER", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add created_at: {}", e)))?;
    }

    if !column_exists(conn, "todos", "updated_at") {
        conn.execute("ALTER TABLE todos ADD COLUMN updated_at INTEGER", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add updated_at: {}", e)))?;
    }

    Ok(())
}
