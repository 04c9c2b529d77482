//! Database schema migrations.
//!
//! Versioned, transactional schema setup. Each migration runs exactly once;
//! applied versions are recorded in the `migrations` table so the schema can
//! evolve without touching existing data.

use crate::libs::error::WorklogError;
use rusqlite::{params, Connection, Transaction};
use tracing::debug;

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<(), WorklogError>,
}

fn registry() -> Vec<Migration> {
    vec![Migration {
        version: 1,
        name: "create_projects_and_times",
        up: |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS projects (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL
                )",
                [],
            )?;
            tx.execute(
                "CREATE TABLE IF NOT EXISTS times (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    date TEXT NOT NULL,
                    hours REAL NOT NULL,
                    project INTEGER NOT NULL,
                    desc TEXT NOT NULL
                )",
                [],
            )?;
            Ok(())
        },
    }]
}

/// Applies all pending migrations. Called once when the connection is opened.
pub fn init_with_migrations(conn: &mut Connection) -> Result<(), WorklogError> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    let current = current_version(conn)?;

    for migration in registry().iter().filter(|m| m.version > current) {
        let tx = conn.transaction()?;
        (migration.up)(&tx)?;
        tx.execute(
            "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
            params![migration.version, migration.name],
        )?;
        tx.commit()?;
        debug!(version = migration.version, name = migration.name, "applied migration");
    }

    Ok(())
}

/// Highest applied migration version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> Result<u32, WorklogError> {
    let version = conn.query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| row.get(0))?;
    Ok(version)
}
