use crate::db::migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::WorklogError;
use crate::msg_debug;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "worklog.db";

/// Owner of the single long-lived database connection.
///
/// Opened once at process start and dropped on exit; every store operation
/// goes through this handle. Schema setup runs on open, so a `Db` is always
/// ready for queries.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the platform data directory, honoring the
    /// optional `db_file` override from the configuration.
    pub fn new() -> Result<Db, WorklogError> {
        let config = Config::read().unwrap_or_default();
        let file_name = config.db_file.unwrap_or_else(|| DB_FILE_NAME.to_string());
        let db_file_path = DataStorage::new()
            .get_path(&file_name)
            .map_err(std::io::Error::other)?;
        Self::open(db_file_path)
    }

    /// Opens the database at an explicit path. Used by `new` and by tests
    /// that point at a temporary directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db, WorklogError> {
        msg_debug!(format!("opening database at {}", path.as_ref().display()));
        let mut conn = Connection::open(path)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
