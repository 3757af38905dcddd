use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};

use crate::models::{CoreError, FavoriteRow};
use crate::persistence::{FavoritesStore, PersistenceResult};

/// SQLite-backed favorites store.
///
/// Holds only the database path. Every operation opens its own connection
/// scope and releases it on completion, success or failure.
pub struct SqliteFavorites {
    database_path: PathBuf,
}

impl SqliteFavorites {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    fn with_connection<T>(
        &self,
        operation_name: &str,
        operation: impl FnOnce(&mut Connection) -> rusqlite::Result<T>,
    ) -> PersistenceResult<T> {
        let mut connection = open_connection(&self.database_path)
            .map_err(|error| storage_error(operation_name, error))?;
        operation(&mut connection).map_err(|error| storage_error(operation_name, error))
    }
}

impl FavoritesStore for SqliteFavorites {
    fn upsert(
        &self,
        title: &str,
        price: Option<f64>,
        availability: &str,
    ) -> PersistenceResult<()> {
        self.with_connection("upsert", |connection| {
            ensure_schema(connection)?;
            connection.execute(
                "
INSERT INTO favorites (title, price, availability)
VALUES (?1, ?2, ?3)
ON CONFLICT(title) DO UPDATE SET
    price = excluded.price,
    availability = excluded.availability
",
                params![title, price.map(|value| value.to_string()), availability],
            )?;
            Ok(())
        })
    }

    fn remove(&self, title: &str) -> PersistenceResult<()> {
        self.with_connection("remove", |connection| {
            ensure_schema(connection)?;
            connection.execute("DELETE FROM favorites WHERE title = ?1", params![title])?;
            Ok(())
        })
    }

    fn list_all(&self) -> PersistenceResult<Vec<FavoriteRow>> {
        self.with_connection("list_all", |connection| {
            ensure_schema(connection)?;
            let mut statement = connection.prepare(
                "
SELECT id, title, price, availability
FROM favorites
ORDER BY title
",
            )?;
            let rows = statement.query_map([], |row| {
                Ok(FavoriteRow {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    price: row.get(2)?,
                    availability: row.get(3)?,
                })
            })?;
            rows.collect()
        })
    }
}

fn open_connection(database_path: &Path) -> rusqlite::Result<Connection> {
    if let Some(parent) = database_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|error| rusqlite::Error::ToSqlConversionFailure(Box::new(error)))?;
    }
    Connection::open(database_path)
}

// The schema is created lazily inside every operation scope; the DDL is
// idempotent. The price column is TEXT, so parsing happens on every read.
fn ensure_schema(connection: &Connection) -> rusqlite::Result<()> {
    connection.execute_batch(
        "
CREATE TABLE IF NOT EXISTS favorites (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE,
    price TEXT,
    availability TEXT
);
",
    )
}

fn storage_error(operation: &str, error: rusqlite::Error) -> CoreError {
    CoreError::Storage {
        operation: operation.to_string(),
        message: error.to_string(),
    }
}
