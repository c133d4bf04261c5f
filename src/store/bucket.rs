//! SQLite-backed route bucket.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

use crate::routing::{RouteLookup, RouteMap};

/// Name of the table holding `path → url` pairs.
pub const BUCKET_NAME: &str = "routes";

/// Errors raised by the storage engine.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot open route store {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("cannot seed route store: {0}")]
    Seed(#[source] rusqlite::Error),

    #[error("cannot query route store: {0}")]
    Read(#[source] rusqlite::Error),

    #[error("route store value for {path} is not valid UTF-8")]
    InvalidUtf8 { path: String },

    #[error("route store connection lock poisoned")]
    Poisoned,
}

/// Handle to the persistent route bucket.
#[derive(Debug)]
pub struct RouteStore {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl RouteStore {
    /// Open (or create) the store file.
    ///
    /// `busy_timeout` bounds how long we wait for another process holding
    /// the file lock before giving up.
    pub fn open(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let open_err = |source| StorageError::Open {
            path: path.clone(),
            source,
        };

        let conn = Connection::open(&path).map_err(open_err)?;
        conn.busy_timeout(busy_timeout).map_err(open_err)?;

        tracing::debug!(path = %path.display(), "Route store opened");

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Create the bucket if needed and write every route into it.
    ///
    /// Existing keys are overwritten, so seeding the same map twice leaves
    /// the store unchanged.
    pub fn seed(&self, routes: &RouteMap) -> Result<(), StorageError> {
        let mut conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        let tx = conn.transaction().map_err(StorageError::Seed)?;

        tx.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {BUCKET_NAME} (
                    path BLOB PRIMARY KEY NOT NULL,
                    url  BLOB NOT NULL
                )"
            ),
            [],
        )
        .map_err(StorageError::Seed)?;

        {
            let mut stmt = tx
                .prepare(&format!(
                    "INSERT INTO {BUCKET_NAME} (path, url) VALUES (?1, ?2)
                     ON CONFLICT(path) DO UPDATE SET url = excluded.url"
                ))
                .map_err(StorageError::Seed)?;
            for (path, url) in routes.iter() {
                stmt.execute(params![path.as_bytes(), url.as_bytes()])
                    .map_err(StorageError::Seed)?;
            }
        }

        tx.commit().map_err(StorageError::Seed)?;

        tracing::info!(
            path = %self.path.display(),
            routes = routes.len(),
            "Route store seeded"
        );
        Ok(())
    }

    /// Fetch the redirect target for `path` inside a read transaction.
    ///
    /// Blocks the calling thread on the connection mutex and, if another
    /// process holds the file lock, for up to the configured busy timeout.
    /// Async callers should run it on the blocking pool.
    pub fn get(&self, path: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        let tx = conn.transaction().map_err(StorageError::Read)?;

        let value: Option<Vec<u8>> = tx
            .query_row(
                &format!("SELECT url FROM {BUCKET_NAME} WHERE path = ?1"),
                params![path.as_bytes()],
                |row| row.get(0),
            )
            .optional()
            .map_err(StorageError::Read)?;

        tx.commit().map_err(StorageError::Read)?;

        value
            .map(|bytes| {
                String::from_utf8(bytes).map_err(|_| StorageError::InvalidUtf8 {
                    path: path.to_string(),
                })
            })
            .transpose()
    }
}

impl RouteLookup for RouteStore {
    fn lookup(&self, path: &str) -> Result<Option<String>, StorageError> {
        self.get(path)
    }

    fn source(&self) -> &'static str {
        "store"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_temp(dir: &tempfile::TempDir) -> RouteStore {
        RouteStore::open(dir.path().join("routes.db"), Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn test_seed_and_lookup() {
        let dir = tempdir().unwrap();
        let store = open_temp(&dir);
        let routes: RouteMap = [("/a", "https://b")].into_iter().collect();

        store.seed(&routes).unwrap();

        assert_eq!(store.get("/a").unwrap().as_deref(), Some("https://b"));
        assert_eq!(store.get("/missing").unwrap(), None);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = open_temp(&dir);
        let routes: RouteMap = [("/a", "https://b"), ("/c", "https://d")]
            .into_iter()
            .collect();

        store.seed(&routes).unwrap();
        let first: Vec<_> = ["/a", "/c", "/x"].iter().map(|p| store.get(p).unwrap()).collect();
        store.seed(&routes).unwrap();
        let second: Vec<_> = ["/a", "/c", "/x"].iter().map(|p| store.get(p).unwrap()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_reseed_overwrites_values() {
        let dir = tempdir().unwrap();
        let store = open_temp(&dir);

        store.seed(&[("/a", "https://old")].into_iter().collect()).unwrap();
        store.seed(&[("/a", "https://new")].into_iter().collect()).unwrap();

        assert_eq!(store.get("/a").unwrap().as_deref(), Some("https://new"));
    }

    #[test]
    fn test_empty_value_distinct_from_absent() {
        let dir = tempdir().unwrap();
        let store = open_temp(&dir);
        store.seed(&[("/blank", "")].into_iter().collect()).unwrap();

        assert_eq!(store.get("/blank").unwrap().as_deref(), Some(""));
        assert_eq!(store.get("/absent").unwrap(), None);
    }

    #[test]
    fn test_routes_survive_reopen() {
        let dir = tempdir().unwrap();
        open_temp(&dir)
            .seed(&[("/a", "https://b")].into_iter().collect())
            .unwrap();

        let reopened = open_temp(&dir);
        assert_eq!(reopened.get("/a").unwrap().as_deref(), Some("https://b"));
    }

    #[test]
    fn test_lookup_before_seed_is_read_error() {
        let dir = tempdir().unwrap();
        let store = open_temp(&dir);

        assert!(matches!(store.get("/a"), Err(StorageError::Read(_))));
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let result = RouteStore::open(
            dir.path().join("no-such-dir").join("routes.db"),
            Duration::from_secs(1),
        );

        assert!(matches!(result, Err(StorageError::Open { .. })));
    }
}
