//! SQLite store for closed pull requests.
//!
//! Rows are keyed by `(repository, id)` and are only ever inserted, never
//! upserted: loading the same pull request twice is a constraint violation.
//! Each insert is its own statement with no surrounding transaction, so a
//! failed run leaves every row written before the failure in place.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::error::MetricsError;
use crate::github::types::PullRequest;

const CREATE_PRS_TABLE: &str = "
CREATE TABLE prs (
    repository TEXT NOT NULL,
    id INTEGER NOT NULL,
    author TEXT NOT NULL,
    title TEXT,
    created_at INTEGER NOT NULL,
    closed_at INTEGER,

    PRIMARY KEY (repository, id)
)
";

const INSERT_PR: &str = "
INSERT INTO prs (repository, id, author, title, created_at, closed_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

/// A row of the `prs` table
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPr {
    pub repository: String,
    pub id: i64,
    pub author: String,
    pub title: Option<String>,
    pub created_at: i64,
    pub closed_at: Option<i64>,
}

/// Connection to the pull request database.
///
/// The connection is closed when the store is dropped.
pub struct PrStore {
    conn: Connection,
}

impl PrStore {
    /// Open (or create) the database file at `path`
    pub fn open(path: &Path) -> Result<Self, MetricsError> {
        let conn = Connection::open(path).map_err(|e| MetricsError::storage("open database", e))?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, MetricsError> {
        let conn =
            Connection::open_in_memory().map_err(|e| MetricsError::storage("open database", e))?;
        Ok(Self { conn })
    }

    /// Create the `prs` table.
    ///
    /// Fails if the table already exists; loads expect a fresh database.
    pub fn ensure_schema(&self) -> Result<(), MetricsError> {
        self.conn
            .execute_batch(CREATE_PRS_TABLE)
            .map_err(|e| MetricsError::storage("create prs table", e))
    }

    /// Insert one pull request for `repository` ("owner/repo")
    pub fn insert(&self, repository: &str, pr: &PullRequest) -> Result<(), MetricsError> {
        let number = i64::try_from(pr.number).map_err(|e| {
            MetricsError::storage("insert pr", rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
        })?;

        self.conn
            .execute(
                INSERT_PR,
                params![
                    repository,
                    number,
                    pr.author,
                    pr.title,
                    pr.created_at.timestamp(),
                    closed_at_value(pr.closed_at),
                ],
            )
            .map_err(|e| MetricsError::storage("insert pr", e))?;

        Ok(())
    }

    /// All rows ordered by repository and id
    #[cfg(test)]
    pub(crate) fn all(&self) -> Result<Vec<StoredPr>, MetricsError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT repository, id, author, title, created_at, closed_at
                 FROM prs ORDER BY repository, id",
            )
            .map_err(|e| MetricsError::storage("query prs", e))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(StoredPr {
                    repository: row.get(0)?,
                    id: row.get(1)?,
                    author: row.get(2)?,
                    title: row.get(3)?,
                    created_at: row.get(4)?,
                    closed_at: row.get(5)?,
                })
            })
            .map_err(|e| MetricsError::storage("query prs", e))?;

        let result: Result<Vec<StoredPr>, rusqlite::Error> = rows.collect();
        result.map_err(|e| MetricsError::storage("query prs", e))
    }

    /// Close the connection, surfacing any error from SQLite
    pub fn close(self) -> Result<(), MetricsError> {
        self.conn
            .close()
            .map_err(|(_, e)| MetricsError::storage("close database", e))
    }
}

/// Epoch seconds for a closed timestamp; absent and epoch-zero both map to NULL
fn closed_at_value(closed_at: Option<DateTime<Utc>>) -> Option<i64> {
    closed_at.map(|t| t.timestamp()).filter(|secs| *secs != 0)
}
