//! Store handle shared by every repository.
//!
//! # Responsibility
//! - Own the single SQLite connection for the questions database.
//! - Run parameterized statements and map results into `SqlRow`s.
//!
//! # Invariants
//! - The handle is constructed explicitly and borrowed by repositories;
//!   there is no process-wide instance.
//! - One connection, no internal locking. Callers serialize access.

use super::open::{default_db_path, open_file, open_memory};
use super::row::SqlRow;
use super::DbResult;
use log::debug;
use rusqlite::{Connection, Params};
use std::path::{Path, PathBuf};

/// Handle to an opened, schema-ready questions database.
#[derive(Debug)]
pub struct QuestionsDatabase {
    conn: Connection,
    path: Option<PathBuf>,
}

impl QuestionsDatabase {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        let conn = open_file(path)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Opens the database named by `QUESTIONS_DB_PATH`, or `questions.db`.
    pub fn open_default() -> DbResult<Self> {
        Self::open(default_db_path())
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = open_memory()?;
        Ok(Self { conn, path: None })
    }

    /// File location, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Raw connection for callers that need SQL this layer does not wrap.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Runs one statement and returns its result rows in store order.
    ///
    /// Statements without a result set (INSERT/UPDATE) return an empty vector.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> DbResult<Vec<SqlRow>> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows = stmt.query(params)?;
        let mut mapped = Vec::new();
        while let Some(row) = rows.next()? {
            mapped.push(SqlRow::from_rusqlite(row, &columns)?);
        }

        debug!(
            "event=db_execute module=db status=ok columns={} rows={}",
            columns.len(),
            mapped.len()
        );
        Ok(mapped)
    }

    /// Runs one INSERT/UPDATE and returns the number of changed rows.
    pub fn execute_write<P: Params>(&self, sql: &str, params: P) -> DbResult<usize> {
        let changed = self.conn.execute(sql, params)?;
        debug!("event=db_write module=db status=ok changed={changed}");
        Ok(changed)
    }

    /// Primary key generated by the most recent INSERT on this connection.
    pub fn last_insert_row_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}
