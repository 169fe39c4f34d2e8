//! SQLite store handle, row mapping and schema bootstrap.
//!
//! # Responsibility
//! - Open and configure the questions database (file or in-memory).
//! - Run parameterized statements and return rows as named-field records.
//! - Create the relational schema before any repository touches it.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Store errors are propagated unchanged; nothing here retries.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod row;
mod store;

pub use open::{default_db_path, DB_PATH_ENV, DEFAULT_DB_FILE};
pub use row::SqlRow;
pub use store::QuestionsDatabase;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// A row did not carry a column the record mapping requires.
    MissingColumn(String),
    /// A column held a storage class the record mapping cannot accept.
    UnexpectedType {
        column: String,
        expected: &'static str,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::MissingColumn(column) => write!(f, "result row has no column `{column}`"),
            Self::UnexpectedType { column, expected } => {
                write!(f, "column `{column}` does not hold {expected}")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
