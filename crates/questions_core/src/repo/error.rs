//! Repository error type.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    /// Store failure, propagated unchanged.
    Db(DbError),
    /// `create` called on a record that already has an id.
    AlreadyPersisted { table: &'static str, id: i64 },
    /// Operation needs an id but the record was never saved.
    NotPersisted { table: &'static str },
    /// `update` matched no row.
    NotFound { table: &'static str, id: i64 },
}

impl RepoError {
    /// Whether this is a caller mistake rather than a store failure.
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            Self::AlreadyPersisted { .. } | Self::NotPersisted { .. }
        )
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::AlreadyPersisted { table, id } => {
                write!(f, "{table} record {id} already in database")
            }
            Self::NotPersisted { table } => write!(f, "{table} record not in database"),
            Self::NotFound { table, id } => write!(f, "{table} record not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
