//! Generic row-to-record plumbing shared by the concrete repositories.

use super::error::{RepoError, RepoResult};
use crate::db::{QuestionsDatabase, SqlRow};
use crate::model::Record;
use log::info;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Params};

pub(crate) fn find_by_id<T: Record>(db: &QuestionsDatabase, id: i64) -> RepoResult<Option<T>> {
    let sql = format!("SELECT * FROM {} WHERE id = ?1;", T::TABLE);
    find_one(db, &sql, [id])
}

pub(crate) fn find_one<T: Record, P: Params>(
    db: &QuestionsDatabase,
    sql: &str,
    params: P,
) -> RepoResult<Option<T>> {
    let rows = db.execute(sql, params)?;
    match rows.first() {
        Some(row) => Ok(Some(T::from_row(row)?)),
        None => Ok(None),
    }
}

pub(crate) fn find_many<T: Record, P: Params>(
    db: &QuestionsDatabase,
    sql: &str,
    params: P,
) -> RepoResult<Vec<T>> {
    let rows = db.execute(sql, params)?;
    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        records.push(T::from_row(row)?);
    }
    Ok(records)
}

/// Runs a single-aggregate COUNT query.
pub(crate) fn count<P: Params>(db: &QuestionsDatabase, sql: &str, params: P) -> RepoResult<u64> {
    let rows = db.execute(sql, params)?;
    match rows.first().and_then(SqlRow::first_value) {
        Some(Value::Integer(value)) => Ok(u64::try_from(*value).unwrap_or(0)),
        _ => Ok(0),
    }
}

pub(crate) fn require_id<T: Record>(record: &T) -> RepoResult<i64> {
    record
        .id()
        .ok_or(RepoError::NotPersisted { table: T::TABLE })
}

/// Inserts `record` and back-fills the generated id.
pub(crate) fn create<T: Record>(db: &QuestionsDatabase, record: &mut T) -> RepoResult<i64> {
    if let Some(id) = record.id() {
        return Err(RepoError::AlreadyPersisted {
            table: T::TABLE,
            id,
        });
    }

    let placeholders = (1..=T::WRITE_COLUMNS.len())
        .map(|index| format!("?{index}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({placeholders});",
        T::TABLE,
        T::WRITE_COLUMNS.join(", ")
    );

    db.execute_write(&sql, params_from_iter(record.write_values()))?;
    let id = db.last_insert_row_id();
    record.assign_id(id);

    info!(
        "event=record_create module=repo status=ok table={} id={id}",
        T::TABLE
    );
    Ok(id)
}

/// Overwrites the row matching the record's id with its current fields.
pub(crate) fn update<T: Record>(db: &QuestionsDatabase, record: &T) -> RepoResult<()> {
    let id = require_id(record)?;

    let assignments = T::WRITE_COLUMNS
        .iter()
        .enumerate()
        .map(|(index, column)| format!("{column} = ?{}", index + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "UPDATE {} SET {assignments} WHERE id = ?{};",
        T::TABLE,
        T::WRITE_COLUMNS.len() + 1
    );

    let mut values = record.write_values();
    values.push(Value::Integer(id));
    let changed = db.execute_write(&sql, params_from_iter(values))?;
    if changed == 0 {
        return Err(RepoError::NotFound {
            table: T::TABLE,
            id,
        });
    }

    info!(
        "event=record_update module=repo status=ok table={} id={id}",
        T::TABLE
    );
    Ok(())
}

pub(crate) fn save<T: Record>(db: &QuestionsDatabase, record: &mut T) -> RepoResult<i64> {
    match record.id() {
        Some(id) => {
            update(db, record)?;
            Ok(id)
        }
        None => create(db, record),
    }
}
