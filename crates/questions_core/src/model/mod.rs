//! Record types for the questions domain.
//!
//! # Responsibility
//! - Define one plain snapshot struct per table.
//! - Map named-field rows into records 1:1 by column name.
//!
//! # Invariants
//! - `id` is `None` until the row exists in the store, and never changes
//!   once assigned.
//! - Records hold foreign keys only; relationships are re-queried through
//!   repositories.

use crate::db::{DbResult, SqlRow};
use rusqlite::types::Value;

pub mod question;
pub mod question_follow;
pub mod question_like;
pub mod reply;
pub mod user;

/// A table-backed record with an integer primary key.
///
/// `WRITE_COLUMNS` and `write_values` must list the same columns in the
/// same order; they drive the generic INSERT/UPDATE statements.
pub trait Record: Sized {
    /// Backing table name.
    const TABLE: &'static str;
    /// Non-key columns written by create/update, in bind order.
    const WRITE_COLUMNS: &'static [&'static str];

    fn id(&self) -> Option<i64>;
    fn assign_id(&mut self, id: i64);
    fn write_values(&self) -> Vec<Value>;
    fn from_row(row: &SqlRow) -> DbResult<Self>;
}
