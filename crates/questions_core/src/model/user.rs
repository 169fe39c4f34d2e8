//! User record.

use super::Record;
use crate::db::{DbResult, SqlRow};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// Snapshot of one `users` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<UserId>,
    pub fname: String,
    pub lname: String,
}

impl User {
    /// Creates an unsaved user.
    pub fn new(fname: impl Into<String>, lname: impl Into<String>) -> Self {
        Self {
            id: None,
            fname: fname.into(),
            lname: lname.into(),
        }
    }
}

impl Record for User {
    const TABLE: &'static str = "users";
    const WRITE_COLUMNS: &'static [&'static str] = &["fname", "lname"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn write_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.fname.clone()),
            Value::Text(self.lname.clone()),
        ]
    }

    fn from_row(row: &SqlRow) -> DbResult<Self> {
        Ok(Self {
            id: Some(row.integer("id")?),
            fname: row.text("fname")?,
            lname: row.text("lname")?,
        })
    }
}
