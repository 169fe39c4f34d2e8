//! Question record.

use super::user::UserId;
use super::Record;
use crate::db::{DbResult, SqlRow};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

pub type QuestionId = i64;

/// Snapshot of one `questions` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Option<QuestionId>,
    pub title: String,
    pub body: String,
    /// Author foreign key.
    pub users_id: UserId,
}

impl Question {
    /// Creates an unsaved question authored by `users_id`.
    pub fn new(title: impl Into<String>, body: impl Into<String>, users_id: UserId) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
            users_id,
        }
    }
}

impl Record for Question {
    const TABLE: &'static str = "questions";
    const WRITE_COLUMNS: &'static [&'static str] = &["title", "body", "users_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn write_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.title.clone()),
            Value::Text(self.body.clone()),
            Value::Integer(self.users_id),
        ]
    }

    fn from_row(row: &SqlRow) -> DbResult<Self> {
        Ok(Self {
            id: Some(row.integer("id")?),
            title: row.text("title")?,
            body: row.text("body")?,
            users_id: row.integer("users_id")?,
        })
    }
}
