//! Reply record.
//!
//! Replies form a tree per question through the nullable `parent_id`
//! self-reference. The store does not check that a parent belongs to the
//! same question.

use super::question::QuestionId;
use super::user::UserId;
use super::Record;
use crate::db::{DbResult, SqlRow};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

pub type ReplyId = i64;

/// Snapshot of one `replies` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: Option<ReplyId>,
    pub questions_id: QuestionId,
    /// `None` for a top-level reply.
    pub parent_id: Option<ReplyId>,
    /// Author foreign key.
    pub users_id: UserId,
    pub body: String,
}

impl Reply {
    /// Creates an unsaved reply.
    pub fn new(
        questions_id: QuestionId,
        parent_id: Option<ReplyId>,
        users_id: UserId,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            questions_id,
            parent_id,
            users_id,
            body: body.into(),
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl Record for Reply {
    const TABLE: &'static str = "replies";
    const WRITE_COLUMNS: &'static [&'static str] =
        &["questions_id", "parent_id", "users_id", "body"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn write_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.questions_id),
            self.parent_id.map_or(Value::Null, Value::Integer),
            Value::Integer(self.users_id),
            Value::Text(self.body.clone()),
        ]
    }

    fn from_row(row: &SqlRow) -> DbResult<Self> {
        Ok(Self {
            id: Some(row.integer("id")?),
            questions_id: row.integer("questions_id")?,
            parent_id: row.optional_integer("parent_id")?,
            users_id: row.integer("users_id")?,
            body: row.text("body")?,
        })
    }
}
