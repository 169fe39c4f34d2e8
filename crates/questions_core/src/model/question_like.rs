//! Like link between a user and a question.

use super::question::QuestionId;
use super::user::UserId;
use super::Record;
use crate::db::{DbResult, SqlRow};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

pub type QuestionLikeId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLike {
    pub id: Option<QuestionLikeId>,
    pub questions_id: QuestionId,
    pub users_id: UserId,
}

impl QuestionLike {
    pub fn new(questions_id: QuestionId, users_id: UserId) -> Self {
        Self {
            id: None,
            questions_id,
            users_id,
        }
    }
}

impl Record for QuestionLike {
    const TABLE: &'static str = "question_likes";
    const WRITE_COLUMNS: &'static [&'static str] = &["questions_id", "users_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn write_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.questions_id),
            Value::Integer(self.users_id),
        ]
    }

    fn from_row(row: &SqlRow) -> DbResult<Self> {
        Ok(Self {
            id: Some(row.integer("id")?),
            questions_id: row.integer("questions_id")?,
            users_id: row.integer("users_id")?,
        })
    }
}
