//! Follow link between a user and a question.

use super::question::QuestionId;
use super::user::UserId;
use super::Record;
use crate::db::{DbResult, SqlRow};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

pub type QuestionFollowId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFollow {
    pub id: Option<QuestionFollowId>,
    pub users_id: UserId,
    pub questions_id: QuestionId,
}

impl QuestionFollow {
    pub fn new(users_id: UserId, questions_id: QuestionId) -> Self {
        Self {
            id: None,
            users_id,
            questions_id,
        }
    }
}

impl Record for QuestionFollow {
    const TABLE: &'static str = "question_follows";
    const WRITE_COLUMNS: &'static [&'static str] = &["users_id", "questions_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn write_values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.users_id),
            Value::Integer(self.questions_id),
        ]
    }

    fn from_row(row: &SqlRow) -> DbResult<Self> {
        Ok(Self {
            id: Some(row.integer("id")?),
            users_id: row.integer("users_id")?,
            questions_id: row.integer("questions_id")?,
        })
    }
}
