//! Reply repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Look replies up by id, author or question and write them back.
//! - Walk the reply tree in both directions.
//!
//! # Invariants
//! - `parent_reply` on a top-level reply returns `None` without querying.
//! - Child and per-question listings are ordered by reply id.

use super::error::RepoResult;
use super::persist;
use super::question_repo::{QuestionRepository, SqliteQuestionRepository};
use super::user_repo::{SqliteUserRepository, UserRepository};
use crate::db::QuestionsDatabase;
use crate::model::question::{Question, QuestionId};
use crate::model::reply::{Reply, ReplyId};
use crate::model::user::{User, UserId};

/// Repository interface for replies.
pub trait ReplyRepository {
    fn find_by_id(&self, id: ReplyId) -> RepoResult<Option<Reply>>;
    fn find_by_user_id(&self, users_id: UserId) -> RepoResult<Vec<Reply>>;
    fn find_by_question_id(&self, questions_id: QuestionId) -> RepoResult<Vec<Reply>>;
    fn create(&self, reply: &mut Reply) -> RepoResult<ReplyId>;
    fn update(&self, reply: &Reply) -> RepoResult<()>;
    fn save(&self, reply: &mut Reply) -> RepoResult<ReplyId>;
    fn author(&self, reply: &Reply) -> RepoResult<Option<User>>;
    fn question(&self, reply: &Reply) -> RepoResult<Option<Question>>;
    fn parent_reply(&self, reply: &Reply) -> RepoResult<Option<Reply>>;
    /// Direct children only; grandchildren are reached through each child.
    fn child_replies(&self, reply: &Reply) -> RepoResult<Vec<Reply>>;
}

/// SQLite-backed reply repository.
pub struct SqliteReplyRepository<'db> {
    db: &'db QuestionsDatabase,
}

impl<'db> SqliteReplyRepository<'db> {
    pub fn new(db: &'db QuestionsDatabase) -> Self {
        Self { db }
    }
}

impl ReplyRepository for SqliteReplyRepository<'_> {
    fn find_by_id(&self, id: ReplyId) -> RepoResult<Option<Reply>> {
        persist::find_by_id(self.db, id)
    }

    fn find_by_user_id(&self, users_id: UserId) -> RepoResult<Vec<Reply>> {
        persist::find_many(
            self.db,
            "SELECT * FROM replies WHERE users_id = ?1 ORDER BY id ASC;",
            [users_id],
        )
    }

    fn find_by_question_id(&self, questions_id: QuestionId) -> RepoResult<Vec<Reply>> {
        persist::find_many(
            self.db,
            "SELECT * FROM replies WHERE questions_id = ?1 ORDER BY id ASC;",
            [questions_id],
        )
    }

    fn create(&self, reply: &mut Reply) -> RepoResult<ReplyId> {
        persist::create(self.db, reply)
    }

    fn update(&self, reply: &Reply) -> RepoResult<()> {
        persist::update(self.db, reply)
    }

    fn save(&self, reply: &mut Reply) -> RepoResult<ReplyId> {
        persist::save(self.db, reply)
    }

    fn author(&self, reply: &Reply) -> RepoResult<Option<User>> {
        SqliteUserRepository::new(self.db).find_by_id(reply.users_id)
    }

    fn question(&self, reply: &Reply) -> RepoResult<Option<Question>> {
        SqliteQuestionRepository::new(self.db).find_by_id(reply.questions_id)
    }

    fn parent_reply(&self, reply: &Reply) -> RepoResult<Option<Reply>> {
        match reply.parent_id {
            Some(parent_id) => self.find_by_id(parent_id),
            None => Ok(None),
        }
    }

    fn child_replies(&self, reply: &Reply) -> RepoResult<Vec<Reply>> {
        let id = persist::require_id(reply)?;
        persist::find_many(
            self.db,
            "SELECT * FROM replies WHERE parent_id = ?1 ORDER BY id ASC;",
            [id],
        )
    }
}
