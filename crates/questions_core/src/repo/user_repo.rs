//! User repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Look users up by id or name and write them back.
//! - Traverse from a user to authored, followed and liked content.
//! - Compute the karma aggregate.
//!
//! # Invariants
//! - Traversals on an unsaved user fail with `RepoError::NotPersisted`.
//! - `average_karma` is `0.0` for a user without questions.

use super::error::RepoResult;
use super::persist;
use super::question_follow_repo::{QuestionFollowRepository, SqliteQuestionFollowRepository};
use super::question_like_repo::{QuestionLikeRepository, SqliteQuestionLikeRepository};
use super::question_repo::{QuestionRepository, SqliteQuestionRepository};
use super::reply_repo::{ReplyRepository, SqliteReplyRepository};
use crate::db::QuestionsDatabase;
use crate::model::question::Question;
use crate::model::reply::Reply;
use crate::model::user::{User, UserId};

/// SELECT list mapping joined `users` columns onto bare column names.
pub(crate) const USER_COLUMNS: &str = "users.id AS id, users.fname AS fname, users.lname AS lname";

/// Repository interface for users.
pub trait UserRepository {
    fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;
    /// Returns the lowest-id user with exactly this first and last name.
    fn find_by_name(&self, fname: &str, lname: &str) -> RepoResult<Option<User>>;
    /// Inserts an unsaved user and back-fills its id.
    fn create(&self, user: &mut User) -> RepoResult<UserId>;
    /// Overwrites the stored row with the user's current fields.
    fn update(&self, user: &User) -> RepoResult<()>;
    /// `update` when the user has an id, `create` otherwise.
    fn save(&self, user: &mut User) -> RepoResult<UserId>;
    fn authored_questions(&self, user: &User) -> RepoResult<Vec<Question>>;
    fn authored_replies(&self, user: &User) -> RepoResult<Vec<Reply>>;
    fn followed_questions(&self, user: &User) -> RepoResult<Vec<Question>>;
    fn liked_questions(&self, user: &User) -> RepoResult<Vec<Question>>;
    /// Likes received across the user's questions divided by the number of
    /// questions they authored.
    fn average_karma(&self, user: &User) -> RepoResult<f64>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'db> {
    db: &'db QuestionsDatabase,
}

impl<'db> SqliteUserRepository<'db> {
    pub fn new(db: &'db QuestionsDatabase) -> Self {
        Self { db }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        persist::find_by_id(self.db, id)
    }

    fn find_by_name(&self, fname: &str, lname: &str) -> RepoResult<Option<User>> {
        persist::find_one(
            self.db,
            "SELECT *
             FROM users
             WHERE fname = ?1
               AND lname = ?2
             ORDER BY id ASC
             LIMIT 1;",
            [fname, lname],
        )
    }

    fn create(&self, user: &mut User) -> RepoResult<UserId> {
        persist::create(self.db, user)
    }

    fn update(&self, user: &User) -> RepoResult<()> {
        persist::update(self.db, user)
    }

    fn save(&self, user: &mut User) -> RepoResult<UserId> {
        persist::save(self.db, user)
    }

    fn authored_questions(&self, user: &User) -> RepoResult<Vec<Question>> {
        let id = persist::require_id(user)?;
        SqliteQuestionRepository::new(self.db).find_by_author_id(id)
    }

    fn authored_replies(&self, user: &User) -> RepoResult<Vec<Reply>> {
        let id = persist::require_id(user)?;
        SqliteReplyRepository::new(self.db).find_by_user_id(id)
    }

    fn followed_questions(&self, user: &User) -> RepoResult<Vec<Question>> {
        let id = persist::require_id(user)?;
        SqliteQuestionFollowRepository::new(self.db).followed_questions_for_user_id(id)
    }

    fn liked_questions(&self, user: &User) -> RepoResult<Vec<Question>> {
        let id = persist::require_id(user)?;
        SqliteQuestionLikeRepository::new(self.db).liked_questions_for_user_id(id)
    }

    fn average_karma(&self, user: &User) -> RepoResult<f64> {
        let id = persist::require_id(user)?;
        let rows = self.db.execute(
            "SELECT
                CAST(COUNT(question_likes.id) AS REAL) / COUNT(DISTINCT questions.id) AS karma
             FROM questions
             LEFT OUTER JOIN question_likes
                ON questions.id = question_likes.questions_id
             WHERE questions.users_id = ?1;",
            [id],
        )?;

        // SQLite yields NULL for the zero-question division.
        match rows.first() {
            Some(row) => Ok(row.optional_real("karma")?.unwrap_or(0.0)),
            None => Ok(0.0),
        }
    }
}
