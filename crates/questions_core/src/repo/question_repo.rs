//! Question repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Look questions up by id or author and write them back.
//! - Traverse to the author, replies, followers and likers.
//! - Rank questions by follow and like counts.
//!
//! # Invariants
//! - `author` resolves the question's `users_id` foreign key.
//! - Rankings include questions with zero links; those sort last.

use super::error::RepoResult;
use super::persist;
use super::question_follow_repo::{QuestionFollowRepository, SqliteQuestionFollowRepository};
use super::question_like_repo::{QuestionLikeRepository, SqliteQuestionLikeRepository};
use super::reply_repo::{ReplyRepository, SqliteReplyRepository};
use super::user_repo::{SqliteUserRepository, UserRepository};
use crate::db::QuestionsDatabase;
use crate::model::question::{Question, QuestionId};
use crate::model::reply::Reply;
use crate::model::user::{User, UserId};

/// SELECT list mapping joined `questions` columns onto bare column names.
pub(crate) const QUESTION_COLUMNS: &str = "questions.id AS id,
    questions.title AS title,
    questions.body AS body,
    questions.users_id AS users_id";

/// Repository interface for questions.
pub trait QuestionRepository {
    fn find_by_id(&self, id: QuestionId) -> RepoResult<Option<Question>>;
    /// All questions written by `users_id`, oldest first.
    fn find_by_author_id(&self, users_id: UserId) -> RepoResult<Vec<Question>>;
    fn create(&self, question: &mut Question) -> RepoResult<QuestionId>;
    fn update(&self, question: &Question) -> RepoResult<()>;
    fn save(&self, question: &mut Question) -> RepoResult<QuestionId>;
    fn author(&self, question: &Question) -> RepoResult<Option<User>>;
    fn replies(&self, question: &Question) -> RepoResult<Vec<Reply>>;
    fn followers(&self, question: &Question) -> RepoResult<Vec<User>>;
    fn likers(&self, question: &Question) -> RepoResult<Vec<User>>;
    fn num_likes(&self, question: &Question) -> RepoResult<u64>;
    /// Up to `n` questions ordered by descending follower count.
    fn most_followed(&self, n: u32) -> RepoResult<Vec<Question>>;
    /// Up to `n` questions ordered by descending like count.
    fn most_liked(&self, n: u32) -> RepoResult<Vec<Question>>;
}

/// SQLite-backed question repository.
pub struct SqliteQuestionRepository<'db> {
    db: &'db QuestionsDatabase,
}

impl<'db> SqliteQuestionRepository<'db> {
    pub fn new(db: &'db QuestionsDatabase) -> Self {
        Self { db }
    }
}

impl QuestionRepository for SqliteQuestionRepository<'_> {
    fn find_by_id(&self, id: QuestionId) -> RepoResult<Option<Question>> {
        persist::find_by_id(self.db, id)
    }

    fn find_by_author_id(&self, users_id: UserId) -> RepoResult<Vec<Question>> {
        persist::find_many(
            self.db,
            "SELECT * FROM questions WHERE users_id = ?1 ORDER BY id ASC;",
            [users_id],
        )
    }

    fn create(&self, question: &mut Question) -> RepoResult<QuestionId> {
        persist::create(self.db, question)
    }

    fn update(&self, question: &Question) -> RepoResult<()> {
        persist::update(self.db, question)
    }

    fn save(&self, question: &mut Question) -> RepoResult<QuestionId> {
        persist::save(self.db, question)
    }

    fn author(&self, question: &Question) -> RepoResult<Option<User>> {
        SqliteUserRepository::new(self.db).find_by_id(question.users_id)
    }

    fn replies(&self, question: &Question) -> RepoResult<Vec<Reply>> {
        let id = persist::require_id(question)?;
        SqliteReplyRepository::new(self.db).find_by_question_id(id)
    }

    fn followers(&self, question: &Question) -> RepoResult<Vec<User>> {
        let id = persist::require_id(question)?;
        SqliteQuestionFollowRepository::new(self.db).followers_for_question_id(id)
    }

    fn likers(&self, question: &Question) -> RepoResult<Vec<User>> {
        let id = persist::require_id(question)?;
        SqliteQuestionLikeRepository::new(self.db).likers_for_question_id(id)
    }

    fn num_likes(&self, question: &Question) -> RepoResult<u64> {
        let id = persist::require_id(question)?;
        SqliteQuestionLikeRepository::new(self.db).num_likes_for_question_id(id)
    }

    fn most_followed(&self, n: u32) -> RepoResult<Vec<Question>> {
        SqliteQuestionFollowRepository::new(self.db).most_followed_questions(n)
    }

    fn most_liked(&self, n: u32) -> RepoResult<Vec<Question>> {
        SqliteQuestionLikeRepository::new(self.db).most_liked_questions(n)
    }
}
