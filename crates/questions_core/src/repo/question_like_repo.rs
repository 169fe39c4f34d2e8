//! Question-like link repository.

use super::error::RepoResult;
use super::persist;
use super::question_repo::QUESTION_COLUMNS;
use super::user_repo::USER_COLUMNS;
use crate::db::QuestionsDatabase;
use crate::model::question::{Question, QuestionId};
use crate::model::question_like::{QuestionLike, QuestionLikeId};
use crate::model::user::{User, UserId};

/// Repository interface for like links.
pub trait QuestionLikeRepository {
    fn find_by_id(&self, id: QuestionLikeId) -> RepoResult<Option<QuestionLike>>;
    fn create(&self, like: &mut QuestionLike) -> RepoResult<QuestionLikeId>;
    fn update(&self, like: &QuestionLike) -> RepoResult<()>;
    fn save(&self, like: &mut QuestionLike) -> RepoResult<QuestionLikeId>;
    fn likers_for_question_id(&self, questions_id: QuestionId) -> RepoResult<Vec<User>>;
    /// Number of like rows for the question; `0` when nobody liked it.
    fn num_likes_for_question_id(&self, questions_id: QuestionId) -> RepoResult<u64>;
    fn liked_questions_for_user_id(&self, users_id: UserId) -> RepoResult<Vec<Question>>;
    fn most_liked_questions(&self, n: u32) -> RepoResult<Vec<Question>>;
}

/// SQLite-backed like repository.
pub struct SqliteQuestionLikeRepository<'db> {
    db: &'db QuestionsDatabase,
}

impl<'db> SqliteQuestionLikeRepository<'db> {
    pub fn new(db: &'db QuestionsDatabase) -> Self {
        Self { db }
    }
}

impl QuestionLikeRepository for SqliteQuestionLikeRepository<'_> {
    fn find_by_id(&self, id: QuestionLikeId) -> RepoResult<Option<QuestionLike>> {
        persist::find_by_id(self.db, id)
    }

    fn create(&self, like: &mut QuestionLike) -> RepoResult<QuestionLikeId> {
        persist::create(self.db, like)
    }

    fn update(&self, like: &QuestionLike) -> RepoResult<()> {
        persist::update(self.db, like)
    }

    fn save(&self, like: &mut QuestionLike) -> RepoResult<QuestionLikeId> {
        persist::save(self.db, like)
    }

    fn likers_for_question_id(&self, questions_id: QuestionId) -> RepoResult<Vec<User>> {
        persist::find_many(
            self.db,
            &format!(
                "SELECT {USER_COLUMNS}
                 FROM question_likes
                 JOIN users
                    ON question_likes.users_id = users.id
                 WHERE question_likes.questions_id = ?1
                 ORDER BY question_likes.id ASC;"
            ),
            [questions_id],
        )
    }

    fn num_likes_for_question_id(&self, questions_id: QuestionId) -> RepoResult<u64> {
        persist::count(
            self.db,
            "SELECT COUNT(*) AS likes FROM question_likes WHERE questions_id = ?1;",
            [questions_id],
        )
    }

    fn liked_questions_for_user_id(&self, users_id: UserId) -> RepoResult<Vec<Question>> {
        persist::find_many(
            self.db,
            &format!(
                "SELECT {QUESTION_COLUMNS}
                 FROM question_likes
                 JOIN questions
                    ON question_likes.questions_id = questions.id
                 WHERE question_likes.users_id = ?1
                 ORDER BY question_likes.id ASC;"
            ),
            [users_id],
        )
    }

    fn most_liked_questions(&self, n: u32) -> RepoResult<Vec<Question>> {
        persist::find_many(
            self.db,
            &format!(
                "SELECT {QUESTION_COLUMNS}
                 FROM questions
                 LEFT OUTER JOIN question_likes
                    ON question_likes.questions_id = questions.id
                 GROUP BY questions.id
                 ORDER BY COUNT(question_likes.id) DESC, questions.id ASC
                 LIMIT ?1;"
            ),
            [i64::from(n)],
        )
    }
}
