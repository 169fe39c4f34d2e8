//! Question-follow link repository.

use super::error::RepoResult;
use super::persist;
use super::question_repo::QUESTION_COLUMNS;
use super::user_repo::USER_COLUMNS;
use crate::db::QuestionsDatabase;
use crate::model::question::{Question, QuestionId};
use crate::model::question_follow::{QuestionFollow, QuestionFollowId};
use crate::model::user::{User, UserId};

/// Repository interface for follow links.
pub trait QuestionFollowRepository {
    fn find_by_id(&self, id: QuestionFollowId) -> RepoResult<Option<QuestionFollow>>;
    fn create(&self, follow: &mut QuestionFollow) -> RepoResult<QuestionFollowId>;
    fn update(&self, follow: &QuestionFollow) -> RepoResult<()>;
    fn save(&self, follow: &mut QuestionFollow) -> RepoResult<QuestionFollowId>;
    /// Users following the question, in follow order.
    fn followers_for_question_id(&self, questions_id: QuestionId) -> RepoResult<Vec<User>>;
    /// Questions the user follows, in follow order.
    fn followed_questions_for_user_id(&self, users_id: UserId) -> RepoResult<Vec<Question>>;
    fn most_followed_questions(&self, n: u32) -> RepoResult<Vec<Question>>;
}

/// SQLite-backed follow repository.
pub struct SqliteQuestionFollowRepository<'db> {
    db: &'db QuestionsDatabase,
}

impl<'db> SqliteQuestionFollowRepository<'db> {
    pub fn new(db: &'db QuestionsDatabase) -> Self {
        Self { db }
    }
}

impl QuestionFollowRepository for SqliteQuestionFollowRepository<'_> {
    fn find_by_id(&self, id: QuestionFollowId) -> RepoResult<Option<QuestionFollow>> {
        persist::find_by_id(self.db, id)
    }

    fn create(&self, follow: &mut QuestionFollow) -> RepoResult<QuestionFollowId> {
        persist::create(self.db, follow)
    }

    fn update(&self, follow: &QuestionFollow) -> RepoResult<()> {
        persist::update(self.db, follow)
    }

    fn save(&self, follow: &mut QuestionFollow) -> RepoResult<QuestionFollowId> {
        persist::save(self.db, follow)
    }

    fn followers_for_question_id(&self, questions_id: QuestionId) -> RepoResult<Vec<User>> {
        persist::find_many(
            self.db,
            &format!(
                "SELECT {USER_COLUMNS}
                 FROM users
                 JOIN question_follows
                    ON question_follows.users_id = users.id
                 WHERE question_follows.questions_id = ?1
                 ORDER BY question_follows.id ASC;"
            ),
            [questions_id],
        )
    }

    fn followed_questions_for_user_id(&self, users_id: UserId) -> RepoResult<Vec<Question>> {
        persist::find_many(
            self.db,
            &format!(
                "SELECT {QUESTION_COLUMNS}
                 FROM questions
                 JOIN question_follows
                    ON question_follows.questions_id = questions.id
                 WHERE question_follows.users_id = ?1
                 ORDER BY question_follows.id ASC;"
            ),
            [users_id],
        )
    }

    fn most_followed_questions(&self, n: u32) -> RepoResult<Vec<Question>> {
        persist::find_many(
            self.db,
            &format!(
                "SELECT {QUESTION_COLUMNS}
                 FROM questions
                 LEFT OUTER JOIN question_follows
                    ON question_follows.questions_id = questions.id
                 GROUP BY questions.id
                 ORDER BY COUNT(question_follows.id) DESC, questions.id ASC
                 LIMIT ?1;"
            ),
            [i64::from(n)],
        )
    }
}
