//! Data-access layer for a small questions-and-replies domain.
//!
//! Users ask questions, reply to them (optionally to other replies),
//! follow and like questions. Repositories borrow an explicitly opened
//! `QuestionsDatabase` and return plain record snapshots.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{DbError, DbResult, QuestionsDatabase, SqlRow};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::question::{Question, QuestionId};
pub use model::question_follow::{QuestionFollow, QuestionFollowId};
pub use model::question_like::{QuestionLike, QuestionLikeId};
pub use model::reply::{Reply, ReplyId};
pub use model::user::{User, UserId};
pub use model::Record;
pub use repo::error::{RepoError, RepoResult};
pub use repo::question_follow_repo::{QuestionFollowRepository, SqliteQuestionFollowRepository};
pub use repo::question_like_repo::{QuestionLikeRepository, SqliteQuestionLikeRepository};
pub use repo::question_repo::{QuestionRepository, SqliteQuestionRepository};
pub use repo::reply_repo::{ReplyRepository, SqliteReplyRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
