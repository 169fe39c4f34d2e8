//! Repository layer for the questions domain.
//!
//! # Responsibility
//! - One lookup/write/traversal contract per record kind.
//! - Keep SQL inside the persistence boundary; callers only see records.
//!
//! # Invariants
//! - Every repository method issues its own round trip; nothing is cached.
//! - Collection results are empty vectors on zero matches, never absent.
//! - Misuse (create on a saved record, update on an unsaved one) fails
//!   before any SQL runs.

pub mod error;
pub mod question_follow_repo;
pub mod question_like_repo;
pub mod question_repo;
pub mod reply_repo;
pub mod user_repo;

mod persist;
