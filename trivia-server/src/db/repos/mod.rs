//! Repository traits and their PostgreSQL implementations
//!
//! Handlers reach the store only through these traits. The Postgres
//! implementations live here; an in-memory implementation for tests is in
//! `db::memory`.

pub mod categories;
pub mod questions;

pub use categories::{Category, CategoryRepository, PgCategories};
pub use questions::{PgQuestions, Question, QuestionRepository};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },
}
