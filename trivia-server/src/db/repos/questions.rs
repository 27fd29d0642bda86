//! Question repository
//!
//! Listing pages use LIMIT/OFFSET with COUNT(*) OVER() so a page and its
//! total come back in one query. Search counts separately: a page past the
//! end of the results must still report the real total.

use async_trait::async_trait;
use serde::Serialize;
use sqlx::{FromRow, PgPool, Row};

use super::DbError;
use crate::models::{NewQuestion, Page, Paginated};

/// Question record; doubles as the wire projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

/// Store access for questions
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// One page of all questions in insertion order, plus the total count.
    async fn list(&self, page: Page) -> Result<Paginated<Question>, DbError>;

    /// One page of a single category's questions, plus that category's
    /// total. An unknown category simply has zero matches.
    async fn list_by_category(
        &self,
        category: i64,
        page: Page,
    ) -> Result<Paginated<Question>, DbError>;

    /// Case-insensitive literal substring search on question text. An
    /// empty term matches everything.
    async fn search(&self, term: &str, page: Page) -> Result<Paginated<Question>, DbError>;

    /// Quiz candidate pool: every question, or one category's questions.
    async fn pool(&self, category: Option<i64>) -> Result<Vec<Question>, DbError>;

    /// Insert a validated question, returning the store-assigned id.
    async fn insert(&self, new: &NewQuestion) -> Result<i64, DbError>;

    /// Delete by id; NotFound if no such row.
    async fn delete(&self, id: i64) -> Result<(), DbError>;
}

/// Escape LIKE metacharacters so the user's term matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// PostgreSQL-backed questions
pub struct PgQuestions {
    pool: PgPool,
}

impl PgQuestions {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn page_from_rows(rows: Vec<sqlx::postgres::PgRow>) -> Paginated<Question> {
    let total = rows.first().map(|r| r.get::<i64, _>("total")).unwrap_or(0);
    let items = rows
        .into_iter()
        .map(|r| Question {
            id: r.get("id"),
            question: r.get("question"),
            answer: r.get("answer"),
            difficulty: r.get("difficulty"),
            category: r.get("category"),
        })
        .collect();
    Paginated { items, total }
}

#[async_trait]
impl QuestionRepository for PgQuestions {
    async fn list(&self, page: Page) -> Result<Paginated<Question>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, difficulty, category,
                   COUNT(*) OVER() AS total
            FROM questions
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(page_from_rows(rows))
    }

    async fn list_by_category(
        &self,
        category: i64,
        page: Page,
    ) -> Result<Paginated<Question>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, difficulty, category,
                   COUNT(*) OVER() AS total
            FROM questions
            WHERE category = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(page_from_rows(rows))
    }

    async fn search(&self, term: &str, page: Page) -> Result<Paginated<Question>, DbError> {
        let pattern = like_pattern(term);

        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM questions WHERE question ILIKE $1")
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await?;

        let items = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Paginated { items, total })
    }

    async fn pool(&self, category: Option<i64>) -> Result<Vec<Question>, DbError> {
        let questions = match category {
            Some(category) => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, difficulty, category
                    FROM questions
                    WHERE category = $1
                    ORDER BY id
                    "#,
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Question>(
                    "SELECT id, question, answer, difficulty, category FROM questions ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(questions)
    }

    async fn insert(&self, new: &NewQuestion) -> Result<i64, DbError> {
        let row = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.difficulty)
        .bind(new.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("id"))
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM questions WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "question",
                id,
            })?;
        Ok(())
    }
}
