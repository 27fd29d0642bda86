//! Schema migrations
//!
//! Idempotent DDL run at startup. Categories have no write endpoint, so
//! the seed step is the only way rows get into that table.

use sqlx::PgPool;

use super::repos::DbError;

/// Default categories, matching the classic trivia fixture.
const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Run all migrations.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("running migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id BIGSERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            difficulty INT NOT NULL,
            category BIGINT NOT NULL REFERENCES categories(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    tracing::info!("migrations complete");
    Ok(())
}

/// Insert any default category not already present.
pub async fn seed(pool: &PgPool) -> Result<(), DbError> {
    for kind in DEFAULT_CATEGORIES {
        sqlx::query(
            r#"
            INSERT INTO categories (type)
            SELECT $1
            WHERE NOT EXISTS (SELECT 1 FROM categories WHERE type = $1)
            "#,
        )
        .bind(kind)
        .execute(pool)
        .await?;
    }

    tracing::info!("seeded default categories");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_and_seed_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");

        run(&pool).await.expect("first run");
        run(&pool).await.expect("second run");

        seed(&pool).await.expect("first seed");
        seed(&pool).await.expect("second seed");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&pool)
            .await
            .expect("count");
        assert!(count >= DEFAULT_CATEGORIES.len() as i64);
    }
}
