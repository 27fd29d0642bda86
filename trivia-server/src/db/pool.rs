//! Database connection pool
//!
//! sqlx PgPool with an explicit connection limit.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default pool size. The API is read-heavy and every query is short.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool for the trivia store.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect(database_url)
        .await
}
