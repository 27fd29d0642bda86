//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::repos::{CategoryRepository, PgCategories, PgQuestions, QuestionRepository};

/// Shared application state.
///
/// Handlers reach the store only through the repository traits, so tests
/// can swap PostgreSQL for the in-memory store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    categories: Arc<dyn CategoryRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl AppState {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                categories,
                questions,
            }),
        }
    }

    /// State backed by PostgreSQL repositories over `pool`.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgCategories::new(pool.clone())),
            Arc::new(PgQuestions::new(pool)),
        )
    }

    pub fn categories(&self) -> &dyn CategoryRepository {
        self.inner.categories.as_ref()
    }

    pub fn questions(&self) -> &dyn QuestionRepository {
        self.inner.questions.as_ref()
    }
}
