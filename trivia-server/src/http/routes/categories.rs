//! Category endpoints

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::db::repos::categories::as_map;
use crate::db::repos::Question;
use crate::http::error::ApiError;
use crate::models::{Page, PageParams};
use crate::state::AppState;

/// Category map response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
}

/// One category's questions, paginated
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub current_category: i64,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// GET /categories - all categories as an ordered id -> type map
async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.categories().all().await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: as_map(&categories),
    }))
}

/// GET /categories/{id}/questions - one category's questions
///
/// An unknown category id is indistinguishable from a known one with no
/// questions: both produce an empty slice and a 404.
async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let page = Page::from(params);
    let result = state.questions().list_by_category(category_id, page).await?;
    if result.items.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        current_category: category_id,
        questions: result.items,
        total_questions: result.total,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
}
