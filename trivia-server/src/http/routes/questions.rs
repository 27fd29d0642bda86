//! Question endpoints
//!
//! POST /questions is overloaded the way the web client expects: a body
//! carrying `searchTerm` searches, any other body creates a question.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::db::repos::categories::as_map;
use crate::db::repos::Question;
use crate::http::error::ApiError;
use crate::http::extractors::JsonObject;
use crate::models::{NewQuestion, Page, PageParams, ValidationError};
use crate::state::AppState;

/// All questions, paginated, with the category map
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// Search results; an empty page here is a success, not a 404
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// Create confirmation carrying the store-assigned id
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
}

/// Delete confirmation echoing the removed id
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

/// GET /questions?page=N - one page of all questions
async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = Page::from(params);
    let result = state.questions().list(page).await?;
    if result.items.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = state.categories().all().await?;
    Ok(Json(QuestionListResponse {
        success: true,
        categories: as_map(&categories),
        questions: result.items,
        total_questions: result.total,
    }))
}

/// POST /questions - search when the body carries `searchTerm`, create otherwise
async fn create_or_search(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    JsonObject(body): JsonObject,
) -> Result<Response, ApiError> {
    if body.contains_key("searchTerm") {
        search_questions(&state, &body, Page::from(params)).await
    } else {
        create_question(&state, &body).await
    }
}

async fn search_questions(
    state: &AppState,
    body: &Map<String, Value>,
    page: Page,
) -> Result<Response, ApiError> {
    let term = match body.get("searchTerm") {
        Some(Value::String(term)) => term,
        _ => {
            return Err(ValidationError::WrongType {
                field: "searchTerm",
                expected: "a string",
            }
            .into())
        }
    };

    let result = state.questions().search(term, page).await?;
    Ok(Json(SearchResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
    })
    .into_response())
}

async fn create_question(state: &AppState, body: &Map<String, Value>) -> Result<Response, ApiError> {
    let new = NewQuestion::from_payload(body)?;
    if !state.categories().exists(new.category).await? {
        return Err(ValidationError::UnknownCategory { id: new.category }.into());
    }

    let created = state.questions().insert(&new).await?;
    tracing::info!(id = created, "question created");
    Ok(Json(CreatedResponse {
        success: true,
        created,
    })
    .into_response())
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.questions().delete(id).await?;
    tracing::info!(id, "question deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{id}", delete(delete_question))
}
