//! Quiz endpoint

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use crate::db::repos::Question;
use crate::http::error::ApiError;
use crate::http::extractors::JsonObject;
use crate::models::{QuizRequest, ValidationError};
use crate::quiz;
use crate::state::AppState;

/// Next quiz question; `null` once the pool is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - draw one random unseen question
async fn next_question(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<Json<QuizResponse>, ApiError> {
    let request = QuizRequest::from_payload(&body)?;

    let filter = if request.all_categories() {
        None
    } else {
        if !state.categories().exists(request.category).await? {
            return Err(ValidationError::UnknownCategory {
                id: request.category,
            }
            .into());
        }
        Some(request.category)
    };

    let pool = state.questions().pool(filter).await?;
    let question = quiz::pick_question(pool, &request.previous_questions);

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}
