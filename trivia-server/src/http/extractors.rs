//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::{Map, Value};

use super::error::ApiError;

/// A request body that must be a JSON object.
///
/// Missing, unparseable, and non-object bodies all reject with the 400
/// envelope instead of axum's default Json rejection.
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value): Json<Value> = Json::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest)?;

        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ApiError::BadRequest),
        }
    }
}
