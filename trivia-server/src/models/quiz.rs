//! Quiz-round payload validation

use serde_json::{Map, Value};

use super::validation::{parse_id, require_int, ValidationError};

/// Sentinel category id meaning "draw from all categories"
pub const ALL_CATEGORIES: i64 = 0;

/// A validated quiz-round request.
///
/// The exclusion list is held by the client; nothing about a quiz session
/// is persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub category: i64,
}

impl QuizRequest {
    pub fn from_payload(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let previous_questions = match body.get("previous_questions") {
            None | Some(Value::Null) => {
                return Err(ValidationError::Missing {
                    field: "previous_questions",
                })
            }
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| parse_id(item, "previous_questions"))
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(ValidationError::WrongType {
                    field: "previous_questions",
                    expected: "a list of ids",
                })
            }
        };

        let quiz_category = match body.get("quiz_category") {
            None | Some(Value::Null) => {
                return Err(ValidationError::Missing {
                    field: "quiz_category",
                })
            }
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(ValidationError::WrongType {
                    field: "quiz_category",
                    expected: "an object",
                })
            }
        };
        let category = require_int(quiz_category, "id")?;

        Ok(Self {
            previous_questions,
            category,
        })
    }

    /// Whether the all-categories sentinel was requested.
    pub fn all_categories(&self) -> bool {
        self.category == ALL_CATEGORIES
    }
}
