//! New-question payload validation

use serde_json::{Map, Value};

use super::validation::{require_int, require_text, ValidationError};

/// Inclusive difficulty bounds
pub const MIN_DIFFICULTY: i64 = 1;
pub const MAX_DIFFICULTY: i64 = 5;

/// A validated question payload, ready for insertion.
///
/// `difficulty` and `category` accept a JSON integer or an integer string;
/// whether the category actually exists is checked against the store by the
/// handler, after this shape validation passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

impl NewQuestion {
    pub fn from_payload(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let question = require_text(body, "question")?;
        let answer = require_text(body, "answer")?;

        let difficulty = require_int(body, "difficulty")?;
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: MIN_DIFFICULTY,
                max: MAX_DIFFICULTY,
            });
        }

        let category = require_int(body, "category")?;

        Ok(Self {
            question,
            answer,
            difficulty: difficulty as i32,
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn valid_payload() {
        let body = payload(json!({
            "question": "What is the heaviest organ in the human body?",
            "answer": "The liver",
            "difficulty": 4,
            "category": 1
        }));
        let new = NewQuestion::from_payload(&body).unwrap();
        assert_eq!(new.difficulty, 4);
        assert_eq!(new.category, 1);
    }

    #[test]
    fn accepts_stringly_typed_ints() {
        let body = payload(json!({
            "question": "q",
            "answer": "a",
            "difficulty": "5",
            "category": "1"
        }));
        let new = NewQuestion::from_payload(&body).unwrap();
        assert_eq!(new.difficulty, 5);
        assert_eq!(new.category, 1);
    }

    #[test]
    fn rejects_missing_question() {
        let body = payload(json!({"answer": "a", "difficulty": 1, "category": 1}));
        assert!(matches!(
            NewQuestion::from_payload(&body).unwrap_err(),
            ValidationError::Missing { field: "question" }
        ));
    }

    #[test]
    fn rejects_blank_answer() {
        let body = payload(json!({"question": "q", "answer": "", "difficulty": 1, "category": 1}));
        assert!(matches!(
            NewQuestion::from_payload(&body).unwrap_err(),
            ValidationError::Empty { field: "answer" }
        ));
    }

    #[test]
    fn rejects_difficulty_out_of_range() {
        for difficulty in ["0", "6"] {
            let body = payload(json!({
                "question": "q",
                "answer": "a",
                "difficulty": difficulty,
                "category": 1
            }));
            assert!(matches!(
                NewQuestion::from_payload(&body).unwrap_err(),
                ValidationError::OutOfRange { .. }
            ));
        }
    }

    #[test]
    fn rejects_non_integer_category() {
        let body = payload(json!({"question": "q", "answer": "a", "difficulty": 1, "category": []}));
        assert!(matches!(
            NewQuestion::from_payload(&body).unwrap_err(),
            ValidationError::WrongType { field: "category", .. }
        ));
    }
}
