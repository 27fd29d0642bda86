//! Request payload validation and pagination types
//!
//! Payloads with type-flexible fields (string-or-int ids) arrive as raw
//! JSON and go through an explicit parse-and-validate step here, which
//! either yields a typed record or names the offending field.

pub mod pagination;
pub mod question;
pub mod quiz;
pub mod validation;

pub use pagination::{Page, PageParams, Paginated, QUESTIONS_PER_PAGE};
pub use question::NewQuestion;
pub use quiz::{QuizRequest, ALL_CATEGORIES};
pub use validation::ValidationError;
