//! trivia-server: HTTP API for the trivia app
//!
//! A thin axum layer over a relational store of quiz questions and their
//! categories: listing, substring search, create/delete, and random
//! quiz-question selection with a client-held exclusion list.

pub mod db;
pub mod http;
pub mod models;
pub mod quiz;
pub mod state;

pub use http::error::ApiError;
pub use state::AppState;
