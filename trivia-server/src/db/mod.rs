//! Database access: pool, migrations, repositories

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{CategoryRepository, DbError, QuestionRepository};
