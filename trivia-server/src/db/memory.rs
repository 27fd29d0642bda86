//! In-memory store
//!
//! Implements both repository traits over plain collections so the HTTP
//! layer can be exercised without a database. Slicing mirrors the SQL
//! LIMIT/OFFSET arithmetic in the Postgres repositories.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::repos::{Category, CategoryRepository, DbError, Question, QuestionRepository};
use crate::models::{NewQuestion, Page, Paginated, QUESTIONS_PER_PAGE};

/// Mutex-guarded store of categories and questions
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    categories: BTreeMap<i64, String>,
    questions: Vec<Question>,
    next_category_id: i64,
    next_question_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // No operation leaves the collections inconsistent across a panic;
        // recover the guard from a poisoned lock.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Seed a category, returning its id.
    pub fn add_category(&self, kind: &str) -> i64 {
        let mut inner = self.lock();
        inner.next_category_id += 1;
        let id = inner.next_category_id;
        inner.categories.insert(id, kind.to_owned());
        id
    }

    /// Seed a question directly, returning its id.
    pub fn add_question(&self, question: &str, answer: &str, difficulty: i32, category: i64) -> i64 {
        let mut inner = self.lock();
        inner.next_question_id += 1;
        let id = inner.next_question_id;
        inner.questions.push(Question {
            id,
            question: question.to_owned(),
            answer: answer.to_owned(),
            difficulty,
            category,
        });
        id
    }
}

fn slice(questions: Vec<Question>, page: Page) -> Paginated<Question> {
    let total = questions.len() as i64;
    let items = questions
        .into_iter()
        .skip(page.offset() as usize)
        .take(QUESTIONS_PER_PAGE as usize)
        .collect();
    Paginated { items, total }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn all(&self) -> Result<Vec<Category>, DbError> {
        let inner = self.lock();
        Ok(inner
            .categories
            .iter()
            .map(|(&id, kind)| Category {
                id,
                kind: kind.clone(),
            })
            .collect())
    }

    async fn exists(&self, id: i64) -> Result<bool, DbError> {
        Ok(self.lock().categories.contains_key(&id))
    }
}

#[async_trait]
impl QuestionRepository for MemoryStore {
    async fn list(&self, page: Page) -> Result<Paginated<Question>, DbError> {
        Ok(slice(self.lock().questions.clone(), page))
    }

    async fn list_by_category(
        &self,
        category: i64,
        page: Page,
    ) -> Result<Paginated<Question>, DbError> {
        let matches = self
            .lock()
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect();
        Ok(slice(matches, page))
    }

    async fn search(&self, term: &str, page: Page) -> Result<Paginated<Question>, DbError> {
        let needle = term.to_lowercase();
        let matches = self
            .lock()
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(slice(matches, page))
    }

    async fn pool(&self, category: Option<i64>) -> Result<Vec<Question>, DbError> {
        let inner = self.lock();
        Ok(inner
            .questions
            .iter()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .cloned()
            .collect())
    }

    async fn insert(&self, new: &NewQuestion) -> Result<i64, DbError> {
        Ok(self.add_question(&new.question, &new.answer, new.difficulty, new.category))
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut inner = self.lock();
        let position = inner.questions.iter().position(|q| q.id == id);
        match position {
            Some(index) => {
                inner.questions.remove(index);
                Ok(())
            }
            None => Err(DbError::NotFound {
                resource: "question",
                id,
            }),
        }
    }
}
