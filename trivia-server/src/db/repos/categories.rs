//! Category repository
//!
//! Categories are read-only over HTTP; rows come from the seed command.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Category record; doubles as the wire projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Read access to categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id.
    async fn all(&self) -> Result<Vec<Category>, DbError>;

    /// Whether a category with this id exists.
    async fn exists(&self, id: i64) -> Result<bool, DbError>;
}

/// Collect category rows into the ordered id -> type wire map.
pub fn as_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}

/// PostgreSQL-backed categories
pub struct PgCategories {
    pool: PgPool,
}

impl PgCategories {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategories {
    async fn all(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    async fn exists(&self, id: i64) -> Result<bool, DbError> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_is_keyed_and_ordered_by_id() {
        let categories = vec![
            Category {
                id: 2,
                kind: "Art".into(),
            },
            Category {
                id: 1,
                kind: "Science".into(),
            },
        ];
        let map = as_map(&categories);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(map[&1], "Science");
    }

    #[test]
    fn serializes_kind_as_type() {
        let category = Category {
            id: 1,
            kind: "Science".into(),
        };
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["type"], "Science");
    }
}
