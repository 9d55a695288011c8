//! Repository for the `categories` table.

use fintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list for `categories` queries.
const CATEGORY_COLUMNS: &str = "id, name";

/// Provides data access for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category and return the stored row.
    pub async fn create(pool: &PgPool, dto: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query =
            format!("INSERT INTO categories (name) VALUES ($1) RETURNING {CATEGORY_COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(&dto.name)
            .fetch_one(pool)
            .await
    }

    /// Find a category by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by exact name. Used by bootstrap seeding.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE name = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List categories in insertion order.
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Category>, sqlx::Error> {
        let query =
            format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Partially update a category.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = COALESCE($2, name) \
             WHERE id = $1 \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&dto.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
