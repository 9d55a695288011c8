//! Repository for the `users` table.

use fintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list for `users` queries.
const USER_COLUMNS: &str = "id, name";

/// Provides data access for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user and return the stored row with its assigned id.
    pub async fn create(pool: &PgPool, dto: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!("INSERT INTO users (name) VALUES ($1) RETURNING {USER_COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(&dto.name)
            .fetch_one(pool)
            .await
    }

    /// Find a user by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by exact name. Used by bootstrap seeding.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE name = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List users in insertion order.
    ///
    /// `ORDER BY id` makes offset/limit paging deterministic; a BIGSERIAL
    /// key increases in insertion order.
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, User>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Partially update a user.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET name = COALESCE($2, name) \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&dto.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user by ID.
    ///
    /// Returns `true` if a row was deleted. Fails if the user is still
    /// referenced by a transaction (foreign keys restrict deletes).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
