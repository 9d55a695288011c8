//! Repository for the `payment_methods` table.

use fintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::payment_method::{CreatePaymentMethod, PaymentMethod, UpdatePaymentMethod};

/// Column list for `payment_methods` queries.
const METHOD_COLUMNS: &str = "id, name";

/// Provides data access for payment methods.
pub struct PaymentMethodRepo;

impl PaymentMethodRepo {
    /// Insert a new payment method and return the stored row.
    pub async fn create(
        pool: &PgPool,
        dto: &CreatePaymentMethod,
    ) -> Result<PaymentMethod, sqlx::Error> {
        let query =
            format!("INSERT INTO payment_methods (name) VALUES ($1) RETURNING {METHOD_COLUMNS}");
        sqlx::query_as::<_, PaymentMethod>(&query)
            .bind(&dto.name)
            .fetch_one(pool)
            .await
    }

    /// Find a payment method by primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PaymentMethod>, sqlx::Error> {
        let query = format!("SELECT {METHOD_COLUMNS} FROM payment_methods WHERE id = $1");
        sqlx::query_as::<_, PaymentMethod>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a payment method by exact name. Used by bootstrap seeding.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<PaymentMethod>, sqlx::Error> {
        let query = format!("SELECT {METHOD_COLUMNS} FROM payment_methods WHERE name = $1");
        sqlx::query_as::<_, PaymentMethod>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List payment methods in insertion order.
    pub async fn list(
        pool: &PgPool,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<PaymentMethod>, sqlx::Error> {
        let query =
            format!("SELECT {METHOD_COLUMNS} FROM payment_methods ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, PaymentMethod>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Partially update a payment method.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdatePaymentMethod,
    ) -> Result<Option<PaymentMethod>, sqlx::Error> {
        let query = format!(
            "UPDATE payment_methods SET name = COALESCE($2, name) \
             WHERE id = $1 \
             RETURNING {METHOD_COLUMNS}"
        );
        sqlx::query_as::<_, PaymentMethod>(&query)
            .bind(id)
            .bind(&dto.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a payment method by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payment_methods WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
