//! Repository for the `transactions` table.
//!
//! Foreign keys to `users`, `payment_methods`, and `categories` are
//! enforced by the store: creates with a dangling reference fail, and the
//! referenced rows cannot be deleted while a transaction points at them.

use fintrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::transaction::{CreateTransaction, Transaction, UpdateTransaction};

/// Column list for `transactions` queries. `timestamp` is quoted because it
/// collides with the SQL type name.
const TX_COLUMNS: &str = "\
    id, user_id, payment_method_id, category_id, \
    amount, \"timestamp\", is_deposit, note";

/// Provides data access for transactions.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Insert a new transaction and return the stored row.
    ///
    /// Omitted `timestamp` and `is_deposit` take the store defaults
    /// (`now()` and `false`), so the returned row is fully populated.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions \
                 (user_id, payment_method_id, category_id, amount, \
                  \"timestamp\", is_deposit, note) \
             VALUES ($1, $2, $3, $4, COALESCE($5, now()), COALESCE($6, FALSE), $7) \
             RETURNING {TX_COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(dto.user_id)
            .bind(dto.payment_method_id)
            .bind(dto.category_id)
            .bind(dto.amount)
            .bind(dto.timestamp)
            .bind(dto.is_deposit)
            .bind(&dto.note)
            .fetch_one(pool)
            .await
    }

    /// Find a transaction by primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!("SELECT {TX_COLUMNS} FROM transactions WHERE id = $1");
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List transactions in insertion order.
    pub async fn list(
        pool: &PgPool,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query =
            format!("SELECT {TX_COLUMNS} FROM transactions ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Transaction>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Partially update a transaction.
    ///
    /// Uses `COALESCE` so only provided fields are changed; the stored
    /// `timestamp` is kept unless the payload carries a new one.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateTransaction,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!(
            "UPDATE transactions SET \
                 user_id = COALESCE($2, user_id), \
                 payment_method_id = COALESCE($3, payment_method_id), \
                 category_id = COALESCE($4, category_id), \
                 amount = COALESCE($5, amount), \
                 \"timestamp\" = COALESCE($6, \"timestamp\"), \
                 is_deposit = COALESCE($7, is_deposit), \
                 note = COALESCE($8, note) \
             WHERE id = $1 \
             RETURNING {TX_COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(dto.user_id)
            .bind(dto.payment_method_id)
            .bind(dto.category_id)
            .bind(dto.amount)
            .bind(dto.timestamp)
            .bind(dto.is_deposit)
            .bind(&dto.note)
            .fetch_optional(pool)
            .await
    }

    /// Delete a transaction by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
