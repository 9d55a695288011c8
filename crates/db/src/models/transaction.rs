//! Transaction models and DTOs.
//!
//! The only entity with relationships: every transaction references a user,
//! a payment method, and a category. The referenced rows must exist; the
//! foreign keys are enforced by the store.

use fintrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub user_id: DbId,
    pub payment_method_id: DbId,
    pub category_id: DbId,
    pub amount: f64,
    pub timestamp: Timestamp,
    pub is_deposit: bool,
    pub note: Option<String>,
}

/// DTO for creating a transaction.
///
/// `timestamp` and `is_deposit` fall back to the store defaults (`now()`
/// and `false`) when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransaction {
    pub user_id: DbId,
    pub payment_method_id: DbId,
    pub category_id: DbId,
    pub amount: f64,
    pub timestamp: Option<Timestamp>,
    pub is_deposit: Option<bool>,
    pub note: Option<String>,
}

/// DTO for partially updating a transaction.
///
/// Unknown fields (including `id`) are rejected at deserialization. The
/// stored `timestamp` is never touched unless the payload carries one.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTransaction {
    pub user_id: Option<DbId>,
    pub payment_method_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub amount: Option<f64>,
    pub timestamp: Option<Timestamp>,
    pub is_deposit: Option<bool>,
    pub note: Option<String>,
}
