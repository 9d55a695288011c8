//! Payment method models and DTOs.

use fintrack_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `payment_methods` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PaymentMethod {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a payment method.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentMethod {
    pub name: String,
}

/// DTO for partially updating a payment method.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePaymentMethod {
    pub name: Option<String>,
}
