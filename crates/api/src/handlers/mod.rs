//! HTTP handlers, one module per entity.

pub mod category;
pub mod payment_method;
pub mod transaction;
pub mod user;

use serde::Deserialize;

/// Query parameters for list endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ListParams {
    /// Rows to skip before the first returned row.
    pub skip: i64,
    /// Maximum number of rows to return.
    pub limit: i64,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}
