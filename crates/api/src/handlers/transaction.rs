//! Handlers for the `/transactions` resource.
//!
//! Creating or re-pointing a transaction at a missing user, payment
//! method, or category fails at the store (foreign keys) and surfaces as
//! 409, mapped in [`crate::error`].

use axum::extract::{Path, Query, State};
use axum::Json;
use fintrack_core::error::CoreError;
use fintrack_core::types::DbId;
use fintrack_db::models::transaction::{CreateTransaction, Transaction, UpdateTransaction};
use fintrack_db::repositories::TransactionRepo;
use serde_json::{json, Value};

use super::ListParams;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /transactions/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTransaction>,
) -> AppResult<Json<Transaction>> {
    let tx = TransactionRepo::create(&state.pool, &input).await?;
    Ok(Json(tx))
}

/// GET /transactions/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Transaction>>> {
    let txs = TransactionRepo::list(&state.pool, params.skip, params.limit).await?;
    Ok(Json(txs))
}

/// GET /transactions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Transaction>> {
    let tx = TransactionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Transaction",
            id,
        }))?;
    Ok(Json(tx))
}

/// PUT /transactions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTransaction>,
) -> AppResult<Json<Transaction>> {
    let tx = TransactionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Transaction",
            id,
        }))?;
    Ok(Json(tx))
}

/// DELETE /transactions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    if !TransactionRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Transaction",
            id,
        }));
    }
    Ok(Json(json!({ "ok": true })))
}
