//! Handlers for the `/payment-methods` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use fintrack_core::error::CoreError;
use fintrack_core::types::DbId;
use fintrack_db::models::payment_method::{CreatePaymentMethod, PaymentMethod, UpdatePaymentMethod};
use fintrack_db::repositories::PaymentMethodRepo;
use serde_json::{json, Value};

use super::ListParams;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /payment-methods/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePaymentMethod>,
) -> AppResult<Json<PaymentMethod>> {
    let method = PaymentMethodRepo::create(&state.pool, &input).await?;
    Ok(Json(method))
}

/// GET /payment-methods/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<PaymentMethod>>> {
    let methods = PaymentMethodRepo::list(&state.pool, params.skip, params.limit).await?;
    Ok(Json(methods))
}

/// GET /payment-methods/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PaymentMethod>> {
    let method = PaymentMethodRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Payment method",
            id,
        }))?;
    Ok(Json(method))
}

/// PUT /payment-methods/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePaymentMethod>,
) -> AppResult<Json<PaymentMethod>> {
    let method = PaymentMethodRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Payment method",
            id,
        }))?;
    Ok(Json(method))
}

/// DELETE /payment-methods/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    if !PaymentMethodRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Payment method",
            id,
        }));
    }
    Ok(Json(json!({ "ok": true })))
}
