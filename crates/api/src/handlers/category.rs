//! Handlers for the `/categories` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use fintrack_core::error::CoreError;
use fintrack_core::types::DbId;
use fintrack_db::models::category::{Category, CreateCategory, UpdateCategory};
use fintrack_db::repositories::CategoryRepo;
use serde_json::{json, Value};

use super::ListParams;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /categories/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok(Json(category))
}

/// GET /categories/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool, params.skip, params.limit).await?;
    Ok(Json(categories))
}

/// GET /categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// PUT /categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// DELETE /categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }
    Ok(Json(json!({ "ok": true })))
}
