//! Handlers for the `/users` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use fintrack_core::error::CoreError;
use fintrack_core::types::DbId;
use fintrack_db::models::user::{CreateUser, UpdateUser, User};
use fintrack_db::repositories::UserRepo;
use serde_json::{json, Value};

use super::ListParams;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /users/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<Json<User>> {
    let user = UserRepo::create(&state.pool, &input).await?;
    Ok(Json(user))
}

/// GET /users/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool, params.skip, params.limit).await?;
    Ok(Json(users))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// PUT /users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// DELETE /users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Value>> {
    if !UserRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }
    Ok(Json(json!({ "ok": true })))
}
