//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories/", get(category::list).post(category::create))
        .route(
            "/categories/{id}",
            get(category::get_by_id)
                .put(category::update)
                .delete(category::delete),
        )
}
