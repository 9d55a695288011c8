//! Route definitions for the `/transactions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::transaction;
use crate::state::AppState;

/// Routes mounted at `/transactions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/transactions/", get(transaction::list).post(transaction::create))
        .route(
            "/transactions/{id}",
            get(transaction::get_by_id)
                .put(transaction::update)
                .delete(transaction::delete),
        )
}
