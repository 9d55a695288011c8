//! Route definitions for the `/payment-methods` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::payment_method;
use crate::state::AppState;

/// Routes mounted at `/payment-methods`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/payment-methods/",
            get(payment_method::list).post(payment_method::create),
        )
        .route(
            "/payment-methods/{id}",
            get(payment_method::get_by_id)
                .put(payment_method::update)
                .delete(payment_method::delete),
        )
}
