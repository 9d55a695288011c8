//! Route tree construction.

pub mod categories;
pub mod health;
pub mod pages;
pub mod payment_methods;
pub mod transactions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree, mounted at the application root.
///
/// ```text
/// /users/                      list, create
/// /users/{id}                  get, update, delete
/// /categories/                 list, create
/// /categories/{id}             get, update, delete
/// /payment-methods/            list, create
/// /payment-methods/{id}        get, update, delete
/// /transactions/               list, create
/// /transactions/{id}           get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(categories::router())
        .merge(payment_methods::router())
        .merge(transactions::router())
}
