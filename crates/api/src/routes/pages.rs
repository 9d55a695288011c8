//! The HTML front end: the index page and its static assets.

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Mount the index page at `/` and static assets under `/static`.
///
/// The asset directory comes from `ServerConfig::static_dir`; the index
/// page itself is embedded so the binary can serve it regardless of the
/// working directory.
pub fn router(static_dir: &str) -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .nest_service("/static", ServeDir::new(static_dir))
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
