use axum::{routing::get, Router};

use crate::handlers;
use crate::AppState;

pub fn page_router() -> Router<AppState> {
    Router::new().route("/", get(handlers::pages::show_picture))
}
