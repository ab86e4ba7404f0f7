use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

pub mod apod;
pub mod config;
pub mod handlers;
pub mod models;
pub mod render;
pub mod routes;
pub mod site;

#[derive(Clone)]
pub struct AppState {
    pub config: config::Settings,
    pub fetcher: Arc<dyn apod::Fetcher>,
    pub shell: Arc<render::Document>,
}

/// Create the main Axum application router
pub fn create_app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.server.assets_dir);

    Router::new()
        .merge(routes::pages::page_router())
        .merge(routes::health::health_router())
        // Stylesheet and the offline placeholder image
        .nest_service("/static", assets)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}
