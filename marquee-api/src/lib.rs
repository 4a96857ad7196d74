use axum::{http::Method, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod admin;
pub mod app_config;
pub mod error;
pub mod events;
pub mod organizer;
pub mod services;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::USER_AGENT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(events::routes())
        .merge(organizer::routes())
        .merge(admin::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
