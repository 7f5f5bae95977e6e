use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    // ToDo: Tighten this up
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::move_guesser::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
