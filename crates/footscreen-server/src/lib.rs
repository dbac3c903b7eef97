//! HTTP service for recording and reviewing diabetic foot screenings.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/recommendations/{tier}",
            get(routes::recommendations::list_for_tier),
        )
        .route("/screenings/score", post(routes::screenings::score_screening))
        .route(
            "/screenings",
            get(routes::screenings::list_screenings).post(routes::screenings::create_screening),
        )
        .route(
            "/screenings/{id}",
            get(routes::screenings::get_screening).delete(routes::screenings::delete_screening),
        )
        .route(
            "/screenings/{id}/recommendations",
            put(routes::screenings::update_recommendations),
        )
        .route("/screenings/{id}/notes", put(routes::screenings::update_notes))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors),
        )
        .with_state(state)
}
