use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::handler::{
    build_detail_page_handler, create_build_handler, get_build_by_id_handler,
    get_builds_by_match_up_handler, health_handler, listing_page_handler,
};
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE]);

    let trace_layer =
        TraceLayer::new_for_http().on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/builds",
            get(get_builds_by_match_up_handler).post(create_build_handler),
        )
        .route("/api/builds/:build_id", get(get_build_by_id_handler))
        .route(
            "/races/:raceName/match-ups/:opponentRace",
            get(listing_page_handler),
        )
        .route("/builds/:build_id", get(build_detail_page_handler))
        .layer(cors)
        .layer(trace_layer)
        .with_state(state)
}
