pub mod config;
pub mod error;
pub mod middleware;
pub mod persona;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::config::Config;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(routes::chat::get_bot_response, routes::health::health_check),
    components(schemas(
        routes::chat::BotPrompt,
        routes::chat::BotReply,
        routes::health::HealthResponse,
        error::ErrorBody,
    )),
    tags(
        (name = "chat", description = "Completion relay"),
        (name = "health", description = "Liveness")
    )
)]
struct ApiDoc;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/getBotResponse",
            post(routes::chat::get_bot_response).fallback(routes::chat::method_not_allowed),
        )
        .route(
            "/api/docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        );

    Router::new()
        .merge(api_routes)
        .layer(axum::middleware::from_fn(middleware::logging::log_request))
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(60)))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.cors.enabled {
        let cors = CorsLayer::new()
            .allow_methods([axum::http::Method::POST, axum::http::Method::OPTIONS])
            .allow_headers(Any);

        if config.cors.origins.iter().any(|o| o == "*") {
            cors.allow_origin(Any)
        } else {
            let parsed_origins: Vec<axum::http::HeaderValue> = config
                .cors
                .origins
                .iter()
                .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
                .collect();

            cors.allow_origin(parsed_origins)
        }
    } else {
        CorsLayer::permissive()
    }
}
