use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::{Method, StatusCode},
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::info_span;

use crate::core::error;
use crate::core::state::AppState;
use crate::routes::{admin, health, messages, tokens};
use crate::utils;

pub(crate) fn routes(state: AppState) -> Router {
    // /messages/...
    let message_router = Router::new()
        .route("/", post(messages::post))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    // /stats
    let stats_router = Router::new()
        .route("/", get(admin::stats))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::require_api_key,
        ));

    Router::new()
        .route("/health", get(health::get))
        .route("/tokens", post(tokens::post))
        .nest("/messages", message_router)
        .nest("/stats", stats_router)
        .fallback(unsupported)
        .method_not_allowed_fallback(unsupported)
        .with_state(state)
        .route_layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let matched_path = request
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str);

                        info_span!(
                            "request",
                            method = ?request.method(),
                            matched_path,
                        )
                    }),
                )
                .layer(HandleErrorLayer::new(error::handle_middleware_errors))
                .buffer(128)
                .rate_limit(10, Duration::from_secs(1))
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::POST])
                        .allow_origin(cors::Any),
                ),
        )
}

// everything outside the supported surface gets the legacy plain-text reply
async fn unsupported() -> (StatusCode, &'static str) {
    (StatusCode::BAD_REQUEST, "ERROR")
}
