use super::handlers;
use super::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Session lifecycle
        .route("/session/start", post(handlers::start_session))
        .route(
            "/session/:session_id/transcript",
            post(handlers::append_transcript),
        )
        .route(
            "/session/:session_id/code",
            get(handlers::get_code).post(handlers::update_code),
        )
        .route(
            "/session/:session_id/transcripts",
            get(handlers::get_transcripts),
        )
        .route(
            "/session/:session_id/next-problem",
            get(handlers::next_problem),
        )
        // Evaluation
        .route("/evaluate", post(handlers::evaluate))
        // Real-time room credentials
        .route("/livekit/token", post(handlers::livekit_token))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Mount the API under `base_path` with CORS for the given browser origins
pub fn create_app(state: AppState, base_path: &str, cors_origins: &[String]) -> Router {
    let api = create_router(state);
    let base_path = normalize_base_path(base_path);

    let app = if base_path.is_empty() {
        api
    } else {
        Router::new().nest(&base_path, api)
    };

    app.layer(cors_layer(cors_origins))
}

/// `"api/"` → `"/api"`, `"/"` → `""`
fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
