//! HTTP surface for the chat widget

pub mod error;
pub mod routes;
pub mod state;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::{spawn_widget_sweeper, AppState, WidgetLimits};

/// Build the application router
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/metrics", get(routes::metrics))
        .route("/api/chat/steps/:step", get(routes::step_text))
        .route("/api/chat/widgets", post(routes::open_widget))
        .route(
            "/api/chat/widgets/:id",
            get(routes::get_widget).delete(routes::close_widget),
        )
        .route("/api/chat/widgets/:id/intake", post(routes::submit_intake))
        .route("/api/chat/widgets/:id/options", post(routes::select_option))
        .route("/api/chat/widgets/:id/messages", post(routes::send_message))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
