//! HTTP surface

mod compress;
mod convert;
mod download;
mod health;

pub use convert::resolve_policy;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::Router;
use axum::extract::{DefaultBodyLimit, Request};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use std::time::Instant;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Build the router with all routes and middleware. Used by the binary
/// and by the integration tests.
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.body_limit();
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/api/health", get(health::health))
        .route("/upload", post(convert::convert))
        .route("/api/convert", post(convert::convert))
        .route("/download", get(download::download))
        .route("/api/compress", post(compress::compress))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{} {} -> {} ({:.1?})",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

/// PDF bytes served as a download
fn pdf_attachment(file_name: &str, data: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        data,
    )
        .into_response()
}
