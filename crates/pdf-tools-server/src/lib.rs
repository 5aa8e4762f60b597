//! HTTP front end for image-to-PDF conversion and PDF compression

pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod routes;
pub mod state;

pub use config::{CompressorKind, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use routes::app;
pub use state::AppState;
