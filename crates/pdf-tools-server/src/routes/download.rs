use super::pdf_attachment;
use crate::error::{ApiError, ApiResult};
use crate::ingest::is_bare_file_name;
use crate::models::DownloadQuery;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::response::Response;
use std::io::ErrorKind;

/// `GET /download?file=<name>`, serving from the output directory only
pub async fn download(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> ApiResult<Response> {
    let name = query.file.unwrap_or_default();
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::bad_request("File parameter is required"));
    }
    if !is_bare_file_name(name) {
        return Err(ApiError::bad_request("Invalid file name"));
    }

    let path = state.config.output_dir.join(name);
    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ApiError::not_found("File not found"));
        }
        Err(e) => return Err(e.into()),
    };

    log::debug!("Serving {} ({} bytes)", path.display(), data.len());
    Ok(pdf_attachment(name, data))
}
