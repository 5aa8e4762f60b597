use super::pdf_attachment;
use crate::error::{ApiError, ApiResult};
use crate::models::CompressQuery;
use crate::state::AppState;
use axum::extract::{Multipart, Query, State};
use axum::response::Response;
use pdf_compress::{QualityTier, compress_async, parse_quality};

/// `POST /api/compress?quality=N` with the document in the `pdf` field.
/// The result is kept in the upload directory and returned as a download.
pub async fn compress(
    State(state): State<AppState>,
    Query(query): Query<CompressQuery>,
    mut multipart: Multipart,
) -> ApiResult<Response> {
    let mut pdf = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("pdf") {
            pdf = Some(field.bytes().await?.to_vec());
        }
    }
    let input = pdf.ok_or_else(|| ApiError::bad_request("No PDF uploaded"))?;

    let quality = parse_quality(query.quality.as_deref());
    let tier = QualityTier::from_quality(quality);
    let output = compress_async(state.compressor.clone(), input, tier).await?;

    let name = format!("{}-compressed.pdf", uuid::Uuid::new_v4());
    tokio::fs::write(state.config.upload_dir.join(&name), &output).await?;

    Ok(pdf_attachment(&name, output))
}
