use crate::error::ApiResult;
use crate::ingest::{UploadLimits, UploadedFile, output_file_name, validate_files};
use crate::models::{ConversionQuery, SkippedFile, UploadResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Multipart, Query, State};
use pdf_images::{Anchor, Orientation, PlacementPolicy, convert_images};
use std::collections::HashMap;

/// Multipart body of a conversion request
#[derive(Debug, Default)]
struct ConversionForm {
    images: Vec<UploadedFile>,
    files: Vec<UploadedFile>,
    fields: HashMap<String, String>,
}

impl ConversionForm {
    async fn read(multipart: &mut Multipart) -> ApiResult<Self> {
        let mut form = ConversionForm::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "images" | "files" => {
                    let file_name = field.file_name().unwrap_or("upload").to_string();
                    let content_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await?.to_vec();
                    let file = UploadedFile::new(file_name, content_type, data);
                    if name == "images" {
                        form.images.push(file);
                    } else {
                        form.files.push(file);
                    }
                }
                _ => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }
        Ok(form)
    }

    /// `images` parts, or the `files` parts when no `images` were sent
    fn into_uploads(self) -> (Vec<UploadedFile>, HashMap<String, String>) {
        let uploads = if self.images.is_empty() {
            self.files
        } else {
            self.images
        };
        (uploads, self.fields)
    }
}

fn first_value<'a>(query: Option<&'a str>, form: Option<&'a str>) -> Option<&'a str> {
    query
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| form.map(str::trim).filter(|v| !v.is_empty()))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Placement for one request: query string first, then form fields, then
/// center with the configured orientation.
pub fn resolve_policy(
    query: &ConversionQuery,
    form: &HashMap<String, String>,
    default_orientation: Orientation,
) -> PlacementPolicy {
    let fit = first_value(
        query.fit.as_deref(),
        form.get("fit").map(String::as_str),
    )
    .is_some_and(is_truthy);
    let position = first_value(
        query.position.as_deref(),
        form.get("position").map(String::as_str),
    )
    .unwrap_or("center");
    let orientation = first_value(
        query.orientation.as_deref(),
        form.get("orientation").map(String::as_str),
    )
    .map_or(default_orientation, Orientation::from_token);

    PlacementPolicy {
        fit,
        position: Anchor::parse(position),
        orientation,
    }
}

/// `POST /upload` and `POST /api/convert`
pub async fn convert(
    State(state): State<AppState>,
    Query(query): Query<ConversionQuery>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let config = &state.config;
    let (uploads, fields) = ConversionForm::read(&mut multipart).await?.into_uploads();

    validate_files(&uploads, UploadLimits::from(config.as_ref()), |ct| {
        config.is_allowed_type(ct)
    })?;

    let policy = resolve_policy(&query, &fields, config.orientation);
    log::debug!(
        "Converting {} file(s): fit={} position={} orientation={}",
        uploads.len(),
        policy.fit,
        policy.position,
        policy.orientation.token()
    );

    let sources = uploads.into_iter().map(UploadedFile::into_source).collect();
    let document = convert_images(sources, config.layout_options(policy)).await?;

    let pdf_file = output_file_name();
    let report = document.save(config.output_dir.join(&pdf_file)).await?;
    let pages = report.pages.len();
    log::info!(
        "Wrote {} ({} page(s), {} skipped)",
        pdf_file,
        pages,
        report.skipped.len()
    );

    Ok(Json(UploadResponse {
        success: true,
        pdf_file,
        message: format!("PDF created with {} page(s)", pages),
        pages,
        skipped: report
            .skipped
            .into_iter()
            .map(|s| SkippedFile {
                index: s.source_index,
                name: s.source_name,
                reason: s.reason,
            })
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(fit: Option<&str>, position: Option<&str>, orientation: Option<&str>) -> ConversionQuery {
        ConversionQuery {
            fit: fit.map(str::to_string),
            position: position.map(str::to_string),
            orientation: orientation.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults_when_nothing_is_sent() {
        let policy = resolve_policy(&ConversionQuery::default(), &HashMap::new(), Orientation::Portrait);
        assert_eq!(policy, PlacementPolicy::default());
    }

    #[test]
    fn test_configured_orientation_is_the_fallback() {
        let policy = resolve_policy(&ConversionQuery::default(), &HashMap::new(), Orientation::Landscape);
        assert_eq!(policy.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_query_wins_over_form() {
        let form: HashMap<String, String> = [
            ("position".to_string(), "bottom-right".to_string()),
            ("orientation".to_string(), "P".to_string()),
            ("fit".to_string(), "false".to_string()),
        ]
        .into();
        let policy = resolve_policy(
            &query(Some("true"), Some("top-left"), Some("L")),
            &form,
            Orientation::Portrait,
        );
        assert!(policy.fit);
        assert_eq!(policy.position, Anchor::TopLeft);
        assert_eq!(policy.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_form_used_when_query_is_empty() {
        let form: HashMap<String, String> = [
            ("position".to_string(), "bottom".to_string()),
            ("fit".to_string(), "on".to_string()),
        ]
        .into();
        let policy = resolve_policy(&query(None, Some(""), None), &form, Orientation::Portrait);
        assert!(policy.fit);
        assert_eq!(policy.position, Anchor::BottomCenter);
    }

    #[test]
    fn test_unknown_position_is_center() {
        let policy = resolve_policy(
            &query(None, Some("somewhere"), None),
            &HashMap::new(),
            Orientation::Portrait,
        );
        assert_eq!(policy.position, Anchor::Center);
    }
}
