use serde::{Deserialize, Serialize};

/// `GET /`
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

/// `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
    pub version: String,
}

/// An input that did not make it into the PDF
#[derive(Debug, Serialize)]
pub struct SkippedFile {
    pub index: usize,
    pub name: String,
    pub reason: String,
}

/// Successful conversion
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub pdf_file: String,
    pub message: String,
    pub pages: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Placement options accepted on the query string of a conversion
#[derive(Debug, Default, Deserialize)]
pub struct ConversionQuery {
    pub fit: Option<String>,
    pub position: Option<String>,
    pub orientation: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DownloadQuery {
    pub file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompressQuery {
    pub quality: Option<String>,
}
