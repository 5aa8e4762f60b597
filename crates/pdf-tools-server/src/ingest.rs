//! Upload checks and output naming

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use pdf_images::ImageSource;
use std::path::{Component, Path};

/// One file part taken from a multipart body
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    /// Declared content type, or one guessed from the extension
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, data: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type
            .filter(|ct| !ct.is_empty() && ct != "application/octet-stream")
            .or_else(|| guess_content_type(&file_name).map(str::to_string));
        Self {
            file_name,
            content_type,
            data,
        }
    }

    pub fn into_source(self) -> ImageSource {
        ImageSource::from_bytes(self.file_name, self.data)
    }
}

/// Limits applied to one conversion request
#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_files: usize,
    pub max_file_size: usize,
}

impl From<&ServerConfig> for UploadLimits {
    fn from(config: &ServerConfig) -> Self {
        Self {
            max_files: config.max_files,
            max_file_size: config.max_file_size,
        }
    }
}

/// Check count, size and type of every uploaded file
pub fn validate_files(
    files: &[UploadedFile],
    limits: UploadLimits,
    is_allowed: impl Fn(&str) -> bool,
) -> ApiResult<()> {
    if files.is_empty() {
        return Err(ApiError::bad_request("No files uploaded"));
    }
    if files.len() > limits.max_files {
        return Err(ApiError::bad_request(format!(
            "Too many files: {} uploaded, at most {} allowed",
            files.len(),
            limits.max_files
        )));
    }

    for file in files {
        if file.data.len() > limits.max_file_size {
            return Err(ApiError::bad_request(format!(
                "File {} is {} bytes, larger than the {} byte limit",
                file.file_name,
                file.data.len(),
                limits.max_file_size
            )));
        }
        match file.content_type.as_deref() {
            Some(ct) if is_allowed(ct) => {}
            Some(ct) => {
                return Err(ApiError::bad_request(format!(
                    "File {} has unsupported type {}",
                    file.file_name, ct
                )));
            }
            None => {
                return Err(ApiError::bad_request(format!(
                    "File {} has no recognizable image type",
                    file.file_name
                )));
            }
        }
    }
    Ok(())
}

fn guess_content_type(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// `images_<YYYYmmdd_HHMMSS>_<8 hex>.pdf`
pub fn output_file_name() -> String {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("images_{}_{}.pdf", stamp, &id[..8])
}

/// True when `name` is a single plain path component, so joining it onto
/// a directory can never leave that directory.
pub fn is_bare_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}
