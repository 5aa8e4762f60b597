use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};
use pdf_images::{LayoutOptions, Orientation, PageMargins, PaperSize, PlacementPolicy};
use std::path::PathBuf;

/// Origins that are always allowed next to `FRONTEND_URL`
const EXTRA_ORIGINS: [&str; 3] = [
    "http://127.0.0.1:3000",
    "http://localhost:3001",
    "http://127.0.0.1:3001",
];

/// Content types accepted for image uploads
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/bmp",
    "image/webp",
];

/// Headroom on top of the file budget for multipart framing and form fields
const BODY_SLACK_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompressorKind {
    /// Shell out to Ghostscript
    Ghostscript,
    /// lopdf stream compression, no external tools
    Native,
}

/// Server configuration. Every flag can also be set from the environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "pdf-tools-server", about = "Image to PDF conversion service", version)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Verbose logging
    #[arg(long, env = "DEBUG", default_value_t = true, action = clap::ArgAction::Set, value_parser = BoolishValueParser::new())]
    pub debug: bool,

    /// Frontend origin allowed by CORS
    #[arg(long, env = "FRONTEND_URL", default_value = "http://localhost:3000")]
    pub frontend_url: String,

    /// Largest accepted upload, per file, in bytes
    #[arg(long, env = "MAX_FILE_SIZE", default_value_t = 10 * 1024 * 1024)]
    pub max_file_size: usize,

    /// Most files accepted in one conversion
    #[arg(long, env = "MAX_FILES", default_value_t = 10)]
    pub max_files: usize,

    /// Scratch space for external tools
    #[arg(long, env = "TEMP_DIR", default_value = "./temp")]
    pub temp_dir: PathBuf,

    /// Where compressed PDFs are kept
    #[arg(long, env = "UPLOAD_DIR", default_value = "./uploads")]
    pub upload_dir: PathBuf,

    /// Where converted PDFs are written and served from
    #[arg(long = "output-dir", env = "PDF_OUTPUT_DIR", default_value = "./output")]
    pub output_dir: PathBuf,

    /// Page format (A3, A4, A5, Letter, Legal)
    #[arg(long, env = "PDF_PAGE_FORMAT", default_value = "A4", value_parser = parse_paper_size)]
    pub page_format: PaperSize,

    /// Orientation used when a request names none (P or L)
    #[arg(long, env = "PDF_ORIENTATION", default_value = "P", value_parser = parse_orientation)]
    pub orientation: Orientation,

    /// Resolution used to size images on the page
    #[arg(long, env = "PDF_DPI", default_value_t = pdf_images::DEFAULT_DPI)]
    pub dpi: f32,

    /// Margin on every side of the page, in millimeters
    #[arg(long, env = "PDF_MARGIN_MM", default_value_t = pdf_images::DEFAULT_MARGIN_MM)]
    pub margin_mm: f32,

    #[arg(long, env = "APP_NAME", default_value = "Image to PDF Converter")]
    pub app_name: String,

    #[arg(long, env = "APP_VERSION", default_value = env!("CARGO_PKG_VERSION"))]
    pub app_version: String,

    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,

    /// Ghostscript executable
    #[arg(long, env = "GHOSTSCRIPT", default_value = "gs")]
    pub ghostscript: PathBuf,

    /// Backend for the compress endpoint
    #[arg(long, env = "COMPRESSOR", default_value = "ghostscript", value_enum)]
    pub compressor: CompressorKind,
}

fn parse_paper_size(value: &str) -> Result<PaperSize, String> {
    PaperSize::from_name(value).ok_or_else(|| format!("unknown page format '{}'", value))
}

fn parse_orientation(value: &str) -> Result<Orientation, String> {
    Ok(Orientation::from_token(value))
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        std::iter::once(self.frontend_url.clone())
            .chain(EXTRA_ORIGINS.iter().map(|o| o.to_string()))
            .collect()
    }

    pub fn is_allowed_type(&self, content_type: &str) -> bool {
        ALLOWED_IMAGE_TYPES.contains(&content_type)
    }

    /// Request body limit for upload routes
    pub fn body_limit(&self) -> usize {
        self.max_file_size
            .saturating_mul(self.max_files)
            .saturating_add(BODY_SLACK_BYTES)
    }

    /// Engine options for one request
    pub fn layout_options(&self, policy: PlacementPolicy) -> LayoutOptions {
        LayoutOptions {
            paper: self.page_format,
            margins: PageMargins::uniform(self.margin_mm),
            dpi: self.dpi,
            policy,
            ..Default::default()
        }
    }

    /// Create the temp, upload and output directories
    pub async fn ensure_directories(&self) -> std::io::Result<()> {
        for dir in [&self.temp_dir, &self.upload_dir, &self.output_dir] {
            tokio::fs::create_dir_all(dir).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        let mut full = vec!["pdf-tools-server"];
        full.extend_from_slice(args);
        ServerConfig::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "--port",
            "9000",
            "--page-format",
            "letter",
            "--orientation",
            "L",
            "--max-files",
            "3",
            "--debug",
            "no",
            "--compressor",
            "native",
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.page_format, PaperSize::Letter);
        assert_eq!(config.orientation, Orientation::Landscape);
        assert_eq!(config.max_files, 3);
        assert!(!config.debug);
        assert_eq!(config.compressor, CompressorKind::Native);
    }

    #[test]
    fn test_unknown_page_format_is_rejected() {
        let result = ServerConfig::try_parse_from(["pdf-tools-server", "--page-format", "B7"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_allowed_origins_include_frontend() {
        let config = parse(&["--frontend-url", "https://app.example.com"]);
        let origins = config.allowed_origins();
        assert_eq!(origins[0], "https://app.example.com");
        assert_eq!(origins.len(), 4);
    }

    #[test]
    fn test_allowed_types() {
        let config = parse(&[]);
        assert!(config.is_allowed_type("image/png"));
        assert!(config.is_allowed_type("image/webp"));
        assert!(!config.is_allowed_type("application/pdf"));
        assert!(!config.is_allowed_type("image/svg+xml"));
    }

    #[test]
    fn test_layout_options_follow_config() {
        let config = parse(&["--margin-mm", "5", "--dpi", "150"]);
        let options = config.layout_options(PlacementPolicy::default());
        assert_eq!(options.margins, PageMargins::uniform(5.0));
        assert_eq!(options.dpi, 150.0);
        assert!(options.validate().is_ok());
    }
}
