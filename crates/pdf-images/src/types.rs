use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagesError {
    #[error("No images supplied")]
    NoImages,
    #[error("None of the {skipped} supplied images could be read")]
    NoReadableImages { skipped: usize },
    #[error("Unreadable image {name}: {reason}")]
    UnreadableImage { name: String, reason: String },
    #[error("Failed to serialize document: {0}")]
    Serialization(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ImagesError {
    pub(crate) fn unreadable(name: impl Into<String>, reason: impl ToString) -> Self {
        ImagesError::UnreadableImage {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// True for failures caused by what the caller sent rather than by the
    /// machine doing the conversion.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ImagesError::NoImages
                | ImagesError::NoReadableImages { .. }
                | ImagesError::UnreadableImage { .. }
                | ImagesError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ImagesError>;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

impl Orientation {
    /// Parse a request token. Only the landscape tokens (`L`, `landscape`)
    /// select landscape; anything else, including the empty string, is portrait.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case("l") || token.eq_ignore_ascii_case("landscape") {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Single-letter token (`P` / `L`)
    pub fn token(self) -> &'static str {
        match self {
            Orientation::Portrait => "P",
            Orientation::Landscape => "L",
        }
    }
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Look up a named size (`"A4"`, `"letter"`, ...), ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "a3" => Some(PaperSize::A3),
            "a4" => Some(PaperSize::A4),
            "a5" => Some(PaperSize::A5),
            "letter" => Some(PaperSize::Letter),
            "legal" => Some(PaperSize::Legal),
            _ => None,
        }
    }
}

/// Blank space kept clear on each side of the page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMargins {
    pub top_mm: f32,
    pub right_mm: f32,
    pub bottom_mm: f32,
    pub left_mm: f32,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::uniform(crate::constants::DEFAULT_MARGIN_MM)
    }
}

impl PageMargins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            top_mm: margin_mm,
            right_mm: margin_mm,
            bottom_mm: margin_mm,
            left_mm: margin_mm,
        }
    }

    pub fn horizontal_mm(&self) -> f32 {
        self.left_mm + self.right_mm
    }

    pub fn vertical_mm(&self) -> f32 {
        self.top_mm + self.bottom_mm
    }
}
