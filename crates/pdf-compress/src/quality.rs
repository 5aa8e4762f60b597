/// Quality used when a request gives none or an invalid one
pub const DEFAULT_QUALITY: u8 = 75;

/// Ghostscript output presets, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    /// Low resolution, smallest files
    Screen,
    /// Medium resolution
    Ebook,
    /// High quality
    Printer,
    /// Highest quality, colour preserving
    Prepress,
}

impl QualityTier {
    /// Map a 1-100 quality onto a tier (≤40, ≤70, ≤90, above)
    pub fn from_quality(quality: u8) -> Self {
        match quality {
            0..=40 => QualityTier::Screen,
            41..=70 => QualityTier::Ebook,
            71..=90 => QualityTier::Printer,
            _ => QualityTier::Prepress,
        }
    }

    /// Value for Ghostscript's `-dPDFSETTINGS`
    pub fn pdf_settings(self) -> &'static str {
        match self {
            QualityTier::Screen => "/screen",
            QualityTier::Ebook => "/ebook",
            QualityTier::Printer => "/printer",
            QualityTier::Prepress => "/prepress",
        }
    }
}

/// Parse a quality parameter. Missing, non-numeric and out-of-range
/// values all fall back to [`DEFAULT_QUALITY`].
pub fn parse_quality(raw: Option<&str>) -> u8 {
    raw.and_then(|value| value.trim().parse::<u8>().ok())
        .filter(|quality| (1..=100).contains(quality))
        .unwrap_or(DEFAULT_QUALITY)
}
