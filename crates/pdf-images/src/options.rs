use crate::constants::{DEFAULT_DPI, DEFAULT_TITLE};
use crate::layout::{Anchor, Size};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-request placement choices
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementPolicy {
    /// Upscale images smaller than the usable area until one axis fills it
    pub fit: bool,
    /// Anchor point inside the usable area
    pub position: Anchor,
    pub orientation: Orientation,
}

impl PlacementPolicy {
    /// Build a policy from raw request tokens. Unknown positions fall back
    /// to center and unknown orientations to portrait.
    pub fn from_tokens(fit: bool, position: &str, orientation: &str) -> Self {
        Self {
            fit,
            position: Anchor::parse(position),
            orientation: Orientation::from_token(orientation),
        }
    }
}

/// Physical page geometry for one orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpec {
    pub paper: PaperSize,
    pub orientation: Orientation,
    pub margins: PageMargins,
}

impl PageSpec {
    pub fn new(paper: PaperSize, orientation: Orientation, margins: PageMargins) -> Self {
        Self {
            paper,
            orientation,
            margins,
        }
    }

    /// Full page size in millimeters, orientation applied
    pub fn page_size_mm(&self) -> Size {
        let (width, height) = self.paper.dimensions_with_orientation(self.orientation);
        Size::new(width, height)
    }

    /// Page size minus the margins on each axis
    pub fn usable_area(&self) -> Size {
        let page = self.page_size_mm();
        Size::new(
            page.width - self.margins.horizontal_mm(),
            page.height - self.margins.vertical_mm(),
        )
    }

    pub fn validate(&self) -> Result<()> {
        let m = &self.margins;
        for (side, value) in [
            ("top", m.top_mm),
            ("right", m.right_mm),
            ("bottom", m.bottom_mm),
            ("left", m.left_mm),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ImagesError::Config(format!(
                    "{} margin must be a non-negative number, got {}",
                    side, value
                )));
            }
        }

        let usable = self.usable_area();
        if !(usable.width.is_finite() && usable.width > 0.0)
            || !(usable.height.is_finite() && usable.height > 0.0)
        {
            return Err(ImagesError::Config(format!(
                "Margins leave no usable area on a {:?} {:?} page ({:.1} x {:.1} mm)",
                self.paper, self.orientation, usable.width, usable.height
            )));
        }
        Ok(())
    }
}

/// Everything the layout engine needs for one conversion
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    pub paper: PaperSize,
    pub margins: PageMargins,
    /// Resolution used to turn image pixels into millimeters
    pub dpi: f32,
    pub policy: PlacementPolicy,
    /// Title recorded in the document info dictionary
    pub title: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            paper: PaperSize::A4,
            margins: PageMargins::default(),
            dpi: DEFAULT_DPI,
            policy: PlacementPolicy::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl LayoutOptions {
    pub fn with_policy(mut self, policy: PlacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Page geometry for the policy's orientation
    pub fn page_spec(&self) -> PageSpec {
        PageSpec::new(self.paper, self.policy.orientation, self.margins)
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImagesError::Config(format!("Failed to parse options: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImagesError::Config(format!("Failed to serialize options: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(ImagesError::Config(format!(
                "DPI must be a positive number, got {}",
                self.dpi
            )));
        }
        let (width, height) = self.paper.dimensions_mm();
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ImagesError::Config(
                "Paper dimensions must be positive".to_string(),
            ));
        }
        self.page_spec().validate()
    }
}
