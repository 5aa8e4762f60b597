//! Units and defaults shared by layout and rendering.

/// Points per millimeter (1 inch = 72 points = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Resolution used to turn pixel dimensions into physical size when
/// nothing else is configured.
pub const DEFAULT_DPI: f32 = 300.0;

/// Default margin on every side of the page
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

/// Title written to the document info dictionary by default
pub const DEFAULT_TITLE: &str = "Images";

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Physical length of `px` pixels printed at `dpi`
#[inline]
pub fn px_to_mm(px: u32, dpi: f32) -> f32 {
    px as f32 * MM_PER_INCH / dpi
}
