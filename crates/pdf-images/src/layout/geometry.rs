//! Scale and anchor calculations
//!
//! Pure functions over plain numbers. Inputs are expected to be strictly
//! positive; callers validate dimensions before reaching this point.

use super::Anchor;

/// Scale an image into the usable area.
///
/// - Larger than the area on either axis: shrink uniformly until it fits.
/// - Smaller and `fit` set: grow uniformly until one axis fills the area.
/// - Otherwise the native size is kept.
///
/// Aspect ratio is preserved in every case.
pub fn compute_scale(
    img_width: f32,
    img_height: f32,
    usable_width: f32,
    usable_height: f32,
    fit: bool,
) -> (f32, f32) {
    if img_width > usable_width || img_height > usable_height || fit {
        let ratio = (usable_width / img_width).min(usable_height / img_height);
        (img_width * ratio, img_height * ratio)
    } else {
        (img_width, img_height)
    }
}

/// Offset of an image inside an area for the given anchor.
///
/// Coordinates are relative to the area's top-left corner; the caller adds
/// the margins to get page coordinates.
pub fn compute_position(
    anchor: Anchor,
    area_width: f32,
    area_height: f32,
    img_width: f32,
    img_height: f32,
) -> (f32, f32) {
    (
        anchor.horizontal().offset(area_width, img_width),
        anchor.vertical().offset(area_height, img_height),
    )
}

/// [`compute_position`] for a raw position token (unknown tokens center)
pub fn compute_position_str(
    anchor: &str,
    area_width: f32,
    area_height: f32,
    img_width: f32,
    img_height: f32,
) -> (f32, f32) {
    compute_position(
        Anchor::parse(anchor),
        area_width,
        area_height,
        img_width,
        img_height,
    )
}
