use crate::options::{PageSpec, PlacementPolicy};

use super::{PlacedImage, Size, compute_position, compute_scale};

/// Place one image on a page.
///
/// Scales the image into the page's usable area according to
/// `policy.fit`, anchors it at `policy.position`, then shifts the result
/// by the left and top margins so the coordinates are page-absolute.
pub fn place_image(image: Size, page: &PageSpec, policy: &PlacementPolicy) -> PlacedImage {
    let usable = page.usable_area();

    let (width, height) = compute_scale(
        image.width,
        image.height,
        usable.width,
        usable.height,
        policy.fit,
    );
    let (x, y) = compute_position(policy.position, usable.width, usable.height, width, height);

    PlacedImage {
        width_mm: width,
        height_mm: height,
        x_mm: x + page.margins.left_mm,
        y_mm: y + page.margins.top_mm,
    }
}
