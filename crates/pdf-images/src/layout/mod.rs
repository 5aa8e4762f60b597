//! Geometry for placing one image on one page
//!
//! - Scaling an image into the usable area (shrink to fit, optional upscale)
//! - Anchoring the scaled image at one of nine points
//! - Translating the result into page coordinates

mod geometry;
mod placement;
mod types;

pub use geometry::*;
pub use placement::*;
pub use types::*;
