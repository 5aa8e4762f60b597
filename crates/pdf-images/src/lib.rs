//! Image-to-PDF page layout.
//!
//! Every input image becomes one page of the output document. The
//! [`layout`] module holds the pure geometry (scale and anchor placement
//! inside the usable page area); [`convert`] walks the images in order,
//! skips the ones that cannot be read and streams the rest into a
//! `lopdf` document.

mod constants;
pub mod convert;
pub mod layout;
mod options;
mod render;
mod source;
mod types;

pub use constants::*;
pub use convert::{
    ConversionReport, ImageDocument, PageReport, SkippedImage, build_document, convert_images,
};
pub use layout::{
    Anchor, PlacedImage, Rect, Size, compute_position, compute_position_str, compute_scale,
    place_image,
};
pub use options::*;
pub use source::{ImageSource, LoadedImage, probe_dimensions};
pub use types::*;
