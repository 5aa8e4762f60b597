//! lopdf output for the layout engine
//!
//! - Embedding decoded images as Image XObjects
//! - Building one page per placed image

mod page;
mod xobject;

pub(crate) use xobject::embed_image;
pub(crate) use page::{PageTree, render_image_page};
