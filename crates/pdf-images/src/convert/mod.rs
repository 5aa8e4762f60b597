//! Image-to-PDF conversion
//!
//! Orchestrates one conversion:
//! 1. Validate the options and derive the page geometry
//! 2. For each image in order: read it, place it, append a page
//! 3. Close the page tree and hand back the document with its report
//!
//! An image that cannot be read or decoded is logged and skipped; the
//! rest of the batch still converts.

mod document;

pub use document::{ConversionReport, ImageDocument, PageReport, SkippedImage};

use crate::constants::px_to_mm;
use crate::layout::{Size, place_image};
use crate::options::LayoutOptions;
use crate::render::{PageTree, embed_image, render_image_page};
use crate::source::ImageSource;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, StringFormat};

/// Convert images to a PDF off the async runtime
pub async fn convert_images(
    images: Vec<ImageSource>,
    options: LayoutOptions,
) -> Result<ImageDocument> {
    tokio::task::spawn_blocking(move || build_document(&images, &options)).await?
}

/// Build a document with one page per readable image, in input order.
pub fn build_document(images: &[ImageSource], options: &LayoutOptions) -> Result<ImageDocument> {
    if images.is_empty() {
        return Err(ImagesError::NoImages);
    }
    options.validate()?;

    let page = options.page_spec();
    let page_size = page.page_size_mm();
    let policy = options.policy;

    let mut output = Document::with_version("1.7");
    let mut tree = PageTree::new(&mut output);
    let mut report = ConversionReport::default();

    for (index, source) in images.iter().enumerate() {
        let loaded = match source.load() {
            Ok(loaded) => loaded,
            Err(e) => {
                skip(&mut report, index, source.name(), e);
                continue;
            }
        };

        let image_id = match embed_image(&mut output, &loaded) {
            Ok(id) => id,
            Err(e) => {
                skip(&mut report, index, loaded.name, e);
                continue;
            }
        };

        let native = Size::new(
            px_to_mm(loaded.width_px, options.dpi),
            px_to_mm(loaded.height_px, options.dpi),
        );
        let placement = place_image(native, &page, &policy);
        log::debug!(
            "Page {}: {} ({}x{} px) -> {:.1}x{:.1} mm at ({:.1}, {:.1})",
            tree.len() + 1,
            loaded.name,
            loaded.width_px,
            loaded.height_px,
            placement.width_mm,
            placement.height_mm,
            placement.x_mm,
            placement.y_mm
        );

        let page_id = render_image_page(&mut output, tree.id, page_size, image_id, &placement);
        tree.push(page_id);
        report.pages.push(PageReport {
            source_index: index,
            source_name: loaded.name,
            width_px: loaded.width_px,
            height_px: loaded.height_px,
            placement,
        });
    }

    if report.pages.is_empty() {
        return Err(ImagesError::NoReadableImages {
            skipped: report.skipped.len(),
        });
    }

    tree.finish(&mut output);
    set_info(&mut output, &options.title);

    log::info!(
        "Laid out {} page(s) ({}, {:?}, position {}, fit {}), skipped {}",
        report.pages.len(),
        policy.orientation.token(),
        options.paper,
        policy.position,
        policy.fit,
        report.skipped.len()
    );

    Ok(ImageDocument {
        document: output,
        report,
    })
}

fn skip(report: &mut ConversionReport, index: usize, name: String, error: ImagesError) {
    let reason = match error {
        ImagesError::UnreadableImage { reason, .. } => reason,
        other => other.to_string(),
    };
    log::warn!("Skipping image {} ({}): {}", index + 1, name, reason);
    report.skipped.push(SkippedImage {
        source_index: index,
        source_name: name,
        reason,
    });
}

fn set_info(output: &mut Document, title: &str) {
    let created = chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string();
    let info = Dictionary::from_iter(vec![
        (
            "Title",
            Object::String(title.as_bytes().to_vec(), StringFormat::Literal),
        ),
        (
            "Producer",
            Object::String(
                concat!("pdf-images ", env!("CARGO_PKG_VERSION"))
                    .as_bytes()
                    .to_vec(),
                StringFormat::Literal,
            ),
        ),
        (
            "CreationDate",
            Object::String(created.into_bytes(), StringFormat::Literal),
        ),
    ]);
    let info_id = output.add_object(info);
    output.trailer.set("Info", info_id);
}
