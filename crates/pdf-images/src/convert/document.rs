//! Finished documents and what went into them

use crate::layout::PlacedImage;
use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// One page written to the document
#[derive(Debug, Clone, PartialEq)]
pub struct PageReport {
    /// Zero-based position of the source in the input sequence
    pub source_index: usize,
    pub source_name: String,
    pub width_px: u32,
    pub height_px: u32,
    pub placement: PlacedImage,
}

/// An input that was left out of the document
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedImage {
    pub source_index: usize,
    pub source_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionReport {
    pub pages: Vec<PageReport>,
    pub skipped: Vec<SkippedImage>,
}

/// A complete PDF built from a sequence of images.
///
/// Pages are in input order with skipped images left out. The document is
/// only handed out once every page has been appended.
#[derive(Debug)]
pub struct ImageDocument {
    pub(crate) document: Document,
    pub(crate) report: ConversionReport,
}

impl ImageDocument {
    pub fn page_count(&self) -> usize {
        self.report.pages.len()
    }

    pub fn report(&self) -> &ConversionReport {
        &self.report
    }

    /// Serialize to PDF bytes, consuming the document
    pub fn into_bytes(self) -> Result<(Vec<u8>, ConversionReport)> {
        let ImageDocument {
            mut document,
            report,
        } = self;
        let mut writer = Vec::new();
        document
            .save_to(&mut writer)
            .map_err(|e| ImagesError::Serialization(e.to_string()))?;
        Ok((writer, report))
    }

    /// Serialize and write to `path`, returning the report
    pub async fn save(self, path: impl AsRef<Path>) -> Result<ConversionReport> {
        let path = path.as_ref().to_owned();
        let (bytes, report) = tokio::task::spawn_blocking(move || self.into_bytes()).await??;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ImagesError::Serialization(format!("{}: {}", path.display(), e)))?;
        Ok(report)
    }
}
