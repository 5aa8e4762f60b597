//! PDF size reduction
//!
//! Compression is a capability behind the [`Compressor`] trait so callers
//! never care whether bytes go through Ghostscript or stay in-process.

mod ghostscript;
mod native;
mod quality;
mod types;

pub use ghostscript::GhostscriptCompressor;
pub use native::NativeCompressor;
pub use quality::{DEFAULT_QUALITY, QualityTier, parse_quality};
pub use types::*;

use std::sync::Arc;

/// Rewrites a PDF at a smaller size
pub trait Compressor: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Compress `input` (a complete PDF) at the given tier
    fn compress(&self, input: &[u8], tier: QualityTier) -> Result<Vec<u8>>;
}

/// Run a compressor on the blocking pool
pub async fn compress_async(
    compressor: Arc<dyn Compressor>,
    input: Vec<u8>,
    tier: QualityTier,
) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || {
        check_pdf(&input)?;
        let output = compressor.compress(&input, tier)?;
        log::info!(
            "{} compressed {} -> {} bytes ({:?})",
            compressor.name(),
            input.len(),
            output.len(),
            tier
        );
        Ok(output)
    })
    .await?
}

/// Reject empty or non-PDF input before handing it to a tool
pub fn check_pdf(input: &[u8]) -> Result<()> {
    if input.is_empty() {
        return Err(CompressError::EmptyInput);
    }
    if !input.starts_with(b"%PDF-") {
        return Err(CompressError::NotPdf);
    }
    Ok(())
}
