//! In-process compression with lopdf

use crate::quality::QualityTier;
use crate::types::*;
use crate::Compressor;
use lopdf::Document;

/// Drops unreachable objects and deflates every stream.
///
/// No image resampling happens here, so the tier has no effect on the
/// result. Output larger than the input is discarded in favour of the
/// original bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCompressor;

impl Compressor for NativeCompressor {
    fn name(&self) -> &str {
        "native"
    }

    fn compress(&self, input: &[u8], tier: QualityTier) -> Result<Vec<u8>> {
        let mut doc = Document::load_mem(input)?;
        let pruned = doc.prune_objects();
        doc.renumber_objects();
        doc.compress();

        let mut output = Vec::with_capacity(input.len());
        doc.save_to(&mut output)?;
        log::debug!(
            "Native pass ({:?}) pruned {} objects: {} -> {} bytes",
            tier,
            pruned.len(),
            input.len(),
            output.len()
        );

        if output.len() >= input.len() {
            return Ok(input.to_vec());
        }
        Ok(output)
    }
}
