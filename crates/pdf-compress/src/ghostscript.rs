//! Compression by shelling out to Ghostscript

use crate::quality::QualityTier;
use crate::types::*;
use crate::Compressor;
use std::path::PathBuf;
use std::process::Command;

/// Runs `gs -sDEVICE=pdfwrite` with the tier's `PDFSETTINGS` preset.
///
/// Input and output go through a private temporary directory, so
/// concurrent calls never share file names.
#[derive(Debug, Clone)]
pub struct GhostscriptCompressor {
    binary: PathBuf,
    work_dir: Option<PathBuf>,
}

impl Default for GhostscriptCompressor {
    fn default() -> Self {
        Self::new("gs")
    }
}

impl GhostscriptCompressor {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            work_dir: None,
        }
    }

    /// Create scratch directories under `dir` instead of the system temp dir
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    /// Full argument list for one run
    pub fn arguments(tier: QualityTier, input: &str, output: &str) -> Vec<String> {
        vec![
            "-sDEVICE=pdfwrite".to_string(),
            "-dCompatibilityLevel=1.4".to_string(),
            format!("-dPDFSETTINGS={}", tier.pdf_settings()),
            "-dNOPAUSE".to_string(),
            "-dQUIET".to_string(),
            "-dBATCH".to_string(),
            format!("-sOutputFile={}", output),
            input.to_string(),
        ]
    }
}

impl Compressor for GhostscriptCompressor {
    fn name(&self) -> &str {
        "ghostscript"
    }

    fn compress(&self, input: &[u8], tier: QualityTier) -> Result<Vec<u8>> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("pdf-compress");
        let workdir = match &self.work_dir {
            Some(dir) => builder.tempdir_in(dir)?,
            None => builder.tempdir()?,
        };
        let input_path = workdir.path().join("input.pdf");
        let output_path = workdir.path().join("output.pdf");
        std::fs::write(&input_path, input)?;

        let args = Self::arguments(
            tier,
            &input_path.to_string_lossy(),
            &output_path.to_string_lossy(),
        );
        log::debug!("Running {} {}", self.binary.display(), args.join(" "));

        let result = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(|e| CompressError::ToolUnavailable {
                tool: self.binary.display().to_string(),
                source: e,
            })?;

        if !result.status.success() {
            let mut output = String::from_utf8_lossy(&result.stderr).trim().to_string();
            if output.is_empty() {
                output = String::from_utf8_lossy(&result.stdout).trim().to_string();
            }
            return Err(CompressError::Tool {
                status: result
                    .status
                    .code()
                    .map_or_else(|| "signal".to_string(), |c| format!("exit code {}", c)),
                output,
            });
        }

        Ok(std::fs::read(&output_path)?)
    }
}
