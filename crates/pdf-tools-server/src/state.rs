use crate::config::{CompressorKind, ServerConfig};
use pdf_compress::{Compressor, GhostscriptCompressor, NativeCompressor};
use std::sync::Arc;

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub compressor: Arc<dyn Compressor>,
}

impl AppState {
    /// Build state with the compressor the config selects
    pub fn new(config: ServerConfig) -> Self {
        let compressor: Arc<dyn Compressor> = match config.compressor {
            CompressorKind::Ghostscript => Arc::new(
                GhostscriptCompressor::new(&config.ghostscript).with_work_dir(&config.temp_dir),
            ),
            CompressorKind::Native => Arc::new(NativeCompressor),
        };
        Self::with_compressor(config, compressor)
    }

    pub fn with_compressor(config: ServerConfig, compressor: Arc<dyn Compressor>) -> Self {
        Self {
            config: Arc::new(config),
            compressor,
        }
    }
}
