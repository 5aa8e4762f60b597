//! Image inputs for the layout engine

use crate::types::*;
use image::{ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::PathBuf;

/// An image to be placed on its own page
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Image file on disk, read when the engine reaches it
    Path(PathBuf),
    /// Image already held in memory (e.g. an uploaded file)
    Bytes { name: String, data: Vec<u8> },
}

impl ImageSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        ImageSource::Path(path.into())
    }

    pub fn from_bytes(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        ImageSource::Bytes {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Display name used in logs and reports
    pub fn name(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Bytes { name, .. } => name.clone(),
        }
    }

    /// Read the content and its header.
    ///
    /// Fails with [`ImagesError::UnreadableImage`] when the file is missing
    /// or the bytes are not a supported image.
    pub fn load(&self) -> Result<LoadedImage> {
        let name = self.name();
        let data = match self {
            ImageSource::Path(path) => {
                std::fs::read(path).map_err(|e| ImagesError::unreadable(&name, e))?
            }
            ImageSource::Bytes { data, .. } => data.clone(),
        };

        let (format, width_px, height_px) =
            probe_dimensions(&data).map_err(|e| ImagesError::unreadable(&name, e))?;

        Ok(LoadedImage {
            name,
            format,
            width_px,
            height_px,
            data,
        })
    }
}

/// An image whose header has been read successfully
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub name: String,
    pub format: ImageFormat,
    pub width_px: u32,
    pub height_px: u32,
    pub data: Vec<u8>,
}

/// Guess the format from the content and read the pixel dimensions from
/// the header without decoding the pixels.
pub fn probe_dimensions(data: &[u8]) -> std::result::Result<(ImageFormat, u32, u32), String> {
    if data.is_empty() {
        return Err("empty file".to_string());
    }

    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| e.to_string())?;
    let format = reader
        .format()
        .ok_or_else(|| "unrecognized image format".to_string())?;
    if !is_supported(format) {
        return Err(format!("unsupported image format {:?}", format));
    }

    let (width, height) = reader.into_dimensions().map_err(|e| e.to_string())?;
    if width == 0 || height == 0 {
        return Err(format!("degenerate image size {}x{}", width, height));
    }
    Ok((format, width, height))
}

fn is_supported(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg
            | ImageFormat::Png
            | ImageFormat::Gif
            | ImageFormat::Bmp
            | ImageFormat::WebP
    )
}
