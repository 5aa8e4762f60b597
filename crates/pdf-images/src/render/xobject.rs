//! Image XObject creation

use crate::source::LoadedImage;
use crate::types::*;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::{ColorType, ImageFormat};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;

/// Add `image` to `output` as an Image XObject.
///
/// JPEG data is passed through untouched behind `DCTDecode` unless it is
/// CMYK. Everything else is decoded to 8-bit RGB and deflated, with an
/// `SMask` when the source carries transparency.
pub(crate) fn embed_image(output: &mut Document, image: &LoadedImage) -> Result<ObjectId> {
    let decoded = image::load_from_memory(&image.data)
        .map_err(|e| ImagesError::unreadable(&image.name, e))?;
    let (width, height) = (decoded.width(), decoded.height());

    if image.format == ImageFormat::Jpeg && jpeg_components(&image.data) != Some(4) {
        let color_space = match decoded.color() {
            ColorType::L8 | ColorType::L16 => "DeviceGray",
            _ => "DeviceRGB",
        };
        let dict = image_dict(width, height, color_space, "DCTDecode");
        let mut stream = Stream::new(dict, image.data.clone());
        stream.allows_compression = false;
        return Ok(output.add_object(stream));
    }

    let rgba = decoded.to_rgba8();
    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    let mut alpha = Vec::with_capacity((width * height) as usize);
    let mut has_alpha = false;
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        has_alpha |= a != u8::MAX;
        rgb.extend_from_slice(&[r, g, b]);
        alpha.push(a);
    }

    let mut dict = image_dict(width, height, "DeviceRGB", "FlateDecode");
    if has_alpha {
        let mask_dict = image_dict(width, height, "DeviceGray", "FlateDecode");
        let mask_id = output.add_object(deflated_stream(mask_dict, &alpha)?);
        dict.set("SMask", Object::Reference(mask_id));
    }

    Ok(output.add_object(deflated_stream(dict, &rgb)?))
}

fn image_dict(width: u32, height: u32, color_space: &str, filter: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color_space.as_bytes().to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(filter.as_bytes().to_vec()));
    dict
}

/// Stream holding already-deflated data; lopdf must not compress it again.
fn deflated_stream(dict: Dictionary, raw: &[u8]) -> Result<Stream> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw)?;
    let mut stream = Stream::new(dict, encoder.finish()?);
    stream.allows_compression = false;
    Ok(stream)
}

/// Number of colour components declared by the first SOF marker of a JPEG
fn jpeg_components(data: &[u8]) -> Option<u8> {
    let mut pos = 2;
    while pos + 4 <= data.len() {
        if data[pos] != 0xFF {
            return None;
        }
        let marker = data[pos + 1];
        // Padding bytes between markers
        if marker == 0xFF {
            pos += 1;
            continue;
        }
        let length = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        let is_sof = matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC);
        if is_sof {
            return data.get(pos + 9).copied();
        }
        pos += 2 + length;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_components_reads_sof() {
        // SOI, APP0 (length 4), SOF0 declaring 3 components
        let data = [
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0x00, 0x00, 0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00,
            0x10, 0x00, 0x10, 0x03,
        ];
        assert_eq!(jpeg_components(&data), Some(3));
    }

    #[test]
    fn test_jpeg_components_truncated() {
        assert_eq!(jpeg_components(&[0xFF, 0xD8]), None);
        assert_eq!(jpeg_components(&[0xFF, 0xD8, 0x12, 0x34, 0x00, 0x00]), None);
    }
}
