#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use lopdf::{Document, Object, ObjectId};
use std::io::Cursor;

/// Encode a solid-colour RGB image in memory
pub fn encode_image(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 40, 90])));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

/// Encode a half-transparent RGBA PNG
pub fn encode_transparent_png(width: u32, height: u32) -> Vec<u8> {
    let img =
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 128])));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

pub fn number(obj: &Object) -> f32 {
    match obj {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r,
        other => panic!("Expected a number, got {:?}", other),
    }
}

/// Page object ids in page order
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// (width, height) of a page's MediaBox in points
pub fn media_box(doc: &Document, page_id: ObjectId) -> (f32, f32) {
    let page = doc.get_dictionary(page_id).unwrap();
    let mb = page.get(b"MediaBox").unwrap().as_array().unwrap();
    (number(&mb[2]), number(&mb[3]))
}

/// The Image XObject drawn on a page
pub fn page_image(doc: &Document, page_id: ObjectId) -> lopdf::Dictionary {
    let page = doc.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
    let image_id = xobjects.get(b"Im0").unwrap().as_reference().unwrap();
    doc.get_object(image_id)
        .unwrap()
        .as_stream()
        .unwrap()
        .dict
        .clone()
}

/// Pixel size recorded on a page's image
pub fn page_image_size(doc: &Document, page_id: ObjectId) -> (i64, i64) {
    let dict = page_image(doc, page_id);
    (
        dict.get(b"Width").unwrap().as_i64().unwrap(),
        dict.get(b"Height").unwrap().as_i64().unwrap(),
    )
}

/// The `a b c d e f` operands of the page's `cm` operator
pub fn placement_matrix(doc: &Document, page_id: ObjectId) -> Vec<f32> {
    let content = String::from_utf8(doc.get_page_content(page_id).unwrap()).unwrap();
    let before_cm = content.split(" cm").next().unwrap();
    before_cm
        .split_whitespace()
        .skip(1)
        .map(|v| v.parse().unwrap())
        .collect()
}
