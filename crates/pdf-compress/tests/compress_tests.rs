use lopdf::{Dictionary, Document, Object, Stream};
use pdf_compress::*;
use std::process::Command;
use std::sync::Arc;

/// A PDF with bulky uncompressed content and an unreachable object
fn create_test_pdf(num_pages: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for i in 0..num_pages {
        let content = format!("BT /F1 12 Tf 72 720 Td (Page {}) Tj ET\n", i).repeat(200);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    // Orphan
    doc.add_object(Stream::new(Dictionary::new(), vec![b'x'; 4096]));

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[test]
fn test_native_compression_shrinks_and_keeps_pages() {
    let input = create_test_pdf(3);
    let output = NativeCompressor.compress(&input, QualityTier::Ebook).unwrap();

    assert!(output.len() < input.len());
    let doc = Document::load_mem(&output).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
}

#[test]
fn test_native_compression_rejects_garbage() {
    let result = NativeCompressor.compress(b"%PDF-1.7 but nothing else", QualityTier::Screen);
    assert!(matches!(result, Err(CompressError::Pdf(_))));
}

#[test]
fn test_check_pdf() {
    assert!(matches!(check_pdf(&[]), Err(CompressError::EmptyInput)));
    assert!(matches!(check_pdf(b"GIF89a"), Err(CompressError::NotPdf)));
    assert!(check_pdf(b"%PDF-1.4\n").is_ok());
    assert!(CompressError::NotPdf.is_client_error());
}

#[tokio::test]
async fn test_compress_async_rejects_non_pdf() {
    let compressor: Arc<dyn Compressor> = Arc::new(NativeCompressor);
    let result = compress_async(compressor, b"hello".to_vec(), QualityTier::Printer).await;
    assert!(matches!(result, Err(CompressError::NotPdf)));
}

#[tokio::test]
async fn test_compress_async_native() {
    let compressor: Arc<dyn Compressor> = Arc::new(NativeCompressor);
    let input = create_test_pdf(2);
    let output = compress_async(compressor, input.clone(), QualityTier::from_quality(75))
        .await
        .unwrap();
    assert!(output.len() <= input.len());
    assert!(output.starts_with(b"%PDF-"));
}

#[test]
fn test_ghostscript_round_trip_when_installed() {
    if Command::new("gs").arg("--version").output().is_err() {
        return;
    }

    let input = create_test_pdf(2);
    let output = GhostscriptCompressor::default()
        .compress(&input, QualityTier::Screen)
        .unwrap();
    let doc = Document::load_mem(&output).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}
