use pdf_images::*;

#[test]
fn test_default_options_are_valid() {
    assert!(LayoutOptions::default().validate().is_ok());
}

#[test]
fn test_validation_rejects_bad_dpi() {
    let mut options = LayoutOptions::default();
    options.dpi = 0.0;
    assert!(matches!(options.validate(), Err(ImagesError::Config(_))));

    options.dpi = f32::NAN;
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_rejects_oversized_margins() {
    let mut options = LayoutOptions::default();
    options.margins.left_mm = 105.0;
    options.margins.right_mm = 105.0;
    match options.validate() {
        Err(ImagesError::Config(msg)) => assert!(msg.contains("usable area")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_non_finite_margins() {
    let mut options = LayoutOptions::default();
    options.margins = PageMargins::uniform(f32::NAN);
    match options.validate() {
        Err(ImagesError::Config(msg)) => assert!(msg.contains("margin")),
        other => panic!("Expected Config error, got {:?}", other),
    }

    let mut options = LayoutOptions::default();
    options.margins.bottom_mm = f32::INFINITY;
    assert!(matches!(options.validate(), Err(ImagesError::Config(_))));
}

#[test]
fn test_validation_rejects_negative_margins() {
    let mut options = LayoutOptions::default();
    options.margins = PageMargins::uniform(-20.0);
    assert!(matches!(options.validate(), Err(ImagesError::Config(_))));

    let mut options = LayoutOptions::default();
    options.margins.left_mm = -0.5;
    assert!(matches!(options.validate(), Err(ImagesError::Config(_))));

    let mut options = LayoutOptions::default();
    options.margins = PageMargins::uniform(0.0);
    assert!(options.validate().is_ok());
}

#[test]
fn test_non_finite_margins_never_reach_the_engine() {
    let options = LayoutOptions {
        margins: PageMargins::uniform(f32::NAN),
        ..Default::default()
    };
    let result = build_document(&[ImageSource::from_bytes("a.png", vec![0u8; 4])], &options);
    assert!(matches!(result, Err(ImagesError::Config(_))));
}

#[test]
fn test_validation_rejects_non_finite_custom_paper() {
    let mut options = LayoutOptions::default();
    options.paper = PaperSize::Custom {
        width_mm: f32::NAN,
        height_mm: 297.0,
    };
    assert!(matches!(options.validate(), Err(ImagesError::Config(_))));
}

#[test]
fn test_client_error_classification() {
    assert!(ImagesError::NoImages.is_client_error());
    assert!(ImagesError::NoReadableImages { skipped: 1 }.is_client_error());
    assert!(!ImagesError::Serialization("disk full".into()).is_client_error());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let mut options = LayoutOptions::default();
    options.paper = PaperSize::Letter;
    options.dpi = 150.0;
    options.policy = PlacementPolicy::from_tokens(true, "bottom-right", "L");
    options.title = "Holiday".to_string();

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = LayoutOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[test]
fn test_anchor_serializes_as_kebab_case() {
    let json = serde_json::to_string(&Anchor::BottomCenter).unwrap();
    assert_eq!(json, "\"bottom-center\"");

    let policy: PlacementPolicy =
        serde_json::from_str(r#"{"fit": true, "position": "top-right"}"#).unwrap();
    assert!(policy.fit);
    assert_eq!(policy.position, Anchor::TopRight);
    assert_eq!(policy.orientation, Orientation::Portrait);
}
