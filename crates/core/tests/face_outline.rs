use std::fs;
use std::path::PathBuf;

use face_outline_core::annotation::infrastructure::polygon_outliner::annotate_with_faces;
use face_outline_core::detection::domain::face_detector::FaceDetector;
use face_outline_core::detection::infrastructure::vision_api_detector::{
    Credentials, VisionApiDetector,
};
use face_outline_core::imaging::domain::image_reader::ImageReader;
use face_outline_core::imaging::domain::image_writer::ImageWriter;
use face_outline_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use face_outline_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use face_outline_core::shared::canvas::Canvas;
use face_outline_core::shared::face_annotation::FaceAnnotation;
use face_outline_core::shared::point::Point;
use face_outline_core::shared::settings::Settings;

const MAX_RESULTS: u32 = 3;

/// Detector configured from the environment, or `None` when no
/// credentials are available.
fn live_detector() -> Option<VisionApiDetector> {
    let settings = Settings::default().with_env_overrides(|key| std::env::var(key).ok());
    VisionApiDetector::from_settings(&settings).ok()
}

fn face(points: &[(i32, i32)]) -> FaceAnnotation {
    FaceAnnotation::new(points.iter().copied().map(Point::from).collect())
}

#[test]
fn detect_faces_with_face_returns_at_least_one_face() {
    // Requires network access, credentials and a photo with a face.
    let (Some(detector), Ok(sample)) = (
        live_detector(),
        std::env::var("FACE_OUTLINE_SAMPLE_FACE"),
    ) else {
        return;
    };

    let faces = detector.detect(&PathBuf::from(sample), MAX_RESULTS).unwrap();

    assert!(!faces.is_empty(), "expected at least one face");
    assert!(!faces[0].vertices.is_empty(), "face #0 has no vertices");
}

#[test]
fn detect_faces_bad_image_is_malformed_request() {
    let detector = live_detector().unwrap_or_else(|| {
        VisionApiDetector::new("http://127.0.0.1:9", Credentials::ApiKey("unused".into()))
            .unwrap()
    });
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "This is not an image.\n").unwrap();

    let err = detector.detect(&path, MAX_RESULTS).unwrap_err();
    let io: std::io::Error = err.into();

    assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
    assert!(io.to_string().to_lowercase().contains("malformed request"));
}

#[test]
fn annotate_with_faces_many_faces_outlines_faces() {
    let faces = vec![
        face(&[(10, 5), (20, 5), (20, 25), (10, 25)]),
        face(&[(60, 50), (70, 60), (50, 60)]),
    ];
    let mut canvas = Canvas::blank(100, 100);

    annotate_with_faces(&mut canvas, &faces);

    for (x, y) in [(10, 5), (20, 5), (20, 25), (10, 25), (60, 50), (70, 60), (50, 60)] {
        let [r, g, b] = canvas.pixel(x, y).unwrap();
        assert_eq!(g, 0xff, "vertex ({x}, {y}) green channel");
        assert_eq!((r, b), (0, 0), "vertex ({x}, {y}) red/blue channels");
    }
}

#[test]
fn outlined_image_survives_png_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out").join("outlined.png");
    image::RgbImage::from_pixel(64, 48, image::Rgb([90, 90, 90]))
        .save(&input)
        .unwrap();

    let mut canvas = ImageFileReader::new().read(&input).unwrap();
    annotate_with_faces(&mut canvas, &[face(&[(4, 4), (40, 4), (40, 30), (4, 30)])]);
    ImageFileWriter::new().write(&output, &canvas).unwrap();

    let written = image::open(&output).unwrap().to_rgb8();
    assert_eq!(written.get_pixel(4, 4).0, [0, 255, 0]);
    assert_eq!(written.get_pixel(20, 20).0, [90, 90, 90]);
}
