use std::path::Path;

use crate::annotation::domain::face_annotator::FaceAnnotator;
use crate::detection::domain::face_detector::FaceDetector;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::canvas::Canvas;
use crate::shared::face_annotation::FaceAnnotation;

/// Single-image pipeline: detect → read → outline → write.
///
/// Detection runs first so a rejected input fails before the image is
/// decoded locally.
pub struct OutlineFacesUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    detector: Box<dyn FaceDetector>,
    annotator: Box<dyn FaceAnnotator>,
    max_results: u32,
}

impl OutlineFacesUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        detector: Box<dyn FaceDetector>,
        annotator: Box<dyn FaceAnnotator>,
        max_results: u32,
    ) -> Self {
        Self {
            reader,
            writer,
            detector,
            annotator,
            max_results,
        }
    }

    /// Detects faces and returns the outlined image in memory.
    pub fn outline(
        &self,
        input_path: &Path,
    ) -> Result<(Canvas, Vec<FaceAnnotation>), Box<dyn std::error::Error>> {
        let faces = self.detector.detect(input_path, self.max_results)?;
        let mut canvas = self.reader.read(input_path)?;
        self.annotator.annotate(&mut canvas, &faces);
        Ok((canvas, faces))
    }

    /// Detects faces, outlines them and writes the result.
    ///
    /// Returns the detected faces. The output is written even when none
    /// were found.
    pub fn execute(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<Vec<FaceAnnotation>, Box<dyn std::error::Error>> {
        let (canvas, faces) = self.outline(input_path)?;
        log::info!(
            "Found {} face{}",
            faces.len(),
            if faces.len() == 1 { "" } else { "s" }
        );
        log::info!("Writing to file {}", output_path.display());
        self.writer.write(output_path, &canvas)?;
        Ok(faces)
    }
}
