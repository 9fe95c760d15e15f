use crate::shared::canvas::Canvas;
use crate::shared::face_annotation::FaceAnnotation;

/// Domain interface for marking detected faces on an image.
///
/// Implementations modify the canvas in place and cannot fail: degenerate
/// polygons and off-canvas geometry are skipped, not reported.
pub trait FaceAnnotator: Send {
    fn annotate(&self, canvas: &mut Canvas, faces: &[FaceAnnotation]);
}
