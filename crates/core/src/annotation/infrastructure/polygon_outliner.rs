use crate::annotation::domain::face_annotator::FaceAnnotator;
use crate::shared::canvas::Canvas;
use crate::shared::constants::{DEFAULT_OUTLINE_THICKNESS, MAX_OUTLINE_THICKNESS, OUTLINE_COLOR};
use crate::shared::face_annotation::FaceAnnotation;

use super::line;

/// Draws each face polygon as a closed outline.
///
/// Every edge is clipped to the canvas and rasterised with Bresenham;
/// pixels under the brush are overwritten with the outline color.
/// A thickness above 1 stamps a square brush centred on each line pixel;
/// thickness is clamped to `1..=MAX_OUTLINE_THICKNESS`.
pub struct PolygonOutliner {
    color: [u8; 3],
    thickness: u32,
}

impl PolygonOutliner {
    pub fn new(color: [u8; 3], thickness: u32) -> Self {
        Self {
            color,
            thickness: thickness.clamp(1, MAX_OUTLINE_THICKNESS),
        }
    }

    fn stamp(&self, canvas: &mut Canvas, x: i64, y: i64) {
        let t = self.thickness as i64;
        if t == 1 {
            canvas.put_pixel(x, y, self.color);
            return;
        }
        let lo = -((t - 1) / 2);
        let hi = lo + t - 1;
        canvas.fill_rect(x + lo, y + lo, x + hi, y + hi, self.color);
    }
}

impl Default for PolygonOutliner {
    fn default() -> Self {
        Self::new(OUTLINE_COLOR, DEFAULT_OUTLINE_THICKNESS)
    }
}

impl FaceAnnotator for PolygonOutliner {
    fn annotate(&self, canvas: &mut Canvas, faces: &[FaceAnnotation]) {
        let (width, height) = (canvas.width(), canvas.height());
        for face in faces {
            for (a, b) in face.edges() {
                let Some(pixels) = line::clipped_line(a, b, width, height) else {
                    continue;
                };
                for (x, y) in pixels {
                    self.stamp(canvas, x, y);
                }
            }
        }
    }
}

/// Outlines `faces` on `canvas` in pure green, one pixel wide.
pub fn annotate_with_faces(canvas: &mut Canvas, faces: &[FaceAnnotation]) {
    PolygonOutliner::default().annotate(canvas, faces);
}
