use crate::shared::point::Point;

/// A detected face: the polygon outlining it, in vertex order.
///
/// Consecutive vertices form the edges and the last vertex connects back
/// to the first. Polygons may be non-convex.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceAnnotation {
    pub vertices: Vec<Point>,
    /// Detection confidence in `[0, 1]`, when the service reports one.
    pub confidence: Option<f64>,
}

impl FaceAnnotation {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self {
            vertices,
            confidence: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Iterates the polygon's edges, closing last-to-first.
    ///
    /// Polygons with fewer than two vertices have no edges.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = if self.vertices.len() < 2 {
            0
        } else {
            self.vertices.len()
        };
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn face(points: &[(i32, i32)]) -> FaceAnnotation {
        FaceAnnotation::new(points.iter().copied().map(Point::from).collect())
    }

    #[test]
    fn test_edges_close_the_polygon() {
        let f = face(&[(60, 50), (70, 60), (50, 60)]);
        let edges: Vec<_> = f.edges().collect();
        assert_eq!(
            edges,
            vec![
                (Point::new(60, 50), Point::new(70, 60)),
                (Point::new(70, 60), Point::new(50, 60)),
                (Point::new(50, 60), Point::new(60, 50)),
            ]
        );
    }

    #[rstest]
    #[case::empty(&[], 0)]
    #[case::single(&[(1, 1)], 0)]
    #[case::segment(&[(1, 1), (5, 5)], 2)]
    #[case::quad(&[(10, 5), (20, 5), (20, 25), (10, 25)], 4)]
    fn test_edge_count(#[case] points: &[(i32, i32)], #[case] expected: usize) {
        assert_eq!(face(points).edges().count(), expected);
    }

    #[test]
    fn test_with_confidence() {
        let f = face(&[(0, 0)]).with_confidence(0.75);
        assert_eq!(f.confidence, Some(0.75));
    }
}
