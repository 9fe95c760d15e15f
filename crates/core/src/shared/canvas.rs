use ndarray::{s, ArrayView3, ArrayViewMut3, Axis};

/// An RGB image held as contiguous bytes in row-major order.
///
/// Encoding and decoding happen at the I/O boundary only; detection and
/// outlining treat the pixel data as a plain grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

pub const CHANNELS: usize = 3;

impl Canvas {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * CHANNELS,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// A canvas filled with black.
    pub fn blank(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0, 0, 0])
    }

    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take((width as usize) * (height as usize) * CHANNELS)
            .collect();
        Self::new(data, width, height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(x, y)` lies on the canvas.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Returns the pixel at `(x, y)`, or `None` when off-canvas.
    pub fn pixel(&self, x: i64, y: i64) -> Option<[u8; 3]> {
        let i = self.offset(x, y)?;
        let px = self.data.get(i..i + CHANNELS)?;
        Some([px[0], px[1], px[2]])
    }

    /// Overwrites the pixel at `(x, y)`. Off-canvas writes are ignored.
    pub fn put_pixel(&mut self, x: i64, y: i64, rgb: [u8; 3]) {
        let Some(i) = self.offset(x, y) else {
            return;
        };
        if let Some(px) = self.data.get_mut(i..i + CHANNELS) {
            px.copy_from_slice(&rgb);
        }
    }

    /// Paints the inclusive rectangle `[x0, x1] x [y0, y1]`. Only the part
    /// on the canvas is visited.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, rgb: [u8; 3]) {
        let (x0, x1) = (x0.max(0), x1.min(self.width as i64 - 1));
        let (y0, y1) = (y0.max(0), y1.min(self.height as i64 - 1));
        if x0 > x1 || y0 > y1 {
            return;
        }
        let mut view = self.as_ndarray_mut();
        let mut region = view.slice_mut(s![
            y0 as usize..=y1 as usize,
            x0 as usize..=x1 as usize,
            ..
        ]);
        for mut px in region.lanes_mut(Axis(2)) {
            for (c, value) in rgb.iter().enumerate() {
                px[c] = *value;
            }
        }
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Canvas data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        let shape = self.shape();
        ArrayViewMut3::from_shape(shape, &mut self.data)
            .expect("Canvas data length must match dimensions")
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + x as usize) * CHANNELS)
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let canvas = Canvas::new(data.clone(), 2, 2);
        assert_eq!(canvas.width(), 2);
        assert_eq!(canvas.height(), 2);
        assert_eq!(canvas.data(), &data[..]);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * 3")]
    fn test_mismatched_data_length_panics_in_debug() {
        Canvas::new(vec![0u8; 10], 2, 2);
    }

    #[test]
    fn test_filled_sets_every_pixel() {
        let canvas = Canvas::filled(3, 2, [1, 2, 3]);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(canvas.pixel(x, y), Some([1, 2, 3]));
            }
        }
    }

    #[test]
    fn test_put_pixel_row_major() {
        let mut canvas = Canvas::blank(4, 2);
        canvas.put_pixel(1, 1, [10, 20, 30]);
        // row=1, col=1 → offset (1*4 + 1) * 3
        assert_eq!(&canvas.data()[15..18], &[10, 20, 30]);
        assert_eq!(canvas.pixel(1, 1), Some([10, 20, 30]));
    }

    #[test]
    fn test_put_pixel_off_canvas_is_ignored() {
        let mut canvas = Canvas::blank(4, 4);
        let before = canvas.clone();
        canvas.put_pixel(-1, 0, [255, 255, 255]);
        canvas.put_pixel(0, 4, [255, 255, 255]);
        canvas.put_pixel(i64::MAX, i64::MIN, [255, 255, 255]);
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_pixel_off_canvas_is_none() {
        let canvas = Canvas::blank(2, 2);
        assert_eq!(canvas.pixel(2, 0), None);
        assert_eq!(canvas.pixel(0, 2), None);
        assert_eq!(canvas.pixel(-1, 0), None);
    }

    #[test]
    fn test_fill_rect_is_clipped_to_canvas() {
        let mut canvas = Canvas::blank(4, 3);
        canvas.fill_rect(-100, 1, 100, 100, [9, 8, 7]);
        for x in 0..4 {
            assert_eq!(canvas.pixel(x, 0), Some([0, 0, 0]));
            assert_eq!(canvas.pixel(x, 1), Some([9, 8, 7]));
            assert_eq!(canvas.pixel(x, 2), Some([9, 8, 7]));
        }
    }

    #[test]
    fn test_fill_rect_off_canvas_is_ignored() {
        let mut canvas = Canvas::blank(4, 4);
        canvas.fill_rect(5, 5, i64::MAX, i64::MAX, [255, 255, 255]);
        canvas.fill_rect(i64::MIN, 0, -1, 3, [255, 255, 255]);
        assert_eq!(canvas, Canvas::blank(4, 4));
    }

    #[test]
    fn test_as_ndarray_shape() {
        let canvas = Canvas::blank(4, 2);
        assert_eq!(canvas.as_ndarray().shape(), &[2, 4, 3]);
    }

    #[test]
    fn test_clone_is_independent() {
        let canvas = Canvas::filled(2, 2, [100, 100, 100]);
        let mut cloned = canvas.clone();
        cloned.data_mut()[0] = 0;
        assert_eq!(canvas.data()[0], 100);
        assert_eq!(cloned.data()[0], 0);
    }
}
