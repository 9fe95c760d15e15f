use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::canvas::Canvas;

/// Reads an image file with the `image` crate, converting to 8-bit RGB.
///
/// Alpha is dropped; grayscale and 16-bit inputs are widened or narrowed
/// to RGB8 so outlines render the same regardless of source format.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Canvas, Box<dyn std::error::Error>> {
        let rgb = image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?
            .to_rgb8();
        let (width, height) = rgb.dimensions();
        log::debug!("Decoded {} ({width}x{height})", path.display());
        Ok(Canvas::new(rgb.into_raw(), width, height))
    }
}
