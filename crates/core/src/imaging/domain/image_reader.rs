use std::path::Path;

use crate::shared::canvas::Canvas;

/// Decodes an image file into an RGB [`Canvas`].
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<Canvas, Box<dyn std::error::Error>>;
}
