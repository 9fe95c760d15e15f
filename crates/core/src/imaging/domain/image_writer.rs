use std::path::Path;

use crate::shared::canvas::Canvas;

/// Encodes a [`Canvas`] to an image file.
pub trait ImageWriter: Send {
    /// Writes the canvas to `path`; the format follows the file extension.
    fn write(&self, path: &Path, canvas: &Canvas) -> Result<(), Box<dyn std::error::Error>>;
}
