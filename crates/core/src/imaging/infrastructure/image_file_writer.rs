use std::path::Path;

use image::{ExtendedColorType, ImageFormat};

use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::canvas::{Canvas, CHANNELS};

/// Encodes a canvas to disk. The format follows the file extension.
#[derive(Default)]
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, canvas: &Canvas) -> Result<(), Box<dyn std::error::Error>> {
        let format = ImageFormat::from_path(path)?;
        let expected = canvas.width() as usize * canvas.height() as usize * CHANNELS;
        if canvas.data().len() != expected {
            return Err(format!(
                "canvas holds {} bytes, expected {expected}",
                canvas.data().len()
            )
            .into());
        }
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        log::debug!(
            "Encoding {}x{} canvas as {format:?} to {}",
            canvas.width(),
            canvas.height(),
            path.display()
        );
        image::save_buffer_with_format(
            path,
            canvas.data(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgb8,
            format,
        )?;
        Ok(())
    }
}
