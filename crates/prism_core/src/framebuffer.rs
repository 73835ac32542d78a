//! Framebuffer storage and image serialization.
//!
//! The renderer writes unclamped linear colors into an [`ImageBuffer`].
//! Clamping to [0, 1] and quantizing to 8 bits happens only here, when
//! the buffer is serialized.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use prism_math::Interval;
use thiserror::Error;

use crate::scene::Color;

/// Errors that can occur while saving a framebuffer.
#[derive(Error, Debug)]
pub enum FramebufferError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type FramebufferResult<T> = Result<T, FramebufferError>;

/// Convert a color to 8-bit RGB.
///
/// Each component is clamped to [0, 1] and scaled by 255, truncating.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    color
        .to_array()
        .map(|c| (255.0 * Interval::UNIT.clamp(c)) as u8)
}

/// Row-major image buffer. Row 0 is the top of the image.
#[derive(Clone, Debug)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to packed RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    /// Write the buffer as a plain-text `P3` pixmap.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for color in &self.pixels {
            let [r, g, b] = color_to_rgb(*color);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }

        Ok(())
    }

    /// Save to disk. `.ppm` paths use the plain-text writer; every other
    /// extension is encoded by the `image` crate.
    pub fn save(&self, path: impl AsRef<Path>) -> FramebufferResult<()> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

        if is_ppm {
            let mut writer = BufWriter::new(File::create(path)?);
            self.write_ppm(&mut writer)?;
            writer.flush()?;
        } else {
            let rgb = image::RgbImage::from_raw(self.width, self.height, self.to_rgb8())
                .ok_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::InvalidData, "framebuffer size mismatch")
                })?;
            rgb.save(path)?;
        }

        log::debug!("Wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
