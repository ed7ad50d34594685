//! Compile images into OCaml palette-index arrays.

pub mod encode;
pub mod palette;

pub use encode::Token;

use encode::{IMAGE_CLOSE, IMAGE_OPEN, ROW_SEP};
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PicomlError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no palette entry for rgb({r}, {g}, {b}) at pixel ({x}, {y})")]
    UnmappedColor { x: u32, y: u32, r: u8, g: u8, b: u8 },
}

pub type Result<T> = std::result::Result<T, PicomlError>;

/// Main converter
pub struct Converter {
    strict: bool,
}

impl Converter {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Fail on colors missing from the palette instead of skipping them.
    pub fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Serialize one image as an OCaml array literal, one token per pixel in
    /// row-major order. Sources without an alpha channel become fully opaque
    /// under RGBA8 normalization; only alpha exactly 0 counts as transparent.
    pub fn convert(&self, image: &image::DynamicImage) -> Result<String> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        debug!("converting {}x{} image", width, height);

        let mut out = String::with_capacity((3 * width as usize + 8) * height as usize + 16);
        out.push_str(IMAGE_OPEN);
        for (y, row) in rgba.rows().enumerate() {
            if y > 0 {
                out.push_str(ROW_SEP);
            }
            for (x, pixel) in row.enumerate() {
                let [r, g, b, a] = pixel.0;
                let token = if a == 0 {
                    Token::Transparent
                } else if let Some(index) = palette::lookup(r, g, b) {
                    Token::Index(index)
                } else if self.strict {
                    return Err(PicomlError::UnmappedColor {
                        x: x as u32,
                        y: y as u32,
                        r,
                        g,
                        b,
                    });
                } else {
                    // An off-palette pixel produces no token; its row comes
                    // out one cell short.
                    continue;
                };
                out.push_str(&token.to_string());
            }
        }
        out.push_str(IMAGE_CLOSE);
        Ok(out)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
