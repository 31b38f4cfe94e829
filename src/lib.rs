//! Image to colored ASCII art converter.

pub mod dimensions;
pub mod palette;
pub mod ramp;
pub mod render;
#[cfg(not(target_arch = "wasm32"))]
pub mod source;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use ramp::ASCII_RAMP;
pub use render::AsciiArt;
#[cfg(not(target_arch = "wasm32"))]
pub use source::load_image;

use image::imageops::FilterType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PicasciiError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Source error: {0}")]
    Source(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PicasciiError>;

/// Main converter: scales an image to a character grid and renders the
/// plain, HTML, and color-coded outputs in one pass.
pub struct Converter {
    width: u32,
    height: u32,
    maintain_aspect_ratio: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self { width: 80, height: 0, maintain_aspect_ratio: true }
    }

    /// Output width in characters. The UI range is 20-200.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Output height in characters; 0 means "derive from the aspect ratio".
    /// The UI range is 10-200.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// When enabled (the default), an unset dimension is derived from the
    /// image's natural aspect ratio. When disabled, width and height are
    /// independent and may distort the image.
    pub fn with_aspect_ratio(mut self, enabled: bool) -> Self {
        self.maintain_aspect_ratio = enabled;
        self
    }

    pub fn convert(&self, image: &image::DynamicImage) -> AsciiArt {
        let (out_w, out_h) = dimensions::resolve(
            image.width(),
            image.height(),
            self.width,
            self.height,
            self.maintain_aspect_ratio,
        );

        // Skip the resample when the image is already grid-sized
        let rgba = if (out_w, out_h) == (image.width(), image.height()) {
            image.to_rgba8()
        } else {
            image.resize_exact(out_w, out_h, FilterType::Triangle).to_rgba8()
        };

        render::render_bitmap(&rgba)
    }
}
