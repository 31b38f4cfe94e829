//! Single-pass renderer producing the three synchronized outputs.

use image::RgbaImage;
use serde::Serialize;

use crate::palette::{rgb_to_ansi256, rgb_to_hex};
use crate::ramp::{char_for_luminance, luminance};

/// The three text renderings of one conversion, plus the grid dimensions.
///
/// All three strings come from the same pixel scan and carry the same
/// character at the same grid position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsciiArt {
    pub width: u32,
    pub height: u32,
    /// Monochrome character grid, one `\n`-terminated line per row.
    pub plain: String,
    /// Same grid with non-space characters wrapped in color-styled spans,
    /// `<br>` at row boundaries.
    pub html: String,
    /// Same grid annotated with `$xNNN` palette-switch tokens, run-length
    /// suppressed within each row.
    pub color_coded: String,
}

/// Render a bitmap that is already scaled to the target character grid:
/// one character per pixel.
pub fn render_bitmap(image: &RgbaImage) -> AsciiArt {
    let (width, height) = image.dimensions();
    let mut plain = String::with_capacity((width as usize + 1) * height as usize);
    let mut html = String::new();
    let mut color_coded = String::new();

    for y in 0..height {
        // Color tokens never carry across a line boundary
        let mut last_code: Option<u8> = None;
        for x in 0..width {
            let [r, g, b, a] = image.get_pixel(x, y).0;

            // Transparent and pure black pixels are blank in every output
            if a == 0 || (r == 0 && g == 0 && b == 0) {
                plain.push(' ');
                html.push(' ');
                color_coded.push(' ');
                continue;
            }

            let ch = char_for_luminance(luminance(r, g, b));
            plain.push(ch);

            if ch == ' ' {
                html.push(' ');
            } else {
                let hex = rgb_to_hex(r, g, b);
                html.push_str(&format!("<span style=\"color: {hex}\">{ch}</span>"));
            }

            let code = rgb_to_ansi256(r, g, b);
            if last_code != Some(code) {
                color_coded.push_str(&format!("$x{code:03}"));
                last_code = Some(code);
            }
            color_coded.push(ch);
        }
        plain.push('\n');
        html.push_str("<br>");
        color_coded.push('\n');
    }

    AsciiArt { width, height, plain, html, color_coded }
}
