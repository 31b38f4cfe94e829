//! Image loading from file paths, http(s) URLs, and data URLs.

use base64::{engine::general_purpose, Engine as _};
use image::DynamicImage;

use crate::{PicasciiError, Result};

/// Load an image from a file path, a direct URL, or a `data:` URL.
pub fn load_image(input: &str) -> Result<DynamicImage> {
    if let Some(rest) = input.strip_prefix("data:") {
        return decode_data_url(rest);
    }
    if input.starts_with("http://") || input.starts_with("https://") {
        log::debug!("fetching image from {input}");
        let bytes = reqwest::blocking::get(input)
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.bytes())
            .map_err(|e| PicasciiError::Source(e.to_string()))?;
        return Ok(image::load_from_memory(&bytes)?);
    }
    Ok(image::open(input)?)
}

/// Decode the body of a `data:<mediatype>[;base64],<payload>` URL.
fn decode_data_url(rest: &str) -> Result<DynamicImage> {
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| PicasciiError::Source("malformed data URL: missing comma".into()))?;

    let bytes = if meta.ends_with(";base64") {
        general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| PicasciiError::Source(format!("data URL base64: {e}")))?
    } else {
        payload.as_bytes().to_vec()
    };

    Ok(image::load_from_memory(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_data_url_without_comma() {
        let err = decode_data_url("image/png;base64").unwrap_err();
        assert!(matches!(err, PicasciiError::Source(_)));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_data_url("image/png;base64,!!!not-base64!!!").unwrap_err();
        assert!(matches!(err, PicasciiError::Source(_)));
    }

    #[test]
    fn decodes_base64_png_data_url() {
        let mut png = Vec::new();
        image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]))
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        let url = format!("image/png;base64,{}", general_purpose::STANDARD.encode(&png));
        let img = decode_data_url(&url).unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));
    }
}
