//! Hex color formatting and 256-color palette quantization.

/// Lowercase `#rrggbb` form of an RGB color.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Quantize an RGB color to the 256-entry terminal palette.
///
/// Grays (R=G=B) land on the 24-step grayscale ramp at 232..=255, with the
/// darkest and brightest values snapped to the cube's black (16) and white
/// (231). Everything else maps into the 6x6x6 color cube.
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return ((r as f32 - 8.0) / 247.0 * 24.0).round() as u8 + 232;
    }
    16 + 36 * (r as f32 / 255.0 * 5.0).round() as u8
        + 6 * (g as f32 / 255.0 * 5.0).round() as u8
        + (b as f32 / 255.0 * 5.0).round() as u8
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, 0, 0, "#000000")]
    #[test_case(255, 255, 255, "#ffffff")]
    #[test_case(255, 128, 0, "#ff8000")]
    #[test_case(1, 2, 3, "#010203")]
    fn test_rgb_to_hex(r: u8, g: u8, b: u8, expected: &str) {
        assert_eq!(rgb_to_hex(r, g, b), expected);
    }

    #[test_case(0, 0, 0, 16; "black snaps to cube black")]
    #[test_case(7, 7, 7, 16; "near black snaps to cube black")]
    #[test_case(255, 255, 255, 231; "white snaps to cube white")]
    #[test_case(249, 249, 249, 231; "near white snaps to cube white")]
    #[test_case(8, 8, 8, 232; "darkest grayscale step")]
    #[test_case(248, 248, 248, 255; "brightest grayscale step")]
    #[test_case(128, 128, 128, 244; "mid gray")]
    #[test_case(255, 0, 0, 196; "pure red")]
    #[test_case(0, 255, 0, 46; "pure green")]
    #[test_case(0, 0, 255, 21; "pure blue")]
    #[test_case(255, 255, 0, 226; "yellow")]
    #[test_case(0, 128, 255, 39; "azure")]
    fn test_rgb_to_ansi256(r: u8, g: u8, b: u8, expected: u8) {
        assert_eq!(rgb_to_ansi256(r, g, b), expected);
    }

    #[test]
    fn grayscale_ramp_is_monotonic() {
        let mut last = 232;
        for v in 8..=248u8 {
            let idx = rgb_to_ansi256(v, v, v);
            assert!((232..=255).contains(&idx));
            assert!(idx >= last);
            last = idx;
        }
    }
}
