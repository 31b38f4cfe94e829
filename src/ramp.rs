//! Brightness ramp and luminance math.

/// Character ramp ordered from darkest/densest to lightest.
/// The final entry is a space, so fully bright pixels render empty.
pub const ASCII_RAMP: &[char] = &[
    '@', '&', '#', '%', '/', '*', '(', ')', '=', '+', '-', ':', ',', '.', ' ',
];

/// Perceptual brightness of an RGB pixel, normalized to [0, 1].
/// BT.601 weights: 0.299 R + 0.587 G + 0.114 B.
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0
}

/// Map a luminance value to a ramp character.
/// Index is floor(luminance * 14), clamped to the ramp bounds.
pub fn char_for_luminance(lum: f32) -> char {
    let idx = (lum * (ASCII_RAMP.len() - 1) as f32) as usize;
    ASCII_RAMP[idx.min(ASCII_RAMP.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_has_fifteen_levels() {
        assert_eq!(ASCII_RAMP.len(), 15);
        assert_eq!(ASCII_RAMP[0], '@');
        assert_eq!(ASCII_RAMP[14], ' ');
    }

    #[test]
    fn extremes_map_to_ramp_ends() {
        assert_eq!(char_for_luminance(0.0), '@');
        assert_eq!(char_for_luminance(1.0), ' ');
    }

    #[test]
    fn pure_channels_match_bt601_weights() {
        // Red: 0.299 * 14 = 4.18 -> index 4
        assert_eq!(char_for_luminance(luminance(255, 0, 0)), '/');
        // Green: 0.587 * 14 = 8.21 -> index 8
        assert_eq!(char_for_luminance(luminance(0, 255, 0)), '=');
        // Blue: 0.114 * 14 = 1.59 -> index 1
        assert_eq!(char_for_luminance(luminance(0, 0, 255)), '&');
    }

    #[test]
    fn gray_luminance_is_identity() {
        // Weights sum to 1.0, so gray maps straight to value/255
        for v in [0u8, 64, 128, 255] {
            let lum = luminance(v, v, v);
            assert!((lum - v as f32 / 255.0).abs() < 1e-5);
        }
    }
}
