//! Output dimension resolution with an aspect-ratio lock.

/// Height in characters that preserves the image's natural aspect ratio at
/// the given width.
pub fn height_for_width(width: u32, img_w: u32, img_h: u32) -> u32 {
    (width as f32 * img_h as f32 / img_w as f32).round().max(1.0) as u32
}

/// Width in characters that preserves the image's natural aspect ratio at
/// the given height.
pub fn width_for_height(height: u32, img_w: u32, img_h: u32) -> u32 {
    (height as f32 * img_w as f32 / img_h as f32).round().max(1.0) as u32
}

/// Resolve the target character grid for an image.
///
/// A zero width or height means "unset". With the aspect lock on, an unset
/// dimension is derived from the other via the image's natural aspect ratio.
/// With the lock off the two are independent and may distort the image; an
/// unset dimension is clamped to 1.
pub fn resolve(
    img_w: u32,
    img_h: u32,
    width: u32,
    height: u32,
    maintain_aspect: bool,
) -> (u32, u32) {
    if img_w == 0 || img_h == 0 {
        return (width.max(1), height.max(1));
    }
    let w = match (width, maintain_aspect) {
        (0, true) if height > 0 => width_for_height(height, img_w, img_h),
        _ => width.max(1),
    };
    let h = match (height, maintain_aspect) {
        (0, true) if width > 0 => height_for_width(width, img_w, img_h),
        _ => height.max(1),
    };
    (w, h)
}
