//! WebAssembly bindings for picascii

use wasm_bindgen::prelude::*;

use crate::Converter;

/// Converter handle for browser callers.
///
/// Pixels arrive as the raw RGBA bytes of a canvas `getImageData` call.
#[wasm_bindgen]
pub struct WasmConverter {
    width: u32,
    height: u32,
    maintain_aspect_ratio: bool,
}

impl Default for WasmConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmConverter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmConverter {
        WasmConverter { width: 80, height: 0, maintain_aspect_ratio: true }
    }

    #[wasm_bindgen]
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// Height in characters; 0 derives it from the image aspect ratio.
    #[wasm_bindgen]
    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    #[wasm_bindgen]
    pub fn set_maintain_aspect_ratio(&mut self, enabled: bool) {
        self.maintain_aspect_ratio = enabled;
    }

    /// Convert raw RGBA pixels and return `{ plain, html, colorCoded,
    /// width, height }`.
    #[wasm_bindgen]
    pub fn convert(
        &self,
        image_data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<js_sys::Object, JsValue> {
        let img = image::RgbaImage::from_raw(width, height, image_data.to_vec())
            .ok_or_else(|| JsValue::from_str("Invalid image dimensions"))?;

        let art = Converter::new()
            .with_width(self.width)
            .with_height(self.height)
            .with_aspect_ratio(self.maintain_aspect_ratio)
            .convert(&image::DynamicImage::ImageRgba8(img));

        let result = js_sys::Object::new();
        js_sys::Reflect::set(&result, &"plain".into(), &art.plain.into())?;
        js_sys::Reflect::set(&result, &"html".into(), &art.html.into())?;
        js_sys::Reflect::set(&result, &"colorCoded".into(), &art.color_coded.into())?;
        js_sys::Reflect::set(&result, &"width".into(), &art.width.into())?;
        js_sys::Reflect::set(&result, &"height".into(), &art.height.into())?;
        Ok(result)
    }
}
