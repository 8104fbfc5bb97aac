//! WASM bindings for the glass generator.
//!
//! Exposes the widget to JavaScript via wasm-bindgen so a page can drive it
//! without the dev server. Build with: `wasm-pack build --target web --features wasm`

use std::time::Duration;

use wasm_bindgen::prelude::*;

use crate::clipboard::{Clipboard, CopyTarget};
use crate::error::{GlassError, Result};
use crate::widget::GlassWidget;

#[wasm_bindgen]
extern "C" {
    // Throws a TypeError when `navigator.clipboard` is missing (insecure
    // context, older browsers).
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    fn clipboard_write_text(text: &str) -> std::result::Result<js_sys::Promise, JsValue>;
}

/// `navigator.clipboard`. A synchronous throw becomes
/// [`GlassError::Clipboard`]; the returned promise is dropped, so a later
/// permission denial never reaches the widget either.
struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        clipboard_write_text(text)
            .map(drop)
            .map_err(|e| GlassError::Clipboard(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
    }
}

fn millis(now_ms: f64) -> Duration {
    // `as` saturates, and NaN becomes zero.
    Duration::from_millis(now_ms as u64)
}

/// The generator as a JS class. Timestamps are `performance.now()` values.
#[wasm_bindgen]
pub struct GlassGenerator {
    widget: GlassWidget,
}

#[wasm_bindgen]
impl GlassGenerator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GlassGenerator {
        GlassGenerator {
            widget: GlassWidget::new(),
        }
    }

    pub fn set_blur(&mut self, px: u32) {
        self.widget.set_blur(px);
    }

    pub fn set_opacity(&mut self, percent: u32) {
        self.widget.set_opacity(percent);
    }

    pub fn set_border_radius(&mut self, px: u32) {
        self.widget.set_border_radius(px);
    }

    pub fn set_shadow_intensity(&mut self, px: u32) {
        self.widget.set_shadow_intensity(px);
    }

    pub fn set_show_outline(&mut self, on: bool) {
        self.widget.set_show_outline(on);
    }

    /// Color picker handler. Throws on anything but `#rrggbb`.
    pub fn set_color(&mut self, hex: &str) -> std::result::Result<(), JsError> {
        self.widget
            .pick_color(hex)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn color_hex(&self) -> String {
        self.widget.color_hex().to_string()
    }

    pub fn revision(&self) -> f64 {
        self.widget.revision() as f64
    }

    /// `{ inline_style, utility_classes, style_sheet }` with a camelCase
    /// `inline_style` ready for `Object.assign(el.style, ...)`.
    pub fn styles(&self) -> std::result::Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.widget.derived())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Copy `"tailwind"` or `"css"` output to the clipboard.
    pub fn copy(&mut self, target: &str, now_ms: f64) -> std::result::Result<(), JsError> {
        let target = target
            .parse::<CopyTarget>()
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.widget.copy(&mut BrowserClipboard, target, millis(now_ms));
        Ok(())
    }

    /// The label showing "Copied!" at `now_ms`, if any.
    pub fn copied(&self, now_ms: f64) -> Option<String> {
        self.widget
            .copied(millis(now_ms))
            .map(|t| t.as_str().to_string())
    }
}

impl Default for GlassGenerator {
    fn default() -> Self {
        Self::new()
    }
}
