//! The tunable parameters of a glass panel.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Current values of every control in the generator.
///
/// Numeric fields are stored exactly as given. The slider controls bound
/// them to [`Slider::range`]; nothing here clamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Backdrop blur radius in pixels.
    pub blur: u32,
    /// Background opacity as a percentage.
    pub opacity: u32,
    /// Tint used for the translucent background.
    pub color: Rgb,
    /// Picker representation of `color`. Only the picker path keeps the two
    /// in step; see [`crate::widget::GlassWidget::set_color_rgb`].
    pub color_hex: String,
    pub border_radius: u32,
    /// Vertical shadow offset in pixels; the shadow blur is twice this.
    pub shadow_intensity: u32,
    pub show_outline: bool,
}

impl ParameterSet {
    pub const DEFAULT_BLUR: u32 = 4;
    pub const DEFAULT_OPACITY: u32 = 25;
    pub const DEFAULT_COLOR: Rgb = Rgb::WHITE;
    pub const DEFAULT_BORDER_RADIUS: u32 = 10;
    pub const DEFAULT_SHADOW_INTENSITY: u32 = 8;

    /// Numeric value behind a slider.
    pub fn get(&self, slider: Slider) -> u32 {
        match slider {
            Slider::Blur => self.blur,
            Slider::Opacity => self.opacity,
            Slider::BorderRadius => self.border_radius,
            Slider::ShadowIntensity => self.shadow_intensity,
        }
    }

    pub(crate) fn set(&mut self, slider: Slider, value: u32) {
        let field = match slider {
            Slider::Blur => &mut self.blur,
            Slider::Opacity => &mut self.opacity,
            Slider::BorderRadius => &mut self.border_radius,
            Slider::ShadowIntensity => &mut self.shadow_intensity,
        };
        *field = value;
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            blur: Self::DEFAULT_BLUR,
            opacity: Self::DEFAULT_OPACITY,
            color: Self::DEFAULT_COLOR,
            // Synthesized from the RGB triple once, at construction.
            color_hex: Self::DEFAULT_COLOR.to_hex(),
            border_radius: Self::DEFAULT_BORDER_RADIUS,
            shadow_intensity: Self::DEFAULT_SHADOW_INTENSITY,
            show_outline: false,
        }
    }
}

/// The numeric range controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    Blur,
    Opacity,
    BorderRadius,
    ShadowIntensity,
}

impl Slider {
    /// All sliders in display order.
    pub const ALL: [Slider; 4] = [
        Slider::Blur,
        Slider::Opacity,
        Slider::BorderRadius,
        Slider::ShadowIntensity,
    ];

    /// Bounds enforced by the input control.
    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            Slider::Blur => 0..=20,
            Slider::Opacity => 0..=100,
            Slider::BorderRadius => 0..=50,
            Slider::ShadowIntensity => 0..=20,
        }
    }

    /// Field name used in JSON patches and element ids.
    pub fn key(self) -> &'static str {
        match self {
            Slider::Blur => "blur",
            Slider::Opacity => "opacity",
            Slider::BorderRadius => "border_radius",
            Slider::ShadowIntensity => "shadow_intensity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slider::Blur => "Blur",
            Slider::Opacity => "Transparency",
            Slider::BorderRadius => "Border Radius",
            Slider::ShadowIntensity => "Shadow Intensity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Slider::Opacity => "%",
            _ => "px",
        }
    }
}
