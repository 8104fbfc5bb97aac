//! The generator component: parameter store, derived styles and copy
//! feedback owned by one value.
//!
//! Every setter recomputes [`DerivedStyles`] and bumps [`GlassWidget::revision`],
//! which hosts use to decide when to re-render.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clipboard::{Clipboard, CopyNotifier, CopyTarget};
use crate::color::Rgb;
use crate::error::Result;
use crate::params::{ParameterSet, Slider};
use crate::synth::{synthesize, DerivedStyles};

#[derive(Debug, Clone)]
pub struct GlassWidget {
    params: ParameterSet,
    derived: DerivedStyles,
    notifier: CopyNotifier,
    revision: u64,
}

impl GlassWidget {
    /// A freshly mounted widget with default parameters.
    pub fn new() -> Self {
        Self::with_params(ParameterSet::default())
    }

    pub fn with_params(params: ParameterSet) -> Self {
        let derived = synthesize(&params);
        Self {
            params,
            derived,
            notifier: CopyNotifier::new(),
            revision: 0,
        }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn derived(&self) -> &DerivedStyles {
        &self.derived
    }

    /// Number of parameter changes since mount.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn blur(&self) -> u32 {
        self.params.blur
    }

    pub fn opacity(&self) -> u32 {
        self.params.opacity
    }

    pub fn color(&self) -> Rgb {
        self.params.color
    }

    pub fn color_hex(&self) -> &str {
        &self.params.color_hex
    }

    pub fn border_radius(&self) -> u32 {
        self.params.border_radius
    }

    pub fn shadow_intensity(&self) -> u32 {
        self.params.shadow_intensity
    }

    pub fn show_outline(&self) -> bool {
        self.params.show_outline
    }

    pub fn set_blur(&mut self, px: u32) {
        self.set_slider(Slider::Blur, px);
    }

    pub fn set_opacity(&mut self, percent: u32) {
        self.set_slider(Slider::Opacity, percent);
    }

    pub fn set_border_radius(&mut self, px: u32) {
        self.set_slider(Slider::BorderRadius, px);
    }

    pub fn set_shadow_intensity(&mut self, px: u32) {
        self.set_slider(Slider::ShadowIntensity, px);
    }

    /// Set any numeric parameter. Values outside [`Slider::range`] are kept
    /// as given.
    pub fn set_slider(&mut self, slider: Slider, value: u32) {
        log::debug!("{} = {value}", slider.key());
        self.params.set(slider, value);
        self.refresh();
    }

    pub fn set_show_outline(&mut self, on: bool) {
        log::debug!("show_outline = {on}");
        self.params.show_outline = on;
        self.refresh();
    }

    pub fn toggle_outline(&mut self) {
        self.set_show_outline(!self.params.show_outline);
    }

    /// Color picker path: store `hex` and recompute the RGB channels.
    ///
    /// Malformed input is rejected and leaves the parameters untouched.
    pub fn pick_color(&mut self, hex: &str) -> Result<()> {
        let rgb = Rgb::from_hex(hex).inspect_err(|e| log::warn!("{e}"))?;
        log::debug!("color = {hex} ({rgb})");
        self.params.color_hex = hex.to_string();
        self.params.color = rgb;
        self.refresh();
        Ok(())
    }

    /// Non-picker color path. Only the RGB channels change; the picker's hex
    /// value keeps whatever it last held.
    pub fn set_color_rgb(&mut self, rgb: Rgb) {
        log::debug!("color = ({rgb})");
        self.params.color = rgb;
        self.refresh();
    }

    /// Whether the hex and RGB forms currently describe the same color.
    pub fn color_in_sync(&self) -> bool {
        Rgb::from_hex(&self.params.color_hex).is_ok_and(|c| c == self.params.color)
    }

    /// Apply every field present in `patch` with a single recompute.
    ///
    /// The color is validated first, so a bad color leaves everything
    /// unchanged.
    pub fn apply(&mut self, patch: &ParamPatch) -> Result<()> {
        let picked = match &patch.color {
            Some(hex) => Some(Rgb::from_hex(hex).inspect_err(|e| log::warn!("{e}"))?),
            None => None,
        };
        if patch.is_empty() {
            return Ok(());
        }

        for slider in Slider::ALL {
            if let Some(value) = patch.slider(slider) {
                self.params.set(slider, value);
            }
        }
        if let Some(on) = patch.show_outline {
            self.params.show_outline = on;
        }
        if let (Some(hex), Some(rgb)) = (&patch.color, picked) {
            self.params.color_hex = hex.clone();
            self.params.color = rgb;
        }
        log::debug!("applied {patch:?}");
        self.refresh();
        Ok(())
    }

    /// The text a Copy button puts on the clipboard.
    pub fn output(&self, target: CopyTarget) -> &str {
        match target {
            CopyTarget::Tailwind => &self.derived.utility_classes,
            CopyTarget::Css => &self.derived.style_sheet,
        }
    }

    /// Copy one output block and start the acknowledgment window at `now`.
    pub fn copy<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C, target: CopyTarget, now: Duration) {
        let text = self.output(target).to_string();
        self.notifier.copy(clipboard, &text, target, now);
    }

    /// Which block, if any, shows "Copied!" at `now`.
    pub fn copied(&self, now: Duration) -> Option<CopyTarget> {
        self.notifier.state(now)
    }

    /// Time until the "Copied!" label reverts, if one is showing.
    pub fn copy_remaining(&self, now: Duration) -> Option<Duration> {
        self.notifier.remaining(now)
    }

    pub fn notifier_mut(&mut self) -> &mut CopyNotifier {
        &mut self.notifier
    }

    /// Serializable view of the widget at `now`.
    pub fn snapshot(&self, now: Duration) -> Snapshot {
        Snapshot {
            revision: self.revision,
            params: self.params.clone(),
            derived: self.derived.clone(),
            copied: self.copied(now),
        }
    }

    fn refresh(&mut self) {
        self.derived = synthesize(&self.params);
        self.revision += 1;
    }
}

impl Default for GlassWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// A partial parameter update. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamPatch {
    pub blur: Option<u32>,
    pub opacity: Option<u32>,
    pub border_radius: Option<u32>,
    pub shadow_intensity: Option<u32>,
    pub show_outline: Option<bool>,
    /// Picker value, `#rrggbb`.
    pub color: Option<String>,
}

impl ParamPatch {
    pub fn slider(&self, slider: Slider) -> Option<u32> {
        match slider {
            Slider::Blur => self.blur,
            Slider::Opacity => self.opacity,
            Slider::BorderRadius => self.border_radius,
            Slider::ShadowIntensity => self.shadow_intensity,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// What a host needs to render the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub revision: u64,
    pub params: ParameterSet,
    pub derived: DerivedStyles,
    pub copied: Option<CopyTarget>,
}
