//! Style synthesis: parameters in, inline style + utility classes +
//! style-sheet text out.
//!
//! Everything here is a pure function of [`ParameterSet`]. The widget calls
//! [`synthesize`] after every parameter change and replaces its previous
//! [`DerivedStyles`] wholesale.

use serde::{Deserialize, Serialize};

use crate::params::ParameterSet;

/// Shadow color shared by the inline style and the style sheet.
pub const SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.2)";
/// Border declaration emitted when the outline is on.
pub const OUTLINE_DECLARATION: &str = "border: 1px solid rgba(255, 255, 255, 0.3);";
/// Utility tokens emitted when the outline is on.
pub const OUTLINE_CLASSES: &str = "border border-white/30";

/// Properties applied directly to the preview surface.
///
/// Serializes with camelCase keys, the shape a JS `style` object expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineStyle {
    pub backdrop_filter: String,
    pub background_color: String,
    pub border_radius: String,
    pub box_shadow: String,
}

impl InlineStyle {
    /// `(css-property, value)` pairs in declaration order.
    pub fn declarations(&self) -> [(&'static str, &str); 4] {
        [
            ("backdrop-filter", self.backdrop_filter.as_str()),
            ("background-color", self.background_color.as_str()),
            ("border-radius", self.border_radius.as_str()),
            ("box-shadow", self.box_shadow.as_str()),
        ]
    }

    /// Value for an HTML `style` attribute.
    pub fn to_style_attr(&self) -> String {
        self.declarations()
            .iter()
            .map(|(prop, value)| format!("{prop}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Output bundle computed from a [`ParameterSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStyles {
    pub inline_style: InlineStyle,
    /// Space-separated utility tokens.
    pub utility_classes: String,
    /// Declaration block, one declaration per line, two-space indented.
    pub style_sheet: String,
}

/// Compute every output from the current parameters.
pub fn synthesize(params: &ParameterSet) -> DerivedStyles {
    let background = background_color(params);
    let backdrop = format!("blur({}px)", params.blur);
    let radius = format!("{}px", params.border_radius);
    let shadow = box_shadow(params.shadow_intensity);

    let utility_classes = utility_classes(params);

    let mut decls = vec![
        format!("background-color: {background};"),
        format!("backdrop-filter: {backdrop};"),
        format!("border-radius: {radius};"),
        format!("box-shadow: {shadow};"),
        "padding: 1.5rem;".to_string(),
    ];
    if params.show_outline {
        decls.push(OUTLINE_DECLARATION.to_string());
    }
    let mut style_sheet = String::with_capacity(256);
    for d in &decls {
        style_sheet.push_str("  ");
        style_sheet.push_str(d);
        style_sheet.push('\n');
    }

    DerivedStyles {
        inline_style: InlineStyle {
            backdrop_filter: backdrop,
            background_color: background,
            border_radius: radius,
            box_shadow: shadow,
        },
        utility_classes,
        style_sheet,
    }
}

fn background_color(params: &ParameterSet) -> String {
    format!("rgba({}, {})", params.color, alpha(params.opacity))
}

fn box_shadow(intensity: u32) -> String {
    // Widened so stored out-of-range offsets cannot overflow.
    let spread = u64::from(intensity) * 2;
    format!("0 {intensity}px {spread}px {SHADOW_COLOR}")
}

fn utility_classes(params: &ParameterSet) -> String {
    // Opacity is already a whole percentage, so rounding is the identity.
    let mut tokens = vec![
        format!("bg-opacity-{}", params.opacity),
        "rounded-lg".to_string(),
        "p-6".to_string(),
    ];
    if params.show_outline {
        tokens.push(OUTLINE_CLASSES.to_string());
    }
    tokens.push("shadow-lg".to_string());
    tokens.join(" ")
}

/// Shortest decimal spelling of `percent / 100`: `0`, `0.05`, `0.5`, `1`,
/// `1.5`.
///
/// Worked in integers so the output never carries float noise.
pub fn alpha(percent: u32) -> String {
    let whole = percent / 100;
    let frac = percent % 100;
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{frac:02}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}
