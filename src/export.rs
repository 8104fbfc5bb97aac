use crate::synth::DerivedStyles;

/// Default selector for exported rules.
pub const DEFAULT_SELECTOR: &str = ".glass";

/// Wrap the style-sheet declarations in a rule for `selector`.
pub fn css_rule(derived: &DerivedStyles, selector: &str) -> String {
    let mut s = String::with_capacity(derived.style_sheet.len() + selector.len() + 8);
    s.push_str(selector);
    s.push_str(" {\n");
    s.push_str(&derived.style_sheet);
    s.push_str("}\n");
    s
}

/// A JSX element carrying both the utility classes and the inline style,
/// ready to paste into a React component.
pub fn jsx_element(derived: &DerivedStyles) -> String {
    let style = &derived.inline_style;
    let mut s = String::new();
    s.push_str(&format!("<div\n  className=\"{}\"\n", derived.utility_classes));
    s.push_str("  style={{\n");
    s.push_str(&format!("    backdropFilter: '{}',\n", style.backdrop_filter));
    s.push_str(&format!("    backgroundColor: '{}',\n", style.background_color));
    s.push_str(&format!("    borderRadius: '{}',\n", style.border_radius));
    s.push_str(&format!("    boxShadow: '{}',\n", style.box_shadow));
    s.push_str("  }}\n/>\n");
    s
}
