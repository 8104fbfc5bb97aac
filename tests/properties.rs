use proptest::prelude::*;

use glass_generator::{synthesize, GlassWidget, ParameterSet, Rgb};

fn any_rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

/// Anything a patch can store, including values past the slider bounds.
fn any_stored_params() -> impl Strategy<Value = ParameterSet> {
    (any::<u32>(), any::<u32>(), any_rgb(), any::<u32>(), any::<u32>(), any::<bool>()).prop_map(
        |(blur, opacity, color, border_radius, shadow_intensity, show_outline)| ParameterSet {
            blur,
            opacity,
            color,
            color_hex: color.to_hex(),
            border_radius,
            shadow_intensity,
            show_outline,
        },
    )
}

proptest! {
    #[test]
    fn hex_round_trips(hex in "#[0-9a-f]{6}") {
        let rgb = Rgb::from_hex(&hex).unwrap();
        prop_assert_eq!(rgb.to_hex(), hex);
    }

    #[test]
    fn picker_keeps_forms_in_sync(hex in "#[0-9a-f]{6}") {
        let mut w = GlassWidget::new();
        w.pick_color(&hex).unwrap();
        prop_assert!(w.color_in_sync());
        prop_assert_eq!(w.color().to_hex(), hex);
    }

    #[test]
    fn synthesize_is_pure(p in any_stored_params()) {
        prop_assert_eq!(synthesize(&p), synthesize(&p));
    }

    #[test]
    fn border_appears_only_with_outline(p in any_stored_params()) {
        let d = synthesize(&p);
        let class_count = d.utility_classes.matches("border-white/30").count();
        let decl_count = d.style_sheet.matches("border: 1px solid").count();
        let expected = usize::from(p.show_outline);
        prop_assert_eq!(class_count, expected);
        prop_assert_eq!(decl_count, expected);
    }

    #[test]
    fn widget_accepts_any_stored_value(p in any_stored_params()) {
        let mut w = GlassWidget::new();
        w.set_blur(p.blur);
        w.set_opacity(p.opacity);
        w.set_border_radius(p.border_radius);
        w.set_shadow_intensity(p.shadow_intensity);
        w.set_show_outline(p.show_outline);
        w.pick_color(&p.color_hex).unwrap();
        prop_assert_eq!(w.params(), &p);
        prop_assert_eq!(w.derived(), &synthesize(&p));
    }

    #[test]
    fn inline_style_tracks_parameters(p in any_stored_params()) {
        let s = synthesize(&p).inline_style;
        prop_assert_eq!(s.backdrop_filter, format!("blur({}px)", p.blur));
        prop_assert_eq!(s.border_radius, format!("{}px", p.border_radius));
        prop_assert_eq!(
            s.box_shadow,
            format!(
                "0 {}px {}px rgba(0, 0, 0, 0.2)",
                p.shadow_intensity,
                u64::from(p.shadow_intensity) * 2
            )
        );
        let c = p.color;
        let prefix = format!("rgba({}, {}, {}, ", c.r, c.g, c.b);
        prop_assert!(s.background_color.starts_with(&prefix));
    }
}
