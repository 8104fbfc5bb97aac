use std::time::Duration;

use crate::clipboard::CopyTarget;
use crate::params::Slider;
use crate::widget::GlassWidget;
use super::util::html_escape;

pub(super) fn build_controls(widget: &GlassWidget) -> String {
    let params = widget.params();
    let mut html = String::from(
        r#"<section class="card controls">
  <h2>Controls</h2>"#,
    );

    for slider in Slider::ALL {
        let range = slider.range();
        html.push_str(&format!(
            r#"
  <div class="control">
    <label for="{key}">{label}: <span id="{key}-value">{value}</span>{unit}</label>
    <input type="range" id="{key}" data-key="{key}" min="{min}" max="{max}" value="{value}">
  </div>"#,
            key = slider.key(),
            label = slider.label(),
            unit = slider.unit(),
            value = params.get(slider),
            min = range.start(),
            max = range.end(),
        ));
        // Color sits between transparency and border radius.
        if slider == Slider::Opacity {
            html.push_str(&format!(
                r#"
  <div class="control">
    <label for="color">Color:</label>
    <input type="color" id="color" value="{hex}">
  </div>"#,
                hex = html_escape(widget.color_hex()),
            ));
        }
    }

    html.push_str(&format!(
        r#"
  <div class="control">
    <label class="check"><input type="checkbox" id="show_outline"{checked}> Show Outline</label>
  </div>
</section>"#,
        checked = if params.show_outline { " checked" } else { "" },
    ));
    html
}

pub(super) fn build_preview(widget: &GlassWidget) -> String {
    format!(
        r#"<div class="backdrop">
  <div class="glass" id="glass" style="{style}">
    <span>Glassmorphism Preview</span>
  </div>
</div>"#,
        style = html_escape(&widget.derived().inline_style.to_style_attr()),
    )
}

pub(super) fn build_outputs(widget: &GlassWidget, now: Duration) -> String {
    let copied = widget.copied(now);
    let block = |target: CopyTarget, title: &str| {
        let is_copied = copied == Some(target);
        format!(
            r#"<div class="output">
  <h3>{title}</h3>
  <div class="code-wrap">
    <pre><code id="out-{t}">{code}</code></pre>
    <button class="copy{cls}" id="copy-{t}" data-target="{t}">{label}</button>
  </div>
</div>"#,
            t = target.as_str(),
            code = html_escape(widget.output(target)),
            cls = if is_copied { " copied" } else { "" },
            label = if is_copied { "Copied!" } else { "Copy" },
        )
    };

    format!(
        "{}\n{}",
        block(CopyTarget::Tailwind, "Tailwind Classes"),
        block(CopyTarget::Css, "CSS Styles"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    #[test]
    fn controls_reflect_parameters() {
        let mut w = GlassWidget::new();
        w.set_blur(7);
        w.set_show_outline(true);
        let html = build_controls(&w);
        assert!(html.contains(r#"id="blur" data-key="blur" min="0" max="20" value="7""#));
        assert!(html.contains(r#"id="opacity" data-key="opacity" min="0" max="100" value="25""#));
        assert!(html.contains(r#"Transparency: <span id="opacity-value">25</span>%"#));
        assert!(html.contains(r##"<input type="color" id="color" value="#ffffff">"##));
        assert!(html.contains(r#"id="show_outline" checked"#));
    }

    #[test]
    fn color_control_follows_opacity() {
        let html = build_controls(&GlassWidget::new());
        let opacity = html.find(r#"id="opacity""#).unwrap();
        let color = html.find(r#"id="color""#).unwrap();
        let radius = html.find(r#"id="border_radius""#).unwrap();
        assert!(opacity < color && color < radius);
    }

    #[test]
    fn preview_applies_inline_style() {
        let html = build_preview(&GlassWidget::new());
        assert!(html.contains("backdrop-filter: blur(4px);"));
        assert!(html.contains("background-color: rgba(255, 255, 255, 0.25);"));
    }

    #[test]
    fn outputs_mark_copied_block() {
        let mut w = GlassWidget::new();
        let mut clip = MemoryClipboard::new();
        w.copy(&mut clip, CopyTarget::Css, Duration::ZERO);
        let html = build_outputs(&w, Duration::from_millis(5));
        assert!(html.contains(r#"id="copy-css" data-target="css">Copied!"#));
        assert!(html.contains(r#"id="copy-tailwind" data-target="tailwind">Copy<"#));
        assert!(html.contains("bg-opacity-25 rounded-lg p-6 shadow-lg"));
    }
}
