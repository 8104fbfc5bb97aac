use std::time::Duration;

use crate::widget::GlassWidget;
use super::controls::{build_controls, build_outputs, build_preview};
use super::css::build_css;
use super::inline_js::build_inline_js;

/// Full document: controls on the left, preview and outputs on the right.
pub(super) fn build_page(widget: &GlassWidget, now: Duration) -> String {
    let css = build_css();
    let controls = build_controls(widget);
    let preview = build_preview(widget);
    let outputs = build_outputs(widget, now);
    let inline_js = build_inline_js();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Glassmorphism Generator</title>
<style>
{css}
</style>
</head>
<body>
<h1>Glassmorphism Generator</h1>
<div class="layout">
{controls}
<div class="side">
{preview}
{outputs}
</div>
</div>
<div class="toast" id="toast"></div>
{inline_js}
</body>
</html>"##,
        css = css,
        controls = controls,
        preview = preview,
        outputs = outputs,
        inline_js = inline_js,
    )
}
