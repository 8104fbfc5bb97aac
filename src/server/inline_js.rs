use crate::params::Slider;

/// Client glue: every input posts a patch, every response re-renders the
/// preview and output blocks from the returned snapshot.
pub(super) fn build_inline_js() -> String {
    let keys: Vec<&str> = Slider::ALL.iter().map(|s| s.key()).collect();
    let sliders = serde_json::to_string(&keys).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"<script>
(function() {{
  const SLIDERS = {sliders};
  const glass = document.getElementById('glass');
  const toast = document.getElementById('toast');
  let toastTimer = null;

  function showError(msg) {{
    toast.textContent = msg;
    toast.classList.add('show');
    clearTimeout(toastTimer);
    toastTimer = setTimeout(function() {{ toast.classList.remove('show'); }}, 3000);
  }}

  function render(snap) {{
    const s = snap.derived.inline_style;
    glass.style.backdropFilter = s.backdropFilter;
    glass.style.webkitBackdropFilter = s.backdropFilter;
    glass.style.backgroundColor = s.backgroundColor;
    glass.style.borderRadius = s.borderRadius;
    glass.style.boxShadow = s.boxShadow;

    document.getElementById('out-tailwind').textContent = snap.derived.utility_classes;
    document.getElementById('out-css').textContent = snap.derived.style_sheet;

    SLIDERS.forEach(function(key) {{
      document.getElementById(key).value = snap.params[key];
      document.getElementById(key + '-value').textContent = snap.params[key];
    }});
    document.getElementById('color').value = snap.params.color_hex;
    document.getElementById('show_outline').checked = snap.params.show_outline;

    ['tailwind', 'css'].forEach(function(t) {{
      const btn = document.getElementById('copy-' + t);
      const on = snap.copied === t;
      btn.textContent = on ? 'Copied!' : 'Copy';
      btn.classList.toggle('copied', on);
    }});
  }}

  function post(url, body) {{
    return fetch(url, {{
      method: 'POST',
      headers: {{ 'Content-Type': 'application/json' }},
      body: JSON.stringify(body)
    }}).then(function(r) {{
      return r.json().then(function(json) {{
        if (!r.ok) throw new Error(json.error || r.statusText);
        return json;
      }});
    }});
  }}

  function send(patch) {{
    post('/params', patch).then(render).catch(function(e) {{ showError(e.message); }});
  }}

  function refresh() {{
    fetch('/state').then(function(r) {{ return r.json(); }}).then(render);
  }}

  SLIDERS.forEach(function(key) {{
    const el = document.getElementById(key);
    el.addEventListener('input', function() {{
      const patch = {{}};
      patch[key] = parseInt(el.value, 10);
      send(patch);
    }});
  }});

  document.getElementById('color').addEventListener('input', function(e) {{
    send({{ color: e.target.value }});
  }});

  document.getElementById('show_outline').addEventListener('change', function(e) {{
    send({{ show_outline: e.target.checked }});
  }});

  document.querySelectorAll('button.copy').forEach(function(btn) {{
    btn.addEventListener('click', function() {{
      post('/copy', {{ target: btn.dataset.target }}).then(function(res) {{
        if (navigator.clipboard) {{
          navigator.clipboard.writeText(res.text).catch(function() {{}});
        }}
        render(res.state);
        setTimeout(refresh, res.revert_after_ms);
      }}).catch(function(e) {{ showError(e.message); }});
    }});
  }});
}})();
</script>"#,
        sliders = sliders,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_slider_keys() {
        let js = build_inline_js();
        assert!(js.contains(r#"const SLIDERS = ["blur","opacity","border_radius","shadow_intensity"];"#));
    }

    #[test]
    fn wires_every_endpoint() {
        let js = build_inline_js();
        assert!(js.contains("post('/params', patch)"));
        assert!(js.contains("post('/copy',"));
        assert!(js.contains("fetch('/state')"));
        assert!(js.contains("navigator.clipboard.writeText(res.text)"));
    }
}
