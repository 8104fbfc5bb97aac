/// Page chrome. The preview surface itself is styled inline.
pub(super) fn build_css() -> &'static str {
    r#"* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { min-height: 100%; }
body {
  min-height: 100vh; display: flex; flex-direction: column;
  align-items: center; justify-content: center; padding: 1rem;
  background: linear-gradient(to bottom right, #e0f2fe, #e0e7ff);
  color: #1f2937; font-family: system-ui, -apple-system, sans-serif;
}
h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
h2 { font-size: 1.25rem; font-weight: 600; margin-bottom: 1rem; }
h3 { font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }

.layout {
  display: grid; grid-template-columns: 1fr; gap: 1.5rem;
  width: 100%; max-width: 56rem;
}
@media (min-width: 768px) {
  .layout { grid-template-columns: 1fr 1fr; }
}

/* ── Controls ────────────────────────────────────── */
.card {
  background: #fff; padding: 1.5rem; border-radius: 0.5rem;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}
.control { margin-bottom: 1rem; }
.control label { display: block; margin-bottom: 0.25rem; font-weight: 500; }
.control label.check { display: flex; align-items: center; gap: 0.5rem; }
.control input[type=range] { width: 100%; cursor: pointer; }
.control input[type=color] { width: 100%; height: 2.5rem; border-radius: 0.25rem; }
.control input[type=checkbox] { width: 1rem; height: 1rem; }

/* ── Preview ─────────────────────────────────────── */
.side { display: flex; flex-direction: column; gap: 1.5rem; }
.backdrop {
  position: relative; width: 100%; height: 16rem; padding: 2rem;
  border-radius: 0.5rem;
  background: linear-gradient(to bottom right, #a855f7, #ec4899);
}
.glass {
  width: 100%; height: 100%; display: flex;
  align-items: center; justify-content: center; font-size: 1.125rem;
}

/* ── Output blocks ───────────────────────────────── */
.output { width: 100%; }
.code-wrap { position: relative; }
.code-wrap pre {
  padding: 0.75rem; background: #1f2937; color: #e5e7eb;
  border-radius: 0.25rem; overflow-x: auto; font-size: 0.875rem;
  white-space: pre;
}
.code-wrap button.copy {
  position: absolute; top: 0.5rem; right: 0.5rem;
  background: #374151; color: #fff; border: none; cursor: pointer;
  padding: 0.25rem 0.5rem; border-radius: 0.25rem; font-size: 0.75rem;
}
.code-wrap button.copy:hover { background: #4b5563; }
.code-wrap button.copy.copied { background: #16a34a; }

.toast {
  position: fixed; bottom: 1rem; right: 1rem; max-width: 24rem;
  background: #7f1d1d; color: #fee2e2; padding: 0.5rem 0.75rem;
  border-radius: 0.25rem; font-size: 0.875rem; display: none;
}
.toast.show { display: block; }
"#
}
