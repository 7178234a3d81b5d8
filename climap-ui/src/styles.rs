#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-climap-ui]";

/// Default CSS for the control panel along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --climap-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --climap-bg: #ffffff;
  --climap-border: rgba(148, 163, 184, 0.28);
  --climap-radius: 12px;
  --climap-text: #1f2933;
  --climap-muted: #52606d;
  --climap-heading: #11181c;
  --climap-surface: #f8fafc;
  --climap-accent: #2563eb;
  --climap-accent-soft: rgba(37, 99, 235, 0.12);
  --climap-warning: #b42318;
}

.climap-root {
  font-family: var(--climap-font-family);
  background: var(--climap-bg);
  color: var(--climap-text);
  border: 1px solid var(--climap-border);
  border-radius: var(--climap-radius);
  display: flex;
  flex-direction: column;
  gap: 14px;
  padding: 18px;
}

.climap-header h2 {
  margin: 0;
  color: var(--climap-heading);
  font-size: 1.15rem;
}

.climap-toolbar {
  display: flex;
  flex-wrap: wrap;
  gap: 14px;
}

.climap-field {
  display: flex;
  flex-direction: column;
  gap: 4px;
  font-size: 0.8rem;
  color: var(--climap-muted);
}

.climap-field select {
  font: inherit;
  color: var(--climap-text);
  background: var(--climap-surface);
  border: 1px solid var(--climap-border);
  border-radius: 8px;
  padding: 6px 10px;
}

.climap-transport {
  display: flex;
  align-items: center;
  gap: 10px;
}

.climap-transport button {
  font: inherit;
  cursor: pointer;
  background: var(--climap-surface);
  border: 1px solid var(--climap-border);
  border-radius: 8px;
  padding: 6px 12px;
}

.climap-transport button:hover {
  background: var(--climap-accent-soft);
}

.climap-play {
  min-width: 44px;
}

.climap-transport input[type='range'] {
  flex: 1;
  accent-color: var(--climap-accent);
}

.climap-time-label {
  font-variant-numeric: tabular-nums;
  color: var(--climap-heading);
  font-weight: 600;
  min-width: 64px;
  text-align: right;
}

.climap-events h3 {
  margin: 0 0 8px;
  font-size: 0.95rem;
  color: var(--climap-heading);
}

.climap-event-item {
  padding: 8px 10px;
  border: 1px solid var(--climap-border);
  border-radius: 8px;
  margin-bottom: 6px;
  cursor: pointer;
  font-size: 0.88rem;
}

.climap-event-item:hover {
  background: var(--climap-accent-soft);
}

.climap-empty {
  color: var(--climap-muted);
  font-size: 0.88rem;
  padding: 8px 0;
}

@media (max-width: 640px) {
  .climap-toolbar {
    flex-direction: column;
    align-items: stretch;
  }

  .climap-transport {
    flex-wrap: wrap;
  }

  .climap-time-label {
    text-align: left;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-climap-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
