//! Embedded state strategy: ld+json script blocks plus the client-side state
//! blob assigned to `window.__INITIAL_STATE__`.

use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;

use crate::normalize::{parse_price, plausible_price};
use crate::types::PartialProduct;

static INITIAL_STATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"window\.__INITIAL_STATE__\s*=\s*").expect("valid regex"));

/// Opportunistic extraction from everything JSON-shaped embedded in the page.
/// Earlier blocks win per field; one malformed block never aborts the rest.
pub fn extract(html: &str) -> PartialProduct {
    let mut out = PartialProduct::default();
    for value in jsonld_blocks(html) {
        merge_value(&mut out, &value);
    }
    if let Some(state) = initial_state_blob(html) {
        merge_value(&mut out, &state);
    }
    out
}

/// Parse every `<script type="application/ld+json">` block independently.
fn jsonld_blocks(html: &str) -> Vec<Value> {
    let doc = Html::parse_document(html);
    let Ok(selector) = Selector::parse(r#"script[type="application/ld+json"]"#) else {
        return Vec::new();
    };
    let mut blocks = Vec::new();
    for script in doc.select(&selector) {
        let text = script.text().collect::<String>();
        match serde_json::from_str::<Value>(text.trim()) {
            Ok(Value::Array(items)) => blocks.extend(items),
            Ok(other) => blocks.push(other),
            Err(err) => tracing::debug!(%err, "skipping malformed ld+json block"),
        }
    }
    blocks
}

/// Find and parse the state blob with balanced-brace scanning; the assignment
/// has no delimiter we can regex to the end of.
fn initial_state_blob(html: &str) -> Option<Value> {
    let found = INITIAL_STATE.find(html)?;
    let blob = extract_balanced_object(&html[found.end()..])?;
    serde_json::from_str(blob).ok()
}

/// Return the shortest balanced `{...}` prefix of `s`, honoring strings and
/// escapes.
fn extract_balanced_object(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'{') {
        return None;
    }
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Pull name/title, offers price, image and description out of one JSON
/// value, filling only fields still missing.
fn merge_value(out: &mut PartialProduct, value: &Value) {
    if out.name.is_none() {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .or_else(|| value.get("title").and_then(Value::as_str))
            .map(str::trim)
            .filter(|n| !n.is_empty());
        if let Some(name) = name {
            out.name = Some(name.to_string());
        }
    }
    if out.price.is_none() {
        out.price = offers_price(value);
    }
    if out.image_url.is_none() {
        out.image_url = image_value(value);
    }
    if out.description.is_none() {
        let description = value
            .get("description")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|d| !d.is_empty());
        if let Some(description) = description {
            out.description = Some(description.to_string());
        }
    }
}

fn offers_price(value: &Value) -> Option<f64> {
    let offers = value.get("offers")?;
    let offer = match offers {
        Value::Array(items) => items.first()?,
        other => other,
    };
    match offer.get("price")? {
        Value::Number(n) => n.as_f64().filter(|p| plausible_price(*p)),
        Value::String(s) => parse_price(s),
        _ => None,
    }
}

fn image_value(value: &Value) -> Option<String> {
    match value.get("image")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items
            .first()
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        Value::Object(obj) => obj
            .get("url")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        _ => None,
    }
}
