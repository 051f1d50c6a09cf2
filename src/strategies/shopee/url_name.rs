//! URL-derived fallback: turn the product slug into a human-readable name.

use percent_encoding::percent_decode_str;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static ITEM_ID_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+i\.\d+\.\d+").expect("valid regex"));
static ALL_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));

/// Derive a name from the last non-numeric path segment: percent-decode,
/// hyphens to spaces, trailing item-id suffix stripped.
pub fn extract(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed
        .path_segments()?
        .filter(|s| !s.is_empty() && !ALL_DIGITS.is_match(s))
        .next_back()?;
    let decoded = percent_decode_str(segment).decode_utf8().ok()?;
    let spaced = decoded.replace('-', " ");
    let name = ITEM_ID_SUFFIX.replace(&spaced, "").trim().to_string();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
