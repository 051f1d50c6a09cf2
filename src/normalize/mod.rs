//! Field cleanup and validation applied to every extracted value.


use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Plausibility bounds for prices: anything outside is a mis-parsed number,
/// not a price, and is discarded rather than defaulted.
pub const MIN_PRICE: f64 = 0.01;
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum stored description length, ellipsis included.
pub const MAX_DESCRIPTION_LEN: usize = 500;
const ELLIPSIS: &str = "...";

// Name-cleanup passes, in application order. Suffix removal must run before
// trimming; the trailing-annotation pass is a known heuristic risk (it can
// eat a legitimate parenthetical that ends the title).
static BRAND_PIPE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\|\s*(?:Amazon|Havan|Shopee).*$").expect("valid regex"));
static BRAND_DASH_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*-\s*(?:Amazon|Havan|Shopee).*$").expect("valid regex"));
static BRAND_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:Amazon|Havan|Shopee)\b\s*").expect("valid regex")
});
static EMBEDDED_ITEM_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+i\.\d+\.\d+").expect("valid regex"));
static TRAILING_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[\[(].*[\])].*$").expect("valid regex"));

// `1.234` or `1.234.567`: dots as thousands separators, no decimal part.
static THOUSANDS_GROUPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(?:\.\d{3})+$").expect("valid regex"));

/// Strip merchant branding, embedded item ids and trailing annotations out of
/// an extracted product name. Idempotent: cleaning a cleaned name is a no-op.
pub fn clean_name(name: &str) -> String {
    let name = BRAND_PIPE_SUFFIX.replace(name, "");
    let name = BRAND_DASH_SUFFIX.replace(&name, "");
    let name = BRAND_TOKEN.replace_all(&name, "");
    let name = EMBEDDED_ITEM_ID.replace_all(&name, "");
    let name = TRAILING_ANNOTATION.replace(&name, "");
    name.trim().to_string()
}

/// Parse a price string in Brazilian locale (`1.234,56`), dot-grouped
/// (`1.234`) or plain decimal (`12.99`) form. Returns `None` for anything
/// that fails the plausibility filter.
pub fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    // A comma marks the Brazilian format: dots are thousands separators.
    // Without a comma, a dot-grouped string (`1.234`) is still thousands;
    // anything else (`12.99`) parses as a plain decimal.
    let normalized = if raw.contains(',') {
        raw.replace('.', "").replace(',', ".")
    } else if THOUSANDS_GROUPED.is_match(raw) {
        raw.replace('.', "")
    } else {
        raw.to_string()
    };
    let value: f64 = normalized.parse().ok()?;
    plausible_price(value).then_some(value)
}

/// Range check rejecting clearly-wrong parsed values.
pub fn plausible_price(value: f64) -> bool {
    value.is_finite() && value > MIN_PRICE && value < MAX_PRICE
}

/// Cut descriptions longer than 500 characters to 497 plus `...`.
pub fn truncate_description(description: &str) -> String {
    let description = description.trim();
    if description.chars().count() <= MAX_DESCRIPTION_LEN {
        return description.to_string();
    }
    let cut: String = description
        .chars()
        .take(MAX_DESCRIPTION_LEN - ELLIPSIS.len())
        .collect();
    format!("{cut}{ELLIPSIS}")
}

/// Resolve a page-derived image reference to an absolute URL.
///
/// Protocol-relative `//host/...` gets https; rooted paths resolve against
/// the product page; anything unresolvable is dropped.
pub fn resolve_image_url(raw: &str, page_url: Option<&Url>) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Some(raw.to_string());
    }
    if raw.starts_with("//") {
        return Some(format!("https:{raw}"));
    }
    page_url?.join(raw).ok().map(|u| u.to_string())
}

/// Assemble the absolute CDN URL for a bare Shopee image file id.
pub fn cdn_image_url(cdn_base: &str, file_id: &str) -> String {
    format!("{}/file/{}", cdn_base.trim_end_matches('/'), file_id)
}
