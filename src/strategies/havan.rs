//! Havan chain: one HTML fetch, regex extraction with generic fallbacks
//! (the markup is less stable than Amazon's).

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::parse_price;
use crate::types::PartialProduct;

static TITLE_PRODUCT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<h1[^>]*class="[^"]*product-name[^"]*"[^>]*>([^<]+)</h1>"#).expect("valid regex")
});
static TITLE_ANY_H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h1[^>]*>([^<]+)</h1>").expect("valid regex"));
static PRICE_LABELED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"price[^>]*>R\$\s*([0-9.,]+)<"#).expect("valid regex"));
static PRICE_ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"R\$\s*([0-9.,]+)").expect("valid regex"));
static IMAGE_PRODUCT_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img[^>]*class="[^"]*product-image[^"]*"[^>]*src="([^"]+)""#)
        .expect("valid regex")
});
static IMAGE_PRODUCT_AFTER_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img[^>]*src="([^"]+)"[^>]*class="[^"]*product"#).expect("valid regex")
});

/// Extract title, price and image from a Havan product page.
///
/// Same gating rule as Amazon: no title means the attempt failed and the
/// caller falls back to a placeholder item.
pub fn extract(html: &str) -> Option<PartialProduct> {
    let name = TITLE_PRODUCT_NAME
        .captures(html)
        .or_else(|| TITLE_ANY_H1.captures(html))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|n| !n.is_empty())?;

    let price = PRICE_LABELED
        .captures(html)
        .or_else(|| PRICE_ANY.captures(html))
        .and_then(|c| c.get(1))
        .and_then(|m| parse_price(m.as_str()));

    let image_url = IMAGE_PRODUCT_CLASS
        .captures(html)
        .or_else(|| IMAGE_PRODUCT_AFTER_SRC.captures(html))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    Some(PartialProduct {
        name: Some(name),
        description: None,
        price,
        image_url,
    })
}
