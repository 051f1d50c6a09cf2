//! Shopee strategy chain, the deep end of the pipeline.
//!
//! Five layered strategies, in priority order: product-detail API, embedded
//! JSON (ld+json blocks and the client-side state blob), Open Graph meta
//! tags, regex price rules, URL-derived name. Each produces a partial record;
//! the importer merges them field by field.

pub mod api;
pub mod embedded;
pub mod meta;
pub mod price_rules;
pub mod url_name;

mod tests;

use regex::Regex;
use std::sync::LazyLock;

/// Shop and product identifiers embedded in Shopee product URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemIds {
    pub shop_id: String,
    pub product_id: String,
}

// Canonical slug form `.../nome-do-produto-i.SHOP.PRODUCT`; the alternate
// form drops the `i` and sits at the end of the path or right before the
// query string.
static ITEM_IDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/i\.(\d+)\.(\d+)").expect("valid regex"));
static ITEM_IDS_ALT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\d+)\.(\d+)(?:\?|$)").expect("valid regex"));

/// Parse shop and product ids out of a product URL, when present.
pub fn parse_item_ids(url: &str) -> Option<ItemIds> {
    let caps = ITEM_IDS
        .captures(url)
        .or_else(|| ITEM_IDS_ALT.captures(url))?;
    Some(ItemIds {
        shop_id: caps[1].to_string(),
        product_id: caps[2].to_string(),
    })
}

/// Build the product-detail API URL for the given ids.
pub fn api_url(base: &str, ids: &ItemIds) -> String {
    format!(
        "{}/api/v4/product/get_product_detail?shop_id={}&product_id={}",
        base.trim_end_matches('/'),
        ids.shop_id,
        ids.product_id
    )
}
