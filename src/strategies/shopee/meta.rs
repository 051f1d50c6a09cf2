//! Meta-tag strategy: Open Graph, Twitter card and `product:` meta tags.
//!
//! Goes through the DOM parser rather than regex so attribute order inside
//! the tag never matters.

use scraper::{Html, Selector};

use crate::normalize::parse_price;
use crate::types::PartialProduct;

pub fn extract(html: &str) -> PartialProduct {
    let doc = Html::parse_document(html);
    let pairs = meta_pairs(&doc);
    PartialProduct {
        name: find(&pairs, &["og:title"]),
        description: find(&pairs, &["og:description"]),
        price: find(&pairs, &["product:price:amount"]).and_then(|s| parse_price(&s)),
        image_url: find(&pairs, &["og:image", "twitter:image"]),
    }
}

/// Collect (property|name, content) pairs from all `<meta>` tags.
fn meta_pairs(doc: &Html) -> Vec<(String, String)> {
    let Ok(selector) = Selector::parse("meta") else {
        return Vec::new();
    };
    doc.select(&selector)
        .filter_map(|el| {
            let key = el
                .value()
                .attr("property")
                .or_else(|| el.value().attr("name"))?;
            let content = el.value().attr("content")?;
            Some((key.to_ascii_lowercase(), content.to_string()))
        })
        .collect()
}

/// First non-empty value for any of the given keys, in key priority order.
fn find(pairs: &[(String, String)], keys: &[&str]) -> Option<String> {
    for key in keys {
        for (k, v) in pairs {
            if k == key {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
    }
    None
}
