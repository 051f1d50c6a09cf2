//! Structured API strategy: Shopee's public product-detail endpoint.

use serde_json::Value;

use crate::normalize::{cdn_image_url, plausible_price};
use crate::types::PartialProduct;

/// Raw API prices come in 1/100000ths of a currency unit. Assumed stable; if
/// the encoding changes, extraction silently produces wrong values (accepted
/// risk of the heuristic design).
const PRICE_DIVISOR: f64 = 100_000.0;

/// Read name, price and image out of a product-detail response.
///
/// The image field is a bare file id; it becomes an absolute URL on the
/// merchant CDN.
pub fn extract(json: &Value, cdn_base: &str) -> PartialProduct {
    let mut out = PartialProduct::default();
    let Some(product) = json.pointer("/data/product") else {
        return out;
    };

    if let Some(name) = product.get("name").and_then(Value::as_str) {
        if !name.trim().is_empty() {
            out.name = Some(name.trim().to_string());
        }
    }

    if let Some(raw) = product.get("price").and_then(Value::as_f64) {
        let price = raw / PRICE_DIVISOR;
        if plausible_price(price) {
            out.price = Some(price);
        }
    }

    let image_id = product
        .get("image")
        .and_then(Value::as_str)
        .or_else(|| {
            product
                .get("images")
                .and_then(Value::as_array)
                .and_then(|a| a.first())
                .and_then(Value::as_str)
        })
        .filter(|id| !id.is_empty());
    if let Some(id) = image_id {
        out.image_url = Some(cdn_image_url(cdn_base, id));
    }

    out
}
