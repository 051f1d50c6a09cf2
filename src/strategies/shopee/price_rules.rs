//! Ordered price-shaped regex rules applied to raw HTML.
//!
//! Each rule carries a name so a production miss is diagnosable on its own
//! and the set can grow without touching chain logic. Rules are tried in
//! order; the first whose parsed value survives the plausibility filter wins.

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::parse_price;
use crate::types::PartialProduct;

struct PriceRule {
    name: &'static str,
    pattern: Regex,
}

impl PriceRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid regex"),
        }
    }
}

static PRICE_RULES: LazyLock<Vec<PriceRule>> = LazyLock::new(|| {
    vec![
        PriceRule::new("json-price-number", r#""price"\s*:\s*(\d+(?:\.\d{1,2})?)"#),
        PriceRule::new("json-price-string", r#""price"\s*:\s*"?([\d.,]+)"?"#),
        PriceRule::new("labeled-currency", r"(?i)pre[cç]o:?\s*R\$\s*([\d.,]+)"),
        PriceRule::new("currency-spaced", r"R\$\s+([\d.,]+)"),
        PriceRule::new("currency-tight", r"R\$\s*([\d,]+)"),
    ]
});

pub fn extract(html: &str) -> PartialProduct {
    PartialProduct {
        price: first_plausible_price(html),
        ..Default::default()
    }
}

fn first_plausible_price(html: &str) -> Option<f64> {
    for rule in PRICE_RULES.iter() {
        let Some(captures) = rule.pattern.captures(html) else {
            continue;
        };
        // A match that fails validation falls through to the next rule.
        if let Some(price) = captures.get(1).and_then(|m| parse_price(m.as_str())) {
            tracing::debug!(rule = rule.name, price, "price rule matched");
            return Some(price);
        }
    }
    None
}
