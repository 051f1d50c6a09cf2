//! Amazon chain: one HTML fetch, direct regex extraction from known DOM
//! id/class markers.

use regex::Regex;
use std::sync::LazyLock;

use crate::normalize::parse_price;
use crate::types::PartialProduct;

static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span id="productTitle"[^>]*>([^<]+)</span>"#).expect("valid regex")
});
static PRICE_WHOLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class="a-price-whole">([^<]+)<"#).expect("valid regex"));
static PRICE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"priceblock_ourprice[^>]*>R\$\s*([0-9.,]+)<"#).expect("valid regex")
});
static LANDING_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"id="landingImage"[^>]*src="([^"]+)""#).expect("valid regex"));
static DYNAMIC_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class="a-dynamic-image"[^>]*src="([^"]+)""#).expect("valid regex")
});

/// Extract title, price and image from an Amazon product page.
///
/// The title is the gating field: without it the whole attempt is a miss
/// (`None`) and the caller degrades to a placeholder item, even when price or
/// image markers matched.
pub fn extract(html: &str) -> Option<PartialProduct> {
    let name = TITLE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|n| !n.is_empty())?;

    let price = PRICE_WHOLE
        .captures(html)
        .or_else(|| PRICE_BLOCK.captures(html))
        .and_then(|c| c.get(1))
        .and_then(|m| parse_price(m.as_str()));

    let image_url = LANDING_IMAGE
        .captures(html)
        .or_else(|| DYNAMIC_IMAGE.captures(html))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    Some(PartialProduct {
        name: Some(name),
        description: None,
        price,
        image_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <span id="productTitle"> Echo Dot 5ª Geração </span>
        <span class="a-price-whole">349,</span>
        <img id="landingImage" data-a-dynamic-image="{}" src="https://m.media-amazon.com/images/I/echo.jpg"/>
        </body></html>
    "#;

    #[test]
    fn extracts_title_price_and_image() {
        let part = extract(PAGE).expect("title present");
        assert_eq!(part.name.as_deref(), Some("Echo Dot 5ª Geração"));
        assert_eq!(part.price, Some(349.0));
        assert_eq!(
            part.image_url.as_deref(),
            Some("https://m.media-amazon.com/images/I/echo.jpg")
        );
    }

    #[test]
    fn missing_title_fails_the_whole_attempt() {
        let html = r#"<span class="a-price-whole">349,</span>"#;
        assert!(extract(html).is_none());
    }

    #[test]
    fn legacy_price_block_is_a_fallback() {
        let html = r#"
            <span id="productTitle">Echo Dot</span>
            <span id="priceblock_ourprice" class="a-color-price">R$ 1.234,56</span>
        "#;
        let part = extract(html).unwrap();
        assert_eq!(part.price, Some(1234.56));
    }

    #[test]
    fn implausible_price_is_absent_not_substituted() {
        let html = r#"
            <span id="productTitle">Echo Dot</span>
            <span class="a-price-whole">0</span>
        "#;
        let part = extract(html).unwrap();
        assert_eq!(part.price, None);
    }
}
