#![cfg(test)]
mod tests {
    use crate::strategies::shopee::{api, embedded, meta, parse_item_ids, price_rules, url_name};
    use crate::strategies::shopee::{api_url, ItemIds};
    use serde_json::json;

    const CDN: &str = "https://down-br.img.susercontent.com";

    // -----------------------------------------------------------------------
    // URL ids
    // -----------------------------------------------------------------------

    #[test]
    fn parses_canonical_item_ids() {
        let ids = parse_item_ids("https://shopee.com.br/produto-exemplo-i.123.456").unwrap();
        assert_eq!(ids.shop_id, "123");
        assert_eq!(ids.product_id, "456");
    }

    #[test]
    fn parses_alternate_id_suffix() {
        let ids = parse_item_ids("https://shopee.com.br/produto.789.1011?sp_atk=x").unwrap();
        assert_eq!(ids.shop_id, "789");
        assert_eq!(ids.product_id, "1011");
    }

    #[test]
    fn urls_without_ids_yield_none() {
        assert_eq!(parse_item_ids("https://shopee.com.br/categoria/casa"), None);
    }

    #[test]
    fn api_url_carries_both_ids() {
        let ids = ItemIds {
            shop_id: "123".into(),
            product_id: "456".into(),
        };
        assert_eq!(
            api_url("https://shopee.com.br/", &ids),
            "https://shopee.com.br/api/v4/product/get_product_detail?shop_id=123&product_id=456"
        );
    }

    // -----------------------------------------------------------------------
    // API strategy
    // -----------------------------------------------------------------------

    #[test]
    fn api_price_is_divided_and_image_resolved() {
        let body = json!({"data": {"product": {
            "name": "Cadeira",
            "price": 12_990_000,
            "image": "abc123"
        }}});
        let part = api::extract(&body, CDN);
        assert_eq!(part.name.as_deref(), Some("Cadeira"));
        assert_eq!(part.price, Some(129.9));
        assert_eq!(
            part.image_url.as_deref(),
            Some("https://down-br.img.susercontent.com/file/abc123")
        );
    }

    #[test]
    fn api_falls_back_to_first_of_images() {
        let body = json!({"data": {"product": {
            "name": "Cadeira",
            "images": ["first", "second"]
        }}});
        let part = api::extract(&body, CDN);
        assert_eq!(
            part.image_url.as_deref(),
            Some("https://down-br.img.susercontent.com/file/first")
        );
    }

    #[test]
    fn api_implausible_price_is_dropped() {
        // 500 / 100000 = 0.005, below the plausibility floor.
        let body = json!({"data": {"product": {"name": "Brinde", "price": 500}}});
        let part = api::extract(&body, CDN);
        assert_eq!(part.price, None);
        assert_eq!(part.name.as_deref(), Some("Brinde"));
    }

    #[test]
    fn api_response_without_product_is_empty() {
        let part = api::extract(&json!({"error": 4}), CDN);
        assert!(part.is_empty());
    }

    // -----------------------------------------------------------------------
    // Embedded JSON strategy
    // -----------------------------------------------------------------------

    #[test]
    fn malformed_ldjson_block_does_not_kill_the_rest() {
        let html = r#"
            <script type="application/ld+json">{not json at all</script>
            <script type="application/ld+json">
            {"@type": "Product", "name": "Cadeira Gamer",
             "offers": {"price": "199.90"}, "image": "https://cf.shopee.com.br/x.jpg"}
            </script>
        "#;
        let part = embedded::extract(html);
        assert_eq!(part.name.as_deref(), Some("Cadeira Gamer"));
        assert_eq!(part.price, Some(199.90));
        assert_eq!(
            part.image_url.as_deref(),
            Some("https://cf.shopee.com.br/x.jpg")
        );
    }

    #[test]
    fn ldjson_array_offers_and_image_list() {
        let html = r#"
            <script type="application/ld+json">
            [{"@type": "Product", "title": "Mesa",
              "offers": [{"price": 320.5}], "image": ["https://img/1.jpg", "https://img/2.jpg"]}]
            </script>
        "#;
        let part = embedded::extract(html);
        assert_eq!(part.name.as_deref(), Some("Mesa"));
        assert_eq!(part.price, Some(320.5));
        assert_eq!(part.image_url.as_deref(), Some("https://img/1.jpg"));
    }

    #[test]
    fn initial_state_blob_is_parsed_with_balanced_braces() {
        let html = r#"
            <script>window.__INITIAL_STATE__ = {"name": "Tapete {promo}", "offers": {"price": "89,90"}};</script>
        "#;
        let part = embedded::extract(html);
        assert_eq!(part.name.as_deref(), Some("Tapete {promo}"));
        assert_eq!(part.price, Some(89.90));
    }

    #[test]
    fn earlier_block_wins_per_field() {
        let html = r#"
            <script type="application/ld+json">{"name": "Primeiro"}</script>
            <script type="application/ld+json">{"name": "Segundo", "offers": {"price": 10.0}}</script>
        "#;
        let part = embedded::extract(html);
        assert_eq!(part.name.as_deref(), Some("Primeiro"));
        assert_eq!(part.price, Some(10.0));
    }

    // -----------------------------------------------------------------------
    // Meta-tag strategy
    // -----------------------------------------------------------------------

    #[test]
    fn meta_tags_with_any_attribute_order() {
        let html = r#"
            <meta content="Cadeira Gamer | Shopee" property="og:title">
            <meta property="og:description" content="Uma cadeira confortável">
            <meta property="product:price:amount" content="199,90">
            <meta name="twitter:image" content="https://cf.shopee.com.br/t.jpg">
        "#;
        let part = meta::extract(html);
        assert_eq!(part.name.as_deref(), Some("Cadeira Gamer | Shopee"));
        assert_eq!(part.description.as_deref(), Some("Uma cadeira confortável"));
        assert_eq!(part.price, Some(199.90));
        assert_eq!(
            part.image_url.as_deref(),
            Some("https://cf.shopee.com.br/t.jpg")
        );
    }

    #[test]
    fn og_image_beats_twitter_image() {
        let html = r#"
            <meta property="og:image" content="https://img/og.jpg">
            <meta name="twitter:image" content="https://img/tw.jpg">
        "#;
        let part = meta::extract(html);
        assert_eq!(part.image_url.as_deref(), Some("https://img/og.jpg"));
    }

    #[test]
    fn empty_meta_content_is_no_value() {
        let html = r#"<meta property="og:title" content="  ">"#;
        assert!(meta::extract(html).is_empty());
    }

    // -----------------------------------------------------------------------
    // Price rules
    // -----------------------------------------------------------------------

    #[test]
    fn json_price_rule_wins_over_currency_text() {
        let html = r#"{"price": 149.90} ... R$ 999,99"#;
        let part = price_rules::extract(html);
        assert_eq!(part.price, Some(149.90));
    }

    #[test]
    fn currency_pattern_matches_spaced_and_tight() {
        assert_eq!(price_rules::extract("por R$ 199,90").price, Some(199.90));
        assert_eq!(price_rules::extract("por R$199").price, Some(199.0));
    }

    #[test]
    fn labeled_currency_pattern() {
        assert_eq!(
            price_rules::extract("Preço: R$ 1.234,56").price,
            Some(1234.56)
        );
    }

    #[test]
    fn invalid_match_falls_through_to_next_rule() {
        // The JSON rule matches an implausible zero; the currency rule
        // must still get its chance.
        let html = r#"{"price": 0} custa R$ 49,90"#;
        assert_eq!(price_rules::extract(html).price, Some(49.90));
    }

    #[test]
    fn no_price_anywhere_is_none() {
        assert_eq!(price_rules::extract("<p>sem valor</p>").price, None);
    }

    // -----------------------------------------------------------------------
    // URL-derived name
    // -----------------------------------------------------------------------

    #[test]
    fn slug_becomes_spaced_name_without_item_id() {
        assert_eq!(
            url_name::extract("https://shopee.com.br/produto-exemplo-i.123.456"),
            Some("produto exemplo".to_string())
        );
    }

    #[test]
    fn percent_encoding_is_decoded() {
        assert_eq!(
            url_name::extract("https://shopee.com.br/cadeira-ergon%C3%B4mica-i.1.2"),
            Some("cadeira ergonômica".to_string())
        );
    }

    #[test]
    fn numeric_only_segments_are_skipped() {
        assert_eq!(
            url_name::extract("https://shopee.com.br/jogo-de-copos/123456"),
            Some("jogo de copos".to_string())
        );
    }

    #[test]
    fn no_usable_segment_yields_none() {
        assert_eq!(url_name::extract("https://shopee.com.br/"), None);
        assert_eq!(url_name::extract("https://shopee.com.br/123456"), None);
    }
}
