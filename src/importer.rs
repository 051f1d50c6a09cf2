//! Extraction orchestrator: classify, dispatch the merchant chain, normalize,
//! finalize.

use chrono::Utc;
use reqwest::Client;
use url::Url;

use crate::error::{ImportError, Result};
use crate::fetch;
use crate::normalize;
use crate::source::Source;
use crate::strategies::{amazon, havan, shopee};
use crate::trace::{ImportTrace, StrategyKind};
use crate::types::{ExtractedProduct, Field, ImportOutcome, ImportStatus, PartialProduct};

const SHOPEE_API_BASE: &str = "https://shopee.com.br";
const SHOPEE_CDN_BASE: &str = "https://down-br.img.susercontent.com";

/// Stateless import pipeline. One logical task per call; the only shared
/// state is the pooled HTTP client.
pub struct Importer {
    client: Client,
    shopee_api_base: String,
    shopee_cdn_base: String,
}

impl Importer {
    pub fn new() -> reqwest::Result<Self> {
        Ok(Self {
            client: fetch::build_client()?,
            shopee_api_base: SHOPEE_API_BASE.to_string(),
            shopee_cdn_base: SHOPEE_CDN_BASE.to_string(),
        })
    }

    /// Point the Shopee API and CDN at different hosts (tests, proxies).
    pub fn with_shopee_endpoints(mut self, api_base: &str, cdn_base: &str) -> Self {
        self.shopee_api_base = api_base.trim_end_matches('/').to_string();
        self.shopee_cdn_base = cdn_base.trim_end_matches('/').to_string();
        self
    }

    /// Import a product from a URL, classifying the merchant first.
    ///
    /// Unsupported sources are rejected here, before any network cost. For
    /// supported sources the call always returns a persistable record.
    pub async fn import(&self, url: &str) -> Result<ImportOutcome> {
        match Source::classify(url) {
            Source::Unsupported => Err(ImportError::UnsupportedSource {
                url: url.to_string(),
            }),
            source => self.import_as(url, source).await,
        }
    }

    /// Import with a pre-decided source. The source is immutable for the
    /// whole call.
    pub async fn import_as(&self, url: &str, source: Source) -> Result<ImportOutcome> {
        if source == Source::Unsupported {
            return Err(ImportError::UnsupportedSource {
                url: url.to_string(),
            });
        }
        let page_url = Url::parse(url).map_err(|_| ImportError::InvalidUrl(url.to_string()))?;

        let mut trace = ImportTrace::new(source, url);
        let (partial, status) = match source {
            Source::Amazon => {
                self.run_html_markers(url, amazon::extract, &mut trace)
                    .await
            }
            Source::Havan => self.run_html_markers(url, havan::extract, &mut trace).await,
            Source::Shopee => (
                self.run_shopee_chain(url, &mut trace).await,
                ImportStatus::Success,
            ),
            Source::Unsupported => unreachable!("rejected above"),
        };

        let product = finalize(source, &page_url, partial);
        tracing::info!(
            source = source.label(),
            name = %product.name,
            price = ?product.price,
            ?status,
            "import finished"
        );
        Ok(ImportOutcome {
            product,
            status,
            trace,
        })
    }

    /// Amazon/Havan: one fetch, one regex pass. A fetch failure or a missing
    /// title degrades to a placeholder item; it never fails the call.
    async fn run_html_markers(
        &self,
        url: &str,
        extract: fn(&str) -> Option<PartialProduct>,
        trace: &mut ImportTrace,
    ) -> (PartialProduct, ImportStatus) {
        let html = match fetch::fetch_html(&self.client, url).await {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!(url, %err, "product page fetch failed");
                trace.record(StrategyKind::HtmlMarkers, vec![]);
                return (PartialProduct::default(), ImportStatus::Degraded);
            }
        };
        match extract(&html) {
            Some(partial) => {
                let mut acc = PartialProduct::default();
                let contributed = acc.fill_from(partial);
                trace.record(StrategyKind::HtmlMarkers, contributed);
                (acc, ImportStatus::Success)
            }
            None => {
                trace.record(StrategyKind::HtmlMarkers, vec![]);
                (PartialProduct::default(), ImportStatus::Degraded)
            }
        }
    }

    /// Shopee: five strategies in priority order, merged field by field.
    /// Strategies whose target fields are already satisfied are skipped; at
    /// most one API call and one HTML fetch happen per import.
    async fn run_shopee_chain(&self, url: &str, trace: &mut ImportTrace) -> PartialProduct {
        let mut acc = PartialProduct::default();

        // Strategy 1: product-detail API, when the URL carries item ids.
        match shopee::parse_item_ids(url) {
            Some(ids) => {
                let api_url = shopee::api_url(&self.shopee_api_base, &ids);
                match fetch::fetch_json(&self.client, &api_url, url).await {
                    Ok(json) => {
                        let partial = shopee::api::extract(&json, &self.shopee_cdn_base);
                        let contributed = acc.fill_from(partial);
                        trace.record(StrategyKind::ProductApi, contributed);
                    }
                    Err(err) => {
                        tracing::debug!(%err, "shopee api unavailable, falling through");
                        trace.record(StrategyKind::ProductApi, vec![]);
                    }
                }
            }
            None => trace.skipped(StrategyKind::ProductApi),
        }

        // Strategies 2-4 share one HTML fetch. Description alone never
        // triggers it; name, price or image missing does.
        if acc.is_satisfied() {
            trace.skipped(StrategyKind::EmbeddedJson);
            trace.skipped(StrategyKind::MetaTags);
            trace.skipped(StrategyKind::PriceRules);
        } else {
            match fetch::fetch_html(&self.client, url).await {
                Ok(html) => {
                    self.run_html_strategies(&html, &mut acc, trace);
                }
                Err(err) => {
                    tracing::warn!(url, %err, "shopee page fetch failed");
                    trace.skipped(StrategyKind::EmbeddedJson);
                    trace.skipped(StrategyKind::MetaTags);
                    trace.skipped(StrategyKind::PriceRules);
                }
            }
        }

        // Strategy 5: URL-derived name, only when everything else missed.
        if acc.name.is_none() {
            match shopee::url_name::extract(url) {
                Some(name) => {
                    acc.name = Some(name);
                    trace.record(StrategyKind::UrlName, vec![Field::Name]);
                }
                None => trace.record(StrategyKind::UrlName, vec![]),
            }
        } else {
            trace.skipped(StrategyKind::UrlName);
        }

        acc
    }

    fn run_html_strategies(
        &self,
        html: &str,
        acc: &mut PartialProduct,
        trace: &mut ImportTrace,
    ) {
        let attempts: [(StrategyKind, fn(&str) -> PartialProduct); 3] = [
            (StrategyKind::EmbeddedJson, shopee::embedded::extract),
            (StrategyKind::MetaTags, shopee::meta::extract),
            (StrategyKind::PriceRules, shopee::price_rules::extract),
        ];
        for (kind, extract) in attempts {
            if acc.is_satisfied() {
                trace.skipped(kind);
                continue;
            }
            let contributed = acc.fill_from(extract(html));
            trace.record(kind, contributed);
        }
    }
}

/// Normalize and assemble the final record. The name is always non-empty:
/// cleanup can strip a name down to nothing, in which case the merchant
/// placeholder takes over. Placeholder names are never cleaned (they contain
/// the merchant token).
fn finalize(source: Source, page_url: &Url, partial: PartialProduct) -> ExtractedProduct {
    let name = partial
        .name
        .map(|n| normalize::clean_name(&n))
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| source.placeholder_name());

    let description = partial
        .description
        .map(|d| normalize::truncate_description(&d))
        .filter(|d| !d.is_empty());

    let image_url = partial
        .image_url
        .and_then(|i| normalize::resolve_image_url(&i, Some(page_url)));

    ExtractedProduct {
        name,
        description,
        price: partial.price,
        image_url,
        source,
        extracted_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://shopee.com.br/cadeira-i.1.2").unwrap()
    }

    #[test]
    fn finalize_cleans_extracted_names() {
        let product = finalize(
            Source::Shopee,
            &page_url(),
            PartialProduct {
                name: Some("Cadeira Gamer | Shopee Brasil".into()),
                ..Default::default()
            },
        );
        assert_eq!(product.name, "Cadeira Gamer");
    }

    #[test]
    fn finalize_falls_back_to_placeholder_when_cleanup_empties_the_name() {
        let product = finalize(
            Source::Shopee,
            &page_url(),
            PartialProduct {
                name: Some("Shopee".into()),
                ..Default::default()
            },
        );
        assert_eq!(product.name, "Produto importado da Shopee");
    }

    #[test]
    fn finalize_truncates_description_and_resolves_image() {
        let product = finalize(
            Source::Havan,
            &Url::parse("https://www.havan.com.br/produto").unwrap(),
            PartialProduct {
                name: Some("Produto".into()),
                description: Some("d".repeat(600)),
                price: Some(10.0),
                image_url: Some("/media/1.jpg".into()),
            },
        );
        assert_eq!(product.description.as_ref().map(|d| d.chars().count()), Some(500));
        assert_eq!(
            product.image_url.as_deref(),
            Some("https://www.havan.com.br/media/1.jpg")
        );
    }
}
