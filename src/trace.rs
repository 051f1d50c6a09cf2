//! Structured per-call diagnostics.
//!
//! Replaces ad hoc mutable debug state with an ordered record of which
//! strategy ran and which fields it won. Never required for correctness;
//! serialized alongside the CLI output and mirrored to `tracing` logs.

use serde::{Deserialize, Serialize};

use crate::source::Source;
use crate::types::Field;

/// Which extraction method produced a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Amazon/Havan single-pass regex extraction from known DOM markers.
    HtmlMarkers,
    /// Shopee product-detail API.
    ProductApi,
    /// ld+json blocks and the embedded client-side state blob.
    EmbeddedJson,
    /// Open Graph / Twitter / product: meta tags.
    MetaTags,
    /// Ordered price-shaped regexes over raw HTML.
    PriceRules,
    /// Name derived from the URL slug.
    UrlName,
}

/// One strategy attempt in chain order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyAttempt {
    pub strategy: StrategyKind,
    /// False when the chain skipped the strategy (fields already satisfied,
    /// or its precondition did not hold).
    pub ran: bool,
    /// Fields this attempt contributed to the merged result.
    pub contributed: Vec<Field>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportTrace {
    pub source: Source,
    pub url: String,
    pub attempts: Vec<StrategyAttempt>,
}

impl ImportTrace {
    pub fn new(source: Source, url: &str) -> Self {
        Self {
            source,
            url: url.to_string(),
            attempts: Vec::new(),
        }
    }

    pub fn record(&mut self, strategy: StrategyKind, contributed: Vec<Field>) {
        tracing::debug!(?strategy, fields = contributed.len(), "strategy ran");
        self.attempts.push(StrategyAttempt {
            strategy,
            ran: true,
            contributed,
        });
    }

    pub fn skipped(&mut self, strategy: StrategyKind) {
        tracing::debug!(?strategy, "strategy skipped");
        self.attempts.push(StrategyAttempt {
            strategy,
            ran: false,
            contributed: Vec::new(),
        });
    }

    /// Strategies that ran and contributed at least one field.
    pub fn winners(&self) -> Vec<StrategyKind> {
        self.attempts
            .iter()
            .filter(|a| !a.contributed.is_empty())
            .map(|a| a.strategy)
            .collect()
    }
}
