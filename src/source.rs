use serde::{Deserialize, Serialize};
use url::Url;

/// Supported merchants, decided once per import call before any fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    Amazon,
    Havan,
    Shopee,
    Unsupported,
}

impl Source {
    /// Classify a URL by host substring. Only the parsed host is inspected,
    /// so a merchant name in the path or query never matches. First match
    /// wins; anything else is `Unsupported` and must be rejected before any
    /// network cost.
    ///
    /// Deliberately an allow-list: unknown merchants are not probed with a
    /// generic Open Graph pass.
    pub fn classify(url: &str) -> Source {
        let host = match Url::parse(url).ok().as_ref().and_then(Url::host_str) {
            Some(host) => host.to_ascii_lowercase(),
            None => return Source::Unsupported,
        };
        if host.contains("amazon.com") {
            Source::Amazon
        } else if host.contains("havan.com.br") {
            Source::Havan
        } else if host.contains("shopee.com.br") {
            Source::Shopee
        } else {
            Source::Unsupported
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Source::Amazon => "Amazon",
            Source::Havan => "Havan",
            Source::Shopee => "Shopee",
            Source::Unsupported => "Desconhecido",
        }
    }

    /// Always-valid fallback name for when no strategy produced one.
    pub fn placeholder_name(&self) -> String {
        match self {
            // Shopee reads better with the feminine article.
            Source::Shopee => "Produto importado da Shopee".to_string(),
            other => format!("Produto importado de {}", other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_hosts() {
        assert_eq!(
            Source::classify("https://www.amazon.com.br/dp/B0ABC"),
            Source::Amazon
        );
        assert_eq!(
            Source::classify("https://www.amazon.com/dp/B0ABC"),
            Source::Amazon
        );
        assert_eq!(
            Source::classify("https://www.havan.com.br/jogo-de-panelas"),
            Source::Havan
        );
        assert_eq!(
            Source::classify("https://shopee.com.br/produto-i.1.2"),
            Source::Shopee
        );
    }

    #[test]
    fn everything_else_is_unsupported() {
        assert_eq!(
            Source::classify("https://loja-desconhecida.com/produto"),
            Source::Unsupported
        );
        assert_eq!(Source::classify("not a url"), Source::Unsupported);
    }

    #[test]
    fn merchant_names_outside_the_host_do_not_match() {
        assert_eq!(
            Source::classify("https://example.com/?ref=amazon.com"),
            Source::Unsupported
        );
        assert_eq!(
            Source::classify("https://example.com/shopee.com.br/produto"),
            Source::Unsupported
        );
    }

    #[test]
    fn placeholder_names_carry_the_merchant() {
        assert_eq!(
            Source::Amazon.placeholder_name(),
            "Produto importado de Amazon"
        );
        assert_eq!(
            Source::Shopee.placeholder_name(),
            "Produto importado da Shopee"
        );
    }
}
