use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors surfaced to callers of the import pipeline.
///
/// Only pre-dispatch validation fails hard. Fetch and parse failures inside a
/// strategy chain degrade to "no data from this source" and the chain moves
/// on, so they never appear here.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("unsupported source: {url} (use Amazon, Havan or Shopee links)")]
    UnsupportedSource { url: String },
}

/// Fetch-level failure. Always recovered locally by the strategy chains.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}
