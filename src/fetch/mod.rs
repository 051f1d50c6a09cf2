//! HTTP fetch layer shared by every strategy.
//!
//! No retries: a failed fetch means "no data from this source" and the
//! strategy chain falls through to the next option.

mod client;
mod headers;

pub use client::build_client;

use reqwest::Client;

use crate::error::FetchError;

/// GET a page and return its body as text.
///
/// Sends a fixed desktop-browser User-Agent; the supported merchants serve
/// reduced or bot-blocking markup to default clients.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, FetchError> {
    let resp = client
        .get(url)
        .headers(headers::browser_headers())
        .send()
        .await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(resp.text().await?)
}

/// GET a JSON endpoint.
///
/// `referer` mimics a navigation from the product page; the Shopee
/// product-detail API rejects requests without one.
pub async fn fetch_json(
    client: &Client,
    url: &str,
    referer: &str,
) -> Result<serde_json::Value, FetchError> {
    let resp = client
        .get(url)
        .headers(headers::json_headers(referer))
        .send()
        .await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(resp.json().await?)
}
