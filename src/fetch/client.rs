use reqwest::{redirect, Client};
use std::time::Duration;

const TIMEOUT_MS: u64 = 10_000;
const REDIRECT_LIMIT: usize = 10;

/// Build the shared client. One per [`crate::Importer`], reused across calls
/// for connection pooling.
///
/// The 10s timeout bounds how long an unresponsive merchant site can hold an
/// import call.
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .timeout(Duration::from_millis(TIMEOUT_MS))
        .build()
}
