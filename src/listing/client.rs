use anyhow::{Context, Result};
use reqwest::Client;

/// HTTP client for listing pages.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent("flat-rate/0.2 (listing comparison)")
        .build()
        .context("Failed to build HTTP client")
}

/// Fetch one listing's detail page: `<base_url>/<id>`.
pub async fn fetch_listing_html(client: &Client, base_url: &str, id: &str) -> Result<String> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), id);
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request failed for {}", url))?;

    let response = response
        .error_for_status()
        .with_context(|| format!("Listing page returned an error status: {}", url))?;

    response
        .text()
        .await
        .with_context(|| format!("Failed to read body of {}", url))
}
