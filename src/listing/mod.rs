pub mod client;
pub mod extract;
pub mod types;

pub use client::{build_client, fetch_listing_html};
pub use extract::extract_record;
pub use types::{FeatureSet, Location, PropertyRecord, PropertyType};

use reqwest::Client;
use tokio::time::{sleep, Duration};

/// Fetch and extract every listing in `ids`, in order.
///
/// One listing failing to fetch or extract is reported to stderr and
/// skipped; the remaining ids still run. Callers decide what an empty result
/// means. A short delay between requests keeps the portal happy.
pub async fn fetch_records(
    client: &Client,
    base_url: &str,
    ids: &[String],
    delay_ms: u64,
    verbose: bool,
) -> Vec<PropertyRecord> {
    let mut records = Vec::new();

    for id in ids {
        if verbose {
            eprintln!("Fetching listing {}", id);
        }
        let result = match fetch_listing_html(client, base_url, id).await {
            Ok(html) => extract_record(&html, id),
            Err(e) => Err(e),
        };
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                eprintln!("Listing {} skipped: {:#}", id, e);
            }
        }

        if delay_ms > 0 {
            sleep(Duration::from_millis(delay_ms)).await;
        }
    }

    records
}
