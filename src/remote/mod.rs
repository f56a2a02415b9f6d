use log::{debug, info};
use reqwest::Client;
use std::time::Duration;

use crate::error::AffilError;

/// Location of the example author table
pub const EXAMPLE_DATA_URL: &str =
    "https://github.com/abzer005/Affiliation_Adder/raw/main/Dummy_table_Affiliations.xlsx";

/// Create an HTTP client for the example download (redirects followed; GitHub raw links redirect)
pub fn create_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}

fn fetch_error(url: &str, reason: impl ToString) -> AffilError {
    AffilError::RemoteFetch {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

/// Download the example dataset once; any transport failure or non-success status is an error
pub async fn fetch_example_dataset(client: &Client, url: &str) -> Result<Vec<u8>, AffilError> {
    info!("Fetching example data from {}", url);

    let resp = client.get(url).send().await.map_err(|e| {
        debug!("Example data request failed: {}", e);
        fetch_error(url, e)
    })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(fetch_error(url, format!("HTTP status {}", status)));
    }

    let bytes = resp.bytes().await.map_err(|e| fetch_error(url, e))?;
    info!("Downloaded {} bytes of example data", bytes.len());

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_remote_fetch_error() {
        let client = create_http_client(Duration::from_secs(2)).unwrap();
        let url = "http://127.0.0.1:9/Dummy_table_Affiliations.xlsx";

        let err = fetch_example_dataset(&client, url).await.unwrap_err();
        match err {
            AffilError::RemoteFetch { url: failed, .. } => assert_eq!(failed, url),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_example_url_is_xlsx() {
        assert!(EXAMPLE_DATA_URL.ends_with(".xlsx"));
    }
}
