use reqwest::Client;

use crate::error::ImportError;

/// Downloads the CSV document at `url` with a single GET.
pub async fn fetch_csv(client: &Client, url: &str) -> Result<String, ImportError> {
    tracing::info!(url, "Downloading CSV");

    let res = client.get(url).send().await?;

    let status = res.status();
    if !status.is_success() {
        return Err(ImportError::Fetch {
            status: status.as_u16(),
            text: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let body = res.text().await?;
    tracing::info!(bytes = body.len(), "CSV downloaded");
    crate::metrics::record_fetch_bytes(body.len());
    Ok(body)
}
