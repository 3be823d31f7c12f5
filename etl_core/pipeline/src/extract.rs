use log::{error, info};
use serde_json::Value;
use shared_clients::api::{ApiClient, ApiClientError};

/// Fetch one resource and return the parsed JSON body as-is.
///
/// The body's shape is not validated here; a payload that is not an array of
/// objects surfaces as a transformation failure instead.
pub async fn extract(client: &ApiClient, url: &str) -> Result<Value, ApiClientError> {
    match client.get_json(url).await {
        Ok(body) => {
            info!("extracted data from {}", url);
            Ok(body)
        }
        Err(err) => {
            error!("failed to extract from {}: {}", url, err);
            Err(err)
        }
    }
}
