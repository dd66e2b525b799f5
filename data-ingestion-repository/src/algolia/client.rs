//! Algolia client implementation.
//!
//! This module provides the concrete implementation of `RecordIndex` using the
//! Algolia batch write endpoint over HTTPS.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::config::AlgoliaConfig;
use crate::errors::IndexError;
use crate::interfaces::RecordIndex;
use crate::types::{BatchWriteRequest, BatchWriteResponse, ErrorResponse};
use data_ingestion_shared::Record;

const APPLICATION_ID_HEADER: &str = "x-algolia-application-id";
const API_KEY_HEADER: &str = "x-algolia-api-key";

/// Algolia client bound to a single index.
///
/// # Example
///
/// ```ignore
/// let config = AlgoliaConfig::new("APPID", "write-key", "products");
/// let client = AlgoliaClient::new(config)?;
/// client.save_records(&[json!({"name": "Lamp"})]).await?;
/// ```
pub struct AlgoliaClient {
    client: reqwest::Client,
    batch_url: Url,
    index_name: String,
}

impl AlgoliaClient {
    /// Create a new client for the configured application and index.
    ///
    /// # Returns
    ///
    /// * `Ok(AlgoliaClient)` - A new client instance
    /// * `Err(IndexError::Configuration)` - If a field is missing or the host is not a valid URL
    pub fn new(config: AlgoliaConfig) -> Result<Self, IndexError> {
        config.validate()?;

        let batch_url = Self::batch_url(&config.write_host(), &config.index_name)?;

        let mut headers = HeaderMap::new();
        let application_id = HeaderValue::from_str(&config.application_id)
            .map_err(|e| IndexError::configuration(format!("Invalid Application ID: {}", e)))?;
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| IndexError::configuration(format!("Invalid API Key: {}", e)))?;
        api_key.set_sensitive(true);
        headers.insert(APPLICATION_ID_HEADER, application_id);
        headers.insert(API_KEY_HEADER, api_key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| IndexError::connection(e.to_string()))?;

        info!(
            application_id = %config.application_id,
            index = %config.index_name,
            url = %batch_url,
            "Created Algolia client"
        );

        Ok(Self {
            client,
            batch_url,
            index_name: config.index_name,
        })
    }

    /// Build `{host}/1/indexes/{index}/batch` with the index name percent-encoded.
    fn batch_url(host: &str, index_name: &str) -> Result<Url, IndexError> {
        let mut url = Url::parse(host)
            .map_err(|e| IndexError::configuration(format!("Invalid host '{}': {}", host, e)))?;

        url.path_segments_mut()
            .map_err(|_| IndexError::configuration(format!("Invalid host '{}'", host)))?
            .pop_if_empty()
            .extend(["1", "indexes", index_name, "batch"]);

        Ok(url)
    }

    fn map_transport_error(err: reqwest::Error) -> IndexError {
        if err.is_timeout() {
            IndexError::timeout(err.to_string())
        } else {
            IndexError::connection(err.to_string())
        }
    }
}

#[async_trait]
impl RecordIndex for AlgoliaClient {
    fn index_name(&self) -> &str {
        &self.index_name
    }

    #[instrument(skip(self, records), fields(index = %self.index_name, count = records.len()))]
    async fn save_records(&self, records: &[Record]) -> Result<(), IndexError> {
        let body = serde_json::to_vec(&BatchWriteRequest::save(records))?;

        let response = self
            .client
            .post(self.batch_url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.message)
                .unwrap_or_else(|_| {
                    status.canonical_reason().unwrap_or("Unknown").to_string()
                });

            error!(status = status.as_u16(), message = %message, "Batch write rejected");
            return Err(IndexError::from_status(status.as_u16(), message));
        }

        // The status decides success; the body is informational only.
        match response.json::<BatchWriteResponse>().await {
            Ok(parsed) => debug!(
                task_id = parsed.task_id,
                object_ids = parsed.object_ids.len(),
                "Batch write accepted"
            ),
            Err(e) => warn!(
                status = status.as_u16(),
                error = %e,
                "Batch write accepted with an unreadable response body"
            ),
        }

        Ok(())
    }
}
