// web_app/api/client.rs - HTTP client for the scraper's search endpoint
//
// One POST per search, no retries. The status decides success; the body is
// parsed either way so that rejections can carry the scraper's message.

use reqwest::Client;

use super::config::BackendConfig;
use super::error::BackendError;
use crate::web_app::model::{SearchRequest, SearchResponse, SearchResults};

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(BackendError::Client)?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Run one search against the scraper
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResults, BackendError> {
        tracing::info!(
            "Forwarding search to {}: mode={:?}, term='{}'",
            self.config.endpoint,
            request.mode(),
            request.term()
        );

        // .json() also sets Content-Type: application/json
        let response = self
            .http
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await
            .map_err(BackendError::Unreachable)?;

        let status = response.status();
        let body: SearchResponse = response.json().await.map_err(BackendError::InvalidResponse)?;

        if status.is_success() {
            let results = SearchResults::from(body);
            tracing::info!("Scraper returned {} products", results.products.len());
            Ok(results)
        } else {
            tracing::warn!("Scraper rejected search with HTTP {}: {:?}", status, body.error);
            Err(BackendError::Rejected {
                status: status.as_u16(),
                message: body.error,
            })
        }
    }
}
