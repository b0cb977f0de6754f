//! HTTP source: a single unauthenticated GET against the directory endpoint.
//!
//! The endpoint returns the whole listing as one JSON array. There are no
//! query parameters and no server-side paging.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use crate::core::config::DEFAULT_ENDPOINT;
use crate::source::{FetchError, PodcastSource};

pub struct HttpSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PodcastSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_raw(&self) -> Result<Value, FetchError> {
        info!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Podcast endpoint response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Podcast endpoint error: {} - {}", status, err_body);
            return Err(FetchError::Status {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Podcast endpoint body: {} bytes", body.len());

        serde_json::from_str(&body).map_err(|e| {
            warn!("Podcast endpoint returned invalid JSON: {}", e);
            FetchError::MalformedPayload(e.to_string())
        })
    }
}
