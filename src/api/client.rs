//! HTTP client for the reply generation backend

use reqwest::Client;

use super::types::{EmailRequest, ErrorBody, RepliesResponse};
use crate::error::GenerationError;

/// Client for the generation service. The base address is fixed at
/// construction and immutable for the process lifetime.
#[derive(Clone)]
pub struct GenerateClient {
    client: Client,
    base_url: String,
}

impl GenerateClient {
    /// Create a new client for the given base address
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Send one generation request and classify the outcome.
    ///
    /// A send failure means nothing reached the service (`Network`); a
    /// non-2xx status means the service refused (`Server`, carrying the
    /// body's `detail` field when present).
    pub async fn generate_replies(
        &self,
        request: &EmailRequest,
    ) -> Result<RepliesResponse, GenerationError> {
        let url = format!("{}/api/generate-replies", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_else(|| format!("generation service returned {status}"));
            return Err(GenerationError::Server(detail));
        }

        response.json::<RepliesResponse>().await.map_err(|e| {
            GenerationError::Server(format!("malformed response from generation service: {e}"))
        })
    }
}
