use crate::domain::model::{
    PriceRejection, PriceRequest, PriceResponse, QuoteRequest, QuoteResponse, ReferenceData,
};
use crate::domain::ports::QuoteApi;
use crate::utils::error::{QuoteError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// `QuoteApi` over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpQuoteApi {
    client: Client,
    base_url: String,
}

impl HttpQuoteApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl QuoteApi for HttpQuoteApi {
    async fn reference_data(&self) -> Result<ReferenceData> {
        let url = self.url("/data");
        tracing::debug!("Fetching reference data from: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Reference data response status: {}", response.status());

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn calculate_price(&self, request: &PriceRequest) -> Result<PriceResponse> {
        let url = self.url("/api/calculate-price");
        tracing::debug!("Requesting price calculation: {:?}", request);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Price calculation response status: {}", status);
        let body = response.bytes().await?;

        if !status.is_success() {
            let rejection: PriceRejection = serde_json::from_slice(&body)?;
            return Err(QuoteError::Rejected {
                status: status.as_u16(),
                message: rejection.into_reason(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    async fn submit_quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        let url = self.url("/quote");
        tracing::debug!("Submitting quote for: {}", request.email);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        tracing::debug!("Quote response status: {}", response.status());
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
