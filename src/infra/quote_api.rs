//! Thin asynchronous client for the pricing service.
//!
//! One POST per invocation, no retries, no caching. The response is
//! shape-checked on receipt instead of being trusted as-is.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{QuoteFactor, QuoteResult, ShipmentRequest};
use crate::util::version;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";
const PREDICT_PATH: &str = "predict";
/// Bounds how long a submission can hang in flight; the service itself
/// promises nothing here.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Environment override for the pricing service base URL.
pub const BASE_URL_ENV: &str = "QUOTE_API_URL";

#[derive(Debug, Error)]
pub enum QuoteClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed quote response: {0}")]
    Shape(String),
}

#[derive(Clone)]
pub struct QuoteClient {
    http: Client,
    base_url: Url,
}

impl QuoteClient {
    /// Builds a client against `QUOTE_API_URL`, falling back to the
    /// pricing service's default local bind.
    pub fn new() -> Result<Self, QuoteClientError> {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(&base)
    }

    pub fn with_base_url(base: &str) -> Result<Self, QuoteClientError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder()
            .user_agent(version::user_agent())
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Sends one quote request and returns the service's analysis.
    ///
    /// The request is assumed valid; validation happened in the form
    /// layer. Network trouble, non-success statuses and undecodable or
    /// mis-shaped bodies all surface as errors for the caller to absorb.
    pub async fn request_quote(
        &self,
        request: &ShipmentRequest,
    ) -> Result<QuoteResult, QuoteClientError> {
        let url = self.base_url.join(PREDICT_PATH)?;
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        let dto: QuoteResponseDto = response.json().await?;
        QuoteResult::try_from(dto)
    }
}

#[derive(Debug, Deserialize)]
struct QuoteResponseDto {
    recommended_price: f64,
    confidence_interval: Vec<f64>,
    win_probability: f64,
    // Keeps the model's factor order; serde_json is built with
    // `preserve_order` for exactly this field.
    shap_values: serde_json::Map<String, serde_json::Value>,
}

impl TryFrom<QuoteResponseDto> for QuoteResult {
    type Error = QuoteClientError;

    fn try_from(dto: QuoteResponseDto) -> Result<Self, Self::Error> {
        let (low, high) = match dto.confidence_interval[..] {
            [low, high] => (low, high),
            _ => {
                return Err(QuoteClientError::Shape(format!(
                    "confidence_interval holds {} values, expected 2",
                    dto.confidence_interval.len()
                )))
            }
        };

        let mut factors = Vec::with_capacity(dto.shap_values.len());
        for (name, value) in dto.shap_values {
            let impact = value.as_f64().ok_or_else(|| {
                QuoteClientError::Shape(format!("shap value for {name:?} is not a number"))
            })?;
            factors.push(QuoteFactor { name, impact });
        }

        Ok(QuoteResult {
            recommended_price: dto.recommended_price,
            confidence_interval: (low, high),
            win_probability: dto.win_probability,
            factors,
        })
    }
}
