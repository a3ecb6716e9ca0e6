//! # HTTP Quoter
//!
//! Fetches prices from the market maker's `GET {endpoint}/price` route,
//! passing the normalized query as URL parameters.

use crate::domain::entities::{NormalizedQuery, PriceQuote};
use crate::infrastructure::config::settings::QuoterConfig;
use crate::infrastructure::quoter::{QUOTER_SERVICE, Quoter};
use crate::infrastructure::upstream::error::{UpstreamError, UpstreamResult};
use crate::infrastructure::upstream::http_client::UpstreamHttpClient;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Market maker price response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceResponse {
    #[serde(default)]
    result: bool,
    #[serde(default)]
    exchangeable: bool,
    rate: Option<Decimal>,
    #[serde(default)]
    min_amount: Decimal,
    #[serde(default)]
    max_amount: Decimal,
    #[serde(default)]
    quote_id: String,
    payload: Option<String>,
    salt: Option<String>,
    message: Option<String>,
}

impl PriceResponse {
    fn into_quote(self) -> UpstreamResult<PriceQuote> {
        if !self.result || !self.exchangeable {
            let message = self
                .message
                .unwrap_or_else(|| "market maker declined to quote".to_string());
            return Err(UpstreamError::rejected(QUOTER_SERVICE, message));
        }

        let rate = match self.rate {
            Some(rate) if rate > Decimal::ZERO => rate,
            Some(rate) => {
                return Err(UpstreamError::rejected(
                    QUOTER_SERVICE,
                    format!("rate must be positive, got {}", rate),
                ));
            }
            None => {
                return Err(UpstreamError::rejected(
                    QUOTER_SERVICE,
                    self.message.unwrap_or_else(|| "no rate quoted".to_string()),
                ));
            }
        };

        let mut quote = PriceQuote::new(rate, self.min_amount, self.max_amount, self.quote_id);
        if let Some(payload) = self.payload {
            quote = quote.with_payload(payload);
        }
        if let Some(salt) = self.salt {
            quote = quote.with_salt(salt);
        }
        Ok(quote)
    }
}

/// Quoter backed by the market maker's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpQuoter {
    client: UpstreamHttpClient,
    price_url: String,
}

impl HttpQuoter {
    /// Creates a quoter for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Misconfigured` if the HTTP client cannot be built.
    pub fn new(endpoint: &str, timeout_ms: u64) -> UpstreamResult<Self> {
        Ok(Self {
            client: UpstreamHttpClient::new(QUOTER_SERVICE, timeout_ms)?,
            price_url: format!("{}/price", endpoint.trim_end_matches('/')),
        })
    }

    /// Creates a quoter from configuration.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Misconfigured` if the HTTP client cannot be built.
    pub fn from_config(config: &QuoterConfig) -> UpstreamResult<Self> {
        Self::new(&config.endpoint, config.timeout_ms)
    }

    /// Returns the price route URL.
    #[inline]
    #[must_use]
    pub fn price_url(&self) -> &str {
        &self.price_url
    }
}

#[async_trait]
impl Quoter for HttpQuoter {
    async fn get_price(&self, query: &NormalizedQuery) -> UpstreamResult<PriceQuote> {
        let response: PriceResponse = self.client.get_with_params(&self.price_url, query).await?;
        response.into_quote()
    }
}
