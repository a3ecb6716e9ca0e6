//! # Upstream HTTP Client
//!
//! Shared JSON-over-HTTP client for the quoter and remote signer adapters.
//!
//! Transport failures and non-2xx statuses are mapped onto
//! [`UpstreamError`] labelled with the collaborator's name. No retries.
//!
//! # Examples
//!
//! ```ignore
//! use quote_relay::infrastructure::upstream::http_client::UpstreamHttpClient;
//!
//! let client = UpstreamHttpClient::new("quoter", 5000)?;
//! let response: PriceResponse = client.get_with_params(&url, &query).await?;
//! ```

use crate::infrastructure::upstream::error::{UpstreamError, UpstreamResult};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for a single upstream collaborator.
#[derive(Debug, Clone)]
pub struct UpstreamHttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Collaborator name used to label errors.
    service: String,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl UpstreamHttpClient {
    /// Creates a new client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Misconfigured` if the client cannot be created.
    pub fn new(service: impl Into<String>, timeout_ms: u64) -> UpstreamResult<Self> {
        let service = service.into();
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                UpstreamError::misconfigured(
                    service.clone(),
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            client,
            service,
            timeout_ms,
        })
    }

    /// Returns the collaborator name.
    #[inline]
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request with query parameters and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an `UpstreamError` if the request fails or the response cannot be parsed.
    pub async fn get_with_params<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> UpstreamResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Makes a POST request with JSON body and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an `UpstreamError` if the request fails or the response cannot be parsed.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> UpstreamResult<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> UpstreamResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                UpstreamError::protocol(
                    self.service.clone(),
                    format!("failed to parse response: {}", e),
                )
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to an UpstreamError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> UpstreamError {
        if error.is_timeout() {
            UpstreamError::timeout(
                self.service.clone(),
                format!("request timed out after {}ms", self.timeout_ms),
            )
        } else if error.is_connect() {
            UpstreamError::connection(self.service.clone(), format!("connection failed: {}", error))
        } else {
            UpstreamError::connection(self.service.clone(), format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to an UpstreamError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> UpstreamError {
        let service = self.service.clone();
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                UpstreamError::invalid_request(service, format!("bad request: {}", body))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                UpstreamError::authentication(service, format!("authentication failed: {}", body))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                UpstreamError::rate_limited(service, "rate limit exceeded")
            }
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                UpstreamError::connection(service, format!("server error ({}): {}", status, body))
            }
            _ => UpstreamError::protocol(service, format!("HTTP error ({}): {}", status, body)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct Echo {
        value: u32,
    }

    #[test]
    fn new_client() {
        let client = UpstreamHttpClient::new("quoter", 5000).unwrap();
        assert_eq!(client.timeout_ms(), 5000);
        assert_eq!(client.service(), "quoter");
    }

    #[tokio::test]
    async fn get_with_params_parses_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/echo"))
            .and(query_param("q", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": 7})))
            .mount(&server)
            .await;

        let client = UpstreamHttpClient::new("quoter", 5000).unwrap();
        let echo: Echo = client
            .get_with_params(&format!("{}/echo", server.uri()), &[("q", "1")])
            .await
            .unwrap();
        assert_eq!(echo.value, 7);
    }

    #[tokio::test]
    async fn status_errors_are_labelled() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("denied"))
            .mount(&server)
            .await;

        let client = UpstreamHttpClient::new("signer:RFQV1", 5000).unwrap();
        let err = client
            .post::<Echo, _>(&server.uri(), &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Authentication { .. }));
        assert_eq!(err.service(), "signer:RFQV1");
        assert!(err.to_string().contains("denied"));
    }

    #[tokio::test]
    async fn malformed_body_is_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = UpstreamHttpClient::new("quoter", 5000).unwrap();
        let err = client
            .get_with_params::<Echo, _>(&server.uri(), &[("a", "b")])
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Protocol { .. }));
    }
}
